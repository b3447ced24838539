//! Seed data for the mock services

use crate::types::{InventoryItem, Supplier, SupplierInfo, SupplierItemAssociation, SupplierStatus};
use chrono::{DateTime, NaiveDate, Utc};

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_default()
}

fn strings(values: &[&str]) -> Option<Vec<String>> {
    Some(values.iter().map(|v| v.to_string()).collect())
}

fn supplier_info(id: &str, name: &str, contact: &str, email: &str, phone: &str) -> SupplierInfo {
    SupplierInfo {
        id: id.to_string(),
        name: name.to_string(),
        contact_name: Some(contact.to_string()),
        email: Some(email.to_string()),
        phone: Some(phone.to_string()),
        address: None,
        lead_time: None,
    }
}

pub fn inventory_items() -> Vec<InventoryItem> {
    vec![
        InventoryItem {
            id: "1".to_string(),
            name: "Widget A".to_string(),
            sku: "WDG-A-001".to_string(),
            category: "Widgets".to_string(),
            quantity: 150,
            unit_price: 25.99,
            location: "Warehouse A".to_string(),
            reorder_point: 30,
            supplier_info: supplier_info(
                "S001",
                "Acme Supplies",
                "John Doe",
                "john@acmesupplies.com",
                "555-123-4567",
            ),
            last_updated: date(2023, 9, 15),
            created_at: date(2023, 2, 10),
            description: Some("Standard widget for industrial applications".to_string()),
            tags: strings(&["durable", "metal", "industrial"]),
            image_url: None,
        },
        InventoryItem {
            id: "2".to_string(),
            name: "Gadget B".to_string(),
            sku: "GDG-B-002".to_string(),
            category: "Gadgets".to_string(),
            quantity: 75,
            unit_price: 42.50,
            location: "Warehouse B".to_string(),
            reorder_point: 20,
            supplier_info: supplier_info(
                "S002",
                "Tech Parts Inc.",
                "Jane Smith",
                "jane@techparts.com",
                "555-987-6543",
            ),
            last_updated: date(2023, 10, 5),
            created_at: date(2023, 3, 15),
            description: Some("Electronic gadget with multiple functions".to_string()),
            tags: strings(&["electronic", "rechargeable"]),
            image_url: None,
        },
        InventoryItem {
            id: "3".to_string(),
            name: "Component C".to_string(),
            sku: "CMP-C-003".to_string(),
            category: "Components".to_string(),
            quantity: 300,
            unit_price: 5.99,
            location: "Warehouse A".to_string(),
            reorder_point: 50,
            supplier_info: supplier_info(
                "S003",
                "Global Components",
                "Mike Johnson",
                "mike@globalcomp.com",
                "555-456-7890",
            ),
            last_updated: date(2023, 8, 20),
            created_at: date(2023, 4, 5),
            description: Some("Small component for assembly".to_string()),
            tags: strings(&["plastic", "assembly"]),
            image_url: None,
        },
        InventoryItem {
            id: "4".to_string(),
            name: "Tool D".to_string(),
            sku: "TL-D-004".to_string(),
            category: "Tools".to_string(),
            quantity: 45,
            unit_price: 129.99,
            location: "Warehouse C".to_string(),
            reorder_point: 10,
            supplier_info: supplier_info(
                "S004",
                "Pro Tools Manufacturing",
                "Sarah Wilson",
                "sarah@protools.com",
                "555-789-0123",
            ),
            last_updated: date(2023, 10, 10),
            created_at: date(2023, 5, 12),
            description: Some("Professional-grade tool for construction".to_string()),
            tags: strings(&["heavy-duty", "construction"]),
            image_url: None,
        },
        InventoryItem {
            id: "5".to_string(),
            name: "Material E".to_string(),
            sku: "MTL-E-005".to_string(),
            category: "Materials".to_string(),
            quantity: 500,
            unit_price: 3.50,
            location: "Warehouse B".to_string(),
            reorder_point: 100,
            supplier_info: supplier_info(
                "S005",
                "Raw Materials Co.",
                "David Brown",
                "david@rawmaterials.com",
                "555-321-6547",
            ),
            last_updated: date(2023, 9, 25),
            created_at: date(2023, 6, 20),
            description: Some("Raw material for manufacturing".to_string()),
            tags: strings(&["raw", "manufacturing"]),
            image_url: None,
        },
    ]
}

pub fn suppliers() -> Vec<Supplier> {
    vec![
        Supplier {
            id: "S001".to_string(),
            name: "Acme Supplies".to_string(),
            contact_name: "John Doe".to_string(),
            email: "john@acmesupplies.com".to_string(),
            phone: "555-123-4567".to_string(),
            address: Some("123 Main St, Anytown, ST 12345".to_string()),
            website: Some("https://acmesupplies.com".to_string()),
            tax_id: Some("12-3456789".to_string()),
            payment_terms: Some("Net 30".to_string()),
            notes: Some("Reliable supplier for industrial parts".to_string()),
            rating: Some(4),
            status: SupplierStatus::Active,
            created_at: date(2022, 6, 15),
            last_updated: date(2023, 9, 10),
            tags: strings(&["industrial", "reliable", "bulk"]),
            categories: strings(&["Widgets", "Components"]),
            lead_time: Some(7),
        },
        Supplier {
            id: "S002".to_string(),
            name: "Tech Parts Inc.".to_string(),
            contact_name: "Jane Smith".to_string(),
            email: "jane@techparts.com".to_string(),
            phone: "555-987-6543".to_string(),
            address: Some("456 Tech Blvd, Innovation City, ST 67890".to_string()),
            website: Some("https://techpartsinc.com".to_string()),
            tax_id: None,
            payment_terms: Some("Net 45".to_string()),
            notes: None,
            rating: Some(5),
            status: SupplierStatus::Active,
            created_at: date(2022, 4, 20),
            last_updated: date(2023, 10, 5),
            tags: strings(&["electronics", "premium", "fast-delivery"]),
            categories: strings(&["Gadgets", "Electronics"]),
            lead_time: Some(3),
        },
        Supplier {
            id: "S003".to_string(),
            name: "Global Components".to_string(),
            contact_name: "Mike Johnson".to_string(),
            email: "mike@globalcomp.com".to_string(),
            phone: "555-456-7890".to_string(),
            address: Some("789 Global Way, International City, ST 10112".to_string()),
            website: Some("https://globalcomponents.com".to_string()),
            tax_id: Some("98-7654321".to_string()),
            payment_terms: Some("Net 15".to_string()),
            notes: None,
            rating: Some(3),
            status: SupplierStatus::Active,
            created_at: date(2022, 2, 10),
            last_updated: date(2023, 8, 12),
            tags: strings(&["international", "components"]),
            categories: strings(&["Components", "Materials"]),
            lead_time: Some(15),
        },
        Supplier {
            id: "S004".to_string(),
            name: "Pro Tools Manufacturing".to_string(),
            contact_name: "Sarah Wilson".to_string(),
            email: "sarah@protools.com".to_string(),
            phone: "555-789-0123".to_string(),
            address: Some("101 Tool Ave, Craftville, ST 20023".to_string()),
            website: Some("https://protoolsmfg.com".to_string()),
            tax_id: Some("45-6780912".to_string()),
            payment_terms: Some("Net 30".to_string()),
            notes: Some("Specializes in professional-grade tools".to_string()),
            rating: Some(4),
            status: SupplierStatus::Active,
            created_at: date(2022, 8, 5),
            last_updated: date(2023, 9, 25),
            tags: strings(&["tools", "professional", "quality"]),
            categories: strings(&["Tools"]),
            lead_time: Some(10),
        },
        Supplier {
            id: "S005".to_string(),
            name: "Raw Materials Co.".to_string(),
            contact_name: "David Brown".to_string(),
            email: "david@rawmaterials.com".to_string(),
            phone: "555-321-6547".to_string(),
            address: Some("222 Material Rd, Resource City, ST 30034".to_string()),
            website: None,
            tax_id: None,
            payment_terms: Some("Net 60".to_string()),
            notes: None,
            rating: Some(3),
            status: SupplierStatus::Inactive,
            created_at: date(2022, 3, 15),
            last_updated: date(2023, 7, 20),
            tags: strings(&["raw", "materials", "bulk"]),
            categories: strings(&["Materials"]),
            lead_time: Some(20),
        },
    ]
}

fn association(
    supplier_id: &str,
    item_id: &str,
    is_primary_supplier: bool,
    unit_price: f64,
    min_order_quantity: u32,
    lead_time: u32,
    last_purchase_date: DateTime<Utc>,
) -> SupplierItemAssociation {
    SupplierItemAssociation {
        supplier_id: supplier_id.to_string(),
        item_id: item_id.to_string(),
        is_primary_supplier,
        unit_price,
        min_order_quantity: Some(min_order_quantity),
        lead_time: Some(lead_time),
        last_purchase_date: Some(last_purchase_date),
    }
}

pub fn supplier_item_associations() -> Vec<SupplierItemAssociation> {
    vec![
        association("S001", "1", true, 22.50, 50, 7, date(2023, 9, 10)),
        association("S002", "2", true, 40.00, 20, 3, date(2023, 10, 5)),
        association("S003", "3", true, 5.25, 100, 15, date(2023, 8, 20)),
        association("S003", "5", false, 3.25, 200, 12, date(2023, 8, 15)),
        association("S004", "4", true, 120.00, 10, 10, date(2023, 10, 10)),
        association("S005", "5", true, 3.00, 500, 20, date(2023, 9, 25)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_timestamps_are_ordered() {
        for item in inventory_items() {
            assert!(item.last_updated >= item.created_at, "item {}", item.id);
        }
        for supplier in suppliers() {
            assert!(
                supplier.last_updated >= supplier.created_at,
                "supplier {}",
                supplier.id
            );
        }
    }

    #[test]
    fn test_fixture_dates_are_valid() {
        let epoch = DateTime::<Utc>::default();
        assert!(inventory_items().iter().all(|i| i.created_at != epoch));
        assert_eq!(date(2023, 9, 15).format("%Y-%m-%d").to_string(), "2023-09-15");
    }
}
