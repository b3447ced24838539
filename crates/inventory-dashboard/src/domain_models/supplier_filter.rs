//! Supplier filter model
//!
//! Filtering and sorting options for the supplier list.

use super::sort::{compare_optional, compare_text, contains_ignore_case, SortDirection};
use inventory_client::{Supplier, SupplierStatus};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Status constraint for the supplier list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupplierStatusFilter {
    /// Show suppliers of every status
    #[default]
    All,
    Active,
    Inactive,
    Pending,
}

impl SupplierStatusFilter {
    pub fn matches(&self, status: SupplierStatus) -> bool {
        match self {
            Self::All => true,
            Self::Active => status == SupplierStatus::Active,
            Self::Inactive => status == SupplierStatus::Inactive,
            Self::Pending => status == SupplierStatus::Pending,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Pending => "Pending",
        }
    }
}

/// Column the supplier list can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SupplierSortKey {
    Name,
    Rating,
    LeadTime,
    LastUpdated,
}

impl SupplierSortKey {
    pub fn label(&self) -> &str {
        match self {
            Self::Name => "Name",
            Self::Rating => "Rating",
            Self::LeadTime => "Lead time",
            Self::LastUpdated => "Last updated",
        }
    }

    /// Compare two suppliers on this key in `direction`.
    ///
    /// Suppliers without a rating or lead time sort after the ones that have
    /// one, whichever the direction.
    fn compare(&self, a: &Supplier, b: &Supplier, direction: SortDirection) -> Ordering {
        match self {
            Self::Name => direction.apply(compare_text(&a.name, &b.name)),
            Self::Rating => compare_optional(a.rating, b.rating, direction),
            Self::LeadTime => compare_optional(a.lead_time, b.lead_time, direction),
            Self::LastUpdated => direction.apply(a.last_updated.cmp(&b.last_updated)),
        }
    }
}

/// Options for narrowing and ordering the supplier list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SupplierFilter {
    /// Case-insensitive substring of name, contact name, email or notes
    pub search: Option<String>,
    /// Keep suppliers serving at least one of these categories (empty = any)
    pub categories: Vec<String>,
    pub status: SupplierStatusFilter,
    pub sort_by: Option<SupplierSortKey>,
    pub sort_direction: SortDirection,
}

impl SupplierFilter {
    pub fn sorted_by(key: SupplierSortKey) -> Self {
        Self {
            sort_by: Some(key),
            ..Self::default()
        }
    }

    pub fn matches(&self, supplier: &Supplier) -> bool {
        self.matches_search(supplier)
            && self.matches_categories(supplier)
            && self.status.matches(supplier.status)
    }

    fn matches_search(&self, supplier: &Supplier) -> bool {
        let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) else {
            return true;
        };
        let needle = search.to_lowercase();
        contains_ignore_case(&supplier.name, &needle)
            || contains_ignore_case(&supplier.contact_name, &needle)
            || contains_ignore_case(&supplier.email, &needle)
            || supplier
                .notes
                .as_deref()
                .is_some_and(|n| contains_ignore_case(n, &needle))
    }

    fn matches_categories(&self, supplier: &Supplier) -> bool {
        if self.categories.is_empty() {
            return true;
        }
        supplier
            .categories
            .as_deref()
            .unwrap_or_default()
            .iter()
            .any(|category| self.categories.contains(category))
    }
}

/// Apply `filter` to `suppliers`, returning the matching suppliers in display order
pub fn apply_supplier_filter(suppliers: &[Supplier], filter: &SupplierFilter) -> Vec<Supplier> {
    let mut result: Vec<Supplier> = suppliers
        .iter()
        .filter(|supplier| filter.matches(supplier))
        .cloned()
        .collect();

    if let Some(key) = filter.sort_by {
        result.sort_by(|a, b| key.compare(a, b, filter.sort_direction));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use inventory_client::fixtures;
    use pretty_assertions::assert_eq;

    fn ids(suppliers: &[Supplier]) -> Vec<&str> {
        suppliers.iter().map(|s| s.id.as_str()).collect()
    }

    fn sorted(key: SupplierSortKey, direction: SortDirection) -> SupplierFilter {
        SupplierFilter {
            sort_direction: direction,
            ..SupplierFilter::sorted_by(key)
        }
    }

    #[test]
    fn test_default_filter_returns_everything_in_order() {
        let suppliers = fixtures::suppliers();
        let result = apply_supplier_filter(&suppliers, &SupplierFilter::default());
        assert_eq!(result, suppliers);
    }

    #[test]
    fn test_search_covers_contact_name_and_email() {
        let suppliers = fixtures::suppliers();
        let filter = SupplierFilter {
            search: Some("JOHN".to_string()),
            ..Default::default()
        };
        // "John Doe" and "Mike Johnson"
        assert_eq!(ids(&apply_supplier_filter(&suppliers, &filter)), vec!["S001", "S003"]);
    }

    #[test]
    fn test_search_covers_notes() {
        let suppliers = fixtures::suppliers();
        let filter = SupplierFilter {
            search: Some("professional".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&apply_supplier_filter(&suppliers, &filter)), vec!["S004"]);
    }

    #[test]
    fn test_status_filter() {
        let suppliers = fixtures::suppliers();
        let inactive = SupplierFilter {
            status: SupplierStatusFilter::Inactive,
            ..Default::default()
        };
        assert_eq!(ids(&apply_supplier_filter(&suppliers, &inactive)), vec!["S005"]);

        let pending = SupplierFilter {
            status: SupplierStatusFilter::Pending,
            ..Default::default()
        };
        assert!(apply_supplier_filter(&suppliers, &pending).is_empty());
    }

    #[test]
    fn test_categories_match_on_any_overlap() {
        let suppliers = fixtures::suppliers();
        let filter = SupplierFilter {
            categories: vec!["Tools".to_string(), "Gadgets".to_string()],
            ..Default::default()
        };
        assert_eq!(ids(&apply_supplier_filter(&suppliers, &filter)), vec!["S002", "S004"]);
    }

    #[test]
    fn test_supplier_without_categories_fails_category_filter() {
        let mut suppliers = fixtures::suppliers();
        suppliers[0].categories = None;
        let filter = SupplierFilter {
            categories: vec!["Widgets".to_string()],
            ..Default::default()
        };
        assert!(apply_supplier_filter(&suppliers, &filter).is_empty());
    }

    #[test]
    fn test_sort_by_name() {
        let suppliers = fixtures::suppliers();
        let asc = apply_supplier_filter(&suppliers, &sorted(SupplierSortKey::Name, SortDirection::Asc));
        assert_eq!(ids(&asc), vec!["S001", "S003", "S004", "S005", "S002"]);

        let mut desc =
            apply_supplier_filter(&suppliers, &sorted(SupplierSortKey::Name, SortDirection::Desc));
        desc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn test_sort_by_rating_is_stable() {
        let suppliers = fixtures::suppliers();
        let result =
            apply_supplier_filter(&suppliers, &sorted(SupplierSortKey::Rating, SortDirection::Desc));
        assert_eq!(ids(&result), vec!["S002", "S001", "S004", "S003", "S005"]);
    }

    #[test]
    fn test_missing_rating_sorts_last_in_both_directions() {
        let mut suppliers = fixtures::suppliers();
        suppliers[1].rating = None;

        let desc =
            apply_supplier_filter(&suppliers, &sorted(SupplierSortKey::Rating, SortDirection::Desc));
        assert_eq!(ids(&desc), vec!["S001", "S004", "S003", "S005", "S002"]);

        let asc =
            apply_supplier_filter(&suppliers, &sorted(SupplierSortKey::Rating, SortDirection::Asc));
        assert_eq!(ids(&asc), vec!["S003", "S005", "S001", "S004", "S002"]);
    }

    #[test]
    fn test_sort_by_lead_time() {
        let suppliers = fixtures::suppliers();
        let result =
            apply_supplier_filter(&suppliers, &sorted(SupplierSortKey::LeadTime, SortDirection::Asc));
        assert_eq!(ids(&result), vec!["S002", "S001", "S004", "S003", "S005"]);
    }

    #[test]
    fn test_filter_then_sort() {
        let suppliers = fixtures::suppliers();
        let filter = SupplierFilter {
            status: SupplierStatusFilter::Active,
            ..sorted(SupplierSortKey::LastUpdated, SortDirection::Desc)
        };
        assert_eq!(
            ids(&apply_supplier_filter(&suppliers, &filter)),
            vec!["S002", "S004", "S001", "S003"]
        );
    }
}
