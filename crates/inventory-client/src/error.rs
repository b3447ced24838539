//! Service error type

use thiserror::Error;

/// Errors reported by inventory and supplier services.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// No record with this id exists in the backing store.
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: String },

    /// The service could not be reached or refused the request.
    #[error("Service unavailable: {0}")]
    Unavailable(String),
}

impl ServiceError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }
}

/// Result alias used by the service traits
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = ServiceError::not_found("Item", "42");
        assert_eq!(err.to_string(), "Item not found");
        assert!(matches!(err, ServiceError::NotFound { id, .. } if id == "42"));
    }

    #[test]
    fn test_unavailable_message() {
        let err = ServiceError::Unavailable("connection reset".to_string());
        assert_eq!(err.to_string(), "Service unavailable: connection reset");
    }
}
