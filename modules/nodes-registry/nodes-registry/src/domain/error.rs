use nodes_registry_sdk::NodesRegistryError;

/// Domain-level errors for the nodes registry
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Processing node not found: {0}")]
    NotFound(i64),

    #[error("Validation error on '{field}': {message}")]
    Validation { field: String, message: String },

    #[error("Database error: {0}")]
    Database(#[source] anyhow::Error),
}

impl DomainError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn database(e: impl Into<anyhow::Error>) -> Self {
        Self::Database(e.into())
    }
}

impl From<DomainError> for NodesRegistryError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound(id) => Self::NodeNotFound(id),
            DomainError::Validation { field, message } => {
                Self::Validation(format!("{field}: {message}"))
            }
            DomainError::Database(_) => Self::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_sdk_error() {
        let err: NodesRegistryError = DomainError::NotFound(12).into();
        assert_eq!(err, NodesRegistryError::NodeNotFound(12));
    }

    #[test]
    fn test_validation_keeps_field_and_message() {
        let err: NodesRegistryError = DomainError::validation("port", "must not be zero").into();
        assert_eq!(
            err,
            NodesRegistryError::Validation("port: must not be zero".to_owned())
        );
    }

    #[test]
    fn test_database_details_stay_internal() {
        let err: NodesRegistryError =
            DomainError::database(anyhow::anyhow!("connection refused")).into();
        assert_eq!(err, NodesRegistryError::Internal);
        assert!(!err.to_string().contains("connection refused"));
    }
}
