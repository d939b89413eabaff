/// Errors for the nodes registry module
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NodesRegistryError {
    #[error("Node not found with ID: {0}")]
    NodeNotFound(i64),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("An internal error occurred")]
    Internal,
}
