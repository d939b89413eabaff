use async_trait::async_trait;
use nodes_registry_sdk::{NewProcessingNode, NodePatch, NodeUpdate, ProcessingNode};

use super::error::DomainError;
use super::filter::NodeFilter;

/// Repository trait for processing-node persistence operations.
#[async_trait]
pub trait NodesRepository: Send + Sync {
    /// List nodes matching the filter, ordered by id.
    async fn list(&self, filter: &NodeFilter) -> Result<Vec<ProcessingNode>, DomainError>;

    /// Find a node by id.
    async fn get(&self, id: i64) -> Result<Option<ProcessingNode>, DomainError>;

    /// Persist a new node and return it with its assigned id.
    async fn insert(&self, node: NewProcessingNode) -> Result<ProcessingNode, DomainError>;

    /// Replace all mutable fields of an existing node. `None` when the
    /// node does not exist.
    async fn update(
        &self,
        id: i64,
        update: NodeUpdate,
    ) -> Result<Option<ProcessingNode>, DomainError>;

    /// Apply only the provided fields. `None` when the node does not exist.
    async fn patch(&self, id: i64, patch: NodePatch)
    -> Result<Option<ProcessingNode>, DomainError>;

    /// Delete a node by id. `false` when the node does not exist.
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
