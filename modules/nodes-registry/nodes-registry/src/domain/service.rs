use std::sync::Arc;

use nodes_registry_sdk::{NewProcessingNode, NodePatch, NodeUpdate, ProcessingNode};

use super::error::DomainError;
use super::filter::NodeFilter;
use super::repo::NodesRepository;

// ============================================================================
// Service Configuration
// ============================================================================

pub struct ServiceConfig {
    /// Upper bound on hostname length (RFC 1035 caps names at 253 octets).
    pub max_hostname_length: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_hostname_length: 253,
        }
    }
}

// ============================================================================
// Service Implementation
// ============================================================================

pub struct Service {
    repo: Arc<dyn NodesRepository>,
    config: ServiceConfig,
}

impl Service {
    pub fn new(repo: Arc<dyn NodesRepository>, config: ServiceConfig) -> Self {
        Self { repo, config }
    }

    pub async fn list_nodes(
        &self,
        filter: &NodeFilter,
    ) -> Result<Vec<ProcessingNode>, DomainError> {
        self.repo.list(filter).await
    }

    pub async fn get_node(&self, id: i64) -> Result<ProcessingNode, DomainError> {
        self.repo
            .get(id)
            .await?
            .ok_or(DomainError::NotFound(id))
    }

    pub async fn create_node(
        &self,
        node: NewProcessingNode,
    ) -> Result<ProcessingNode, DomainError> {
        self.validate_hostname(&node.hostname)?;
        validate_port(node.port)?;
        validate_queue_count(node.queue_count)?;

        let created = self.repo.insert(node).await?;
        tracing::info!(id = created.id, hostname = %created.hostname, "Processing node registered");
        Ok(created)
    }

    pub async fn update_node(
        &self,
        id: i64,
        update: NodeUpdate,
    ) -> Result<ProcessingNode, DomainError> {
        self.validate_hostname(&update.hostname)?;
        validate_port(update.port)?;
        validate_queue_count(update.queue_count)?;

        self.repo
            .update(id, update)
            .await?
            .ok_or(DomainError::NotFound(id))
    }

    pub async fn patch_node(
        &self,
        id: i64,
        patch: NodePatch,
    ) -> Result<ProcessingNode, DomainError> {
        if let Some(ref hostname) = patch.hostname {
            self.validate_hostname(hostname)?;
        }
        if let Some(port) = patch.port {
            validate_port(port)?;
        }
        if let Some(queue_count) = patch.queue_count {
            validate_queue_count(queue_count)?;
        }

        self.repo
            .patch(id, patch)
            .await?
            .ok_or(DomainError::NotFound(id))
    }

    pub async fn delete_node(&self, id: i64) -> Result<(), DomainError> {
        if self.repo.delete(id).await? {
            tracing::info!(id, "Processing node removed");
            Ok(())
        } else {
            Err(DomainError::NotFound(id))
        }
    }

    fn validate_hostname(&self, hostname: &str) -> Result<(), DomainError> {
        if hostname.is_empty() {
            return Err(DomainError::validation("hostname", "must not be empty"));
        }
        if hostname.len() > self.config.max_hostname_length {
            return Err(DomainError::validation(
                "hostname",
                format!(
                    "exceeds maximum length of {}",
                    self.config.max_hostname_length
                ),
            ));
        }
        Ok(())
    }
}

fn validate_port(port: u16) -> Result<(), DomainError> {
    if port == 0 {
        return Err(DomainError::validation("port", "must be between 1 and 65535"));
    }
    Ok(())
}

fn validate_queue_count(queue_count: i32) -> Result<(), DomainError> {
    if queue_count < 0 {
        return Err(DomainError::validation("queue_count", "must not be negative"));
    }
    Ok(())
}
