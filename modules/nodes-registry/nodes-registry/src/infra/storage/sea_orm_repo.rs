use async_trait::async_trait;
use nodes_registry_sdk::{NewProcessingNode, NodePatch, NodeUpdate, ProcessingNode};
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

use crate::domain::error::DomainError;
use crate::domain::filter::NodeFilter;
use crate::domain::repo::NodesRepository;

use super::entity::{self, Entity as Nodes};
use super::mapper::options_to_json;
use super::query;

pub struct SeaOrmNodesRepository {
    db: DatabaseConnection,
}

impl SeaOrmNodesRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl NodesRepository for SeaOrmNodesRepository {
    async fn list(&self, filter: &NodeFilter) -> Result<Vec<ProcessingNode>, DomainError> {
        let rows = Nodes::find()
            .filter(query::filter_to_condition(filter))
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await
            .map_err(DomainError::database)?;

        rows.into_iter().map(ProcessingNode::try_from).collect()
    }

    async fn get(&self, id: i64) -> Result<Option<ProcessingNode>, DomainError> {
        let row = Nodes::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(DomainError::database)?;

        row.map(ProcessingNode::try_from).transpose()
    }

    async fn insert(&self, node: NewProcessingNode) -> Result<ProcessingNode, DomainError> {
        let row = entity::ActiveModel {
            id: ActiveValue::NotSet,
            hostname: ActiveValue::Set(node.hostname),
            port: ActiveValue::Set(i32::from(node.port)),
            api_version: ActiveValue::Set(node.api_version),
            queue_count: ActiveValue::Set(node.queue_count),
            available_options: ActiveValue::Set(options_to_json(node.available_options)),
        };

        let model = row.insert(&self.db).await.map_err(DomainError::database)?;
        ProcessingNode::try_from(model)
    }

    async fn update(
        &self,
        id: i64,
        update: NodeUpdate,
    ) -> Result<Option<ProcessingNode>, DomainError> {
        let Some(existing) = Nodes::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(DomainError::database)?
        else {
            return Ok(None);
        };

        let mut row: entity::ActiveModel = existing.into();
        row.hostname = ActiveValue::Set(update.hostname);
        row.port = ActiveValue::Set(i32::from(update.port));
        row.api_version = ActiveValue::Set(update.api_version);
        row.queue_count = ActiveValue::Set(update.queue_count);
        row.available_options = ActiveValue::Set(options_to_json(update.available_options));

        let model = row.update(&self.db).await.map_err(DomainError::database)?;
        ProcessingNode::try_from(model).map(Some)
    }

    async fn patch(
        &self,
        id: i64,
        patch: NodePatch,
    ) -> Result<Option<ProcessingNode>, DomainError> {
        let Some(existing) = Nodes::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(DomainError::database)?
        else {
            return Ok(None);
        };

        if patch.is_empty() {
            return ProcessingNode::try_from(existing).map(Some);
        }

        let mut row: entity::ActiveModel = existing.into();
        if let Some(hostname) = patch.hostname {
            row.hostname = ActiveValue::Set(hostname);
        }
        if let Some(port) = patch.port {
            row.port = ActiveValue::Set(i32::from(port));
        }
        if let Some(api_version) = patch.api_version {
            row.api_version = ActiveValue::Set(api_version);
        }
        if let Some(queue_count) = patch.queue_count {
            row.queue_count = ActiveValue::Set(queue_count);
        }
        if let Some(available_options) = patch.available_options {
            row.available_options = ActiveValue::Set(options_to_json(available_options));
        }

        let model = row.update(&self.db).await.map_err(DomainError::database)?;
        ProcessingNode::try_from(model).map(Some)
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = Nodes::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(DomainError::database)?;

        Ok(result.rows_affected > 0)
    }
}
