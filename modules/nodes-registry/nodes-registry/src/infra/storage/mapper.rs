//! Conversions between storage rows and public models.

use anyhow::anyhow;
use nodes_registry_sdk::{AvailableOptions, ProcessingNode};

use crate::domain::error::DomainError;

use super::entity;

impl TryFrom<entity::Model> for ProcessingNode {
    type Error = DomainError;

    fn try_from(row: entity::Model) -> Result<Self, DomainError> {
        let port = u16::try_from(row.port).map_err(|_| {
            DomainError::Database(anyhow!("stored port {} is out of range", row.port))
        })?;
        let available_options = options_from_json(row.available_options)?;
        Ok(Self {
            id: row.id,
            hostname: row.hostname,
            port,
            api_version: row.api_version,
            queue_count: row.queue_count,
            available_options,
        })
    }
}

/// The options column is declared `NOT NULL` and is only ever written from
/// an [`AvailableOptions`] mapping; anything else in it is corruption.
fn options_from_json(value: serde_json::Value) -> Result<AvailableOptions, DomainError> {
    match value {
        serde_json::Value::Object(map) => Ok(map),
        other => Err(DomainError::Database(anyhow!(
            "available_options column holds non-object JSON: {other}"
        ))),
    }
}

/// Storage form of an options mapping.
pub fn options_to_json(options: AvailableOptions) -> serde_json::Value {
    serde_json::Value::Object(options)
}
