//! Wire-level request and response shapes.
//!
//! Fields are enumerated explicitly: adding a column to the storage
//! entity never silently widens the API surface.

use nodes_registry_sdk::{
    AvailableOptions, NewProcessingNode, NodePatch, NodeUpdate, ProcessingNode,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::filter::{AvailabilityFlag, NodeFilter};

/// A processing node as exposed over the REST API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProcessingNodeDto {
    pub id: i64,
    pub hostname: String,
    pub port: u16,
    pub api_version: String,
    pub queue_count: i32,
    #[schema(value_type = Object)]
    pub available_options: AvailableOptions,
}

impl From<ProcessingNode> for ProcessingNodeDto {
    fn from(node: ProcessingNode) -> Self {
        Self {
            id: node.id,
            hostname: node.hostname,
            port: node.port,
            api_version: node.api_version,
            queue_count: node.queue_count,
            available_options: node.available_options,
        }
    }
}

/// Payload for registering a new processing node.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateNodeRequest {
    pub hostname: String,
    pub port: u16,
    #[serde(default)]
    pub api_version: String,
    #[serde(default)]
    pub queue_count: i32,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub available_options: AvailableOptions,
}

impl From<CreateNodeRequest> for NewProcessingNode {
    fn from(req: CreateNodeRequest) -> Self {
        Self {
            hostname: req.hostname,
            port: req.port,
            api_version: req.api_version,
            queue_count: req.queue_count,
            available_options: req.available_options,
        }
    }
}

/// Payload for a full update. Omitted optional fields reset to their
/// registration defaults.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateNodeRequest {
    pub hostname: String,
    pub port: u16,
    #[serde(default)]
    pub api_version: String,
    #[serde(default)]
    pub queue_count: i32,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub available_options: AvailableOptions,
}

impl From<UpdateNodeRequest> for NodeUpdate {
    fn from(req: UpdateNodeRequest) -> Self {
        Self {
            hostname: req.hostname,
            port: req.port,
            api_version: req.api_version,
            queue_count: req.queue_count,
            available_options: req.available_options,
        }
    }
}

/// Payload for a partial update. Only provided fields are touched.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct PatchNodeRequest {
    pub hostname: Option<String>,
    pub port: Option<u16>,
    pub api_version: Option<String>,
    pub queue_count: Option<i32>,
    #[schema(value_type = Option<Object>)]
    pub available_options: Option<AvailableOptions>,
}

impl From<PatchNodeRequest> for NodePatch {
    fn from(req: PatchNodeRequest) -> Self {
        Self {
            hostname: req.hostname,
            port: req.port,
            api_version: req.api_version,
            queue_count: req.queue_count,
            available_options: req.available_options,
        }
    }
}

/// Query parameters accepted by the list endpoint. All are exact-match
/// clauses except `has_available_options`, which is the boolean-like
/// availability flag.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListNodesQuery {
    /// `"true"`/`"1"` (case-insensitive): only nodes with options; any
    /// other value: only nodes without options. Absent: no availability
    /// filtering.
    pub has_available_options: Option<String>,
    pub id: Option<i64>,
    pub hostname: Option<String>,
    pub port: Option<u16>,
    pub api_version: Option<String>,
    pub queue_count: Option<i32>,
}

impl From<ListNodesQuery> for NodeFilter {
    fn from(query: ListNodesQuery) -> Self {
        Self {
            id: query.id,
            hostname: query.hostname,
            port: query.port,
            api_version: query.api_version,
            queue_count: query.queue_count,
            availability: query
                .has_available_options
                .as_deref()
                .map(AvailabilityFlag::parse),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_without_availability_yields_no_clause() {
        let filter: NodeFilter = ListNodesQuery::default().into();
        assert!(filter.is_empty());
    }

    #[test]
    fn test_query_availability_values_are_parsed() {
        let query = ListNodesQuery {
            has_available_options: Some("TRUE".to_owned()),
            ..ListNodesQuery::default()
        };
        let filter: NodeFilter = query.into();
        assert_eq!(filter.availability, Some(AvailabilityFlag::HasOptions));

        let query = ListNodesQuery {
            has_available_options: Some("0".to_owned()),
            ..ListNodesQuery::default()
        };
        let filter: NodeFilter = query.into();
        assert_eq!(filter.availability, Some(AvailabilityFlag::NoOptions));
    }

    #[test]
    fn test_query_equality_params_carry_over() {
        let query = ListNodesQuery {
            hostname: Some("odm-1.lan".to_owned()),
            port: Some(3000),
            queue_count: Some(2),
            ..ListNodesQuery::default()
        };
        let filter: NodeFilter = query.into();
        assert_eq!(filter.hostname.as_deref(), Some("odm-1.lan"));
        assert_eq!(filter.port, Some(3000));
        assert_eq!(filter.queue_count, Some(2));
        assert_eq!(filter.availability, None);
    }
}
