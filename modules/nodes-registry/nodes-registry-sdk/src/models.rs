//! Public models for the nodes registry.
//!
//! These are transport-agnostic data structures that define the contract
//! between the nodes registry and its consumers. They carry no storage or
//! HTTP types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Mapping of option name to the option descriptor a node reports
/// supporting. Always a mapping; a node without options carries `{}`.
pub type AvailableOptions = Map<String, Value>;

/// A registered processing node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingNode {
    pub id: i64,
    pub hostname: String,
    pub port: u16,
    pub api_version: String,
    pub queue_count: i32,
    pub available_options: AvailableOptions,
}

impl ProcessingNode {
    /// Whether the node reports at least one available option.
    #[must_use]
    pub fn has_available_options(&self) -> bool {
        !self.available_options.is_empty()
    }
}

/// Data for registering a new processing node.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewProcessingNode {
    pub hostname: String,
    pub port: u16,
    pub api_version: String,
    pub queue_count: i32,
    pub available_options: AvailableOptions,
}

/// Full replacement data for an existing node.
///
/// Unlike [`NodePatch`], every field is present and overwrites the stored
/// record.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeUpdate {
    pub hostname: String,
    pub port: u16,
    pub api_version: String,
    pub queue_count: i32,
    pub available_options: AvailableOptions,
}

/// Partial update data for an existing node. Only the provided fields are
/// touched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodePatch {
    pub hostname: Option<String>,
    pub port: Option<u16>,
    pub api_version: Option<String>,
    pub queue_count: Option<i32>,
    pub available_options: Option<AvailableOptions>,
}

impl NodePatch {
    /// True when the patch carries no fields at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hostname.is_none()
            && self.port.is_none()
            && self.api_version.is_none()
            && self.queue_count.is_none()
            && self.available_options.is_none()
    }
}
