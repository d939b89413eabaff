//! Processing nodes registry module.
//!
//! A CRUD + filtering surface over the set of processing nodes known to
//! the platform. The public models live in `nodes-registry-sdk` and are
//! re-exported here.

pub use nodes_registry_sdk::{
    AvailableOptions, NewProcessingNode, NodePatch, NodeUpdate, NodesRegistryError, ProcessingNode,
};

pub mod api;
pub mod domain;
pub mod infra;
