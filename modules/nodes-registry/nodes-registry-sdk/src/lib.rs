//! SDK for the nodes-registry module.
//!
//! Transport-agnostic models and error definitions that form the contract
//! between the nodes registry and its consumers.

pub mod error;
pub mod models;

pub use error::NodesRegistryError;
pub use models::{AvailableOptions, NewProcessingNode, NodePatch, NodeUpdate, ProcessingNode};
