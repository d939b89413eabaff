//! Typed filtering for node listings.
//!
//! Listing filters are an explicit set of optional, exact-match clauses
//! combined with logical AND, rather than anything reflected off the
//! storage entity. The same filter value has two renditions: the pure
//! [`NodeFilter::matches`] predicate here, and the SQL pushdown in
//! `infra::storage::query`. The two must select the same records.

use nodes_registry_sdk::{AvailableOptions, ProcessingNode};

/// Interpretation of the boolean-like `has_available_options` value.
///
/// `"true"` and `"1"` (case-insensitive) select nodes reporting at least
/// one option; every other present value selects nodes whose option
/// mapping is exactly empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityFlag {
    HasOptions,
    NoOptions,
}

impl AvailabilityFlag {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("true") || raw == "1" {
            Self::HasOptions
        } else {
            Self::NoOptions
        }
    }

    #[must_use]
    pub fn matches(self, options: &AvailableOptions) -> bool {
        match self {
            Self::HasOptions => !options.is_empty(),
            Self::NoOptions => options.is_empty(),
        }
    }
}

/// Exact-match clauses for node listings. Every clause is optional; the
/// empty filter matches every node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeFilter {
    pub id: Option<i64>,
    pub hostname: Option<String>,
    pub port: Option<u16>,
    pub api_version: Option<String>,
    pub queue_count: Option<i32>,
    pub availability: Option<AvailabilityFlag>,
}

impl NodeFilter {
    /// True when no clause is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// In-memory form of the filter.
    #[must_use]
    pub fn matches(&self, node: &ProcessingNode) -> bool {
        self.id.is_none_or(|id| id == node.id)
            && self.hostname.as_deref().is_none_or(|h| h == node.hostname)
            && self.port.is_none_or(|p| p == node.port)
            && self
                .api_version
                .as_deref()
                .is_none_or(|v| v == node.api_version)
            && self.queue_count.is_none_or(|q| q == node.queue_count)
            && self
                .availability
                .is_none_or(|flag| flag.matches(&node.available_options))
    }
}
