//! Translation of [`NodeFilter`] into SQL conditions.

use sea_orm::{ColumnTrait, Condition};

use crate::domain::filter::{AvailabilityFlag, NodeFilter};

use super::entity::Column;

/// The stored representation of "no options": the empty JSON object.
fn empty_options() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

/// Build the AND-ed `WHERE` clause for a node listing.
///
/// Must stay in agreement with `NodeFilter::matches`: both renditions of
/// a filter select the same records.
pub fn filter_to_condition(filter: &NodeFilter) -> Condition {
    let mut cond = Condition::all();
    if let Some(id) = filter.id {
        cond = cond.add(Column::Id.eq(id));
    }
    if let Some(ref hostname) = filter.hostname {
        cond = cond.add(Column::Hostname.eq(hostname.clone()));
    }
    if let Some(port) = filter.port {
        cond = cond.add(Column::Port.eq(i32::from(port)));
    }
    if let Some(ref api_version) = filter.api_version {
        cond = cond.add(Column::ApiVersion.eq(api_version.clone()));
    }
    if let Some(queue_count) = filter.queue_count {
        cond = cond.add(Column::QueueCount.eq(queue_count));
    }
    match filter.availability {
        Some(AvailabilityFlag::HasOptions) => {
            cond = cond.add(Column::AvailableOptions.ne(empty_options()));
        }
        Some(AvailabilityFlag::NoOptions) => {
            cond = cond.add(Column::AvailableOptions.eq(empty_options()));
        }
        None => {}
    }
    cond
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::storage::entity::Entity as Nodes;
    use sea_orm::{DbBackend, EntityTrait, QueryFilter, QueryTrait};

    fn sql_for(filter: &NodeFilter) -> String {
        Nodes::find()
            .filter(filter_to_condition(filter))
            .build(DbBackend::Sqlite)
            .to_string()
    }

    #[test]
    fn test_empty_filter_has_no_where_clause() {
        let sql = sql_for(&NodeFilter::default());
        assert!(!sql.contains("WHERE"), "unexpected WHERE in: {sql}");
    }

    #[test]
    fn test_equality_clauses_are_pushed_down() {
        let filter = NodeFilter {
            hostname: Some("odm-1.lan".to_owned()),
            port: Some(3000),
            ..NodeFilter::default()
        };
        let sql = sql_for(&filter);
        assert!(sql.contains("'odm-1.lan'"), "hostname missing in: {sql}");
        assert!(sql.contains("3000"), "port missing in: {sql}");
        assert!(sql.contains("AND"), "clauses not AND-ed in: {sql}");
    }

    #[test]
    fn test_availability_compares_against_empty_object() {
        let filter = NodeFilter {
            availability: Some(AvailabilityFlag::NoOptions),
            ..NodeFilter::default()
        };
        let sql = sql_for(&filter);
        assert!(
            sql.contains("\"available_options\" = '{}'"),
            "empty-object equality missing in: {sql}"
        );

        let filter = NodeFilter {
            availability: Some(AvailabilityFlag::HasOptions),
            ..NodeFilter::default()
        };
        let sql = sql_for(&filter);
        assert!(
            sql.contains("\"available_options\" <> '{}'"),
            "empty-object inequality missing in: {sql}"
        );
    }
}
