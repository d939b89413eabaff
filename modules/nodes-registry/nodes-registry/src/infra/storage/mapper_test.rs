#[cfg(test)]
mod tests {
    use super::super::entity;
    use super::super::mapper::options_to_json;
    use crate::domain::error::DomainError;
    use nodes_registry_sdk::ProcessingNode;
    use serde_json::json;

    fn row(port: i32, options: serde_json::Value) -> entity::Model {
        entity::Model {
            id: 3,
            hostname: "odm-3.lan".to_owned(),
            port,
            api_version: "2.3.1".to_owned(),
            queue_count: 2,
            available_options: options,
        }
    }

    #[test]
    fn test_row_to_node_conversion() {
        let node = ProcessingNode::try_from(row(3000, json!({"cog": true}))).unwrap();

        assert_eq!(node.id, 3);
        assert_eq!(node.hostname, "odm-3.lan");
        assert_eq!(node.port, 3000);
        assert_eq!(node.api_version, "2.3.1");
        assert_eq!(node.queue_count, 2);
        assert!(node.has_available_options());
    }

    #[test]
    fn test_row_with_empty_options() {
        let node = ProcessingNode::try_from(row(3000, json!({}))).unwrap();
        assert!(!node.has_available_options());
    }

    #[test]
    fn test_out_of_range_port_is_a_database_error() {
        let err = ProcessingNode::try_from(row(70000, json!({}))).unwrap_err();
        assert!(matches!(err, DomainError::Database(_)));

        let err = ProcessingNode::try_from(row(-1, json!({}))).unwrap_err();
        assert!(matches!(err, DomainError::Database(_)));
    }

    #[test]
    fn test_non_object_options_is_a_database_error() {
        let err = ProcessingNode::try_from(row(3000, json!([1, 2]))).unwrap_err();
        assert!(matches!(err, DomainError::Database(_)));
    }

    #[test]
    fn test_options_round_trip_through_storage_form() {
        let options: nodes_registry_sdk::AvailableOptions =
            [("dsm".to_owned(), json!(true))].into_iter().collect();

        let node = ProcessingNode::try_from(row(3000, options_to_json(options.clone()))).unwrap();
        assert_eq!(node.available_options, options);
    }
}
