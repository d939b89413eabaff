#[cfg(test)]
mod tests {
    use super::super::error::domain_error_to_problem;
    use super::super::problem::Problem;
    use crate::domain::error::DomainError;
    use axum::http::StatusCode;

    #[test]
    fn test_not_found_error_to_problem() {
        let error = DomainError::NotFound(17);
        let problem = domain_error_to_problem(&error, "/nodes-registry/v1/nodes/17");

        assert_eq!(problem.status, StatusCode::NOT_FOUND);
        assert_eq!(problem.instance, "/nodes-registry/v1/nodes/17");
        assert!(problem.detail.contains("17"));
        assert!(problem.detail.contains("not found"));
    }

    #[test]
    fn test_validation_error_to_problem() {
        let error = DomainError::Validation {
            field: "port".to_owned(),
            message: "must be between 1 and 65535".to_owned(),
        };
        let problem = domain_error_to_problem(&error, "/nodes-registry/v1/nodes");

        assert_eq!(problem.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(problem.instance, "/nodes-registry/v1/nodes");
        assert!(problem.detail.contains("port"));
        assert!(problem.detail.contains("must be between 1 and 65535"));
    }

    #[test]
    fn test_database_error_to_problem() {
        let error = DomainError::Database(anyhow::anyhow!("connection failed"));
        let problem = domain_error_to_problem(&error, "/db/error");

        assert_eq!(problem.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(problem.instance, "/db/error");
        // internal details stay out of the response
        assert!(!problem.detail.contains("connection failed"));
        assert!(problem.detail.contains("internal database error"));
    }

    #[test]
    fn test_from_domain_error_for_problem_not_found() {
        let error = DomainError::NotFound(3);
        let problem: Problem = error.into();

        assert_eq!(problem.status, StatusCode::NOT_FOUND);
        assert_eq!(problem.instance, "/");
    }

    #[test]
    fn test_from_domain_error_for_problem_validation() {
        let error = DomainError::Validation {
            field: "hostname".to_owned(),
            message: "must not be empty".to_owned(),
        };
        let problem: Problem = error.into();

        assert_eq!(problem.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(problem.detail.contains("hostname"));
    }
}
