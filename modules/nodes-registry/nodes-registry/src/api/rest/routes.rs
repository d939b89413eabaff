use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Router};

use crate::domain::service::Service;

use super::handlers;

/// Mount the nodes-registry REST surface onto a router.
pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    router
        .route(
            "/nodes-registry/v1/nodes",
            get(handlers::list_nodes).post(handlers::create_node),
        )
        .route(
            "/nodes-registry/v1/nodes/{id}",
            get(handlers::get_node)
                .put(handlers::update_node)
                .patch(handlers::patch_node)
                .delete(handlers::delete_node),
        )
        .layer(Extension(service))
}
