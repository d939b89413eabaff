use std::sync::Arc;

use axum::Json;
use axum::extract::{Extension, Path, Query};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::domain::filter::NodeFilter;
use crate::domain::service::Service;

use super::dto::{
    CreateNodeRequest, ListNodesQuery, PatchNodeRequest, ProcessingNodeDto, UpdateNodeRequest,
};
use super::problem::Problem;

pub type ApiResult<T> = Result<T, Problem>;

/// List processing nodes matching the query filters.
#[utoipa::path(
    get,
    path = "/nodes-registry/v1/nodes",
    params(ListNodesQuery),
    responses(
        (status = 200, description = "Matching processing nodes", body = [ProcessingNodeDto]),
        (status = 500, description = "Internal error", body = Problem)
    ),
    tag = "Processing Nodes"
)]
pub async fn list_nodes(
    Extension(svc): Extension<Arc<Service>>,
    Query(query): Query<ListNodesQuery>,
) -> ApiResult<Json<Vec<ProcessingNodeDto>>> {
    let filter: NodeFilter = query.into();
    let nodes = svc.list_nodes(&filter).await?;
    Ok(Json(nodes.into_iter().map(Into::into).collect()))
}

/// Register a new processing node.
#[utoipa::path(
    post,
    path = "/nodes-registry/v1/nodes",
    request_body = CreateNodeRequest,
    responses(
        (status = 201, description = "Node registered", body = ProcessingNodeDto),
        (status = 422, description = "Validation failed", body = Problem),
        (status = 500, description = "Internal error", body = Problem)
    ),
    tag = "Processing Nodes"
)]
pub async fn create_node(
    Extension(svc): Extension<Arc<Service>>,
    Json(req): Json<CreateNodeRequest>,
) -> ApiResult<impl IntoResponse> {
    let node = svc.create_node(req.into()).await?;
    let dto: ProcessingNodeDto = node.into();
    Ok((StatusCode::CREATED, Json(dto)))
}

/// Retrieve a processing node by id.
#[utoipa::path(
    get,
    path = "/nodes-registry/v1/nodes/{id}",
    params(("id" = i64, Path, description = "Node id")),
    responses(
        (status = 200, description = "The processing node", body = ProcessingNodeDto),
        (status = 404, description = "Node not found", body = Problem),
        (status = 500, description = "Internal error", body = Problem)
    ),
    tag = "Processing Nodes"
)]
pub async fn get_node(
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<ProcessingNodeDto>> {
    let node = svc.get_node(id).await?;
    Ok(Json(node.into()))
}

/// Replace a processing node (full update).
#[utoipa::path(
    put,
    path = "/nodes-registry/v1/nodes/{id}",
    params(("id" = i64, Path, description = "Node id")),
    request_body = UpdateNodeRequest,
    responses(
        (status = 200, description = "Node updated", body = ProcessingNodeDto),
        (status = 404, description = "Node not found", body = Problem),
        (status = 422, description = "Validation failed", body = Problem),
        (status = 500, description = "Internal error", body = Problem)
    ),
    tag = "Processing Nodes"
)]
pub async fn update_node(
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateNodeRequest>,
) -> ApiResult<Json<ProcessingNodeDto>> {
    let node = svc.update_node(id, req.into()).await?;
    Ok(Json(node.into()))
}

/// Partially update a processing node.
#[utoipa::path(
    patch,
    path = "/nodes-registry/v1/nodes/{id}",
    params(("id" = i64, Path, description = "Node id")),
    request_body = PatchNodeRequest,
    responses(
        (status = 200, description = "Node patched", body = ProcessingNodeDto),
        (status = 404, description = "Node not found", body = Problem),
        (status = 422, description = "Validation failed", body = Problem),
        (status = 500, description = "Internal error", body = Problem)
    ),
    tag = "Processing Nodes"
)]
pub async fn patch_node(
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<i64>,
    Json(req): Json<PatchNodeRequest>,
) -> ApiResult<Json<ProcessingNodeDto>> {
    let node = svc.patch_node(id, req.into()).await?;
    Ok(Json(node.into()))
}

/// Remove a processing node from the registry.
#[utoipa::path(
    delete,
    path = "/nodes-registry/v1/nodes/{id}",
    params(("id" = i64, Path, description = "Node id")),
    responses(
        (status = 204, description = "Node removed"),
        (status = 404, description = "Node not found", body = Problem),
        (status = 500, description = "Internal error", body = Problem)
    ),
    tag = "Processing Nodes"
)]
pub async fn delete_node(
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    svc.delete_node(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
