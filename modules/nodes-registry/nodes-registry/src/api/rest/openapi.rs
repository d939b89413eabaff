//! OpenAPI document for the nodes-registry REST surface.

use utoipa::OpenApi;

use super::{dto, handlers, problem};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pixelfarm Nodes Registry",
        description = "Processing node get/add/delete/update"
    ),
    paths(
        handlers::list_nodes,
        handlers::create_node,
        handlers::get_node,
        handlers::update_node,
        handlers::patch_node,
        handlers::delete_node,
    ),
    components(schemas(
        dto::ProcessingNodeDto,
        dto::CreateNodeRequest,
        dto::UpdateNodeRequest,
        dto::PatchNodeRequest,
        problem::Problem,
    )),
    tags((name = "Processing Nodes", description = "Registry of image-processing worker nodes"))
)]
pub struct ApiDoc;
