//! OpenAPI document assembled from the handler annotations.

use utoipa::OpenApi;

use crate::domain::Error;
use crate::inbound::http::users::{CreatedResponse, ResultResponse, UserPayload, UserResponse};

/// Public OpenAPI surface used by Swagger UI and tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "hobby-registry",
        description = "User records guarded by a shared-secret credential pair."
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::show_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::destroy_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(UserPayload, UserResponse, CreatedResponse, ResultResponse, Error)),
    tags(
        (name = "users", description = "User record management"),
        (name = "health", description = "Orchestration probes")
    )
)]
pub struct ApiDoc;
