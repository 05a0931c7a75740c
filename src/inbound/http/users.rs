//! Users API handlers.
//!
//! ```text
//! GET    /users
//! GET    /users/{id}
//! POST   /users
//! PUT    /users/{id}   (PATCH accepted as an alias)
//! DELETE /users/{id}
//! ```
//!
//! Mutating requests carry the credential pair in the JSON body alongside the
//! user fields. Unrecognised payload fields are ignored and never reach
//! storage. A missing or non-JSON body counts as an empty payload, so it is
//! rejected by the auth gate as an incomplete credential pair rather than by
//! the JSON extractor.

use actix_web::{HttpResponse, delete, get, post, route, web};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::domain::auth::CredentialClaim;
use crate::domain::ports::UserPersistenceError;
use crate::domain::{Error, User, UserDraft, UserId, UserPatch};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Request body for the mutating endpoints.
///
/// Every field is optional at the transport level; the domain decides which
/// absences are fatal for the operation at hand.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UserPayload {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub hobby: Option<String>,
    pub uuid: Option<String>,
    pub secret_token: Option<String>,
}

impl UserPayload {
    fn credential_claim(&self) -> CredentialClaim {
        CredentialClaim {
            uuid: self.uuid.clone(),
            secret_token: self.secret_token.clone(),
        }
    }

    fn into_draft(self) -> UserDraft {
        UserDraft {
            name: self.name,
            surname: self.surname,
            hobby: self.hobby,
        }
    }

    fn into_patch(self) -> UserPatch {
        UserPatch {
            name: self.name,
            surname: self.surname,
            hobby: self.hobby,
        }
        .normalise()
    }
}

/// User representation returned by the read and create endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub hobby: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.as_i32(),
            name: user.name,
            surname: user.surname,
            hobby: user.hobby,
            created_at: user.created_at.to_rfc3339(),
            updated_at: user.updated_at.to_rfc3339(),
        }
    }
}

/// Body returned by a successful create.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedResponse {
    #[schema(example = "User created.")]
    pub result: String,
    pub user: UserResponse,
}

/// Body returned by successful update and destroy calls.
#[derive(Debug, Serialize, ToSchema)]
pub struct ResultResponse {
    #[schema(example = "User modified.")]
    pub result: String,
}

fn map_persistence_error(err: UserPersistenceError) -> Error {
    error!(error = %err, "user repository call failed");
    Error::internal(err.to_string())
}

/// List all users.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All user records", body = [UserResponse]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserResponse>>> {
    let users = state.users.list().await.map_err(map_persistence_error)?;
    Ok(web::Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Fetch a single user.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User record", body = UserResponse),
        (status = 404, description = "User not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "showUser"
)]
#[get("/users/{id}")]
pub async fn show_user(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<UserResponse>> {
    let id = UserId::new(path.into_inner());
    let user = state
        .users
        .find_by_id(id)
        .await
        .map_err(map_persistence_error)?
        .ok_or_else(Error::not_found)?;
    Ok(web::Json(UserResponse::from(user)))
}

/// Create a user. Auth gate first, validation second, persistence last.
#[utoipa::path(
    post,
    path = "/users",
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created", body = CreatedResponse),
        (status = 403, description = "Auth data incomplete or invalid", body = Error),
        (status = 422, description = "User payload invalid", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: Option<web::Json<UserPayload>>,
) -> ApiResult<HttpResponse> {
    let payload = payload.map(web::Json::into_inner).unwrap_or_default();
    state.auth.authorize(&payload.credential_claim()).await?;

    let new_user = payload
        .into_draft()
        .validate()
        .map_err(|missing| Error::user_invalid(&missing))?;

    let created = state
        .users
        .insert(&new_user)
        .await
        .map_err(map_persistence_error)?;
    info!(user_id = %created.id, "user created");

    Ok(HttpResponse::Created().json(CreatedResponse {
        result: "User created.".to_owned(),
        user: UserResponse::from(created),
    }))
}

/// Update a user with a partial patch: only supplied fields change.
///
/// Blank supplied fields count as absent, so a patch of empty strings is
/// rejected as carrying no data rather than blanking stored values.
#[utoipa::path(
    put,
    path = "/users/{id}",
    request_body = UserPayload,
    params(("id" = i32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User modified", body = ResultResponse),
        (status = 400, description = "No recognised field supplied", body = Error),
        (status = 403, description = "Auth data incomplete or invalid", body = Error),
        (status = 404, description = "User not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[route("/users/{id}", method = "PUT", method = "PATCH")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: Option<web::Json<UserPayload>>,
) -> ApiResult<web::Json<ResultResponse>> {
    let payload = payload.map(web::Json::into_inner).unwrap_or_default();
    state.auth.authorize(&payload.credential_claim()).await?;

    let id = UserId::new(path.into_inner());
    state
        .users
        .find_by_id(id)
        .await
        .map_err(map_persistence_error)?
        .ok_or_else(Error::not_found)?;

    let patch = payload.into_patch();
    if patch.is_empty() {
        return Err(Error::no_data_given());
    }

    // The record can vanish between the existence check and the write; the
    // rows-affected result keeps that race a 404 rather than a silent no-op.
    let updated = state
        .users
        .update(id, &patch)
        .await
        .map_err(map_persistence_error)?;
    if !updated {
        return Err(Error::not_found());
    }
    info!(user_id = %id, "user modified");

    Ok(web::Json(ResultResponse {
        result: "User modified.".to_owned(),
    }))
}

/// Delete a user.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    request_body = UserPayload,
    params(("id" = i32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User deleted", body = ResultResponse),
        (status = 403, description = "Auth data incomplete or invalid", body = Error),
        (status = 404, description = "User not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "destroyUser"
)]
#[delete("/users/{id}")]
pub async fn destroy_user(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: Option<web::Json<UserPayload>>,
) -> ApiResult<web::Json<ResultResponse>> {
    let payload = payload.map(web::Json::into_inner).unwrap_or_default();
    state.auth.authorize(&payload.credential_claim()).await?;

    let id = UserId::new(path.into_inner());
    let deleted = state
        .users
        .delete(id)
        .await
        .map_err(map_persistence_error)?;
    if !deleted {
        return Err(Error::not_found());
    }
    info!(user_id = %id, "user deleted");

    Ok(web::Json(ResultResponse {
        result: "User deleted.".to_owned(),
    }))
}
