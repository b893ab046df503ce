//! User administration handlers.
//!
//! ```text
//! POST   /users {"username":"lan","email":"lan@hust.edu.vn"}
//! GET    /users
//! GET    /users/myInfo
//! GET    /users/{userId}
//! PUT    /users/{userId} {"fullname":"Alice","address":{...}}
//! DELETE /users/{userId}
//! ```

use std::collections::BTreeSet;

use actix_web::web;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ErrorCode, NewUser, SecurityContext, UserId, UserUpdate};
use crate::inbound::http::ApiResult;
use crate::inbound::http::dto::{AddressDto, UserResponse};
use crate::inbound::http::envelope::ApiResponse;
use crate::inbound::http::schemas::ErrorEnvelopeSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{Validate, Violations, parse_id};

/// Confirmation returned by `DELETE /users/{userId}`.
pub const USER_DELETED: &str = "User deleted";

/// Registration payload for `POST /users`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[schema(example = "lan")]
    pub username: String,
    #[serde(default)]
    pub fullname: Option<String>,
    /// University address (`hust.edu.vn` or `sis.hust.edu.vn`).
    #[serde(default)]
    #[schema(example = "lan@hust.edu.vn")]
    pub email: String,
    #[serde(default)]
    pub address: Option<AddressDto>,
}

impl Validate for CreateUserRequest {
    fn violations(&self) -> Vec<String> {
        let mut violations = Violations::default()
            .not_blank("username", &self.username)
            .into_inner();
        if let Some(address) = &self.address {
            violations.extend(address.violations());
        }
        violations
    }
}

impl From<CreateUserRequest> for NewUser {
    fn from(value: CreateUserRequest) -> Self {
        Self {
            username: value.username.trim().to_owned(),
            fullname: value.fullname,
            email: value.email.trim().to_owned(),
            address: value.address.map(Into::into),
        }
    }
}

/// Profile changes for `PUT /users/{userId}`. Omitted fields stay unchanged.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub fullname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Replacement role set. Admin only.
    #[serde(default)]
    #[schema(example = json!(["USER", "ADMIN"]))]
    pub roles: Option<Vec<String>>,
    #[serde(default)]
    pub address: Option<AddressDto>,
}

impl Validate for UpdateUserRequest {
    fn violations(&self) -> Vec<String> {
        self.address
            .as_ref()
            .map(Validate::violations)
            .unwrap_or_default()
    }
}

impl From<UpdateUserRequest> for UserUpdate {
    fn from(value: UpdateUserRequest) -> Self {
        Self {
            fullname: value.fullname,
            email: value.email,
            roles: value
                .roles
                .map(|roles| roles.into_iter().collect::<BTreeSet<_>>()),
            address: value.address.map(Into::into),
        }
    }
}

fn user_id(raw: &str) -> ApiResult<UserId> {
    parse_id(raw, ErrorCode::UserNotExist)
}

/// Register a customer profile. No identity is required.
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "Registered user", body = ApiResponse<UserResponse>),
        (status = 400, description = "Invalid request, taken username or email", body = ErrorEnvelopeSchema)
    ),
    tags = ["users"],
    operation_id = "createUser",
    security([])
)]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<web::Json<ApiResponse<UserResponse>>> {
    let payload = payload.into_inner();
    payload.validate()?;
    let user = state.users.register(payload.into()).await?;
    Ok(web::Json(ApiResponse::success(user.into())))
}

/// List every user.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Users", body = ApiResponse<Vec<UserResponse>>),
        (status = 403, description = "Caller is not an admin", body = ErrorEnvelopeSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
pub async fn list_users(
    state: web::Data<HttpState>,
    ctx: SecurityContext,
) -> ApiResult<web::Json<ApiResponse<Vec<UserResponse>>>> {
    let users = state.users.list(&ctx).await?;
    Ok(web::Json(ApiResponse::success(
        users.into_iter().map(UserResponse::from).collect(),
    )))
}

/// Profile of the calling user.
#[utoipa::path(
    get,
    path = "/users/myInfo",
    responses(
        (status = 200, description = "Caller profile", body = ApiResponse<UserResponse>),
        (status = 403, description = "No identity", body = ErrorEnvelopeSchema),
        (status = 404, description = "No user record", body = ErrorEnvelopeSchema)
    ),
    tags = ["users"],
    operation_id = "myInfo"
)]
pub async fn my_info(
    state: web::Data<HttpState>,
    ctx: SecurityContext,
) -> ApiResult<web::Json<ApiResponse<UserResponse>>> {
    let user = state.users.my_info(&ctx).await?;
    Ok(web::Json(ApiResponse::success(user.into())))
}

#[utoipa::path(
    get,
    path = "/users/{userId}",
    params(("userId" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = ApiResponse<UserResponse>),
        (status = 403, description = "Caller is not an admin", body = ErrorEnvelopeSchema),
        (status = 404, description = "Unknown user", body = ErrorEnvelopeSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
pub async fn get_user(
    state: web::Data<HttpState>,
    ctx: SecurityContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<ApiResponse<UserResponse>>> {
    let id = user_id(&path)?;
    let user = state.users.get(&ctx, &id).await?;
    Ok(web::Json(ApiResponse::success(user.into())))
}

/// Update a profile. Callers may edit themselves; only admins may change roles.
#[utoipa::path(
    put,
    path = "/users/{userId}",
    params(("userId" = String, Path, description = "User identifier")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated user", body = ApiResponse<UserResponse>),
        (status = 400, description = "Invalid request", body = ErrorEnvelopeSchema),
        (status = 403, description = "Not permitted", body = ErrorEnvelopeSchema),
        (status = 404, description = "Unknown user", body = ErrorEnvelopeSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
pub async fn update_user(
    state: web::Data<HttpState>,
    ctx: SecurityContext,
    path: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> ApiResult<web::Json<ApiResponse<UserResponse>>> {
    let id = user_id(&path)?;
    let payload = payload.into_inner();
    payload.validate()?;
    let user = state.users.update(&ctx, &id, payload.into()).await?;
    Ok(web::Json(ApiResponse::success(user.into())))
}

#[utoipa::path(
    delete,
    path = "/users/{userId}",
    params(("userId" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User deleted", body = ApiResponse<String>),
        (status = 403, description = "Caller is not an admin", body = ErrorEnvelopeSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
pub async fn delete_user(
    state: web::Data<HttpState>,
    ctx: SecurityContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<ApiResponse<String>>> {
    let id = user_id(&path)?;
    state.users.delete(&ctx, &id).await?;
    Ok(web::Json(ApiResponse::success(USER_DELETED.to_owned())))
}
