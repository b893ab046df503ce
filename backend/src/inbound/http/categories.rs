//! Category handlers.
//!
//! ```text
//! POST   /categories {"name":"Home Appliances"}
//! GET    /categories
//! GET    /categories/id/{id}
//! GET    /categories/search/{keyword}
//! DELETE /categories/{name}
//! ```
//!
//! Names are normalised before they are stored or compared, so
//! `" Home   Appliances "` and `"home appliances"` name the same category.

use actix_web::web;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Category, CategoryId, ErrorCode, SecurityContext};
use crate::inbound::http::ApiResult;
use crate::inbound::http::dto::CategoryResponse;
use crate::inbound::http::envelope::ApiResponse;
use crate::inbound::http::schemas::ErrorEnvelopeSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{Validate, Violations, parse_id};

/// Confirmation returned by `DELETE /categories/{name}`.
pub const CATEGORY_DELETED: &str = "Category deleted";

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    #[schema(example = "Home Appliances")]
    pub name: String,
}

impl Validate for CreateCategoryRequest {
    fn violations(&self) -> Vec<String> {
        Violations::default()
            .not_blank("name", &self.name)
            .into_inner()
    }
}

fn category_responses(categories: Vec<Category>) -> Vec<CategoryResponse> {
    categories.into_iter().map(CategoryResponse::from).collect()
}

#[utoipa::path(
    post,
    path = "/categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 200, description = "Category created", body = ApiResponse<CategoryResponse>),
        (status = 400, description = "Invalid or duplicate name", body = ErrorEnvelopeSchema),
        (status = 403, description = "Caller is not an admin", body = ErrorEnvelopeSchema)
    ),
    tags = ["categories"],
    operation_id = "createCategory"
)]
pub async fn create_category(
    state: web::Data<HttpState>,
    ctx: SecurityContext,
    payload: web::Json<CreateCategoryRequest>,
) -> ApiResult<web::Json<ApiResponse<CategoryResponse>>> {
    payload.validate()?;
    let category = state.categories.create(&ctx, &payload.name).await?;
    Ok(web::Json(ApiResponse::success(category.into())))
}

#[utoipa::path(
    get,
    path = "/categories",
    responses((status = 200, description = "Categories", body = ApiResponse<Vec<CategoryResponse>>)),
    tags = ["categories"],
    operation_id = "listCategories",
    security([])
)]
pub async fn list_categories(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<ApiResponse<Vec<CategoryResponse>>>> {
    let categories = state.categories.list().await?;
    Ok(web::Json(ApiResponse::success(category_responses(categories))))
}

#[utoipa::path(
    get,
    path = "/categories/id/{id}",
    params(("id" = String, Path, description = "Category identifier")),
    responses(
        (status = 200, description = "Category", body = ApiResponse<CategoryResponse>),
        (status = 400, description = "Unknown category", body = ErrorEnvelopeSchema)
    ),
    tags = ["categories"],
    operation_id = "getCategory",
    security([])
)]
pub async fn get_category(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ApiResponse<CategoryResponse>>> {
    let id: CategoryId = parse_id(&path, ErrorCode::CategoryNotExist)?;
    let category = state.categories.get(&id).await?;
    Ok(web::Json(ApiResponse::success(category.into())))
}

/// Categories whose normalised name contains the normalised keyword.
#[utoipa::path(
    get,
    path = "/categories/search/{keyword}",
    params(("keyword" = String, Path, description = "Search keyword")),
    responses((status = 200, description = "Matching categories", body = ApiResponse<Vec<CategoryResponse>>)),
    tags = ["categories"],
    operation_id = "searchCategories",
    security([])
)]
pub async fn search_categories(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ApiResponse<Vec<CategoryResponse>>>> {
    let categories = state.categories.search(&path).await?;
    Ok(web::Json(ApiResponse::success(category_responses(categories))))
}

#[utoipa::path(
    delete,
    path = "/categories/{name}",
    params(("name" = String, Path, description = "Category name")),
    responses(
        (status = 200, description = "Category deleted", body = ApiResponse<String>),
        (status = 400, description = "Unknown or still in use", body = ErrorEnvelopeSchema),
        (status = 403, description = "Caller is not an admin", body = ErrorEnvelopeSchema)
    ),
    tags = ["categories"],
    operation_id = "deleteCategory"
)]
pub async fn delete_category(
    state: web::Data<HttpState>,
    ctx: SecurityContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<ApiResponse<String>>> {
    state.categories.delete(&ctx, &path).await?;
    Ok(web::Json(ApiResponse::success(CATEGORY_DELETED.to_owned())))
}
