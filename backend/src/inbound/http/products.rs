//! Product handlers.
//!
//! ```text
//! POST   /products {"shopId":"…","name":"Pen","price":85000,"weight":40,"categoryNames":["stationery"]}
//! GET    /products/{id}
//! PUT    /products/{id}
//! DELETE /products/{id}
//! GET    /products/shop/{shopId}
//! GET    /products/category/{name}
//! GET    /products/brand/{brand}
//! GET    /products/search/{keyword}
//! ```

use actix_web::web;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ErrorCode, Product, ProductDraft, ProductId, SecurityContext, ShopId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::dto::ProductResponse;
use crate::inbound::http::envelope::ApiResponse;
use crate::inbound::http::schemas::ErrorEnvelopeSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{Validate, Violations, parse_id};

/// Confirmation returned by `DELETE /products/{id}`.
pub const PRODUCT_DELETED: &str = "Product deleted";

/// Request body shared by product creation and update.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    /// Owning shop. Ignored on update; products never change shop.
    pub shop_id: String,
    #[schema(example = "Fountain Pen")]
    pub name: String,
    #[schema(example = 85000.0)]
    pub price: f64,
    /// Shipping weight in grams.
    #[schema(example = 40.0)]
    pub weight: f64,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Category names; unknown names are created.
    #[serde(default)]
    pub category_names: Vec<String>,
}

impl Validate for ProductRequest {
    fn violations(&self) -> Vec<String> {
        Violations::default()
            .not_blank("name", &self.name)
            .not_negative("price", self.price)
            .not_negative("weight", self.weight)
            .into_inner()
    }
}

impl ProductRequest {
    fn into_draft(self) -> (String, ProductDraft) {
        let draft = ProductDraft {
            name: self.name.trim().to_owned(),
            price: self.price,
            weight: self.weight,
            brand: self.brand,
            description: self.description,
            category_names: self.category_names,
        };
        (self.shop_id, draft)
    }
}

fn product_id(raw: &str) -> ApiResult<ProductId> {
    parse_id(raw, ErrorCode::ProductNotExist)
}

fn product_list(products: Vec<Product>) -> web::Json<ApiResponse<Vec<ProductResponse>>> {
    web::Json(ApiResponse::success(
        products.into_iter().map(ProductResponse::from).collect(),
    ))
}

/// List a product in one of the caller's shops.
#[utoipa::path(
    post,
    path = "/products",
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Product created", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Invalid request", body = ErrorEnvelopeSchema),
        (status = 403, description = "Caller does not own the shop", body = ErrorEnvelopeSchema),
        (status = 404, description = "Unknown shop", body = ErrorEnvelopeSchema)
    ),
    tags = ["products"],
    operation_id = "createProduct"
)]
pub async fn create_product(
    state: web::Data<HttpState>,
    ctx: SecurityContext,
    payload: web::Json<ProductRequest>,
) -> ApiResult<web::Json<ApiResponse<ProductResponse>>> {
    let payload = payload.into_inner();
    payload.validate()?;
    let (shop_id, draft) = payload.into_draft();
    let shop_id: ShopId = parse_id(&shop_id, ErrorCode::ShopNotExist)?;
    let product = state.products.create(&ctx, &shop_id, draft).await?;
    Ok(web::Json(ApiResponse::success(product.into())))
}

#[utoipa::path(
    get,
    path = "/products/{id}",
    params(("id" = String, Path, description = "Product identifier")),
    responses(
        (status = 200, description = "Product", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Unknown product", body = ErrorEnvelopeSchema)
    ),
    tags = ["products"],
    operation_id = "getProduct",
    security([])
)]
pub async fn get_product(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ApiResponse<ProductResponse>>> {
    let product = state.products.get(&product_id(&path)?).await?;
    Ok(web::Json(ApiResponse::success(product.into())))
}

#[utoipa::path(
    put,
    path = "/products/{id}",
    params(("id" = String, Path, description = "Product identifier")),
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Invalid request or unknown product", body = ErrorEnvelopeSchema),
        (status = 403, description = "Caller does not own the shop", body = ErrorEnvelopeSchema)
    ),
    tags = ["products"],
    operation_id = "updateProduct"
)]
pub async fn update_product(
    state: web::Data<HttpState>,
    ctx: SecurityContext,
    path: web::Path<String>,
    payload: web::Json<ProductRequest>,
) -> ApiResult<web::Json<ApiResponse<ProductResponse>>> {
    let id = product_id(&path)?;
    let payload = payload.into_inner();
    payload.validate()?;
    let (_, draft) = payload.into_draft();
    let product = state.products.update(&ctx, &id, draft).await?;
    Ok(web::Json(ApiResponse::success(product.into())))
}

#[utoipa::path(
    delete,
    path = "/products/{id}",
    params(("id" = String, Path, description = "Product identifier")),
    responses(
        (status = 200, description = "Product deleted", body = ApiResponse<String>),
        (status = 400, description = "Unknown product", body = ErrorEnvelopeSchema),
        (status = 403, description = "Caller does not own the shop", body = ErrorEnvelopeSchema)
    ),
    tags = ["products"],
    operation_id = "deleteProduct"
)]
pub async fn delete_product(
    state: web::Data<HttpState>,
    ctx: SecurityContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<ApiResponse<String>>> {
    state.products.delete(&ctx, &product_id(&path)?).await?;
    Ok(web::Json(ApiResponse::success(PRODUCT_DELETED.to_owned())))
}

#[utoipa::path(
    get,
    path = "/products/shop/{shopId}",
    params(("shopId" = String, Path, description = "Shop identifier")),
    responses(
        (status = 200, description = "Products of the shop", body = ApiResponse<Vec<ProductResponse>>),
        (status = 404, description = "Unknown shop", body = ErrorEnvelopeSchema)
    ),
    tags = ["products"],
    operation_id = "listProductsByShop",
    security([])
)]
pub async fn list_products_by_shop(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ApiResponse<Vec<ProductResponse>>>> {
    let shop_id: ShopId = parse_id(&path, ErrorCode::ShopNotExist)?;
    Ok(product_list(state.products.list_by_shop(&shop_id).await?))
}

#[utoipa::path(
    get,
    path = "/products/category/{name}",
    params(("name" = String, Path, description = "Category name")),
    responses((status = 200, description = "Products in the category", body = ApiResponse<Vec<ProductResponse>>)),
    tags = ["products"],
    operation_id = "listProductsByCategory",
    security([])
)]
pub async fn list_products_by_category(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ApiResponse<Vec<ProductResponse>>>> {
    Ok(product_list(state.products.list_by_category(&path).await?))
}

/// Products whose brand equals `brand`, ignoring case.
#[utoipa::path(
    get,
    path = "/products/brand/{brand}",
    params(("brand" = String, Path, description = "Brand name")),
    responses((status = 200, description = "Products of the brand", body = ApiResponse<Vec<ProductResponse>>)),
    tags = ["products"],
    operation_id = "listProductsByBrand",
    security([])
)]
pub async fn list_products_by_brand(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ApiResponse<Vec<ProductResponse>>>> {
    Ok(product_list(state.products.list_by_brand(&path).await?))
}

#[utoipa::path(
    get,
    path = "/products/search/{keyword}",
    params(("keyword" = String, Path, description = "Search keyword")),
    responses((status = 200, description = "Matching products", body = ApiResponse<Vec<ProductResponse>>)),
    tags = ["products"],
    operation_id = "searchProducts",
    security([])
)]
pub async fn search_products(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ApiResponse<Vec<ProductResponse>>>> {
    Ok(product_list(state.products.search(&path).await?))
}
