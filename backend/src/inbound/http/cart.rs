//! Cart handlers. Each route targets one user's cart and admits that user or
//! an admin.
//!
//! ```text
//! POST   /cart/add/{userId} {"productId":"…","quantity":2}
//! DELETE /cart/remove/{userId}/{productId}
//! DELETE /cart/clear/{userId}
//! GET    /cart/{userId}
//! ```

use actix_web::web;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{AddToCart, Cart, ErrorCode, ProductId, SecurityContext, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::dto::CartResponse;
use crate::inbound::http::envelope::ApiResponse;
use crate::inbound::http::schemas::ErrorEnvelopeSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_id;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub product_id: String,
    /// Units to add; must be positive.
    #[schema(example = 2)]
    pub quantity: i64,
}

fn user_id(raw: &str) -> ApiResult<UserId> {
    parse_id(raw, ErrorCode::UserNotExist)
}

fn cart_body(cart: Cart) -> web::Json<ApiResponse<CartResponse>> {
    web::Json(ApiResponse::success(cart.into()))
}

/// Add units of a product, merging into an existing line.
#[utoipa::path(
    post,
    path = "/cart/add/{userId}",
    params(("userId" = String, Path, description = "Cart owner")),
    request_body = AddToCartRequest,
    responses(
        (status = 200, description = "Updated cart", body = ApiResponse<CartResponse>),
        (status = 400, description = "Invalid quantity or unknown product", body = ErrorEnvelopeSchema),
        (status = 403, description = "Not the cart owner", body = ErrorEnvelopeSchema),
        (status = 404, description = "Unknown user", body = ErrorEnvelopeSchema)
    ),
    tags = ["cart"],
    operation_id = "addToCart"
)]
pub async fn add_to_cart(
    state: web::Data<HttpState>,
    ctx: SecurityContext,
    path: web::Path<String>,
    payload: web::Json<AddToCartRequest>,
) -> ApiResult<web::Json<ApiResponse<CartResponse>>> {
    let user_id = user_id(&path)?;
    let request = AddToCart {
        product_id: parse_id(&payload.product_id, ErrorCode::ProductNotExist)?,
        quantity: payload.quantity,
    };
    let cart = state.carts.add(&ctx, &user_id, request).await?;
    Ok(cart_body(cart))
}

#[utoipa::path(
    delete,
    path = "/cart/remove/{userId}/{productId}",
    params(
        ("userId" = String, Path, description = "Cart owner"),
        ("productId" = String, Path, description = "Product of the line to drop")
    ),
    responses(
        (status = 200, description = "Updated cart", body = ApiResponse<CartResponse>),
        (status = 400, description = "Empty cart or no such line", body = ErrorEnvelopeSchema),
        (status = 403, description = "Not the cart owner", body = ErrorEnvelopeSchema),
        (status = 404, description = "Unknown user", body = ErrorEnvelopeSchema)
    ),
    tags = ["cart"],
    operation_id = "removeFromCart"
)]
pub async fn remove_from_cart(
    state: web::Data<HttpState>,
    ctx: SecurityContext,
    path: web::Path<(String, String)>,
) -> ApiResult<web::Json<ApiResponse<CartResponse>>> {
    let (raw_user, raw_product) = path.into_inner();
    let user_id = user_id(&raw_user)?;
    let product_id: ProductId = parse_id(&raw_product, ErrorCode::CartItemNotExist)?;
    let cart = state.carts.remove(&ctx, &user_id, &product_id).await?;
    Ok(cart_body(cart))
}

#[utoipa::path(
    delete,
    path = "/cart/clear/{userId}",
    params(("userId" = String, Path, description = "Cart owner")),
    responses(
        (status = 200, description = "Emptied cart", body = ApiResponse<CartResponse>),
        (status = 400, description = "No cart yet", body = ErrorEnvelopeSchema),
        (status = 403, description = "Not the cart owner", body = ErrorEnvelopeSchema),
        (status = 404, description = "Unknown user", body = ErrorEnvelopeSchema)
    ),
    tags = ["cart"],
    operation_id = "clearCart"
)]
pub async fn clear_cart(
    state: web::Data<HttpState>,
    ctx: SecurityContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<ApiResponse<CartResponse>>> {
    let cart = state.carts.clear(&ctx, &user_id(&path)?).await?;
    Ok(cart_body(cart))
}

/// The user's cart, created empty on first access.
#[utoipa::path(
    get,
    path = "/cart/{userId}",
    params(("userId" = String, Path, description = "Cart owner")),
    responses(
        (status = 200, description = "Cart", body = ApiResponse<CartResponse>),
        (status = 403, description = "Not the cart owner", body = ErrorEnvelopeSchema),
        (status = 404, description = "Unknown user", body = ErrorEnvelopeSchema)
    ),
    tags = ["cart"],
    operation_id = "getCart"
)]
pub async fn get_cart(
    state: web::Data<HttpState>,
    ctx: SecurityContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<ApiResponse<CartResponse>>> {
    let cart = state.carts.get(&ctx, &user_id(&path)?).await?;
    Ok(cart_body(cart))
}
