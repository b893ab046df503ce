//! Shop handlers.
//!
//! ```text
//! POST /shops {"name":"Corner Books"}
//! GET  /shops
//! GET  /shops/{shopId}
//! GET  /shops/owner/{username}
//! ```

use actix_web::web;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ErrorCode, NewShop, SecurityContext, Shop, ShopId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::dto::{AddressDto, ShopResponse};
use crate::inbound::http::envelope::ApiResponse;
use crate::inbound::http::schemas::ErrorEnvelopeSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{Validate, Violations, parse_id};

/// Request body for `POST /shops`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateShopRequest {
    #[schema(example = "Corner Books")]
    pub name: String,
    #[serde(default)]
    pub address: Option<AddressDto>,
}

impl Validate for CreateShopRequest {
    fn violations(&self) -> Vec<String> {
        let mut violations = Violations::default()
            .not_blank("name", &self.name)
            .into_inner();
        if let Some(address) = &self.address {
            violations.extend(address.violations());
        }
        violations
    }
}

impl From<CreateShopRequest> for NewShop {
    fn from(value: CreateShopRequest) -> Self {
        Self {
            name: value.name.trim().to_owned(),
            address: value.address.map(Into::into),
        }
    }
}

fn shop_responses(shops: Vec<Shop>) -> Vec<ShopResponse> {
    shops.into_iter().map(ShopResponse::from).collect()
}

/// Open a shop owned by the caller.
#[utoipa::path(
    post,
    path = "/shops",
    request_body = CreateShopRequest,
    responses(
        (status = 200, description = "Shop created", body = ApiResponse<ShopResponse>),
        (status = 400, description = "Invalid request", body = ErrorEnvelopeSchema),
        (status = 403, description = "No identity", body = ErrorEnvelopeSchema),
        (status = 404, description = "Caller has no user record", body = ErrorEnvelopeSchema)
    ),
    tags = ["shops"],
    operation_id = "createShop"
)]
pub async fn create_shop(
    state: web::Data<HttpState>,
    ctx: SecurityContext,
    payload: web::Json<CreateShopRequest>,
) -> ApiResult<web::Json<ApiResponse<ShopResponse>>> {
    let payload = payload.into_inner();
    payload.validate()?;
    let shop = state.shops.create(&ctx, payload.into()).await?;
    Ok(web::Json(ApiResponse::success(shop.into())))
}

#[utoipa::path(
    get,
    path = "/shops",
    responses((status = 200, description = "Shops", body = ApiResponse<Vec<ShopResponse>>)),
    tags = ["shops"],
    operation_id = "listShops",
    security([])
)]
pub async fn list_shops(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<ApiResponse<Vec<ShopResponse>>>> {
    let shops = state.shops.list().await?;
    Ok(web::Json(ApiResponse::success(shop_responses(shops))))
}

#[utoipa::path(
    get,
    path = "/shops/{shopId}",
    params(("shopId" = String, Path, description = "Shop identifier")),
    responses(
        (status = 200, description = "Shop", body = ApiResponse<ShopResponse>),
        (status = 404, description = "Unknown shop", body = ErrorEnvelopeSchema)
    ),
    tags = ["shops"],
    operation_id = "getShop",
    security([])
)]
pub async fn get_shop(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ApiResponse<ShopResponse>>> {
    let id: ShopId = parse_id(&path, ErrorCode::ShopNotExist)?;
    let shop = state.shops.get(&id).await?;
    Ok(web::Json(ApiResponse::success(shop.into())))
}

#[utoipa::path(
    get,
    path = "/shops/owner/{username}",
    params(("username" = String, Path, description = "Owner's username")),
    responses(
        (status = 200, description = "Shops of the owner", body = ApiResponse<Vec<ShopResponse>>),
        (status = 404, description = "Unknown owner", body = ErrorEnvelopeSchema)
    ),
    tags = ["shops"],
    operation_id = "listShopsByOwner",
    security([])
)]
pub async fn list_shops_by_owner(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ApiResponse<Vec<ShopResponse>>>> {
    let shops = state.shops.list_by_owner(&path).await?;
    Ok(web::Json(ApiResponse::success(shop_responses(shops))))
}
