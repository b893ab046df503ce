//! Order handlers.
//!
//! ```text
//! POST  /orders/checkout/selected {"productIds":["…"]}
//! GET   /orders/user/{userId}
//! GET   /orders/{orderId}
//! PATCH /orders/{orderId}/status {"status":"CANCELLED"}
//! ```

use actix_web::web;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    Error, ErrorCode, Order, OrderId, OrderStatus, ProductId, SecurityContext, UnknownOrderStatus,
    UserId,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::dto::OrderResponse;
use crate::inbound::http::envelope::ApiResponse;
use crate::inbound::http::schemas::ErrorEnvelopeSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_id;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    /// Products whose cart lines should be ordered.
    pub product_ids: Vec<String>,
}

impl CheckoutRequest {
    /// Identifiers that can name a cart line. Anything else selects nothing.
    fn selected(&self) -> Vec<ProductId> {
        self.product_ids
            .iter()
            .filter_map(|raw| raw.parse().ok())
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    #[schema(example = "CANCELLED")]
    pub status: String,
}

impl UpdateStatusRequest {
    fn parse(&self) -> ApiResult<OrderStatus> {
        self.status
            .trim()
            .to_uppercase()
            .parse()
            .map_err(|err: UnknownOrderStatus| {
                Error::new(ErrorCode::InvalidValue).with_cause(err.to_string())
            })
    }
}

fn order_id(raw: &str) -> ApiResult<OrderId> {
    parse_id(raw, ErrorCode::OrderNotExist)
}

fn order_list(orders: Vec<Order>) -> web::Json<ApiResponse<Vec<OrderResponse>>> {
    web::Json(ApiResponse::success(
        orders.into_iter().map(OrderResponse::from).collect(),
    ))
}

/// Order the selected cart lines, one order per shop.
#[utoipa::path(
    post,
    path = "/orders/checkout/selected",
    request_body = CheckoutRequest,
    responses(
        (status = 200, description = "Placed orders", body = ApiResponse<Vec<OrderResponse>>),
        (status = 400, description = "Empty cart, nothing selected or no address", body = ErrorEnvelopeSchema),
        (status = 403, description = "No identity", body = ErrorEnvelopeSchema),
        (status = 404, description = "Caller has no user record", body = ErrorEnvelopeSchema)
    ),
    tags = ["orders"],
    operation_id = "checkoutSelected"
)]
pub async fn checkout_selected(
    state: web::Data<HttpState>,
    ctx: SecurityContext,
    payload: web::Json<CheckoutRequest>,
) -> ApiResult<web::Json<ApiResponse<Vec<OrderResponse>>>> {
    let orders = state.orders.checkout(&ctx, &payload.selected()).await?;
    Ok(order_list(orders))
}

#[utoipa::path(
    get,
    path = "/orders/user/{userId}",
    params(("userId" = String, Path, description = "Buyer")),
    responses(
        (status = 200, description = "Orders of the user", body = ApiResponse<Vec<OrderResponse>>),
        (status = 403, description = "Not permitted", body = ErrorEnvelopeSchema),
        (status = 404, description = "Unknown user", body = ErrorEnvelopeSchema)
    ),
    tags = ["orders"],
    operation_id = "listOrdersByUser"
)]
pub async fn list_orders_by_user(
    state: web::Data<HttpState>,
    ctx: SecurityContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<ApiResponse<Vec<OrderResponse>>>> {
    let user_id: UserId = parse_id(&path, ErrorCode::UserNotExist)?;
    Ok(order_list(state.orders.list_by_user(&ctx, &user_id).await?))
}

#[utoipa::path(
    get,
    path = "/orders/{orderId}",
    params(("orderId" = String, Path, description = "Order identifier")),
    responses(
        (status = 200, description = "Order", body = ApiResponse<OrderResponse>),
        (status = 400, description = "Unknown order", body = ErrorEnvelopeSchema),
        (status = 403, description = "Not permitted", body = ErrorEnvelopeSchema)
    ),
    tags = ["orders"],
    operation_id = "getOrder"
)]
pub async fn get_order(
    state: web::Data<HttpState>,
    ctx: SecurityContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<ApiResponse<OrderResponse>>> {
    let order = state.orders.get(&ctx, &order_id(&path)?).await?;
    Ok(web::Json(ApiResponse::success(order.into())))
}

/// Move an order to a new status. Any authenticated caller may do so.
#[utoipa::path(
    patch,
    path = "/orders/{orderId}/status",
    params(("orderId" = String, Path, description = "Order identifier")),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Updated order", body = ApiResponse<OrderResponse>),
        (status = 400, description = "Unknown order or status", body = ErrorEnvelopeSchema),
        (status = 403, description = "Not permitted", body = ErrorEnvelopeSchema)
    ),
    tags = ["orders"],
    operation_id = "updateOrderStatus"
)]
pub async fn update_order_status(
    state: web::Data<HttpState>,
    ctx: SecurityContext,
    path: web::Path<String>,
    payload: web::Json<UpdateStatusRequest>,
) -> ApiResult<web::Json<ApiResponse<OrderResponse>>> {
    let id = order_id(&path)?;
    let status = payload.parse()?;
    let order = state.orders.update_status(&ctx, &id, status).await?;
    Ok(web::Json(ApiResponse::success(order.into())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils::Storefront;
    use actix_web::http::StatusCode;
    use actix_web::test::TestRequest;
    use rstest::rstest;
    use serde_json::{Value, json};

    async fn fill_cart(shop: &Storefront, products: &[&str]) -> Vec<String> {
        let user = shop.user_id("customer").await;
        let mut ids = Vec::new();
        for name in products {
            let id = shop.product_id(name).await;
            shop.send(
                TestRequest::post()
                    .uri(&format!("/cart/add/{user}"))
                    .set_json(json!({"productId": id, "quantity": 1})),
                Some(shop.tokens.customer),
            )
            .await;
            ids.push(id);
        }
        ids
    }

    async fn checkout(shop: &Storefront, ids: Value) -> (StatusCode, Value) {
        shop.send(
            TestRequest::post()
                .uri("/orders/checkout/selected")
                .set_json(json!({ "productIds": ids })),
            Some(shop.tokens.customer),
        )
        .await
    }

    #[rstest]
    #[actix_web::test]
    async fn checkout_orders_only_selected_lines() {
        let shop = Storefront::seeded().await;
        let ids = fill_cart(&shop, &["Fountain Pen", "Zero To Production"]).await;
        let (status, body) = checkout(&shop, json!([ids[0]])).await;
        assert_eq!(status, StatusCode::OK);
        let order = &body["result"][0];
        assert_eq!(order["status"], "PENDING");
        assert_eq!(order["totalAmount"], 115_000.0);
        assert_eq!(order["items"][0]["priceAtPurchase"], 85_000.0);

        let user = shop.user_id("customer").await;
        let (_, cart) = shop
            .send(
                TestRequest::get().uri(&format!("/cart/{user}")),
                Some(shop.tokens.customer),
            )
            .await;
        assert_eq!(cart["result"]["totalAmount"], 610_000.0);
    }

    #[rstest]
    #[actix_web::test]
    async fn checkout_of_an_empty_cart_fails() {
        let shop = Storefront::seeded().await;
        let (status, body) = checkout(&shop, json!([])).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 1600);
    }

    #[rstest]
    #[actix_web::test]
    async fn unmatched_selection_reports_missing_line() {
        let shop = Storefront::seeded().await;
        fill_cart(&shop, &["Fountain Pen"]).await;
        let (status, body) = checkout(&shop, json!(["not-a-uuid"])).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 1601);
    }

    #[rstest]
    #[actix_web::test]
    async fn buyer_moves_status_freely_but_unknown_statuses_fail() {
        let shop = Storefront::seeded().await;
        let ids = fill_cart(&shop, &["Fountain Pen"]).await;
        let (_, body) = checkout(&shop, json!(ids)).await;
        let order_id = body["result"][0]["orderId"]
            .as_str()
            .expect("order id")
            .to_owned();
        let patch = |status: &str| {
            TestRequest::patch()
                .uri(&format!("/orders/{order_id}/status"))
                .set_json(json!({ "status": status }))
        };

        let (status, body) = shop.send(patch("DELIVERED"), Some(shop.tokens.customer)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"]["status"], "DELIVERED");

        let (status, body) = shop.send(patch("PAID"), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["code"], 1101);

        let (status, body) = shop.send(patch("LOST"), Some(shop.tokens.admin)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 1900);

        let (status, body) = shop
            .send(patch("cancelled"), Some(shop.tokens.customer))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"]["status"], "CANCELLED");
    }

    #[rstest]
    #[actix_web::test]
    async fn unknown_orders_report_order_not_exist() {
        let shop = Storefront::seeded().await;
        let (status, body) = shop
            .send(
                TestRequest::get().uri("/orders/3fa85f64-5717-4562-b3fc-2c963f66afa6"),
                Some(shop.tokens.customer),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 1700);
    }

    #[rstest]
    #[actix_web::test]
    async fn order_history_is_listed_per_user() {
        let shop = Storefront::seeded().await;
        let ids = fill_cart(&shop, &["Fountain Pen"]).await;
        checkout(&shop, json!(ids)).await;
        let user = shop.user_id("customer").await;
        let (status, body) = shop
            .send(
                TestRequest::get().uri(&format!("/orders/user/{user}")),
                Some(shop.tokens.seller),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"].as_array().map(Vec::len), Some(1));
    }
}
