//! Cash-on-delivery payment handlers.
//!
//! ```text
//! POST /payments/cod/{orderId}
//! POST /payments/cod/confirm/{orderId}
//! ```

use actix_web::web;

use crate::domain::{ErrorCode, OrderId, SecurityContext};
use crate::inbound::http::ApiResult;
use crate::inbound::http::dto::PaymentResponse;
use crate::inbound::http::envelope::ApiResponse;
use crate::inbound::http::schemas::ErrorEnvelopeSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_id;

fn order_id(raw: &str) -> ApiResult<OrderId> {
    parse_id(raw, ErrorCode::OrderNotExist)
}

/// Record a pending cash-on-delivery payment for an order.
#[utoipa::path(
    post,
    path = "/payments/cod/{orderId}",
    params(("orderId" = String, Path, description = "Order to pay")),
    responses(
        (status = 200, description = "Pending payment", body = ApiResponse<PaymentResponse>),
        (status = 400, description = "Unknown order or payment already recorded", body = ErrorEnvelopeSchema),
        (status = 403, description = "No identity", body = ErrorEnvelopeSchema)
    ),
    tags = ["payments"],
    operation_id = "createCodPayment"
)]
pub async fn create_cod_payment(
    state: web::Data<HttpState>,
    ctx: SecurityContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<ApiResponse<PaymentResponse>>> {
    let outcome = state.payments.create_cod(&ctx, &order_id(&path)?).await?;
    Ok(web::Json(ApiResponse::success(outcome.into())))
}

/// Confirm cash was collected. Marks the payment successful and the order paid.
#[utoipa::path(
    post,
    path = "/payments/cod/confirm/{orderId}",
    params(("orderId" = String, Path, description = "Paid order")),
    responses(
        (status = 200, description = "Confirmed payment", body = ApiResponse<PaymentResponse>),
        (status = 400, description = "Unknown order or no payment recorded", body = ErrorEnvelopeSchema),
        (status = 403, description = "Caller is not an admin", body = ErrorEnvelopeSchema)
    ),
    tags = ["payments"],
    operation_id = "confirmCodPayment"
)]
pub async fn confirm_cod_payment(
    state: web::Data<HttpState>,
    ctx: SecurityContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<ApiResponse<PaymentResponse>>> {
    let outcome = state.payments.confirm_cod(&ctx, &order_id(&path)?).await?;
    Ok(web::Json(ApiResponse::success(outcome.into())))
}
