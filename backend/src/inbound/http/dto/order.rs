use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Order, OrderItem};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemResponse {
    pub product_id: String,
    pub product_name: String,
    pub quantity: u32,
    pub price_at_purchase: f64,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(value: OrderItem) -> Self {
        Self {
            product_id: value.product_id.to_string(),
            product_name: value.product_name,
            quantity: value.quantity,
            price_at_purchase: value.price_at_purchase,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub order_id: String,
    /// Items plus shipping fee.
    pub total_amount: f64,
    pub items: Vec<OrderItemResponse>,
    #[schema(example = "PENDING")]
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(value: Order) -> Self {
        Self {
            order_id: value.id.to_string(),
            total_amount: value.total_amount,
            items: value.items.into_iter().map(Into::into).collect(),
            status: value.status.to_string(),
            created_at: value.created_at,
        }
    }
}
