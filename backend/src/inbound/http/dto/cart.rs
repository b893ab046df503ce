use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Cart, CartItem};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartItemResponse {
    pub product_id: String,
    pub product_name: String,
    /// Unit price captured when the line was last added to.
    pub price: f64,
    pub quantity: u32,
}

impl From<&CartItem> for CartItemResponse {
    fn from(value: &CartItem) -> Self {
        Self {
            product_id: value.product_id.to_string(),
            product_name: value.product_name.clone(),
            price: value.unit_price,
            quantity: value.quantity,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub id: String,
    pub items: Vec<CartItemResponse>,
    pub total_amount: f64,
}

impl From<Cart> for CartResponse {
    fn from(value: Cart) -> Self {
        Self {
            id: value.id.to_string(),
            items: value.items().iter().map(CartItemResponse::from).collect(),
            total_amount: value.total_amount(),
        }
    }
}
