use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::AddressDto;
use crate::domain::Shop;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShopResponse {
    pub shop_id: String,
    #[schema(example = "Corner Books")]
    pub name: String,
    pub owner_id: String,
    #[schema(example = "alice")]
    pub owner_username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<AddressDto>,
}

impl From<Shop> for ShopResponse {
    fn from(value: Shop) -> Self {
        Self {
            shop_id: value.id.to_string(),
            name: value.name,
            owner_id: value.owner_id.to_string(),
            owner_username: value.owner_username,
            address: value.address.map(AddressDto::from),
        }
    }
}
