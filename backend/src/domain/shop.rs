//! Shops owned by storefront users.

use super::{Address, ShopId, UserId};

/// A seller's storefront. Every product belongs to exactly one shop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shop {
    pub id: ShopId,
    pub name: String,
    pub owner_id: UserId,
    /// Owner username, denormalised for ownership checks and responses.
    pub owner_username: String,
    /// Pickup address used when shipping orders.
    pub address: Option<Address>,
}

impl Shop {
    pub fn new(
        name: impl Into<String>,
        owner_id: UserId,
        owner_username: impl Into<String>,
    ) -> Self {
        Self {
            id: ShopId::random(),
            name: name.into(),
            owner_id,
            owner_username: owner_username.into(),
            address: None,
        }
    }

    pub fn with_address(mut self, address: Option<Address>) -> Self {
        self.address = address;
        self
    }

    /// Whether `username` owns this shop.
    pub fn is_owned_by(&self, username: &str) -> bool {
        self.owner_username == username
    }
}
