//! Shop registration and lookup.

use std::sync::Arc;

use tracing::info;

use crate::domain::ports::{ShopRepository, UserRepository};
use crate::domain::{Address, Error, ErrorCode, SecurityContext, Shop, ShopId};

/// Input for [`ShopService::create`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShop {
    pub name: String,
    pub address: Option<Address>,
}

#[derive(Clone)]
pub struct ShopService {
    shops: Arc<dyn ShopRepository>,
    users: Arc<dyn UserRepository>,
}

impl ShopService {
    pub fn new(shops: Arc<dyn ShopRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { shops, users }
    }

    /// Open a shop owned by the caller.
    pub async fn create(&self, ctx: &SecurityContext, request: NewShop) -> Result<Shop, Error> {
        let username = ctx.current_username()?;
        let owner = self
            .users
            .find_by_username(username)
            .await?
            .ok_or(Error::new(ErrorCode::UserNotExist))?;

        let shop = Shop::new(request.name, owner.id, owner.username).with_address(request.address);
        self.shops.save(&shop).await?;
        info!(shop_id = %shop.id, owner = %shop.owner_username, "shop created");
        Ok(shop)
    }

    pub async fn list(&self) -> Result<Vec<Shop>, Error> {
        Ok(self.shops.list().await?)
    }

    pub async fn get(&self, id: &ShopId) -> Result<Shop, Error> {
        self.shops
            .find_by_id(id)
            .await?
            .ok_or(Error::new(ErrorCode::ShopNotExist))
    }

    /// Shops owned by `username`.
    pub async fn list_by_owner(&self, username: &str) -> Result<Vec<Shop>, Error> {
        let owner = self
            .users
            .find_by_username(username)
            .await?
            .ok_or(Error::new(ErrorCode::UserNotExist))?;
        Ok(self.shops.list_by_owner(&owner.id).await?)
    }
}
