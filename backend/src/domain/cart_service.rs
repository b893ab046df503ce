//! Cart operations.
//!
//! Every operation targets a user's cart and admits only that user or an
//! admin. A cart is created lazily the first time it is needed.

use std::sync::Arc;

use tracing::debug;

use crate::domain::ports::{CartRepository, ProductRepository, UserRepository};
use crate::domain::{Cart, Error, ErrorCode, ProductId, SecurityContext, User, UserId};

/// Input for [`CartService::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddToCart {
    pub product_id: ProductId,
    /// Requested units; must be positive.
    pub quantity: i64,
}

#[derive(Clone)]
pub struct CartService {
    carts: Arc<dyn CartRepository>,
    users: Arc<dyn UserRepository>,
    products: Arc<dyn ProductRepository>,
}

impl CartService {
    pub fn new(
        carts: Arc<dyn CartRepository>,
        users: Arc<dyn UserRepository>,
        products: Arc<dyn ProductRepository>,
    ) -> Self {
        Self {
            carts,
            users,
            products,
        }
    }

    pub async fn add(
        &self,
        ctx: &SecurityContext,
        user_id: &UserId,
        request: AddToCart,
    ) -> Result<Cart, Error> {
        let user = self.authorize(ctx, user_id).await?;
        let quantity = u32::try_from(request.quantity)
            .ok()
            .filter(|quantity| *quantity > 0)
            .ok_or(Error::new(ErrorCode::InvalidValue))?;
        let product = self
            .products
            .find_by_id(&request.product_id)
            .await?
            .ok_or(Error::new(ErrorCode::ProductNotExist))?;

        let mut cart = self
            .carts
            .find_by_user(&user.id)
            .await?
            .unwrap_or_else(|| Cart::new(user.id));
        cart.add(&product, quantity);
        self.carts.save(&cart).await?;
        debug!(user_id = %user.id, product_id = %product.id, quantity, "cart line added");
        Ok(cart)
    }

    pub async fn remove(
        &self,
        ctx: &SecurityContext,
        user_id: &UserId,
        product_id: &ProductId,
    ) -> Result<Cart, Error> {
        let user = self.authorize(ctx, user_id).await?;
        let mut cart = self
            .carts
            .find_by_user(&user.id)
            .await?
            .filter(|cart| !cart.is_empty())
            .ok_or(Error::new(ErrorCode::CartEmpty))?;
        cart.remove(product_id)
            .ok_or(Error::new(ErrorCode::CartItemNotExist))?;
        self.carts.save(&cart).await?;
        Ok(cart)
    }

    pub async fn clear(&self, ctx: &SecurityContext, user_id: &UserId) -> Result<Cart, Error> {
        let user = self.authorize(ctx, user_id).await?;
        let mut cart = self
            .carts
            .find_by_user(&user.id)
            .await?
            .ok_or(Error::new(ErrorCode::CartEmpty))?;
        cart.clear();
        self.carts.save(&cart).await?;
        Ok(cart)
    }

    /// The user's cart, created empty when it does not exist yet.
    pub async fn get(&self, ctx: &SecurityContext, user_id: &UserId) -> Result<Cart, Error> {
        let user = self.authorize(ctx, user_id).await?;
        match self.carts.find_by_user(&user.id).await? {
            Some(cart) => Ok(cart),
            None => {
                let cart = Cart::new(user.id);
                self.carts.save(&cart).await?;
                Ok(cart)
            }
        }
    }

    async fn authorize(&self, ctx: &SecurityContext, user_id: &UserId) -> Result<User, Error> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(Error::new(ErrorCode::UserNotExist))?;
        ctx.require_self_or_admin(&user.username)?;
        Ok(user)
    }
}
