//! Checkout and order lifecycle.
//!
//! Checkout turns the selected cart lines into one order per shop. Each order
//! carries a flat shipping fee and a shipment in preparation; the checked-out
//! lines leave the cart.

use std::sync::Arc;

use mockable::Clock;
use tracing::info;

use crate::domain::ports::{CartRepository, OrderRepository, UserRepository};
use crate::domain::{
    CartItem, Error, ErrorCode, FLAT_SHIPPING_FEE, Order, OrderId, OrderStatus, ProductId,
    SecurityContext, ShopId, User, UserId,
};

#[derive(Clone)]
pub struct OrderService {
    orders: Arc<dyn OrderRepository>,
    carts: Arc<dyn CartRepository>,
    users: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock>,
}

impl OrderService {
    pub fn new(
        orders: Arc<dyn OrderRepository>,
        carts: Arc<dyn CartRepository>,
        users: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            orders,
            carts,
            users,
            clock,
        }
    }

    /// Check out the caller's cart lines for `product_ids`.
    ///
    /// # Errors
    /// - [`ErrorCode::UserNotExist`] when the caller has no user record.
    /// - [`ErrorCode::AddressNotFound`] when the caller has no address.
    /// - [`ErrorCode::CartEmpty`] when the cart is missing or empty.
    /// - [`ErrorCode::CartItemNotExist`] when no cart line is selected.
    pub async fn checkout(
        &self,
        ctx: &SecurityContext,
        product_ids: &[ProductId],
    ) -> Result<Vec<Order>, Error> {
        let username = ctx.current_username()?;
        let user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or(Error::new(ErrorCode::UserNotExist))?;
        if user.address.is_none() {
            return Err(Error::new(ErrorCode::AddressNotFound));
        }

        let mut cart = self
            .carts
            .find_by_user(&user.id)
            .await?
            .filter(|cart| !cart.is_empty())
            .ok_or(Error::new(ErrorCode::CartEmpty))?;
        let selected = cart.take_selected(product_ids);
        if selected.is_empty() {
            return Err(Error::new(ErrorCode::CartItemNotExist));
        }

        let now = self.clock.utc();
        let mut placed = Vec::new();
        for (shop_id, lines) in group_by_shop(selected) {
            let order = Order::place(user.id, shop_id, lines, FLAT_SHIPPING_FEE, now);
            self.orders.save(&order).await?;
            info!(
                order_id = %order.id,
                shop_id = %shop_id,
                total = order.total_amount,
                "order placed"
            );
            placed.push(order);
        }
        self.carts.save(&cart).await?;
        Ok(placed)
    }

    /// Orders placed by `user_id`.
    pub async fn list_by_user(
        &self,
        ctx: &SecurityContext,
        user_id: &UserId,
    ) -> Result<Vec<Order>, Error> {
        ctx.current_identity()?;
        let user = self.user(user_id).await?;
        Ok(self.orders.list_by_user(&user.id).await?)
    }

    pub async fn get(&self, ctx: &SecurityContext, id: &OrderId) -> Result<Order, Error> {
        ctx.current_identity()?;
        self.find(id).await
    }

    /// Change an order's status. Any authenticated caller may set any status;
    /// cancelling also cancels the shipment.
    pub async fn update_status(
        &self,
        ctx: &SecurityContext,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<Order, Error> {
        ctx.current_identity()?;
        let mut order = self.find(id).await?;
        order.transition(status);
        self.orders.save(&order).await?;
        info!(order_id = %order.id, status = %status, "order status updated");
        Ok(order)
    }

    pub(crate) async fn find(&self, id: &OrderId) -> Result<Order, Error> {
        self.orders
            .find_by_id(id)
            .await?
            .ok_or(Error::new(ErrorCode::OrderNotExist))
    }

    pub(crate) async fn save(&self, order: &Order) -> Result<(), Error> {
        Ok(self.orders.save(order).await?)
    }

    async fn user(&self, id: &UserId) -> Result<User, Error> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or(Error::new(ErrorCode::UserNotExist))
    }
}

/// Group lines per shop, keeping shops in first-seen order.
fn group_by_shop(lines: Vec<CartItem>) -> Vec<(ShopId, Vec<CartItem>)> {
    let mut groups: Vec<(ShopId, Vec<CartItem>)> = Vec::new();
    for line in lines {
        match groups.iter_mut().find(|(shop, _)| *shop == line.shop_id) {
            Some((_, bucket)) => bucket.push(line),
            None => groups.push((line.shop_id, vec![line])),
        }
    }
    groups
}

#[cfg(test)]
mod tests;
