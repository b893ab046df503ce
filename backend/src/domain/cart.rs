//! Shopping carts.
//!
//! A user owns at most one cart. Lines are keyed by product; adding a product
//! that is already present merges the quantities. The cached total always
//! equals the sum of `unit_price * quantity` over the lines.

use super::{CartId, Product, ProductId, ShopId, UserId};

/// One product line in a cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub product_id: ProductId,
    pub shop_id: ShopId,
    pub product_name: String,
    pub unit_price: f64,
    pub weight: f64,
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub id: CartId,
    pub user_id: UserId,
    items: Vec<CartItem>,
    total_amount: f64,
}

impl Cart {
    /// Empty cart for `user_id`.
    pub fn new(user_id: UserId) -> Self {
        Self {
            id: CartId::random(),
            user_id,
            items: Vec::new(),
            total_amount: 0.0,
        }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn total_amount(&self) -> f64 {
        self.total_amount
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add `quantity` units of `product`, merging with an existing line.
    ///
    /// The line's product snapshot is refreshed from `product`.
    pub fn add(&mut self, product: &Product, quantity: u32) {
        match self.items.iter_mut().find(|item| item.product_id == product.id) {
            Some(item) => {
                item.quantity = item.quantity.saturating_add(quantity);
                item.product_name.clone_from(&product.name);
                item.unit_price = product.price;
                item.weight = product.weight;
            }
            None => self.items.push(CartItem {
                product_id: product.id,
                shop_id: product.shop_id,
                product_name: product.name.clone(),
                unit_price: product.price,
                weight: product.weight,
                quantity,
            }),
        }
        self.recompute_total();
    }

    /// Remove the line for `product_id`, returning it when present.
    pub fn remove(&mut self, product_id: &ProductId) -> Option<CartItem> {
        let index = self
            .items
            .iter()
            .position(|item| &item.product_id == product_id)?;
        let removed = self.items.remove(index);
        self.recompute_total();
        Some(removed)
    }

    /// Split off every line whose product is in `product_ids`.
    pub fn take_selected(&mut self, product_ids: &[ProductId]) -> Vec<CartItem> {
        let (selected, remaining): (Vec<_>, Vec<_>) = std::mem::take(&mut self.items)
            .into_iter()
            .partition(|item| product_ids.contains(&item.product_id));
        self.items = remaining;
        self.recompute_total();
        selected
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.total_amount = 0.0;
    }

    fn recompute_total(&mut self) {
        self.total_amount = self.items.iter().map(CartItem::line_total).sum();
    }
}
