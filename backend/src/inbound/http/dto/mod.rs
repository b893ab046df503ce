//! Response projections of domain entities.
//!
//! DTOs are flat, camelCase, omit absent optional fields, and are built per
//! request from domain values. Request bodies live next to the handlers that
//! accept them.

mod cart;
mod catalogue;
mod order;
mod payment;
mod shop;
mod user;

pub use cart::{CartItemResponse, CartResponse};
pub use catalogue::{CategoryResponse, ProductImageResponse, ProductResponse};
pub use order::{OrderItemResponse, OrderResponse};
pub use payment::PaymentResponse;
pub use shop::ShopResponse;
pub use user::{AddressDto, UserResponse};
