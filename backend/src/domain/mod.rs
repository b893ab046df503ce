//! Domain primitives, aggregates and services.
//!
//! Purpose: model the storefront (users, shops, catalogue, carts, orders and
//! payments) independently of HTTP and storage. Services receive the caller's
//! [`SecurityContext`] explicitly and report failures as [`Error`] values
//! carrying an [`ErrorCode`] catalog entry.
//!
//! Public surface:
//! - `Error` / `ErrorCode`: typed failures and the closed catalog.
//! - `SecurityContext` / `Authentication`: request-scoped identity.
//! - Entities: `User`, `Shop`, `Category`, `Product`, `Cart`, `Order`,
//!   `Payment` and their identifiers.
//! - Services: one per aggregate, built over driven ports in [`ports`].

pub mod cart;
pub mod cart_service;
pub mod category_service;
pub mod error;
pub mod ids;
pub mod order;
pub mod order_service;
pub mod payment_service;
pub mod ports;
pub mod product;
pub mod product_service;
pub mod security;
pub mod shop;
pub mod shop_service;
pub mod user;
pub mod user_service;

pub use self::cart::{Cart, CartItem};
pub use self::cart_service::{AddToCart, CartService};
pub use self::category_service::CategoryService;
pub use self::error::{Error, ErrorCode};
pub use self::ids::{
    CartId, CategoryId, IdParseError, OrderId, PaymentId, ProductId, ShipmentId, ShopId, UserId,
};
pub use self::order::{
    DELIVERY_ESTIMATE_DAYS, FLAT_SHIPPING_FEE, Order, OrderItem, OrderStatus, Payment,
    PaymentMethod, PaymentStatus, Shipment, ShipmentStatus, UnknownOrderStatus,
};
pub use self::order_service::OrderService;
pub use self::payment_service::{PaymentOutcome, PaymentService};
pub use self::product::{Category, Product, ProductDraft, ProductImage, normalize_name};
pub use self::product_service::ProductService;
pub use self::security::{Authentication, AuthenticationKind, SecurityContext};
pub use self::shop::Shop;
pub use self::shop_service::{NewShop, ShopService};
pub use self::user::{Address, User, is_campus_email};
pub use self::user_service::{NewUser, UserService, UserUpdate};
