//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain services and remain testable without I/O.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::ports::{
    CartRepository, CategoryRepository, OrderRepository, PaymentRepository, ProductRepository,
    ShopRepository, UserRepository,
};
use crate::domain::{
    CartService, CategoryService, OrderService, PaymentService, ProductService, ShopService,
    UserService,
};

/// Parameter object bundling all driven-port implementations.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub users: Arc<dyn UserRepository>,
    pub shops: Arc<dyn ShopRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub products: Arc<dyn ProductRepository>,
    pub carts: Arc<dyn CartRepository>,
    pub orders: Arc<dyn OrderRepository>,
    pub payments: Arc<dyn PaymentRepository>,
    pub clock: Arc<dyn Clock>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: UserService,
    pub shops: ShopService,
    pub categories: CategoryService,
    pub products: ProductService,
    pub carts: CartService,
    pub orders: OrderService,
    pub payments: PaymentService,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Wire every domain service over the supplied ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use mockable::DefaultClock;
    /// use storefront::inbound::http::state::{HttpState, HttpStatePorts};
    /// use storefront::outbound::memory::MemoryStore;
    ///
    /// let store = Arc::new(MemoryStore::default());
    /// let state = HttpState::new(HttpStatePorts {
    ///     users: store.clone(),
    ///     shops: store.clone(),
    ///     categories: store.clone(),
    ///     products: store.clone(),
    ///     carts: store.clone(),
    ///     orders: store.clone(),
    ///     payments: store,
    ///     clock: Arc::new(DefaultClock),
    /// });
    /// let _orders = state.orders.clone();
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            users,
            shops,
            categories,
            products,
            carts,
            orders,
            payments,
            clock,
        } = ports;
        let category_service = CategoryService::new(categories, products.clone());
        let order_service = OrderService::new(orders, carts.clone(), users.clone(), clock.clone());
        Self {
            users: UserService::new(users.clone(), clock.clone()),
            shops: ShopService::new(shops.clone(), users.clone()),
            products: ProductService::new(products.clone(), shops, category_service.clone()),
            categories: category_service,
            carts: CartService::new(carts, users, products),
            payments: PaymentService::new(payments, order_service.clone(), clock),
            orders: order_service,
        }
    }
}
