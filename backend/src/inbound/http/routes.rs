//! Route table for the storefront API.
//!
//! Routes are registered as resources so that a known path requested with the
//! wrong method answers 405 instead of falling through to the default
//! service. Fixed segments (`/users/myInfo`, `/categories/id/{id}`) are
//! registered before the parameterised paths they would otherwise collide
//! with.

use actix_web::web;

use crate::inbound::http::error::{json_error_handler, path_error_handler, query_error_handler};
use crate::inbound::http::{cart, categories, orders, payments, products, shops, users};

/// Register extractor error handlers and every API resource.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use storefront::inbound::http::routes::configure_api;
///
/// let app = App::new().configure(configure_api);
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler));

    cfg.service(
        web::resource("/users")
            .route(web::get().to(users::list_users))
            .route(web::post().to(users::create_user)),
    );
    cfg.service(
        web::resource("/users/myInfo")
            .route(web::get().to(users::my_info)),
    );
    cfg.service(
        web::resource("/users/{userId}")
            .route(web::get().to(users::get_user))
            .route(web::put().to(users::update_user))
            .route(web::delete().to(users::delete_user)),
    );

    cfg.service(
        web::resource("/shops")
            .route(web::get().to(shops::list_shops))
            .route(web::post().to(shops::create_shop)),
    );
    cfg.service(
        web::resource("/shops/owner/{username}")
            .route(web::get().to(shops::list_shops_by_owner)),
    );
    cfg.service(
        web::resource("/shops/{shopId}")
            .route(web::get().to(shops::get_shop)),
    );

    cfg.service(
        web::resource("/categories")
            .route(web::get().to(categories::list_categories))
            .route(web::post().to(categories::create_category)),
    );
    cfg.service(
        web::resource("/categories/id/{id}")
            .route(web::get().to(categories::get_category)),
    );
    cfg.service(
        web::resource("/categories/search/{keyword}")
            .route(web::get().to(categories::search_categories)),
    );
    cfg.service(
        web::resource("/categories/{name}")
            .route(web::delete().to(categories::delete_category)),
    );

    cfg.service(
        web::resource("/products")
            .route(web::post().to(products::create_product)),
    );
    cfg.service(
        web::resource("/products/shop/{shopId}")
            .route(web::get().to(products::list_products_by_shop)),
    );
    cfg.service(
        web::resource("/products/category/{name}")
            .route(web::get().to(products::list_products_by_category)),
    );
    cfg.service(
        web::resource("/products/brand/{brand}")
            .route(web::get().to(products::list_products_by_brand)),
    );
    cfg.service(
        web::resource("/products/search/{keyword}")
            .route(web::get().to(products::search_products)),
    );
    cfg.service(
        web::resource("/products/{id}")
            .route(web::get().to(products::get_product))
            .route(web::put().to(products::update_product))
            .route(web::delete().to(products::delete_product)),
    );

    cfg.service(
        web::resource("/cart/add/{userId}")
            .route(web::post().to(cart::add_to_cart)),
    );
    cfg.service(
        web::resource("/cart/remove/{userId}/{productId}")
            .route(web::delete().to(cart::remove_from_cart)),
    );
    cfg.service(
        web::resource("/cart/clear/{userId}")
            .route(web::delete().to(cart::clear_cart)),
    );
    cfg.service(
        web::resource("/cart/{userId}")
            .route(web::get().to(cart::get_cart)),
    );

    cfg.service(
        web::resource("/orders/checkout/selected")
            .route(web::post().to(orders::checkout_selected)),
    );
    cfg.service(
        web::resource("/orders/user/{userId}")
            .route(web::get().to(orders::list_orders_by_user)),
    );
    cfg.service(
        web::resource("/orders/{orderId}/status")
            .route(web::patch().to(orders::update_order_status)),
    );
    cfg.service(
        web::resource("/orders/{orderId}")
            .route(web::get().to(orders::get_order)),
    );

    cfg.service(
        web::resource("/payments/cod/confirm/{orderId}")
            .route(web::post().to(payments::confirm_cod_payment)),
    );
    cfg.service(
        web::resource("/payments/cod/{orderId}")
            .route(web::post().to(payments::create_cod_payment)),
    );
}
