//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every storefront endpoint, the response DTOs, the
//! failure envelope and the bearer authentication scheme. The document backs
//! Swagger UI in debug builds and the `openapi-dump` binary.

use crate::inbound::http::cart::AddToCartRequest;
use crate::inbound::http::categories::CreateCategoryRequest;
use crate::inbound::http::dto::{
    AddressDto, CartItemResponse, CartResponse, CategoryResponse, OrderItemResponse, OrderResponse,
    PaymentResponse, ProductImageResponse, ProductResponse, ShopResponse, UserResponse,
};
use crate::inbound::http::orders::{CheckoutRequest, UpdateStatusRequest};
use crate::inbound::http::products::ProductRequest;
use crate::inbound::http::schemas::ErrorEnvelopeSchema;
use crate::inbound::http::shops::CreateShopRequest;
use crate::inbound::http::users::{CreateUserRequest, UpdateUserRequest};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Name of the bearer security scheme.
pub const BEARER_SCHEME: &str = "BearerToken";

/// Enrich the generated document with the bearer token security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            BEARER_SCHEME,
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .description(Some(
                        "Token issued by the authentication service. Requests without one run anonymously.",
                    ))
                    .build(),
            ),
        );
    }
}

/// OpenAPI document for the storefront API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Storefront API",
        description = "Shops, catalogue, carts, orders and cash-on-delivery payments. Every body is wrapped in the response envelope."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("BearerToken" = [])),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::my_info,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::shops::create_shop,
        crate::inbound::http::shops::list_shops,
        crate::inbound::http::shops::get_shop,
        crate::inbound::http::shops::list_shops_by_owner,
        crate::inbound::http::categories::create_category,
        crate::inbound::http::categories::list_categories,
        crate::inbound::http::categories::get_category,
        crate::inbound::http::categories::search_categories,
        crate::inbound::http::categories::delete_category,
        crate::inbound::http::products::create_product,
        crate::inbound::http::products::get_product,
        crate::inbound::http::products::update_product,
        crate::inbound::http::products::delete_product,
        crate::inbound::http::products::list_products_by_shop,
        crate::inbound::http::products::list_products_by_category,
        crate::inbound::http::products::list_products_by_brand,
        crate::inbound::http::products::search_products,
        crate::inbound::http::cart::add_to_cart,
        crate::inbound::http::cart::remove_from_cart,
        crate::inbound::http::cart::clear_cart,
        crate::inbound::http::cart::get_cart,
        crate::inbound::http::orders::checkout_selected,
        crate::inbound::http::orders::list_orders_by_user,
        crate::inbound::http::orders::get_order,
        crate::inbound::http::orders::update_order_status,
        crate::inbound::http::payments::create_cod_payment,
        crate::inbound::http::payments::confirm_cod_payment,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorEnvelopeSchema,
        AddressDto,
        UserResponse,
        ShopResponse,
        CategoryResponse,
        ProductImageResponse,
        ProductResponse,
        CartItemResponse,
        CartResponse,
        OrderItemResponse,
        OrderResponse,
        PaymentResponse,
        CreateUserRequest,
        UpdateUserRequest,
        CreateShopRequest,
        CreateCategoryRequest,
        ProductRequest,
        AddToCartRequest,
        CheckoutRequest,
        UpdateStatusRequest,
    )),
    tags(
        (name = "users", description = "User administration and profiles"),
        (name = "shops", description = "Shop registration and lookup"),
        (name = "categories", description = "Product categories"),
        (name = "products", description = "Product catalogue"),
        (name = "cart", description = "Shopping carts"),
        (name = "orders", description = "Checkout and order lifecycle"),
        (name = "payments", description = "Cash-on-delivery payments"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
