//! HTTP inbound adapter exposing the storefront REST endpoints.
//!
//! Handlers translate requests into domain service calls and wrap results in
//! the [`envelope::ApiResponse`]. Failures surface as domain errors and are
//! rendered by the translator in [`error`].

pub mod cart;
pub mod categories;
pub mod dto;
pub mod envelope;
pub mod error;
pub mod health;
pub mod identity;
pub mod orders;
pub mod payments;
pub mod products;
pub mod routes;
pub mod schemas;
pub mod shops;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

pub use error::ApiResult;
