//! Port abstraction for payment records.
use async_trait::async_trait;

use crate::domain::{OrderId, Payment};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by payment repository adapters.
    pub enum PaymentPersistenceError {
        Connection { message: String } => "payment repository connection failed: {message}",
        Query { message: String } => "payment repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Insert or replace the payment for `payment.order_id`.
    async fn save(&self, payment: &Payment) -> Result<(), PaymentPersistenceError>;

    async fn find_by_order(&self, order: &OrderId)
    -> Result<Option<Payment>, PaymentPersistenceError>;
}
