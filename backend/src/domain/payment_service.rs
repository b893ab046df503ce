//! Cash-on-delivery payments.

use std::sync::Arc;

use mockable::Clock;
use tracing::info;

use crate::domain::ports::PaymentRepository;
use crate::domain::{
    Error, ErrorCode, OrderId, OrderService, OrderStatus, Payment, PaymentStatus,
    SecurityContext,
};

pub const COD_CREATED_MESSAGE: &str = "Cash on delivery";
pub const COD_CONFIRMED_MESSAGE: &str = "Cash on delivery payment confirmed";
pub const PAYMENT_EXISTS_MESSAGE: &str = "Payment already exists";

/// A payment together with the note shown to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentOutcome {
    pub payment: Payment,
    pub message: &'static str,
}

#[derive(Clone)]
pub struct PaymentService {
    payments: Arc<dyn PaymentRepository>,
    orders: OrderService,
    clock: Arc<dyn Clock>,
}

impl PaymentService {
    pub fn new(
        payments: Arc<dyn PaymentRepository>,
        orders: OrderService,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            payments,
            orders,
            clock,
        }
    }

    /// Record a pending cash-on-delivery payment. The order status is left
    /// unchanged.
    ///
    /// # Errors
    /// - [`ErrorCode::OrderNotExist`] when the order is unknown.
    /// - [`ErrorCode::PaymentFailed`] when the order already has a payment.
    pub async fn create_cod(
        &self,
        ctx: &SecurityContext,
        order_id: &OrderId,
    ) -> Result<PaymentOutcome, Error> {
        ctx.current_identity()?;
        let order = self.orders.find(order_id).await?;
        if self.payments.find_by_order(&order.id).await?.is_some() {
            return Err(Error::with_message(
                ErrorCode::PaymentFailed,
                PAYMENT_EXISTS_MESSAGE,
            ));
        }
        let payment = Payment::cash_on_delivery(&order, self.clock.utc());
        self.payments.save(&payment).await?;
        info!(
            order_id = %order.id,
            transaction_id = %payment.transaction_id,
            "cod payment recorded"
        );
        Ok(PaymentOutcome {
            payment,
            message: COD_CREATED_MESSAGE,
        })
    }

    /// Confirm collection of a cash-on-delivery payment and mark the order
    /// paid. Admin only.
    ///
    /// # Errors
    /// - [`ErrorCode::OrderNotExist`] when the order is unknown.
    /// - [`ErrorCode::PaymentFailed`] with "Payment not found" when no
    ///   payment was recorded for the order.
    pub async fn confirm_cod(
        &self,
        ctx: &SecurityContext,
        order_id: &OrderId,
    ) -> Result<PaymentOutcome, Error> {
        ctx.require_admin()?;
        let mut order = self.orders.find(order_id).await?;
        let mut payment = self
            .payments
            .find_by_order(&order.id)
            .await?
            .ok_or_else(|| Error::with_message(ErrorCode::PaymentFailed, "Payment not found"))?;

        payment.status = PaymentStatus::Success;
        payment.payment_date = self.clock.utc();
        self.payments.save(&payment).await?;
        order.transition(OrderStatus::Paid);
        self.orders.save(&order).await?;
        info!(order_id = %order.id, "cod payment confirmed");
        Ok(PaymentOutcome {
            payment,
            message: COD_CONFIRMED_MESSAGE,
        })
    }
}
