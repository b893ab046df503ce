//! Orders, their shipments and payments.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{CartItem, OrderId, PaymentId, ProductId, ShipmentId, ShopId, UserId};

/// Flat shipping fee applied to every order.
pub const FLAT_SHIPPING_FEE: f64 = 30_000.0;

/// Days between checkout and the estimated delivery date.
pub const DELIVERY_ESTIMATE_DAYS: u64 = 3;

/// Lifecycle state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    Pending,
    Paid,
    Shipping,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Paid => "PAID",
            Self::Shipping => "SHIPPING",
            Self::Delivered => "DELIVERED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error raised when parsing an unknown order status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown order status: {0}")]
pub struct UnknownOrderStatus(String);

impl FromStr for OrderStatus {
    type Err = UnknownOrderStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "PAID" => Ok(Self::Paid),
            "SHIPPING" => Ok(Self::Shipping),
            "DELIVERED" => Ok(Self::Delivered),
            "CANCELLED" => Ok(Self::Cancelled),
            other => Err(UnknownOrderStatus(other.to_owned())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipmentStatus {
    Preparing,
    Cancelled,
}

impl ShipmentStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Preparing => "PREPARING",
            Self::Cancelled => "CANCELLED",
        }
    }
}

/// Delivery record created alongside each order.
#[derive(Debug, Clone, PartialEq)]
pub struct Shipment {
    pub id: ShipmentId,
    pub shipping_fee: f64,
    pub estimated_delivery: NaiveDate,
    pub status: ShipmentStatus,
}

/// Product line frozen at checkout time.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: u32,
    pub price_at_purchase: f64,
}

impl From<CartItem> for OrderItem {
    fn from(item: CartItem) -> Self {
        Self {
            product_id: item.product_id,
            product_name: item.product_name,
            quantity: item.quantity,
            price_at_purchase: item.unit_price,
        }
    }
}

/// Order placed for the products of a single shop.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub shop_id: ShopId,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderItem>,
    /// Item subtotal plus the shipping fee.
    pub total_amount: f64,
    pub shipment: Shipment,
}

impl Order {
    /// Build a pending order for one shop's lines.
    pub fn place(
        user_id: UserId,
        shop_id: ShopId,
        lines: Vec<CartItem>,
        shipping_fee: f64,
        now: DateTime<Utc>,
    ) -> Self {
        let subtotal: f64 = lines.iter().map(CartItem::line_total).sum();
        let estimated_delivery = now
            .date_naive()
            .checked_add_days(chrono::Days::new(DELIVERY_ESTIMATE_DAYS))
            .unwrap_or(now.date_naive());
        Self {
            id: OrderId::random(),
            user_id,
            shop_id,
            status: OrderStatus::Pending,
            created_at: now,
            items: lines.into_iter().map(OrderItem::from).collect(),
            total_amount: subtotal + shipping_fee,
            shipment: Shipment {
                id: ShipmentId::random(),
                shipping_fee,
                estimated_delivery,
                status: ShipmentStatus::Preparing,
            },
        }
    }

    /// Move to `status`. Cancelling also cancels the shipment.
    pub fn transition(&mut self, status: OrderStatus) {
        self.status = status;
        if status == OrderStatus::Cancelled {
            self.shipment.status = ShipmentStatus::Cancelled;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    /// Cash on delivery.
    Cod,
}

impl PaymentMethod {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cod => "COD",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Pending,
    Success,
}

impl PaymentStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Success => "SUCCESS",
        }
    }
}

/// Payment recorded against an order.
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: PaymentId,
    pub order_id: OrderId,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    pub amount: f64,
    pub transaction_id: String,
    pub payment_date: DateTime<Utc>,
}

impl Payment {
    /// Pending cash-on-delivery payment for `order`.
    pub fn cash_on_delivery(order: &Order, now: DateTime<Utc>) -> Self {
        Self {
            id: PaymentId::random(),
            order_id: order.id,
            method: PaymentMethod::Cod,
            status: PaymentStatus::Pending,
            amount: order.total_amount,
            transaction_id: format!("COD_{}", order.id),
            payment_date: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::{fixture, rstest};

    #[fixture]
    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 12, 30, 10, 0, 0)
            .single()
            .expect("valid time")
    }

    fn line(price: f64, quantity: u32) -> CartItem {
        CartItem {
            product_id: ProductId::random(),
            shop_id: ShopId::random(),
            product_name: "lamp".into(),
            unit_price: price,
            weight: 500.0,
            quantity,
        }
    }

    #[rstest]
    fn place_adds_shipping_and_estimates_delivery(now: DateTime<Utc>) {
        let order = Order::place(
            UserId::random(),
            ShopId::random(),
            vec![line(100_000.0, 2), line(50_000.0, 1)],
            FLAT_SHIPPING_FEE,
            now,
        );

        assert_eq!(order.status, OrderStatus::Pending);
        assert!((order.total_amount - 280_000.0).abs() < f64::EPSILON);
        assert_eq!(order.shipment.status, ShipmentStatus::Preparing);
        assert_eq!(
            order.shipment.estimated_delivery,
            NaiveDate::from_ymd_opt(2025, 1, 2).expect("valid date")
        );
        assert_eq!(order.items[0].price_at_purchase, 100_000.0);
    }

    #[rstest]
    #[case(OrderStatus::Cancelled, ShipmentStatus::Cancelled)]
    #[case(OrderStatus::Paid, ShipmentStatus::Preparing)]
    fn transition_cascades_cancellation(
        now: DateTime<Utc>,
        #[case] status: OrderStatus,
        #[case] shipment: ShipmentStatus,
    ) {
        let lines = vec![line(1.0, 1)];
        let mut order = Order::place(UserId::random(), ShopId::random(), lines, 0.0, now);
        order.transition(status);
        assert_eq!(order.status, status);
        assert_eq!(order.shipment.status, shipment);
    }

    #[rstest]
    fn cod_payment_uses_order_scoped_transaction_id(now: DateTime<Utc>) {
        let order = Order::place(UserId::random(), ShopId::random(), vec![line(10.0, 1)], 0.0, now);
        let payment = Payment::cash_on_delivery(&order, now);
        assert_eq!(payment.transaction_id, format!("COD_{}", order.id));
        assert_eq!(payment.status, PaymentStatus::Pending);
        assert_eq!(payment.method.as_str(), "COD");
    }

    #[rstest]
    #[case("PENDING", Some(OrderStatus::Pending))]
    #[case("CANCELLED", Some(OrderStatus::Cancelled))]
    #[case("cancelled", None)]
    fn order_status_parses_upper_case(#[case] raw: &str, #[case] expected: Option<OrderStatus>) {
        assert_eq!(raw.parse::<OrderStatus>().ok(), expected);
    }
}
