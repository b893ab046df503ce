//! Checkout and status-transition behaviour.

use super::*;
use crate::domain::ports::{MockCartRepository, MockOrderRepository, MockUserRepository};
use crate::domain::{
    Address, Authentication, Cart, Category, Product, ProductDraft, ShipmentStatus,
};
use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use rstest::{fixture, rstest};

struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

fn checkout_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 10, 9, 30, 0)
        .single()
        .expect("valid time")
}

fn product(shop_id: ShopId, name: &str, price: f64) -> Product {
    Product::new(
        shop_id,
        ProductDraft {
            name: name.into(),
            price,
            weight: 250.0,
            brand: None,
            description: None,
            category_names: Vec::new(),
        },
        vec![Category::new("misc")],
    )
}

fn address() -> Address {
    Address {
        phone: "0912345678".into(),
        name: "Alice".into(),
        address_detail: "1 Dai Co Viet".into(),
        ward_code: "00004".into(),
    }
}

fn alice_ctx() -> SecurityContext {
    SecurityContext::new(Authentication::authenticated("alice", ["ROLE_USER"]))
}

struct Harness {
    orders: MockOrderRepository,
    carts: MockCartRepository,
    users: MockUserRepository,
    buyer: User,
}

impl Harness {
    fn service(self) -> OrderService {
        OrderService::new(
            Arc::new(self.orders),
            Arc::new(self.carts),
            Arc::new(self.users),
            Arc::new(FixtureClock {
                utc_now: checkout_time(),
            }),
        )
    }

    fn with_buyer(buyer: User) -> Self {
        let found = buyer.clone();
        let by_id = buyer.clone();
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .returning(move |_| Ok(Some(found.clone())));
        users
            .expect_find_by_id()
            .returning(move |_| Ok(Some(by_id.clone())));
        Self {
            orders: MockOrderRepository::new(),
            carts: MockCartRepository::new(),
            users,
            buyer,
        }
    }
}

#[fixture]
fn harness() -> Harness {
    Harness::with_buyer(User::new("alice", checkout_time()).with_address(address()))
}

#[rstest]
#[tokio::test]
async fn checkout_splits_orders_per_shop(mut harness: Harness) {
    let (shop_a, shop_b) = (ShopId::random(), ShopId::random());
    let pen = product(shop_a, "pen", 5_000.0);
    let ink = product(shop_a, "ink", 20_000.0);
    let lamp = product(shop_b, "lamp", 300_000.0);
    let kept = product(shop_b, "desk", 1_500_000.0);
    let selected = vec![pen.id, ink.id, lamp.id];
    let kept_id = kept.id;

    let mut cart = Cart::new(harness.buyer.id);
    cart.add(&pen, 2);
    cart.add(&ink, 1);
    cart.add(&lamp, 1);
    cart.add(&kept, 1);
    harness
        .carts
        .expect_find_by_user()
        .return_once(move |_| Ok(Some(cart)));
    harness
        .carts
        .expect_save()
        .withf(move |cart| cart.items().len() == 1 && cart.items()[0].product_id == kept_id)
        .times(1)
        .returning(|_| Ok(()));
    harness.orders.expect_save().times(2).returning(|_| Ok(()));

    let orders = harness
        .service()
        .checkout(&alice_ctx(), &selected)
        .await
        .expect("checkout succeeds");

    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].shop_id, shop_a);
    assert!((orders[0].total_amount - (30_000.0 + FLAT_SHIPPING_FEE)).abs() < f64::EPSILON);
    assert_eq!(orders[1].shop_id, shop_b);
    assert!((orders[1].total_amount - (300_000.0 + FLAT_SHIPPING_FEE)).abs() < f64::EPSILON);
    for order in &orders {
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.created_at, checkout_time());
        assert_eq!(order.shipment.status, ShipmentStatus::Preparing);
        assert_eq!(
            order.shipment.estimated_delivery,
            NaiveDate::from_ymd_opt(2025, 3, 13).expect("valid date")
        );
    }
}

#[rstest]
#[tokio::test]
async fn checkout_requires_address() {
    let harness = Harness::with_buyer(User::new("alice", checkout_time()));
    let err = harness
        .service()
        .checkout(&alice_ctx(), &[ProductId::random()])
        .await
        .expect_err("no address");
    assert_eq!(err.code(), ErrorCode::AddressNotFound);
}

#[rstest]
#[tokio::test]
async fn checkout_rejects_empty_cart(mut harness: Harness) {
    let buyer_id = harness.buyer.id;
    harness
        .carts
        .expect_find_by_user()
        .returning(move |_| Ok(Some(Cart::new(buyer_id))));
    let err = harness
        .service()
        .checkout(&alice_ctx(), &[ProductId::random()])
        .await
        .expect_err("empty cart");
    assert_eq!(err.code(), ErrorCode::CartEmpty);
}

#[rstest]
#[tokio::test]
async fn checkout_without_selected_lines_leaves_cart_untouched(mut harness: Harness) {
    let buyer_id = harness.buyer.id;
    harness.carts.expect_find_by_user().returning(move |_| {
        let mut cart = Cart::new(buyer_id);
        cart.add(&product(ShopId::random(), "pen", 5_000.0), 1);
        Ok(Some(cart))
    });
    harness.carts.expect_save().never();
    harness.orders.expect_save().never();

    let err = harness
        .service()
        .checkout(&alice_ctx(), &[ProductId::random()])
        .await
        .expect_err("nothing selected");
    assert_eq!(err.code(), ErrorCode::CartItemNotExist);
}

#[rstest]
#[tokio::test]
async fn checkout_reports_missing_user_record() {
    let mut users = MockUserRepository::new();
    users.expect_find_by_username().returning(|_| Ok(None));
    let service = OrderService::new(
        Arc::new(MockOrderRepository::new()),
        Arc::new(MockCartRepository::new()),
        Arc::new(users),
        Arc::new(FixtureClock {
            utc_now: checkout_time(),
        }),
    );
    let err = service
        .checkout(&alice_ctx(), &[])
        .await
        .expect_err("no user record");
    assert_eq!(err.code(), ErrorCode::UserNotExist);
}

fn placed_order(buyer: &User) -> Order {
    let mut cart = Cart::new(buyer.id);
    let pen = product(ShopId::random(), "pen", 5_000.0);
    cart.add(&pen, 1);
    let lines = cart.take_selected(&[pen.id]);
    Order::place(buyer.id, ShopId::random(), lines, FLAT_SHIPPING_FEE, checkout_time())
}

#[rstest]
#[tokio::test]
async fn buyer_may_cancel_and_shipment_follows(mut harness: Harness) {
    let order = placed_order(&harness.buyer);
    let id = order.id;
    harness
        .orders
        .expect_find_by_id()
        .return_once(move |_| Ok(Some(order)));
    harness.orders.expect_save().times(1).returning(|_| Ok(()));

    let updated = harness
        .service()
        .update_status(&alice_ctx(), &id, OrderStatus::Cancelled)
        .await
        .expect("cancelled");
    assert_eq!(updated.status, OrderStatus::Cancelled);
    assert_eq!(updated.shipment.status, ShipmentStatus::Cancelled);
}

#[rstest]
#[tokio::test]
async fn any_authenticated_caller_may_set_any_status(mut harness: Harness) {
    let order = placed_order(&harness.buyer);
    let id = order.id;
    harness
        .orders
        .expect_find_by_id()
        .return_once(move |_| Ok(Some(order)));
    harness
        .orders
        .expect_save()
        .withf(|order| order.status == OrderStatus::Delivered)
        .times(1)
        .returning(|_| Ok(()));
    let courier = SecurityContext::new(Authentication::authenticated("courier", ["ROLE_USER"]));

    let updated = harness
        .service()
        .update_status(&courier, &id, OrderStatus::Delivered)
        .await
        .expect("status updated");
    assert_eq!(updated.status, OrderStatus::Delivered);
    assert_eq!(updated.shipment.status, ShipmentStatus::Preparing);
}

#[rstest]
#[tokio::test]
async fn anonymous_callers_cannot_change_status(mut harness: Harness) {
    harness.orders.expect_find_by_id().never();
    let err = harness
        .service()
        .update_status(&SecurityContext::anonymous(), &OrderId::random(), OrderStatus::Paid)
        .await
        .expect_err("anonymous caller");
    assert_eq!(err.code(), ErrorCode::Unauthorized);
}

#[rstest]
#[tokio::test]
async fn get_reports_missing_order(mut harness: Harness) {
    harness.orders.expect_find_by_id().returning(|_| Ok(None));
    let err = harness
        .service()
        .get(&alice_ctx(), &OrderId::random())
        .await
        .expect_err("missing order");
    assert_eq!(err.code(), ErrorCode::OrderNotExist);
}

#[rstest]
#[tokio::test]
async fn orders_are_listed_for_any_authenticated_caller(mut harness: Harness) {
    let order = placed_order(&harness.buyer);
    let buyer_id = harness.buyer.id;
    harness
        .orders
        .expect_list_by_user()
        .withf(move |user| *user == buyer_id)
        .return_once(move |_| Ok(vec![order]));
    let bob = SecurityContext::new(Authentication::authenticated("bob", ["ROLE_USER"]));

    let orders = harness
        .service()
        .list_by_user(&bob, &buyer_id)
        .await
        .expect("orders listed");
    assert_eq!(orders.len(), 1);
}

#[rstest]
#[tokio::test]
async fn listing_orders_requires_an_identity(harness: Harness) {
    let buyer_id = harness.buyer.id;
    let err = harness
        .service()
        .list_by_user(&SecurityContext::anonymous(), &buyer_id)
        .await
        .expect_err("anonymous caller");
    assert_eq!(err.code(), ErrorCode::Unauthorized);
}
