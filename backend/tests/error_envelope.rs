//! Behavioural tests for the response envelope across success and failure.

#[path = "support/storefront.rs"]
mod support;

use actix_web::http::StatusCode;
use actix_web::test::TestRequest;
use chrono::{DateTime, Utc};
use rstest::rstest;
use support::Harness;

fn timestamp(body: &serde_json::Value) -> DateTime<Utc> {
    body["timestamp"]
        .as_str()
        .and_then(|raw| raw.parse().ok())
        .expect("RFC 3339 timestamp")
}

#[rstest]
#[actix_web::test]
async fn success_envelope_carries_code_result_and_request_path() {
    let shop = Harness::seeded().await;
    let before = Utc::now();
    let (status, trace_id, body) = shop
        .call(TestRequest::get().uri("/shops?page=1"), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(trace_id.is_some(), "every response carries a trace id");
    assert_eq!(body["code"], 1000);
    assert_eq!(body["path"], "/shops");
    assert!(body.get("message").is_none());
    assert!(body["result"].is_array());
    assert!(timestamp(&body) >= before);
}

#[rstest]
#[case::unknown_shop(
    "/shops/3fa85f64-5717-4562-b3fc-2c963f66afa6",
    404,
    1300,
    "Shop does not exist"
)]
#[case::unknown_product(
    "/products/3fa85f64-5717-4562-b3fc-2c963f66afa6",
    400,
    1500,
    "Product does not exist"
)]
#[case::unknown_category(
    "/categories/id/3fa85f64-5717-4562-b3fc-2c963f66afa6",
    400,
    1401,
    "Category does not exist"
)]
#[case::unknown_route("/basket", 500, 9999, "Uncategorized Exception")]
#[actix_web::test]
async fn failures_use_the_catalog(
    #[case] uri: &str,
    #[case] status: u16,
    #[case] code: u16,
    #[case] message: &str,
) {
    let shop = Harness::seeded().await;
    let (actual, body) = shop.send(TestRequest::get().uri(uri), None).await;
    assert_eq!(actual.as_u16(), status);
    assert_eq!(body["code"], code);
    assert_eq!(body["message"], message);
    assert_eq!(body["path"], uri);
    assert!(body.get("result").is_none());
}

#[rstest]
#[case::anonymous(None)]
#[case::unknown_token(Some("forged-token"))]
#[actix_web::test]
async fn callers_without_identity_are_refused(#[case] token: Option<&str>) {
    let shop = Harness::seeded().await;
    let (status, body) = shop.send(TestRequest::get().uri("/users/myInfo"), token).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], 1101);
}

#[rstest]
#[actix_web::test]
async fn health_checks_bypass_the_envelope() {
    let shop = Harness::seeded().await;
    let (status, _, body) = shop.call(TestRequest::get().uri("/health/ready"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_null());
}
