//! Tests for HTTP error mapping.

use super::*;
use crate::middleware::Trace;
use actix_web::body::to_bytes;
use actix_web::middleware::ErrorHandlers;
use actix_web::{App, test as actix_test, web};
use rstest::rstest;
use serde_json::Value;

async fn envelope_of(response: HttpResponse) -> Value {
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    serde_json::from_slice(&bytes).expect("envelope JSON")
}

#[rstest]
fn every_catalog_entry_has_a_status() {
    for code in ErrorCode::ALL {
        let status = status_for(code);
        assert!(status.is_client_error() || status.is_server_error(), "{code:?}");
    }
}

#[rstest]
#[case(ErrorCode::ShopNotExist, StatusCode::NOT_FOUND)]
#[case(ErrorCode::UserNotExist, StatusCode::NOT_FOUND)]
#[case(ErrorCode::Unauthorized, StatusCode::FORBIDDEN)]
#[case(ErrorCode::Unauthenticated, StatusCode::UNAUTHORIZED)]
#[case(ErrorCode::MethodNotAllowed, StatusCode::METHOD_NOT_ALLOWED)]
#[case(ErrorCode::OrderNotExist, StatusCode::BAD_REQUEST)]
#[case(ErrorCode::UncategorizedException, StatusCode::INTERNAL_SERVER_ERROR)]
#[actix_web::test]
async fn typed_errors_keep_catalog_code_and_status(
    #[case] code: ErrorCode,
    #[case] status: StatusCode,
) {
    let response = Error::new(code).error_response();
    assert_eq!(response.status(), status);

    let body = envelope_of(response).await;
    assert_eq!(body["code"], code.code());
    assert_eq!(body["message"], code.message());
    assert!(body.get("result").is_none());
}

#[rstest]
#[actix_web::test]
async fn override_message_wins_over_default() {
    let response =
        Error::with_message(ErrorCode::PaymentFailed, "Payment not found").error_response();
    let body = envelope_of(response).await;
    assert_eq!(body["code"], 2000);
    assert_eq!(body["message"], "Payment not found");
}

#[rstest]
#[actix_web::test]
async fn validation_failures_join_every_violation() {
    let response = Error::validation(["name must not be blank", "price must not be negative"])
        .error_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = envelope_of(response).await;
    assert_eq!(body["code"], 1000);
    assert_eq!(
        body["message"],
        "name must not be blank; price must not be negative"
    );
}

#[rstest]
#[actix_web::test]
async fn internal_faults_are_redacted() {
    let response = Error::internal("connection refused: 10.0.0.4:5432").error_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = envelope_of(response).await;
    assert_eq!(body["code"], 9999);
    assert_eq!(body["message"], "Uncategorized Exception");
}

#[rstest]
fn framework_errors_downgrade_to_uncategorized() {
    let err: Error = actix_web::error::ErrorBadGateway("upstream").into();
    assert_eq!(err.code(), ErrorCode::UncategorizedException);
    assert_eq!(err.message(), "Uncategorized Exception");
}

#[derive(serde::Deserialize)]
struct Body {
    #[expect(dead_code, reason = "only deserialisation is exercised")]
    name: String,
}

async fn echo(_body: web::Json<Body>, _id: web::Path<u32>) -> HttpResponse {
    HttpResponse::Ok().finish()
}

async fn send(request: actix_test::TestRequest) -> (StatusCode, Value) {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::PathConfig::default().error_handler(path_error_handler))
            .service(web::resource("/items/{id}").route(web::post().to(echo)))
            .default_service(web::to(unknown_route))
            .wrap(ErrorHandlers::new().handler(StatusCode::METHOD_NOT_ALLOWED, method_not_allowed))
            .wrap(Trace),
    )
    .await;
    let res = actix_test::call_service(&app, request.to_request()).await;
    let status = res.status();
    let body: Value = actix_test::read_body_json(res).await;
    (status, body)
}

#[rstest]
#[case::bad_json("/items/1", "{not json", 400, 1002)]
#[case::bad_path("/items/abc", r#"{"name":"x"}"#, 400, 1900)]
#[case::unknown_route("/nowhere", r#"{"name":"x"}"#, 500, 9999)]
#[actix_web::test]
async fn framework_failures_use_the_envelope(
    #[case] uri: &str,
    #[case] body: &str,
    #[case] status: u16,
    #[case] code: u16,
) {
    let request = actix_test::TestRequest::post()
        .uri(uri)
        .insert_header(("content-type", "application/json"))
        .set_payload(body.to_owned());
    let (actual, body) = send(request).await;
    assert_eq!(actual.as_u16(), status);
    assert_eq!(body["code"], code);
    assert_eq!(body["path"], uri);
}

#[rstest]
#[actix_web::test]
async fn wrong_method_reports_method_not_allowed() {
    let (status, body) = send(actix_test::TestRequest::get().uri("/items/1")).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["code"], 1001);
    assert_eq!(body["message"], "Method not allowed");
    assert_eq!(body["path"], "/items/1");
}
