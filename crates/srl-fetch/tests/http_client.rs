//! Tests for the HTTP client's status mapping against a local server.

use axum::Router;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use serde_json::json;
use srl_fetch::{AggregatingFetcher, ApiConfig, HttpStudentApi, RetryPolicy, StudentApi};
use srl_model::{Category, CategoryResult, FetchError, StudentId};
use tokio::net::TcpListener;

async fn serve() -> String {
    let router = Router::new()
        .route(
            "/api/payments/students/{id}",
            get(|| async { axum::Json(json!({"id": 123, "name": "Asha"})) }),
        )
        .route(
            "/api/payments/students/{id}/payment",
            get(|| async { axum::Json(json!({"amount": 500})) }),
        )
        .route(
            "/api/payments/students/{id}/payment-history",
            get(|| async { axum::Json(json!([])) }),
        )
        .route(
            "/api/payments/students/{id}/transport",
            get(|| async { axum::Json(serde_json::Value::Null) }),
        )
        .route(
            "/api/payments/students/{id}/books",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "database unavailable") }),
        )
        .route(
            "/api/payments/students/{id}/cards",
            get(|| async { StatusCode::BAD_GATEWAY.into_response() }),
        )
        .route(
            "/api/payments/students/{id}/concessions",
            get(|| async { "not json" }),
        );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn client(base_url: &str) -> HttpStudentApi {
    HttpStudentApi::new(&ApiConfig::new(base_url).unwrap()).unwrap()
}

#[tokio::test]
async fn success_bodies_decode() {
    let base = serve().await;
    let api = client(&base);

    let all = api
        .get_json(&format!("{base}/api/payments/students/123"))
        .await
        .unwrap();
    assert_eq!(all["name"], "Asha");

    let history = api
        .get_json(&format!("{base}/api/payments/students/123/payment-history"))
        .await
        .unwrap();
    assert_eq!(history, json!([]));
}

#[tokio::test]
async fn missing_route_is_not_found() {
    let base = serve().await;
    let err = client(&base)
        .get_json(&format!("{base}/api/payments/students/123/grades"))
        .await
        .unwrap_err();
    assert_eq!(err, FetchError::NotFound);
}

#[tokio::test]
async fn server_error_carries_status_and_body() {
    let base = serve().await;
    let err = client(&base)
        .get_json(&format!("{base}/api/payments/students/123/books"))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        FetchError::Http {
            status: 500,
            message: "database unavailable".to_string()
        }
    );
}

#[tokio::test]
async fn empty_error_body_uses_reason_phrase() {
    let base = serve().await;
    let err = client(&base)
        .get_json(&format!("{base}/api/payments/students/123/cards"))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        FetchError::Http {
            status: 502,
            message: "Bad Gateway".to_string()
        }
    );
}

#[tokio::test]
async fn invalid_json_is_decode_error() {
    let base = serve().await;
    let err = client(&base)
        .get_json(&format!("{base}/api/payments/students/123/concessions"))
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn unreachable_server_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(&format!("http://{addr}"))
        .get_json(&format!("http://{addr}/api/payments/students/1"))
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn fetcher_normalizes_http_responses() {
    let base = serve().await;
    let config = ApiConfig::new(&base)
        .unwrap()
        .with_retry(RetryPolicy::immediate(1));
    let fetcher = AggregatingFetcher::new(HttpStudentApi::new(&config).unwrap(), &config);
    let id = StudentId::new(123).unwrap();

    let payment = fetcher.fetch_category(id, Category::Payment).await;
    assert_eq!(payment, CategoryResult::Success(json!({"amount": 500})));

    let history = fetcher.fetch_category(id, Category::PaymentHistory).await;
    assert!(history.is_success());
    assert!(history.is_empty());

    let transport = fetcher.fetch_category(id, Category::Transport).await;
    assert_eq!(transport, CategoryResult::NotFound);

    let fees = fetcher.fetch_category(id, Category::FeeDetails).await;
    assert_eq!(fees, CategoryResult::NotFound);

    let books = fetcher.fetch_category(id, Category::Books).await;
    assert!(matches!(books, CategoryResult::Failed { attempts: 2, .. }));
}
