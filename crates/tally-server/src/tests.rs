//! Server API tests

use super::*;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tally_core::auth::{DEMO_EMAIL, DEMO_PASSWORD, DEMO_USER_ID};
use tally_core::MemoryStore;
use tower::ServiceExt;

const DEMO_AUTH: &str = "Bearer demo-token-1";

fn setup_test_app() -> Router {
    setup_test_app_with_month(Some(6))
}

fn setup_test_app_with_month(month_override: Option<u32>) -> Router {
    let store = Arc::new(MemoryStore::with_demo_data().unwrap());
    let config = ServerConfig {
        month_override,
        ..Default::default()
    };
    create_router(store, None, config)
}

async fn get_body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body();
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str, auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(auth) = auth {
        builder = builder.header("authorization", auth);
    }
    builder.body(Body::empty()).unwrap()
}

fn post_json(uri: &str, auth: Option<&str>, body: serde_json::Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(auth) = auth {
        builder = builder.header("authorization", auth);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn post_raw(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn delete_req(uri: &str, auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("DELETE").uri(uri);
    if let Some(auth) = auth {
        builder = builder.header("authorization", auth);
    }
    builder.body(Body::empty()).unwrap()
}

fn expense(id: &str, amount: f64, category: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "type": "expense",
        "amount": amount,
        "category": category,
        "description": "",
        "date": "2024-06-03"
    })
}

fn income(id: &str, amount: f64) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "type": "income",
        "amount": amount,
        "category": "Salary",
        "description": "",
        "date": "2024-06-01"
    })
}

// ========== Auth API Tests ==========

#[tokio::test]
async fn test_login_demo_user() {
    let app = setup_test_app();

    let response = app
        .oneshot(post_json(
            "/api/auth/login",
            None,
            serde_json::json!({"email": DEMO_EMAIL, "password": DEMO_PASSWORD}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert!(json["token"].as_str().unwrap().starts_with("demo-token-"));
    assert_eq!(json["user"]["id"], DEMO_USER_ID);
    assert_eq!(json["user"]["annualIncome"], 75000.0);
    assert!(json["user"].get("password").is_none());
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    let app = setup_test_app();

    let response = app
        .oneshot(post_json(
            "/api/auth/login",
            None,
            serde_json::json!({"email": DEMO_EMAIL, "password": "wrong"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = get_body_json(response).await;
    assert_eq!(json["error"], "Invalid credentials");
}

#[tokio::test]
async fn test_signup_then_me() {
    let app = setup_test_app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/auth/signup",
            None,
            serde_json::json!({
                "email": "new@example.com",
                "password": "secret",
                "name": "New User",
                "age": 28,
                "annualIncome": 50000
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    let token = json["token"].as_str().unwrap().to_string();
    assert!(token.starts_with("token-"));
    assert!(json["user"]["id"].as_str().unwrap().starts_with("user-"));
    assert!(json["user"].get("password").is_none());

    let response = app
        .oneshot(get("/api/auth/me", Some(&format!("Bearer {}", token))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["email"], "new@example.com");
    assert_eq!(json["age"], 28);
}

#[tokio::test]
async fn test_signup_existing_email() {
    let app = setup_test_app();

    let response = app
        .oneshot(post_json(
            "/api/auth/signup",
            None,
            serde_json::json!({"email": DEMO_EMAIL, "password": "x", "name": "Copy"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = get_body_json(response).await;
    assert_eq!(json["error"], "User already exists");
}

#[tokio::test]
async fn test_signup_missing_fields() {
    let app = setup_test_app();

    let response = app
        .oneshot(post_json(
            "/api/auth/signup",
            None,
            serde_json::json!({"email": "someone@example.com"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_me_demo_token() {
    let app = setup_test_app();

    let response = app.oneshot(get("/api/auth/me", Some(DEMO_AUTH))).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["name"], "Demo User");
    assert_eq!(json["createdAt"], "2024-01-01T00:00:00Z");
}

#[tokio::test]
async fn test_me_errors() {
    let app = setup_test_app();

    let response = app.clone().oneshot(get("/api/auth/me", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(get_body_json(response).await["error"], "No token provided");

    let response = app
        .oneshot(get("/api/auth/me", Some("Bearer nonsense")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(get_body_json(response).await["error"], "Invalid token");
}

// ========== Transaction API Tests ==========

#[tokio::test]
async fn test_list_transactions_requires_auth() {
    let app = setup_test_app();

    let response = app.oneshot(get("/api/transactions", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = get_body_json(response).await;
    assert_eq!(json["error"], "Unauthorized");
}

#[tokio::test]
async fn test_list_transactions_newest_first() {
    let app = setup_test_app();

    let response = app
        .oneshot(get("/api/transactions", Some(DEMO_AUTH)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    let txs = json.as_array().unwrap();
    assert_eq!(txs.len(), 3);
    assert_eq!(txs[0]["date"], "2024-06-03");
    assert_eq!(txs[0]["type"], "expense");
    assert_eq!(txs[2]["category"], "Salary");
}

#[tokio::test]
async fn test_create_and_delete_transaction() {
    let app = setup_test_app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/transactions",
            Some(DEMO_AUTH),
            serde_json::json!({
                "type": "expense",
                "amount": 4.5,
                "category": "Food",
                "description": "Coffee"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let created = get_body_json(response).await;
    let id = created["id"].as_str().unwrap().to_string();
    assert!(id.starts_with("trans-"));
    assert_eq!(created["amount"], 4.5);
    assert!(created["date"].is_string());

    let response = app
        .clone()
        .oneshot(get("/api/transactions", Some(DEMO_AUTH)))
        .await
        .unwrap();
    assert_eq!(get_body_json(response).await.as_array().unwrap().len(), 4);

    let uri = format!("/api/transactions/{}", id);
    let response = app
        .clone()
        .oneshot(delete_req(&uri, Some(DEMO_AUTH)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(get_body_json(response).await["success"], true);

    let response = app
        .oneshot(delete_req(&uri, Some(DEMO_AUTH)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        get_body_json(response).await["error"],
        "Transaction not found"
    );
}

#[tokio::test]
async fn test_create_transaction_negative_amount() {
    let app = setup_test_app();

    let response = app
        .oneshot(post_json(
            "/api/transactions",
            Some(DEMO_AUTH),
            serde_json::json!({"type": "expense", "amount": -10, "category": "Food"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_transactions_are_per_user() {
    let app = setup_test_app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/auth/signup",
            None,
            serde_json::json!({"email": "b@example.com", "password": "pw", "name": "B"}),
        ))
        .await
        .unwrap();
    let token = get_body_json(response).await["token"]
        .as_str()
        .unwrap()
        .to_string();
    let auth = format!("Bearer {}", token);

    let response = app
        .clone()
        .oneshot(get("/api/transactions", Some(&auth)))
        .await
        .unwrap();
    assert!(get_body_json(response).await.as_array().unwrap().is_empty());

    // Another user's transaction looks missing
    let response = app
        .oneshot(delete_req("/api/transactions/demo-1", Some(&auth)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_user_token_rejected() {
    let app = setup_test_app();

    let response = app
        .oneshot(get("/api/transactions", Some("Bearer token-404")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ========== Analytics API Tests ==========

#[tokio::test]
async fn test_analytics_for_demo_user() {
    let app = setup_test_app();

    let response = app
        .oneshot(get("/api/analytics", Some(DEMO_AUTH)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["summary"]["totalIncome"], 5000.0);
    assert_eq!(json["summary"]["totalExpenses"], 1500.0);
    assert_eq!(json["summary"]["balance"], 3500.0);
    assert_eq!(json["categories"][0]["category"], "Bills");
    assert_eq!(json["monthly"][0]["label"], "Jun 2024");
    assert_eq!(json["categoryCount"], 2);
}

// ========== Optimizer API Tests ==========

#[tokio::test]
async fn test_optimize_budget() {
    let app = setup_test_app();

    let response = app
        .oneshot(post_json(
            "/api/optimize-budget",
            None,
            serde_json::json!({"transactions": [
                expense("3", 300.0, "Food"),
                expense("2", 1200.0, "Bills"),
                income("1", 5000.0)
            ]}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    let text = json["suggestions"].as_str().unwrap();
    assert!(text.starts_with("💡 AI-Powered Budget Optimization\n"));
    assert!(text.contains("🌟 Excellent! You're saving over 20% of income"));
    assert!(text.contains("💰 Your biggest expense: Bills (80.0% of spending)"));
    assert!(text.contains("🎉 You're saving $3500.00 this period!"));
    assert!(!text.contains("🎄 Holiday Season Tips:"));
    assert!(text.contains("📈 Next Steps:"));
}

#[tokio::test]
async fn test_optimize_budget_uses_configured_month() {
    let app = setup_test_app_with_month(Some(11));

    let response = app
        .oneshot(post_json(
            "/api/optimize-budget",
            None,
            serde_json::json!({"transactions": [expense("1", 300.0, "Food")]}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    let text = json["suggestions"].as_str().unwrap();
    assert!(text.contains("🚨 URGENT: You're spending more than you earn!"));
    assert!(text.contains("🍽️ Food Optimization Tips:"));
    assert!(text.contains("🎄 Holiday Season Tips:"));
}

#[tokio::test]
async fn test_optimize_budget_empty_list() {
    let app = setup_test_app();

    for body in [
        serde_json::json!({"transactions": []}),
        serde_json::json!({"transactions": null}),
        serde_json::json!({}),
    ] {
        let response = app
            .clone()
            .oneshot(post_json("/api/optimize-budget", None, body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = get_body_json(response).await;
        assert_eq!(json["error"], "No transactions provided");
    }
}

#[tokio::test]
async fn test_optimize_budget_malformed() {
    let app = setup_test_app();

    let response = app
        .clone()
        .oneshot(post_raw("/api/optimize-budget", "{not json"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        get_body_json(response).await["error"],
        "Failed to generate optimization suggestions"
    );

    let response = app
        .oneshot(post_json(
            "/api/optimize-budget",
            None,
            serde_json::json!({"transactions": [{"type": "expense", "amount": "lots"}]}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

// ========== Admin and Quote API Tests ==========

#[tokio::test]
async fn test_admin_stats() {
    let app = setup_test_app();

    let response = app.oneshot(get("/api/admin/stats", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["totalUsers"], 1247);
    assert_eq!(json["activeUsers"], 892);
    assert_eq!(json["userGrowth"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_quote_today() {
    let app = setup_test_app();

    let response = app.oneshot(get("/api/quotes/today", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    let quote = json["quote"].as_str().unwrap();
    assert!(tally_core::quotes::QUOTES.iter().any(|q| q.quote == quote));
}

// ========== Error Mapping and Headers ==========

#[test]
fn test_app_error_from_core() {
    let err = AppError::from_core(tally_core::Error::EmptyInput);
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert_eq!(err.message(), "No transactions provided");

    let err = AppError::from_core(tally_core::Error::Unauthorized("Invalid token".into()));
    assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(err.message(), "Invalid token");

    let err = AppError::from_core(tally_core::Error::Internal("lock poisoned".into()));
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err.message(), "An internal error occurred");
}

#[tokio::test]
async fn test_security_headers() {
    let app = setup_test_app();

    let response = app.oneshot(get("/api/admin/stats", None)).await.unwrap();

    let headers = response.headers();
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["x-frame-options"], "DENY");
    assert!(headers.contains_key("content-security-policy"));
}
