use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

use server::routes::{self, auth::ServerState};
use service::auth::{repository::AuthRepository, service::AuthConfig, AuthService};
use service::errors::DbErrorKind;
use service::memory::InMemoryStore;
use service::seller::{SellerRepository, SellerService};

struct TestApp {
    store: Arc<InMemoryStore>,
    state: ServerState,
    router: Router,
}

fn app() -> TestApp {
    let store = Arc::new(InMemoryStore::default());
    let auth_repo: Arc<dyn AuthRepository> = store.clone();
    let seller_repo: Arc<dyn SellerRepository> = store.clone();
    let state = ServerState {
        auth: Arc::new(AuthService::new(auth_repo, AuthConfig::new("test-secret"))),
        sellers: Arc::new(SellerService::new(seller_repo)),
    };
    let router = routes::build_router(state.clone(), CorsLayer::very_permissive());
    TestApp { store, state, router }
}

async fn call(app: &TestApp, req: Request<Body>) -> (StatusCode, Value, Option<String>) {
    let res = app.router.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let cookie = res
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body, cookie)
}

fn json_req(method: &str, uri: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    let mut b = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(t) = token {
        b = b.header(header::AUTHORIZATION, format!("Bearer {t}"));
    }
    b.body(Body::from(body.to_string())).unwrap()
}

fn get_req(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut b = Request::builder().method("GET").uri(uri);
    if let Some(t) = token {
        b = b.header(header::AUTHORIZATION, format!("Bearer {t}"));
    }
    b.body(Body::empty()).unwrap()
}

fn sign_up_body(user: &str) -> Value {
    json!({
        "user": user,
        "password": "abcd123!",
        "phone_number": "010-1234-5678",
        "seller_attribute_id": 1,
        "name": "브랜디",
        "eng_name": "brandi",
        "service_number": "1588-1234",
        "site_url": "https://brandi.co.kr"
    })
}

fn profile_body() -> Value {
    json!({
        "simple_introduction": "hello",
        "bank": "KB",
        "account_owner": "Kim",
        "bank_account": "123-456",
        "service_number": "02-555-1234",
        "detail_address": "3F",
        "supervisor_name": "Lee",
        "supervisor_phone_number": "010-1111-2222",
        "supervisor_email": "lee@example.com",
        "start_time": "09:00:00",
        "end_time": "18:00:00",
        "is_weekend": 0,
        "shipping_information": "2 days",
        "refund_information": "7 days"
    })
}

async fn sign_in(app: &TestApp, user: &str, password: &str) -> String {
    let (status, body, _) = call(app, json_req("POST", "/sign-in", None, &json!({"user": user, "password": password}))).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    body["access_token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn health_is_public() {
    let app = app();
    let (status, body, _) = call(&app, get_req("/health", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn sign_up_then_duplicate() {
    let app = app();
    let (status, body, _) = call(&app, json_req("POST", "/sign-up", None, &sign_up_body("seller01"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "SUCCESS");

    let (status, body, _) = call(&app, json_req("POST", "/sign-up", None, &sign_up_body("seller01"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "USER_ALREADY_EXISTS");
    assert_eq!(app.store.seller_count(), 1);
}

#[tokio::test]
async fn sign_up_rejections() {
    let app = app();

    let mut bad_eng = sign_up_body("seller01");
    bad_eng["eng_name"] = json!("Brandi");
    let (status, body, _) = call(&app, json_req("POST", "/sign-up", None, &bad_eng)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "SELLER_ENGLISH_NAME_VALIDATION_ERROR");

    let mut bad_pw = sign_up_body("seller01");
    bad_pw["password"] = json!("short");
    let (_, body, _) = call(&app, json_req("POST", "/sign-up", None, &bad_pw)).await;
    assert_eq!(body["message"], "PASSWORD_VALIDATION_ERROR");

    let mut missing = sign_up_body("seller01");
    missing.as_object_mut().unwrap().remove("phone_number");
    let (status, body, _) = call(&app, json_req("POST", "/sign-up", None, &missing)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "KEY_ERROR");

    let mut wrong_type = sign_up_body("seller01");
    wrong_type["seller_attribute_id"] = json!("one");
    let (_, body, _) = call(&app, json_req("POST", "/sign-up", None, &wrong_type)).await;
    assert_eq!(body["message"], "TYPE_ERROR");

    let req = Request::builder()
        .method("POST")
        .uri("/sign-up")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body, _) = call(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "INVALID_REQUEST");

    assert_eq!(app.store.seller_count(), 0);
}

#[tokio::test]
async fn sign_in_outcomes() {
    let app = app();
    call(&app, json_req("POST", "/sign-up", None, &sign_up_body("seller01"))).await;

    let (status, body, cookie) =
        call(&app, json_req("POST", "/sign-in", None, &json!({"user": "seller01", "password": "abcd123!"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["access_token"].as_str().is_some_and(|t| !t.is_empty()));
    assert!(cookie.is_some_and(|c| c.starts_with("access_token=")));

    let (status, body, _) =
        call(&app, json_req("POST", "/sign-in", None, &json!({"user": "seller01", "password": "wrong123!"}))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "INVALID_ACCESS");

    let (status, body, _) =
        call(&app, json_req("POST", "/sign-in", None, &json!({"user": "nobody01", "password": "abcd123!"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "USER_DOES_NOT_EXIST");

    let (status, body, _) = call(&app, json_req("POST", "/sign-in", None, &json!({"user": "seller01"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "KEY_ERROR");
}

#[tokio::test]
async fn token_is_required_and_checked() {
    let app = app();
    let (status, body, _) = call(&app, get_req("/seller_details", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "LOGIN_REQUIRED");

    let (status, body, _) = call(&app, get_req("/seller_details", Some("not-a-jwt"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "INVALID_TOKEN");
}

#[tokio::test]
async fn listing_is_master_only() {
    let app = app();
    call(&app, json_req("POST", "/sign-up", None, &sign_up_body("seller01"))).await;
    call(&app, json_req("POST", "/sign-up", None, &sign_up_body("seller02"))).await;
    app.state.auth.ensure_master("master01", "Master!234").await.unwrap();

    let seller = sign_in(&app, "seller01", "abcd123!").await;
    let (status, body, _) = call(&app, get_req("/sellers", Some(&seller))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "UNAUTHORIZED");

    let master = sign_in(&app, "master01", "Master!234").await;
    let (status, body, _) = call(&app, get_req("/sellers?page=1&limit=2", Some(&master))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["number_of_sellers"], 3);
    assert_eq!(body["number_of_pages"], 2);
    assert_eq!(body["sellers"].as_array().unwrap().len(), 2);

    let (status, body, _) = call(&app, get_req("/sellers?page=abc", Some(&master))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "PARAMETER_VALIDATION_ERROR");
}

#[tokio::test]
async fn profile_update_and_details() {
    let app = app();
    call(&app, json_req("POST", "/sign-up", None, &sign_up_body("seller01"))).await;
    let token = sign_in(&app, "seller01", "abcd123!").await;

    let (status, body, _) = call(&app, get_req("/seller_details", Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["account"], "seller01");
    assert_eq!(body["data"]["seller_attribute"], "쇼핑몰");
    assert!(body["data"]["detail"].is_null());

    let mut missing = profile_body();
    missing.as_object_mut().unwrap().remove("refund_information");
    let (status, body, _) = call(&app, json_req("PUT", "/seller", Some(&token), &missing)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "PARAMETER_VALIDATION_ERROR");

    let (status, body, _) = call(&app, json_req("PUT", "/seller", Some(&token), &profile_body())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "SUCCESS");

    // cookie fallback
    let req = Request::builder()
        .method("GET")
        .uri("/seller_details")
        .header(header::COOKIE, format!("access_token={token}"))
        .body(Body::empty())
        .unwrap();
    let (status, body, _) = call(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["service_number"], "02-555-1234");
    assert_eq!(body["data"]["detail"]["bank"], "KB");
    assert_eq!(body["data"]["detail"]["cs_is_weekend"], false);
}

#[tokio::test]
async fn overlong_fields_are_client_errors() {
    let app = app();
    let mut long_url = sign_up_body("seller01");
    long_url["site_url"] = json!(format!("https://{}.com", "a".repeat(300)));
    let (status, body, _) = call(&app, json_req("POST", "/sign-up", None, &long_url)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "SITE_URL_VALIDATION_ERROR");
    assert_eq!(app.store.seller_count(), 0);

    call(&app, json_req("POST", "/sign-up", None, &sign_up_body("seller01"))).await;
    let token = sign_in(&app, "seller01", "abcd123!").await;

    let mut long_bank = profile_body();
    long_bank["bank"] = json!("b".repeat(100));
    let (status, body, _) = call(&app, json_req("PUT", "/seller", Some(&token), &long_bank)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "PARAMETER_VALIDATION_ERROR");

    let mut bad_number = profile_body();
    bad_number["service_number"] = json!("not a number at all!!!!");
    let (status, body, _) = call(&app, json_req("PUT", "/seller", Some(&token), &bad_number)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "PARAMETER_VALIDATION_ERROR");

    let (_, body, _) = call(&app, get_req("/seller_details", Some(&token))).await;
    assert!(body["data"]["detail"].is_null());
}

#[tokio::test]
async fn database_failures_map_to_fixed_messages() {
    let app = app();
    app.store.fail_next(DbErrorKind::Operational);
    let (status, body, _) = call(&app, json_req("POST", "/sign-up", None, &sign_up_body("seller01"))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "DATABASE_ACCESS_DENIED");

    call(&app, json_req("POST", "/sign-up", None, &sign_up_body("seller01"))).await;
    let token = sign_in(&app, "seller01", "abcd123!").await;

    app.store.fail_next(DbErrorKind::Integrity);
    let (status, body, _) = call(&app, json_req("PUT", "/seller", Some(&token), &profile_body())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "DATABASE_INTERGRITY_ERROR");

    app.store.fail_next(DbErrorKind::Programming);
    let (_, body, _) = call(&app, get_req("/seller_details", Some(&token))).await;
    assert_eq!(body["message"], "DATABASE_PROGRAMMING_ERROR");
}
