mod common;

use actix_web::{http::StatusCode, test};
use chrono::{Duration, Utc};
use common::{client::TestClient, TestContext};
use serde_json::json;
use tagline::utils::token::{construct_cookie, encrypt, new_secret};

#[tokio::test]
async fn test_login_flow_success() {
    println!("\n\n[+] Running test: test_login_flow_success");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    client.create_test_user("noah", "hunter2").await;

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({"id": "noah", "password": "hunter2"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());

    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = resp
        .response()
        .cookies()
        .find(|c| c.name() == "session")
        .expect("session cookie not set")
        .into_owned();
    assert!(!cookie.value().is_empty());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], "noah");
    assert_eq!(body["name"], "User noah");
    assert_eq!(body["isAuthenticated"], true);
}

#[tokio::test]
async fn test_login_wrong_password_unauthorized() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    client.create_test_user("noah", "hunter2").await;

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({"id": "noah", "password": "wrong"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_unknown_id_unauthorized() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({"id": "nobody", "password": "hunter2"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_malformed_body_bad_request() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    // password key missing entirely
    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({"id": "noah"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_current_user_requires_session() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::get().uri("/current-user").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_current_user_with_session() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    client.create_test_user("maya", "hunter2").await;

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({"id": "maya", "password": "hunter2"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = resp
        .response()
        .cookies()
        .find(|c| c.name() == "session")
        .unwrap()
        .into_owned();

    let req = test::TestRequest::get()
        .uri("/current-user")
        .cookie(cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], "maya");
    assert_eq!(body["isAuthenticated"], true);
}

#[tokio::test]
async fn test_logout_invalidates_session() {
    println!("\n\n[+] Running test: test_logout_invalidates_session");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    client.create_test_user("noah", "hunter2").await;

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({"id": "noah", "password": "hunter2"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let cookie = resp
        .response()
        .cookies()
        .find(|c| c.name() == "session")
        .unwrap()
        .into_owned();

    let req = test::TestRequest::get()
        .uri("/logout")
        .cookie(cookie.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // the old cookie is now worthless
    let req = test::TestRequest::get()
        .uri("/current-user")
        .cookie(cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    println!("[/] Test passed: session gone after logout.");
}

#[tokio::test]
async fn test_expired_session_rejected_and_deleted() {
    println!("\n\n[+] Running test: test_expired_session_rejected_and_deleted");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    client.create_test_user("noah", "hunter2").await;

    // Hand-roll a session row that expired yesterday, with a valid cookie.
    let secret = new_secret();
    let hash = encrypt(&secret).expect("Failed to hash session secret");
    let expires_at = Utc::now() - Duration::days(1);
    let session_id = ctx
        .db
        .create_session("noah", hash, expires_at)
        .await
        .expect("Failed to create session");

    let cookie = actix_web::cookie::Cookie::new(
        "session",
        construct_cookie(&session_id, &secret),
    );
    let req = test::TestRequest::get()
        .uri("/current-user")
        .cookie(cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // the stale row was deleted on sight
    assert!(ctx.db.get_session(session_id).await.is_err());
    println!("[/] Test passed: expired session rejected and purged.");
}

#[tokio::test]
async fn test_logout_without_session_is_ok() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::get().uri("/logout").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
