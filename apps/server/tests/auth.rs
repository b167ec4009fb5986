mod common;

use axum::http::{Method, StatusCode};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use common::{json_request, login, send, spawn_app, ADMIN, CITIZEN, OFFICER};
use pmajay_server::{api::app_router, build_state, config::Config};
use rand::{rngs::OsRng, RngCore};
use serde_json::json;
use tempfile::tempdir;

#[tokio::test]
async fn protected_routes_reject_missing_and_bad_tokens() {
    let app = spawn_app().await;

    let (status, body) = send(
        &app.router,
        json_request(Method::GET, "/api/v1/dashboard/central", None, None),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "No token provided");
    assert_eq!(body["code"], 401);

    let (status, body) = send(
        &app.router,
        json_request(
            Method::GET,
            "/api/v1/dashboard/central",
            Some("not.a.token"),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid token");
}

#[tokio::test]
async fn login_returns_token_and_profile() {
    let app = spawn_app().await;

    let (status, body) = send(
        &app.router,
        json_request(
            Method::POST,
            "/api/v1/auth/login",
            None,
            Some(json!({ "email": OFFICER.0, "password": OFFICER.1 })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["token"].as_str().unwrap().split('.').count() == 3);
    assert_eq!(body["user"]["role"], "state_user");
    assert_eq!(body["user"]["state_id"], 1);
    assert!(body["user"].get("password").is_none());

    let token = body["token"].as_str().unwrap();
    let (status, me) = send(
        &app.router,
        json_request(Method::GET, "/api/v1/auth/me", Some(token), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["email"], OFFICER.0);
    assert_eq!(me["role"], "state_user");
}

#[tokio::test]
async fn bad_credentials_share_one_message() {
    let app = spawn_app().await;

    for (email, password) in [(ADMIN.0, "wrong-password"), ("nobody@example.com", "whatever")] {
        let (status, body) = send(
            &app.router,
            json_request(
                Method::POST,
                "/api/v1/auth/login",
                None,
                Some(json!({ "email": email, "password": password })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Invalid credentials");
    }
}

#[tokio::test]
async fn role_gate_blocks_other_roles() {
    let app = spawn_app().await;
    let citizen = login(&app.router, CITIZEN).await;

    let (status, body) = send(
        &app.router,
        json_request(Method::GET, "/api/v1/dashboard/central", Some(&citizen), None),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Insufficient permissions");

    let admin = login(&app.router, ADMIN).await;
    let (status, _) = send(
        &app.router,
        json_request(Method::GET, "/api/v1/dashboard/central", Some(&admin), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn registration_rules() {
    let app = spawn_app().await;
    let new_user = json!({
        "name": "Asha Devi",
        "email": "asha@example.com",
        "password": "secret99"
    });

    let (status, body) = send(
        &app.router,
        json_request(Method::POST, "/api/v1/auth/register", None, Some(new_user.clone())),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].as_i64().unwrap() > 0);
    assert_eq!(body["message"], "User registered successfully");

    let (status, body) = send(
        &app.router,
        json_request(Method::POST, "/api/v1/auth/register", None, Some(new_user)),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "User already exists");

    let (status, _) = send(
        &app.router,
        json_request(
            Method::POST,
            "/api/v1/auth/register",
            None,
            Some(json!({
                "name": "Self Promoted",
                "email": "boss@example.com",
                "password": "secret99",
                "role": "central"
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(
        &app.router,
        json_request(
            Method::POST,
            "/api/v1/auth/register",
            None,
            Some(json!({ "name": "Shorty", "email": "short@example.com", "password": "abc" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let admin = login(&app.router, ADMIN).await;
    let (status, _) = send(
        &app.router,
        json_request(
            Method::POST,
            "/api/v1/auth/register",
            Some(&admin),
            Some(json!({
                "name": "Gujarat Officer",
                "email": "officer@gj.gov.in",
                "password": "state456",
                "role": "state_user",
                "state_id": 2
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let token = login(&app.router, ("officer@gj.gov.in", "state456")).await;
    assert!(!token.is_empty());
}

#[tokio::test]
async fn config_from_env_builds_a_working_router() {
    let tmp = tempdir().unwrap();
    let mut secret_bytes = [0u8; 32];
    OsRng.fill_bytes(&mut secret_bytes);

    std::env::set_var("PMAJAY_DB_PATH", tmp.path().join("env.db"));
    std::env::set_var("PMAJAY_UPLOAD_DIR", tmp.path().join("uploads"));
    std::env::set_var("PMAJAY_JWT_SECRET", BASE64.encode(secret_bytes));
    std::env::set_var("PMAJAY_SEED_SAMPLE_DATA", "false");

    let config = Config::from_env().unwrap();
    assert!(!config.seed_sample_data);
    assert!(config.log_json);
    let state = build_state(&config).await.unwrap();
    let app = app_router(state, &config);

    let (status, body) = send(
        &app,
        json_request(Method::GET, "/api/v1/states", None, None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 0);

    for key in [
        "PMAJAY_DB_PATH",
        "PMAJAY_UPLOAD_DIR",
        "PMAJAY_JWT_SECRET",
        "PMAJAY_SEED_SAMPLE_DATA",
    ] {
        std::env::remove_var(key);
    }
}
