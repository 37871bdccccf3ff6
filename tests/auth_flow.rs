//! Signup, login, logout and account state against a real database.
//! Skipped unless `TEST_DATABASE_URL` is set.

mod common;

use axum::http::{Method, StatusCode};
use common::{send, signup, TestDb};
use holocron::UserService;
use serde_json::json;

#[tokio::test]
async fn signup_then_login_then_me() {
    let Some(db) = TestDb::new().await else { return };
    let router = db.router();

    let (status, body) = send(
        &router,
        Method::POST,
        "/api/auth/signup",
        None,
        Some(json!({ "email": "luke@jedi.com", "password": "usetheforce" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "User created successfully");
    assert_eq!(body["token_type"], "Bearer");
    assert_eq!(body["user"]["email"], "luke@jedi.com");
    assert_eq!(body["user"]["is_active"], true);
    assert!(body["user"].get("password").is_none());
    assert!(body["user"].get("password_hash").is_none());

    let (status, body) = send(
        &router,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "email": "luke@jedi.com", "password": "usetheforce" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["access_token"].as_str().unwrap().to_string();

    let (status, body) = send(&router, Method::GET, "/api/auth/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["email"], "luke@jedi.com");

    db.cleanup().await;
}

#[tokio::test]
async fn register_alias_and_duplicate_email() {
    let Some(db) = TestDb::new().await else { return };
    let router = db.router();

    let creds = json!({ "email": "leia@rebellion.com", "password": "rebel123" });
    let (status, _) = send(&router, Method::POST, "/api/auth/register", None, Some(creds.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&router, Method::POST, "/api/auth/signup", None, Some(creds)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "conflict");
    assert_eq!(body["error"]["message"], "User already exists");

    db.cleanup().await;
}

#[tokio::test]
async fn wrong_password_and_unknown_email_look_the_same() {
    let Some(db) = TestDb::new().await else { return };
    let router = db.router();
    signup(&router, "han@falcon.com", "kessel12").await;

    let (status, wrong_pw) = send(
        &router,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "email": "han@falcon.com", "password": "nope" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, unknown) = send(
        &router,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "email": "greedo@cantina.com", "password": "kessel12" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_pw, unknown);
    assert_eq!(unknown["error"]["code"], "invalid_credentials");

    db.cleanup().await;
}

#[tokio::test]
async fn disabled_account_is_refused() {
    let Some(db) = TestDb::new().await else { return };
    let router = db.router();
    let token = signup(&router, "dooku@separatists.com", "tyranus").await;
    let user = UserService::find_by_email(db.store(), "dooku@separatists.com")
        .await
        .unwrap()
        .unwrap();
    UserService::set_active(db.store(), user.id, false).await.unwrap();

    let (status, body) = send(
        &router,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "email": "dooku@separatists.com", "password": "tyranus" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"]["message"], "Account is deactivated");

    let (status, _) = send(&router, Method::GET, "/api/users/favorites", Some(&token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // a wrong password still reads as bad credentials
    let (status, _) = send(
        &router,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "email": "dooku@separatists.com", "password": "wrong" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    db.cleanup().await;
}

#[tokio::test]
async fn logout_revokes_only_the_presented_token() {
    let Some(db) = TestDb::new().await else { return };
    let router = db.router();
    let first = signup(&router, "ahsoka@togruta.com", "snips").await;
    let (_, body) = send(
        &router,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "email": "ahsoka@togruta.com", "password": "snips" })),
    )
    .await;
    let second = body["access_token"].as_str().unwrap().to_string();

    let (status, body) = send(&router, Method::POST, "/api/auth/logout", Some(&first), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Logged out");

    let (status, body) = send(&router, Method::GET, "/api/auth/me", Some(&first), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "unauthenticated");

    let (status, _) = send(&router, Method::GET, "/api/auth/me", Some(&second), None).await;
    assert_eq!(status, StatusCode::OK);

    db.cleanup().await;
}

#[tokio::test]
async fn token_of_deleted_user_is_rejected() {
    let Some(db) = TestDb::new().await else { return };
    let router = db.router();
    let token = signup(&router, "jango@kamino.com", "bounty").await;
    let user = UserService::find_by_email(db.store(), "jango@kamino.com")
        .await
        .unwrap()
        .unwrap();
    UserService::delete(db.store(), user.id).await.unwrap();

    let (status, _) = send(&router, Method::GET, "/api/auth/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    db.cleanup().await;
}

#[tokio::test]
async fn readiness_reports_ok_with_a_database() {
    let Some(db) = TestDb::new().await else { return };
    let (status, body) = send(&db.router(), Method::GET, "/ready", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "ok");
    db.cleanup().await;
}
