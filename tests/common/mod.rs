#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use http_body_util::BodyExt;
use presence::router::init_router;
use presence::state::AppState;
use presence_auth::{Notice, Principal, SessionIdentity, create_session_token, verify_flash_token};
use presence_config::{FLASH_COOKIE, SESSION_COOKIE, SessionConfig};
use sqlx::{PgPool, Postgres, Transaction};
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_PASSWORD: &str = "testpass123";

pub fn test_session_config() -> SessionConfig {
    SessionConfig {
        secret: "integration-test-secret".to_string(),
        ..SessionConfig::default()
    }
}

pub fn setup_test_app(pool: PgPool) -> axum::Router {
    setup_test_app_with(pool, test_session_config())
}

pub fn setup_test_app_with(pool: PgPool, session_config: SessionConfig) -> axum::Router {
    init_router(AppState::new(pool, session_config))
}

pub fn generate_unique_matricule(prefix: &str) -> String {
    format!("{}-{}", prefix, &Uuid::new_v4().simple().to_string()[..12])
}

pub fn generate_unique_email() -> String {
    format!("admin-{}@univ.test", Uuid::new_v4())
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub async fn create_test_admin(tx: &mut Transaction<'_, Postgres>, email: &str) -> i32 {
    sqlx::query_scalar(
        "INSERT INTO admins (name, email, password) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind("Test Admin")
    .bind(email)
    .bind(TEST_PASSWORD)
    .fetch_one(&mut **tx)
    .await
    .unwrap()
}

pub async fn create_test_department(tx: &mut Transaction<'_, Postgres>, name: &str) -> i32 {
    sqlx::query_scalar("INSERT INTO departments (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(&mut **tx)
        .await
        .unwrap()
}

pub async fn create_test_program(
    tx: &mut Transaction<'_, Postgres>,
    name: &str,
    department_id: i32,
) -> i32 {
    sqlx::query_scalar(
        "INSERT INTO programs (name, department_id) VALUES ($1, $2) RETURNING id",
    )
    .bind(name)
    .bind(department_id)
    .fetch_one(&mut **tx)
    .await
    .unwrap()
}

pub async fn create_test_course(
    tx: &mut Transaction<'_, Postgres>,
    name: &str,
    code: Option<&str>,
    program_id: i32,
) -> i32 {
    sqlx::query_scalar(
        "INSERT INTO courses (name, code, program_id) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(name)
    .bind(code)
    .bind(program_id)
    .fetch_one(&mut **tx)
    .await
    .unwrap()
}

pub async fn create_test_teacher(
    tx: &mut Transaction<'_, Postgres>,
    matricule: &str,
    department_id: i32,
) -> i32 {
    sqlx::query_scalar(
        r#"INSERT INTO teachers (matricule, name, surname, email, password, department_id)
           VALUES ($1, 'Kone', 'Ibrahim', 'kone@univ.test', $2, $3)
           RETURNING id"#,
    )
    .bind(matricule)
    .bind(TEST_PASSWORD)
    .bind(department_id)
    .fetch_one(&mut **tx)
    .await
    .unwrap()
}

pub async fn create_test_student(
    tx: &mut Transaction<'_, Postgres>,
    matricule: &str,
    program_id: i32,
) -> i32 {
    sqlx::query_scalar(
        r#"INSERT INTO students (matricule, name, surname, year, password, program_id)
           VALUES ($1, 'Diallo', 'Awa', 'L2', $2, $3)
           RETURNING id"#,
    )
    .bind(matricule)
    .bind(TEST_PASSWORD)
    .bind(program_id)
    .fetch_one(&mut **tx)
    .await
    .unwrap()
}

pub async fn count_rows(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Sessions and requests
// ---------------------------------------------------------------------------

/// `Cookie` header value carrying a signed session for `principal`.
pub fn session_cookie(principal: Principal) -> String {
    let identity = SessionIdentity::new(principal, "Test User");
    let token = create_session_token(&identity, &test_session_config()).unwrap();
    format!("{}={}", SESSION_COOKIE, token)
}

pub fn admin_cookie() -> String {
    session_cookie(Principal::Admin(1))
}

pub async fn get(app: axum::Router, uri: &str, cookie: Option<&str>) -> Response {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    app.oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn get_json(
    app: axum::Router,
    uri: &str,
    cookie: &str,
) -> (StatusCode, serde_json::Value) {
    let response = get(app, uri, Some(cookie)).await;
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, body)
}

pub async fn post_form(
    app: axum::Router,
    uri: &str,
    cookie: Option<&str>,
    body: &str,
) -> Response {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    app.oneshot(builder.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap()
}

pub fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

/// Value of the cookie `name` set by `response`, if any.
pub fn set_cookie_value(response: &Response, name: &str) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| value.split(';').next())
        .filter_map(|pair| pair.split_once('='))
        .find(|(cookie_name, _)| *cookie_name == name)
        .map(|(_, value)| value.to_string())
}

/// Flash notice queued by a redirect response.
pub fn flash_notice(response: &Response) -> Option<Notice> {
    let value = set_cookie_value(response, FLASH_COOKIE)?;
    verify_flash_token(&value, &test_session_config())
}

/// Asserts a `303` to `to` whose flash notice reads `message`.
pub fn assert_redirect_with(response: &Response, to: &str, message: &str) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(response), to);
    let notice = flash_notice(response).expect("redirect should carry a flash notice");
    assert_eq!(notice.message, message);
}
