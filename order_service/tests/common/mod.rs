// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper

use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::http::header;
use actix_web::test::TestRequest;
use once_cell::sync::Lazy;
use order_service::config::AppConfig;
use order_service::state::AppState;
use tracing::Level;

pub const SESSION_COOKIE: &str = "food_order_session";

/// Builds the actix test service for `$state` with the real route table.
macro_rules! test_app {
  ($state:expr) => {
    actix_web::test::init_service(
      actix_web::App::new()
        .app_data(actix_web::web::Data::new($state.clone()))
        .configure(order_service::web::configure_app_routes),
    )
    .await
  };
}

/// Registers `$user` and logs in, yielding the session cookie.
macro_rules! sign_in {
  ($app:expr, $user:expr, $password:expr) => {{
    let resp = actix_web::test::call_service(&$app, common::register_request($user, $password).to_request()).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::SEE_OTHER);
    let resp = actix_web::test::call_service(&$app, common::login_request($user, $password).to_request()).await;
    assert_eq!(common::location(&resp).as_deref(), Some("/home"));
    common::session_cookie(&resp).expect("login should set a session cookie")
  }};
}

static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

/// In-memory store with the catalog seeded.
pub async fn test_state() -> AppState {
  setup_tracing();
  order_service::build_state(AppConfig::default())
    .await
    .expect("in-memory state should build")
}

pub fn register_request(username: &str, password: &str) -> TestRequest {
  TestRequest::post()
    .uri("/register")
    .set_form([("username", username), ("password", password)])
}

pub fn login_request(username: &str, password: &str) -> TestRequest {
  TestRequest::post()
    .uri("/login")
    .set_form([("username", username), ("password", password)])
}

pub fn payment_request(cookie: &Cookie<'static>, method: &str, total: &str) -> TestRequest {
  TestRequest::post()
    .uri("/process_payment")
    .cookie(cookie.clone())
    .set_form([("payment_method", method), ("total_amount", total)])
}

pub fn location<B>(resp: &ServiceResponse<B>) -> Option<String> {
  resp
    .headers()
    .get(header::LOCATION)
    .and_then(|v| v.to_str().ok())
    .map(str::to_string)
}

pub fn session_cookie<B>(resp: &ServiceResponse<B>) -> Option<Cookie<'static>> {
  resp
    .response()
    .cookies()
    .find(|c| c.name() == SESSION_COOKIE)
    .map(|c| c.into_owned())
}

pub async fn user_id(state: &AppState, username: &str) -> i64 {
  state
    .repository
    .find_user_by_username(username)
    .await
    .unwrap()
    .expect("user should exist")
    .id
}
