// tests/order_flow_tests.rs
#[macro_use]
mod common;

use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use common::*;
use order_service::models::Money;
use order_service::repository::SEED_CATALOG;

async fn body_text<B: actix_web::body::MessageBody>(resp: actix_web::dev::ServiceResponse<B>) -> String {
  String::from_utf8(test::read_body(resp).await.to_vec()).unwrap()
}

#[actix_web::test]
async fn test_alice_orders_pizza_and_pasta_then_pays_cash() {
  let state = test_state().await;
  let app = test_app!(state);
  let cookie = sign_in!(app, "alice", "pw1");

  for food_id in [1, 2] {
    let req = TestRequest::get().uri(&format!("/order/{}", food_id)).cookie(cookie.clone());
    let resp = test::call_service(&app, req.to_request()).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp).as_deref(), Some("/payment"));
  }

  let resp = test::call_service(&app, TestRequest::get().uri("/home").cookie(cookie.clone()).to_request()).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let home = body_text(resp).await;
  assert!(home.contains("Total: 18.98"));
  assert!(home.contains("Pizza - 10.99"));
  assert!(home.contains("Pasta - 7.99"));

  let resp = test::call_service(&app, payment_request(&cookie, "cash", "18.98").to_request()).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let page = body_text(resp).await;
  assert!(page.contains("<h1>Thank You</h1>"));
  assert!(page.contains("Thank you for your payment"));
  assert!(page.contains("Please keep 18.98 in cash"));
  assert!(page.contains("Status: Due on delivery"));
  assert!(page.contains("Processed: "));

  let alice = user_id(&state, "alice").await;
  assert_eq!(state.repository.count_open_orders(alice).await.unwrap(), 0);
}

#[actix_web::test]
async fn test_cart_total_is_sum_of_ordered_prices() {
  let state = test_state().await;
  let app = test_app!(state);
  let cookie = sign_in!(app, "bob", "secret");

  // Repeat orders create repeat rows.
  let ordered = [3_i64, 3, 6, 9, 11];
  for food_id in ordered {
    let req = TestRequest::get().uri(&format!("/order/{}", food_id)).cookie(cookie.clone());
    test::call_service(&app, req.to_request()).await;
  }

  let expected: Money = ordered
    .iter()
    .map(|id| Money::from_cents(SEED_CATALOG[(*id - 1) as usize].price_cents))
    .sum();

  let bob = user_id(&state, "bob").await;
  assert_eq!(state.repository.count_open_orders(bob).await.unwrap(), ordered.len() as i64);
  assert_eq!(state.repository.cart_total(bob).await.unwrap(), expected);

  let resp = test::call_service(&app, TestRequest::get().uri("/payment").cookie(cookie).to_request()).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let page = body_text(resp).await;
  assert!(page.contains(&format!("Total: {}", expected)));
  assert!(page.contains(&format!("name=\"total_amount\" value=\"{}\"", expected)));
}

#[actix_web::test]
async fn test_payment_with_empty_cart_redirects_home() {
  let state = test_state().await;
  let app = test_app!(state);
  let cookie = sign_in!(app, "alice", "pw1");

  let resp = test::call_service(&app, TestRequest::get().uri("/payment").cookie(cookie).to_request()).await;
  assert_eq!(resp.status(), StatusCode::SEE_OTHER);
  assert_eq!(location(&resp).as_deref(), Some("/home"));
}

#[actix_web::test]
async fn test_payment_page_echoes_success_message() {
  let state = test_state().await;
  let app = test_app!(state);
  let cookie = sign_in!(app, "alice", "pw1");
  test::call_service(&app, TestRequest::get().uri("/order/4").cookie(cookie.clone()).to_request()).await;

  let req = TestRequest::get().uri("/payment?success=Saved%21").cookie(cookie);
  let resp = test::call_service(&app, req.to_request()).await;
  assert!(body_text(resp).await.contains("<p class=\"success\">Saved!</p>"));
}

#[actix_web::test]
async fn test_delete_order_clears_only_callers_cart() {
  let state = test_state().await;
  let app = test_app!(state);
  let alice_cookie = sign_in!(app, "alice", "pw1");
  let bob_cookie = sign_in!(app, "bob", "pw2");

  for cookie in [&alice_cookie, &alice_cookie, &bob_cookie] {
    test::call_service(&app, TestRequest::get().uri("/order/5").cookie(cookie.clone()).to_request()).await;
  }

  let req = TestRequest::post().uri("/delete_order").cookie(alice_cookie.clone());
  let resp = test::call_service(&app, req.to_request()).await;
  assert_eq!(resp.status(), StatusCode::SEE_OTHER);
  assert_eq!(location(&resp).as_deref(), Some("/home"));

  let alice = user_id(&state, "alice").await;
  let bob = user_id(&state, "bob").await;
  assert_eq!(state.repository.count_open_orders(alice).await.unwrap(), 0);
  assert_eq!(state.repository.count_open_orders(bob).await.unwrap(), 1);

  let resp = test::call_service(&app, TestRequest::get().uri("/home").cookie(alice_cookie).to_request()).await;
  let home = body_text(resp).await;
  assert!(home.contains("No open orders."));
  assert!(home.contains("Total: 0.00"));
}

#[actix_web::test]
async fn test_online_payment_renders_confirmation() {
  let state = test_state().await;
  let app = test_app!(state);
  let cookie = sign_in!(app, "alice", "pw1");
  test::call_service(&app, TestRequest::get().uri("/order/7").cookie(cookie.clone()).to_request()).await;

  let resp = test::call_service(&app, payment_request(&cookie, "online", "12.99").to_request()).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let page = body_text(resp).await;
  assert!(page.contains("<h1>Payment Confirmation</h1>"));
  assert!(page.contains("Amount paid: 12.99"));
  assert!(page.contains("Reference: mock_pay_"));
  assert!(page.contains("Status: Paid"));
  assert!(page.contains(" UTC</p>"));

  let alice = user_id(&state, "alice").await;
  assert_eq!(state.repository.count_open_orders(alice).await.unwrap(), 0);
}

#[actix_web::test]
async fn test_unknown_payment_method_still_clears_cart_and_goes_home() {
  let state = test_state().await;
  let app = test_app!(state);
  let cookie = sign_in!(app, "alice", "pw1");
  test::call_service(&app, TestRequest::get().uri("/order/1").cookie(cookie.clone()).to_request()).await;

  let resp = test::call_service(&app, payment_request(&cookie, "bitcoin", "10.99").to_request()).await;
  assert_eq!(resp.status(), StatusCode::SEE_OTHER);
  assert_eq!(location(&resp).as_deref(), Some("/home"));

  let alice = user_id(&state, "alice").await;
  assert_eq!(state.repository.count_open_orders(alice).await.unwrap(), 0);
}

#[actix_web::test]
async fn test_mismatched_total_does_not_block_payment() {
  let state = test_state().await;
  let app = test_app!(state);
  let cookie = sign_in!(app, "alice", "pw1");
  test::call_service(&app, TestRequest::get().uri("/order/2").cookie(cookie.clone()).to_request()).await;

  let resp = test::call_service(&app, payment_request(&cookie, "online", "1.00").to_request()).await;
  assert_eq!(resp.status(), StatusCode::OK);
  assert!(body_text(resp).await.contains("Amount paid: 7.99"));
}

#[actix_web::test]
async fn test_malformed_total_is_rejected_before_clearing() {
  let state = test_state().await;
  let app = test_app!(state);
  let cookie = sign_in!(app, "alice", "pw1");
  test::call_service(&app, TestRequest::get().uri("/order/2").cookie(cookie.clone()).to_request()).await;

  let resp = test::call_service(&app, payment_request(&cookie, "cash", "lots").to_request()).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

  let alice = user_id(&state, "alice").await;
  assert_eq!(state.repository.count_open_orders(alice).await.unwrap(), 1);
}

#[actix_web::test]
async fn test_ordering_unknown_food_is_not_found() {
  let state = test_state().await;
  let app = test_app!(state);
  let cookie = sign_in!(app, "alice", "pw1");

  let resp = test::call_service(&app, TestRequest::get().uri("/order/999").cookie(cookie).to_request()).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);

  let alice = user_id(&state, "alice").await;
  assert_eq!(state.repository.count_open_orders(alice).await.unwrap(), 0);
}

#[actix_web::test]
async fn test_payment_confirmation_page_shows_optional_total() {
  let state = test_state().await;
  let app = test_app!(state);
  let cookie = sign_in!(app, "alice", "pw1");

  let req = TestRequest::get().uri("/payment_confirmation?total_amount=18.98").cookie(cookie.clone());
  let resp = test::call_service(&app, req.to_request()).await;
  assert_eq!(resp.status(), StatusCode::OK);
  assert!(body_text(resp).await.contains("Amount paid: 18.98"));

  let req = TestRequest::get().uri("/payment_confirmation?total_amount=abc").cookie(cookie);
  let resp = test::call_service(&app, req.to_request()).await;
  assert_eq!(resp.status(), StatusCode::OK);
  assert!(!body_text(resp).await.contains("Amount paid"));
}
