// order_service/src/web/views.rs

//! Server-rendered pages. Markup is intentionally bare; every dynamic value
//! goes through [`escape`].

use std::fmt::Write;

use crate::models::{Food, Money, OpenOrder};
use crate::services::payment_mock::PaymentReceipt;

pub const PAYMENT_SUCCESS_MESSAGE: &str = "Thank you for your payment. Your order will be delivered soon!";

pub fn escape(raw: &str) -> String {
  let mut out = String::with_capacity(raw.len());
  for ch in raw.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#x27;"),
      other => out.push(other),
    }
  }
  out
}

fn layout(title: &str, body: &str) -> String {
  format!(
    "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{title}</title></head>\n<body>\n{body}</body>\n</html>\n",
    title = escape(title),
    body = body
  )
}

fn error_line(error: Option<&str>) -> String {
  error
    .map(|e| format!("<p class=\"error\">{}</p>\n", escape(e)))
    .unwrap_or_default()
}

fn credentials_form(action: &str, submit: &str) -> String {
  format!(
    "<form method=\"post\" action=\"{action}\">\n\
     <input type=\"text\" name=\"username\" placeholder=\"Username\" required>\n\
     <input type=\"password\" name=\"password\" placeholder=\"Password\" required>\n\
     <button type=\"submit\">{submit}</button>\n\
     </form>\n"
  )
}

pub fn login_page(error: Option<&str>) -> String {
  let body = format!(
    "<h1>Login</h1>\n{}{}<p><a href=\"/register\">Create an account</a></p>\n",
    error_line(error),
    credentials_form("/login", "Login")
  );
  layout("Login", &body)
}

pub fn register_page(error: Option<&str>) -> String {
  let body = format!(
    "<h1>Register</h1>\n{}{}<p><a href=\"/login\">Already registered? Log in</a></p>\n",
    error_line(error),
    credentials_form("/register", "Register")
  );
  layout("Register", &body)
}

pub fn home_page(username: &str, foods: &[Food], orders: &[OpenOrder], total: Money) -> String {
  let mut body = format!(
    "<h1>Welcome, {}</h1>\n<p><a href=\"/logout\">Logout</a></p>\n<h2>Menu</h2>\n<ul class=\"menu\">\n",
    escape(username)
  );
  for food in foods {
    let _ = writeln!(
      body,
      "<li><img src=\"{}\" alt=\"{}\"> {} - {} <a href=\"/order/{}\">Order</a></li>",
      escape(&food.image),
      escape(&food.name),
      escape(&food.name),
      food.price(),
      food.id
    );
  }
  body.push_str("</ul>\n<h2>Your Orders</h2>\n");

  if orders.is_empty() {
    body.push_str("<p>No open orders.</p>\n");
  } else {
    body.push_str("<ul class=\"orders\">\n");
    for order in orders {
      let _ = writeln!(
        body,
        "<li><img src=\"{}\" alt=\"{}\"> {} - {}</li>",
        escape(&order.image),
        escape(&order.name),
        escape(&order.name),
        order.price()
      );
    }
    body.push_str("</ul>\n");
    body.push_str(
      "<form method=\"post\" action=\"/delete_order\"><button type=\"submit\">Delete all orders</button></form>\n\
       <p><a href=\"/payment\">Proceed to payment</a></p>\n",
    );
  }
  let _ = writeln!(body, "<p class=\"total\">Total: {}</p>", total);

  layout("Home", &body)
}

pub fn payment_page(total: Money, success_message: Option<&str>) -> String {
  let success = success_message
    .map(|m| format!("<p class=\"success\">{}</p>\n", escape(m)))
    .unwrap_or_default();
  let body = format!(
    "<h1>Payment</h1>\n{success}<p class=\"total\">Total: {total}</p>\n\
     <form method=\"post\" action=\"/process_payment\">\n\
     <input type=\"hidden\" name=\"total_amount\" value=\"{total}\">\n\
     <label><input type=\"radio\" name=\"payment_method\" value=\"online\" checked> Pay online</label>\n\
     <label><input type=\"radio\" name=\"payment_method\" value=\"cash\"> Cash on delivery</label>\n\
     <button type=\"submit\">Pay</button>\n\
     </form>\n<p><a href=\"/home\">Back to menu</a></p>\n"
  );
  layout("Payment", &body)
}

fn receipt_lines(body: &mut String, receipt: &PaymentReceipt) {
  let _ = writeln!(body, "<p class=\"reference\">Reference: {}</p>", escape(&receipt.reference));
  let _ = writeln!(body, "<p class=\"status\">Status: {}</p>", receipt.status.label());
  let _ = writeln!(
    body,
    "<p class=\"processed-at\">Processed: {}</p>",
    receipt.processed_at.format("%Y-%m-%d %H:%M:%S UTC")
  );
}

pub fn payment_confirmation_page(
  message: Option<&str>,
  total: Option<Money>,
  receipt: Option<&PaymentReceipt>,
) -> String {
  let mut body = String::from("<h1>Payment Confirmation</h1>\n");
  if let Some(message) = message {
    let _ = writeln!(body, "<p class=\"success\">{}</p>", escape(message));
  }
  if let Some(total) = total {
    let _ = writeln!(body, "<p class=\"total\">Amount paid: {}</p>", total);
  }
  if let Some(receipt) = receipt {
    receipt_lines(&mut body, receipt);
  }
  body.push_str("<p><a href=\"/home\">Back to menu</a></p>\n");
  layout("Payment Confirmation", &body)
}

pub fn thank_you_page(message: &str, receipt: &PaymentReceipt) -> String {
  let mut body = format!(
    "<h1>Thank You</h1>\n<p class=\"success\">{}</p>\n<p>Please keep {} in cash ready on delivery.</p>\n",
    escape(message),
    receipt.amount
  );
  receipt_lines(&mut body, receipt);
  body.push_str("<p><a href=\"/home\">Back to menu</a></p>\n");
  layout("Thank You", &body)
}

pub fn error_page(message: &str) -> String {
  let body = format!(
    "<h1>Something went wrong</h1>\n<p class=\"error\">{}</p>\n<p><a href=\"/\">Home</a></p>\n",
    escape(message)
  );
  layout("Error", &body)
}
