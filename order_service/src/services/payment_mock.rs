// order_service/src/services/payment_mock.rs

use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
  Online,
  Cash,
}

impl FromStr for PaymentMethod {
  type Err = AppError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "online" => Ok(PaymentMethod::Online),
      "cash" => Ok(PaymentMethod::Cash),
      other => Err(AppError::Validation(format!("Unknown payment method '{}'.", other))),
    }
  }
}

impl fmt::Display for PaymentMethod {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      PaymentMethod::Online => "online",
      PaymentMethod::Cash => "cash",
    })
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
  Succeeded,
  /// Cash is collected on delivery.
  DueOnDelivery,
}

impl PaymentStatus {
  pub fn label(self) -> &'static str {
    match self {
      PaymentStatus::Succeeded => "Paid",
      PaymentStatus::DueOnDelivery => "Due on delivery",
    }
  }
}

#[derive(Debug, Clone)]
pub struct PaymentReceipt {
  pub reference: String,
  pub method: PaymentMethod,
  pub amount: Money,
  pub status: PaymentStatus,
  pub processed_at: DateTime<Utc>,
}

/// Simulated payment. There is no gateway, so it never fails.
#[instrument(name = "payment_mock::simulate_payment", skip_all, fields(user_id = user_id, %method, %amount))]
pub async fn simulate_payment(user_id: i64, method: PaymentMethod, amount: Money) -> PaymentReceipt {
  let status = match method {
    PaymentMethod::Online => PaymentStatus::Succeeded,
    PaymentMethod::Cash => PaymentStatus::DueOnDelivery,
  };
  let reference = format!("mock_pay_{}", Uuid::new_v4().simple());
  info!(%reference, ?status, "Mock payment recorded.");

  PaymentReceipt {
    reference,
    method,
    amount,
    status,
    processed_at: Utc::now(),
  }
}
