//! Core domain types crossing the collaborator boundary

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// An order submitted through the checkout flow.
///
/// Created by the caller and read-only to the service; the service only ever
/// reads `total_amount` when charging.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub total_amount: f64,
}

/// Opaque payment token, passed through to the charger unmodified
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreditCard {
    pub credit_card_number: u64,
}

/// Outcome reported by the payment gateway for a single charge attempt
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChargeStatus {
    Success,
    Failed,
}

impl fmt::Display for ChargeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChargeStatus::Success => write!(f, "success"),
            ChargeStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Result of a charge attempt, produced by the payment gateway.
///
/// The gateway owns this shape; the order flow only inspects `status`. The
/// `reference` is the gateway's transaction id when one was allocated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChargeResult {
    pub status: ChargeStatus,
    pub reference: Option<Uuid>,
}

impl ChargeResult {
    /// A successful charge with a fresh gateway reference
    pub fn success() -> Self {
        Self {
            status: ChargeStatus::Success,
            reference: Some(Uuid::new_v4()),
        }
    }

    /// A declined charge; declined attempts carry no reference
    pub fn failed() -> Self {
        Self {
            status: ChargeStatus::Failed,
            reference: None,
        }
    }
}

/// A shipping quote for a destination
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShippingQuote {
    pub cost: f64,
    pub estimated_days: u32,
}

/// Why an order submission failed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderFailure {
    PaymentError,
}

impl fmt::Display for OrderFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderFailure::PaymentError => write!(f, "payment_error"),
        }
    }
}

/// Outcome of `submit_order`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "outcome")]
pub enum SubmitOrderResult {
    Success,
    Failure { error: OrderFailure },
}

impl SubmitOrderResult {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOrderResult::Success)
    }
}
