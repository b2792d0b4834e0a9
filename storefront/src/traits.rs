//! Trait definitions with mockall annotations for testing
//!
//! This module contains the collaborator contracts consumed by
//! [`OrderFlowService`](crate::service::OrderFlowService). The collaborators
//! are externally-owned capabilities; the service only reads their return
//! values and never constructs them itself. Every trait carries a mockall
//! annotation so tests can substitute generated mocks.

use chrono::{DateTime, Local};
use shared::{ChargeResult, CreditCard, ShippingQuote};

use crate::error::StorefrontResult;

/// Currency conversion rate source
///
/// # Returns
/// The conversion multiplier from the USD-equivalent base to the target
/// currency. There is no bound on the value; the order flow accepts any
/// numeric rate as-is. An unknown code is a collaborator fault.
#[mockall::automock]
#[async_trait::async_trait]
pub trait CurrencyRateProvider: Send + Sync {
    async fn rate(&self, currency_code: &str) -> StorefrontResult<f64>;
}

/// Shipping quote source
///
/// `None` signals that no shipping is available for the destination; it is
/// the natural "no data" branch, not a fault.
#[mockall::automock]
#[async_trait::async_trait]
pub trait ShippingQuoteProvider: Send + Sync {
    async fn quote(&self, destination: &str) -> StorefrontResult<Option<ShippingQuote>>;
}

/// Page-view analytics sink
///
/// Fire-and-forget notification; the order flow never consumes a return
/// value from the tracker.
#[mockall::automock]
#[async_trait::async_trait]
pub trait AnalyticsTracker: Send + Sync {
    async fn track_page_view(&self, path: &str);
}

/// Payment gateway boundary
///
/// # Parameters
/// - `credit_card`: opaque payment token, passed through unmodified
/// - `amount`: charge amount in the store base currency
///
/// # Returns
/// The gateway's charge result. Only its `status` drives order-flow
/// branching; a gateway fault (the call itself erring) is propagated
/// unchanged by the caller.
#[mockall::automock]
#[async_trait::async_trait]
pub trait PaymentCharger: Send + Sync {
    async fn charge(&self, credit_card: &CreditCard, amount: f64) -> StorefrontResult<ChargeResult>;
}

/// Outbound email transport
///
/// Called at most once per signup or login attempt.
#[mockall::automock]
#[async_trait::async_trait]
pub trait EmailSender: Send + Sync {
    async fn send_email(&self, address: &str, body: &str) -> StorefrontResult<()>;
}

/// One-time login code source
///
/// Produces one value per call; the caller reuses that exact value for the
/// login email body.
#[mockall::automock]
pub trait SecurityCodeGenerator: Send + Sync {
    fn generate_code(&self) -> u32;
}

/// Wall-clock source, injected so business-hours checks stay deterministic
/// under test
#[mockall::automock]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}
