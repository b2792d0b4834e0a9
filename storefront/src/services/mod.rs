//! Service implementations
//!
//! This module contains production implementations of the collaborator
//! traits: the lookup tables, the sandbox payment gateway, and the
//! development transports behind the order flow.

pub mod analytics;
pub mod clock;
pub mod currency;
pub mod email;
pub mod payment;
pub mod security;
pub mod shipping;

#[cfg(test)]
mod tests;

// Re-export all service implementations
pub use analytics::RealAnalyticsTracker;
pub use clock::SystemClock;
pub use currency::RealCurrencyRates;
pub use email::{RealEmailSender, SentEmail};
pub use payment::RealPaymentCharger;
pub use security::RealSecurityCodeGenerator;
pub use shipping::RealShippingQuotes;
