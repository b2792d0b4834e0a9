//! Storefront-specific error types
//!
//! Only collaborator faults surface here. Domain-expected negative outcomes
//! (an invalid email, a missing shipping quote, a declined charge) are
//! ordinary return values, never errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error("Unknown currency code: {code}")]
    UnknownCurrency { code: String },

    #[error("Invalid charge amount: {amount}")]
    InvalidChargeAmount { amount: f64 },

    #[error("Payment gateway error: {message}")]
    PaymentGateway { message: String },

    #[error("Email delivery failed for {address}: {message}")]
    EmailDelivery { address: String, message: String },

    #[error("Invalid price: {price}")]
    InvalidPrice { price: f64 },

    #[error("Unsupported country code: {code}")]
    UnsupportedCountry { code: String },

    #[error("Configuration error: {field}")]
    ConfigurationError { field: String },

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type StorefrontResult<T> = Result<T, StorefrontError>;
