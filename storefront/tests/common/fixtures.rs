//! Test fixtures and data for order-flow tests
//!
//! This module provides consistent test data used across the test suites.

use chrono::{DateTime, Local, TimeZone};
use shared::{CreditCard, Order, ShippingQuote};

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    /// Standard order total used when the amount itself is not under test
    pub const DEFAULT_TOTAL: f64 = 10.0;

    /// Standard test card number
    pub const TEST_CARD_NUMBER: u64 = 1234;

    pub const VALID_EMAIL: &'static str = "mail@example.com";
    pub const INVALID_EMAIL: &'static str = "a";

    pub fn order() -> Order {
        Order {
            total_amount: Self::DEFAULT_TOTAL,
        }
    }

    pub fn credit_card() -> CreditCard {
        CreditCard {
            credit_card_number: Self::TEST_CARD_NUMBER,
        }
    }

    pub fn quote(cost: f64, estimated_days: u32) -> ShippingQuote {
        ShippingQuote {
            cost,
            estimated_days,
        }
    }

    /// A fixed calendar day at the given local wall-clock time
    pub fn local_time(hour: u32, minute: u32) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2025, 3, 22, hour, minute, 0)
            .unwrap()
    }
}
