//! Sandbox payment gateway
//!
//! Behaves like the live gateway's test mode: a fixed set of test card
//! numbers always declines, a non-positive amount is rejected outright the
//! way the live gateway rejects a malformed charge request, and everything
//! else settles successfully with a fresh transaction reference.

use tracing::{debug, warn};

use shared::{ChargeResult, CreditCard};

use crate::error::{StorefrontError, StorefrontResult};
use crate::traits::PaymentCharger;

/// Real payment charger backed by the sandbox gateway rules
pub struct RealPaymentCharger {
    declined_cards: Vec<u64>,
}

impl RealPaymentCharger {
    /// Test card numbers the sandbox always declines
    pub const DECLINE_CARDS: &'static [u64] = &[4000_0000_0000_0002, 4000_0000_0000_9995];

    pub fn new() -> Self {
        Self {
            declined_cards: Self::DECLINE_CARDS.to_vec(),
        }
    }

    /// Sandbox with a custom decline list
    pub fn with_declined_cards(declined_cards: Vec<u64>) -> Self {
        Self { declined_cards }
    }
}

impl Default for RealPaymentCharger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl PaymentCharger for RealPaymentCharger {
    async fn charge(&self, credit_card: &CreditCard, amount: f64) -> StorefrontResult<ChargeResult> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(StorefrontError::InvalidChargeAmount { amount });
        }

        if self.declined_cards.contains(&credit_card.credit_card_number) {
            warn!("💳 Sandbox declined test card");
            return Ok(ChargeResult::failed());
        }

        let result = ChargeResult::success();
        debug!("💳 Charged {} (reference {:?})", amount, result.reference);
        Ok(result)
    }
}
