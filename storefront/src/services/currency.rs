//! Production currency rate lookup
//!
//! Rates come from a static USD-base table. Deployments can pin a rate
//! without a code change by setting `FX_RATE_<CODE>` in the environment or
//! the `.env` file; environment values take precedence over the table.

use crate::error::{StorefrontError, StorefrontResult};
use crate::traits::CurrencyRateProvider;

/// Real currency rate source backed by the built-in table
pub struct RealCurrencyRates;

impl RealCurrencyRates {
    /// Built-in conversion multipliers from the USD base
    const BASE_RATES: &'static [(&'static str, f64)] = &[
        ("USD", 1.0),
        ("EUR", 0.92),
        ("GBP", 0.79),
        ("AUD", 1.52),
        ("JPY", 155.2),
        ("BDT", 117.5),
    ];

    fn env_override(code: &str) -> Option<StorefrontResult<f64>> {
        let field = format!("FX_RATE_{code}");
        let raw = std::env::var(&field).ok()?;
        Some(
            raw.parse::<f64>()
                .map_err(|_| StorefrontError::ConfigurationError { field }),
        )
    }
}

#[async_trait::async_trait]
impl CurrencyRateProvider for RealCurrencyRates {
    async fn rate(&self, currency_code: &str) -> StorefrontResult<f64> {
        let code = currency_code.to_ascii_uppercase();

        if let Some(pinned) = Self::env_override(&code) {
            return pinned;
        }

        Self::BASE_RATES
            .iter()
            .find(|(candidate, _)| *candidate == code)
            .map(|(_, rate)| *rate)
            .ok_or(StorefrontError::UnknownCurrency { code })
    }
}
