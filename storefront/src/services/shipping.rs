//! Production shipping quote lookup
//!
//! Quotes come from a flat destination table. Destinations outside the table
//! have no carrier coverage, which the trait reports as `None`.

use shared::ShippingQuote;

use crate::error::StorefrontResult;
use crate::traits::ShippingQuoteProvider;

/// Real shipping quote source backed by the carrier zone table
pub struct RealShippingQuotes;

impl RealShippingQuotes {
    /// (destination, cost, estimated days) per served zone
    const ZONES: &'static [(&'static str, f64, u32)] = &[
        ("New York", 15.0, 2),
        ("Dhaka", 10.0, 3),
        ("London", 25.0, 5),
        ("Sydney", 40.0, 9),
    ];
}

#[async_trait::async_trait]
impl ShippingQuoteProvider for RealShippingQuotes {
    async fn quote(&self, destination: &str) -> StorefrontResult<Option<ShippingQuote>> {
        let quote = Self::ZONES
            .iter()
            .find(|(zone, _, _)| zone.eq_ignore_ascii_case(destination))
            .map(|(_, cost, estimated_days)| ShippingQuote {
                cost: *cost,
                estimated_days: *estimated_days,
            });

        Ok(quote)
    }
}
