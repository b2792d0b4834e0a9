//! Coupon catalog and price helpers

use crate::error::{StorefrontError, StorefrontResult};

/// A discount coupon; `discount` is the fraction taken off the price
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coupon {
    pub code: &'static str,
    pub discount: f64,
}

/// The active coupon catalog
pub const COUPONS: &[Coupon] = &[
    Coupon {
        code: "SAVE10",
        discount: 0.1,
    },
    Coupon {
        code: "SAVE20",
        discount: 0.2,
    },
];

/// Apply a coupon code to a price.
///
/// An unknown code leaves the price unchanged; a negative or non-finite
/// price is a caller error.
pub fn apply_discount(price: f64, coupon_code: &str) -> StorefrontResult<f64> {
    if !price.is_finite() || price < 0.0 {
        return Err(StorefrontError::InvalidPrice { price });
    }

    let discounted = match COUPONS.iter().find(|coupon| coupon.code == coupon_code) {
        Some(coupon) => price * (1.0 - coupon.discount),
        None => price,
    };

    Ok(discounted)
}

/// Inclusive range check used by catalog price filters
pub fn is_price_in_range(price: f64, min: f64, max: f64) -> bool {
    (min..=max).contains(&price)
}
