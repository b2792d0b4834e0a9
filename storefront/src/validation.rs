//! Input validation helpers for signup and account flows

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{StorefrontError, StorefrontResult};

/// One local part, one domain with a dot, no whitespace anywhere.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("invalid email pattern"));

/// Legal driving age by country code
const DRIVING_AGES: &[(&str, u32)] = &[("US", 16), ("UK", 17)];

const USERNAME_MIN: usize = 5;
const USERNAME_MAX: usize = 15;

/// Check that an address has a standard email shape
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Check username length against the account limits
pub fn is_valid_username(username: &str) -> bool {
    (USERNAME_MIN..=USERNAME_MAX).contains(&username.chars().count())
}

/// A field that failed signup-form validation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputIssue {
    InvalidUsername,
    InvalidAge,
}

impl std::fmt::Display for InputIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputIssue::InvalidUsername => write!(f, "Invalid username"),
            InputIssue::InvalidAge => write!(f, "Invalid age"),
        }
    }
}

/// Validate a signup form.
///
/// Usernames must be 3 to 15 characters, ages 18 to 100. All failing fields
/// are reported, not just the first.
pub fn validate_user_input(username: &str, age: u32) -> Result<(), Vec<InputIssue>> {
    let mut issues = Vec::new();

    let name_len = username.chars().count();
    if !(3..=15).contains(&name_len) {
        issues.push(InputIssue::InvalidUsername);
    }

    if !(18..=100).contains(&age) {
        issues.push(InputIssue::InvalidAge);
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

/// Whether someone of `age` may drive in the given country
pub fn can_drive(age: u32, country_code: &str) -> StorefrontResult<bool> {
    let code = country_code.to_ascii_uppercase();
    DRIVING_AGES
        .iter()
        .find(|(country, _)| *country == code)
        .map(|(_, minimum)| age >= *minimum)
        .ok_or(StorefrontError::UnsupportedCountry { code })
}
