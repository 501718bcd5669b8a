//! Input validation utilities

use regex::Regex;
use std::sync::OnceLock;

/// Validate email
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email is required".to_string());
    }

    if email.len() > 254 {
        return Err("Email must be at most 254 characters long".to_string());
    }

    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    if !regex.is_match(email) {
        return Err("Invalid email format".to_string());
    }

    Ok(())
}

/// Validate phone number
///
/// The number must fall in [1000000000, 9999999999], i.e. be exactly ten
/// digits with no leading zero.
pub fn validate_ph_number(ph_number: i64) -> Result<(), String> {
    if !(1_000_000_000..=9_999_999_999).contains(&ph_number) {
        return Err("Phone number must be exactly 10 digits".to_string());
    }

    Ok(())
}
