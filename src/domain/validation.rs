use rust_decimal::Decimal;
use std::str::FromStr;
use url::Url;

/// Returns true when the text is a non-negative decimal amount with at
/// most two fractional digits.
///
/// Policy: negative amounts are rejected and only `.` is accepted as the
/// decimal separator; there is no locale-aware grouping.
pub fn validate_amount(text: &str) -> bool {
    match Decimal::from_str(text) {
        Ok(amount) => !amount.is_sign_negative() && amount.scale() <= 2,
        Err(_) => false,
    }
}

/// A store id is any non-empty string, taken as typed.
pub fn validate_store_id(text: &str) -> bool {
    !text.is_empty()
}

/// Returns true when `scheme://host` forms a well-formed absolute URL.
pub fn validate_return_url(scheme: &str, host: &str) -> bool {
    Url::parse(&format!("{scheme}://{host}")).is_ok()
}
