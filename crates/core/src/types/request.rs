//! Request and response bodies exchanged with the API.

use serde::{Deserialize, Serialize};

use super::id::PlaceId;

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Success body of `POST /auth/login`.
///
/// Only the access token is read; refresh tokens and user ids are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}

/// Body of `POST /reviews`.
///
/// `rating` and `place_id` serialize as `null` when the form or the page
/// did not provide them; the API is left to reject such a review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewReview {
    pub user: String,
    pub rating: Option<i64>,
    pub comment: String,
    pub place_id: Option<PlaceId>,
}

/// Parse the leading integer of a form field value.
///
/// Leading whitespace and a single sign are accepted and parsing stops at
/// the first non-digit, so `"4.5"` yields `4` and `"3 stars"` yields `3`.
/// Returns `None` when no digit leads the value.
///
/// ```
/// use hbnb_core::parse_leading_int;
///
/// assert_eq!(parse_leading_int("5"), Some(5));
/// assert_eq!(parse_leading_int(" 4.5"), Some(4));
/// assert_eq!(parse_leading_int("-2"), Some(-2));
/// assert_eq!(parse_leading_int("five"), None);
/// ```
#[must_use]
pub fn parse_leading_int(value: &str) -> Option<i64> {
    let value = value.trim_start();
    let (negative, digits) = match value.as_bytes().first() {
        Some(b'-') => (true, value.get(1..).unwrap_or_default()),
        Some(b'+') => (false, value.get(1..).unwrap_or_default()),
        _ => (false, value),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let magnitude: i64 = digits.get(..end)?.parse().ok()?;

    Some(if negative { -magnitude } else { magnitude })
}
