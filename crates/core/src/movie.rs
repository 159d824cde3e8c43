//! Movie field constraints and custom validators.
//!
//! Used by the `validator` derive on the movie input DTO.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use validator::ValidationError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const ENTITY: &str = "Movie";

/// Maximum accepted price (inclusive).
pub const MAX_PRICE: i64 = 1000;

/// Number of decimal places a price may carry (matches `NUMERIC(18, 2)`).
pub const PRICE_SCALE: u32 = 2;

static GENRE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^[A-Z]+[a-zA-Z"'\s-]*$"#).expect("valid genre regex"));

static RATING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^[A-Z]+[a-zA-Z0-9"'\s-]*$"#).expect("valid rating regex"));

// ---------------------------------------------------------------------------
// Validators
// ---------------------------------------------------------------------------

/// Genre must start with an uppercase letter and contain only letters,
/// whitespace, quotes and hyphens.
pub fn validate_genre(genre: &str) -> Result<(), ValidationError> {
    if GENRE_RE.is_match(genre) {
        Ok(())
    } else {
        Err(error(
            "genre_format",
            "Genre must start with an uppercase letter and contain only letters.",
        ))
    }
}

/// Rating may be empty; otherwise it must start with an uppercase letter.
pub fn validate_rating(rating: &str) -> Result<(), ValidationError> {
    if rating.is_empty() || RATING_RE.is_match(rating) {
        Ok(())
    } else {
        Err(error(
            "rating_format",
            "Rating must start with an uppercase letter.",
        ))
    }
}

/// Price must lie in `[0, MAX_PRICE]` with at most two decimal places.
pub fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() || *price > Decimal::from(MAX_PRICE) {
        return Err(error(
            "price_range",
            "Price must be between 0 and 1000.",
        ));
    }
    if price.normalize().scale() > PRICE_SCALE {
        return Err(error(
            "price_scale",
            "Price may have at most two decimal places.",
        ));
    }
    Ok(())
}

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
