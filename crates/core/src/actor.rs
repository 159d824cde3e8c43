//! Actor field constraints.

use std::borrow::Cow;

use chrono::NaiveDate;
use validator::ValidationError;

pub const ENTITY: &str = "Actor";

/// Earliest accepted birth date.
pub const MIN_BORN_YEAR: i32 = 1850;

/// Birth dates before [`MIN_BORN_YEAR`] are rejected as data-entry mistakes.
pub fn validate_born_date(born_date: &NaiveDate) -> Result<(), ValidationError> {
    let earliest = NaiveDate::from_ymd_opt(MIN_BORN_YEAR, 1, 1).unwrap_or(NaiveDate::MIN);
    if *born_date < earliest {
        let mut err = ValidationError::new("born_date_range");
        err.message = Some(Cow::Borrowed("Born date must be on or after 1850-01-01."));
        return Err(err);
    }
    Ok(())
}
