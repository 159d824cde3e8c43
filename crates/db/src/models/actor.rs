//! Actor entity model and DTOs.

use chrono::NaiveDate;
use cinedex_core::actor::validate_born_date;
use cinedex_core::types::{DbId, RowVersion};
use serde::Serialize;
use sqlx::FromRow;
use validator::Validate;

/// A row from the `actor` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Actor {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub born_date: NaiveDate,
    pub row_version: RowVersion,
}

/// User-editable actor fields, shared by create and update.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct ActorInput {
    #[validate(length(min = 1, max = 60, message = "First name must be between 1 and 60 characters."))]
    pub first_name: String,
    #[validate(length(min = 1, max = 60, message = "Last name must be between 1 and 60 characters."))]
    pub last_name: String,
    #[validate(range(min = 0, max = 150, message = "Age must be between 0 and 150."))]
    pub age: i32,
    #[validate(custom(function = "validate_born_date"))]
    pub born_date: NaiveDate,
}
