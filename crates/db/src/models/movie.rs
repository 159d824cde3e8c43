//! Movie entity model and DTOs.

use chrono::NaiveDate;
use cinedex_core::movie::{validate_genre, validate_price, validate_rating};
use cinedex_core::types::{DbId, RowVersion};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use validator::Validate;

/// A row from the `movie` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub genre: String,
    pub price: Decimal,
    pub release_date: NaiveDate,
    pub rating: String,
    pub row_version: RowVersion,
}

/// User-editable movie fields, shared by create and update.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct MovieInput {
    #[validate(length(min = 3, max = 60, message = "Title must be between 3 and 60 characters."))]
    pub title: String,
    #[validate(
        length(max = 30, message = "Genre must be at most 30 characters."),
        custom(function = "validate_genre")
    )]
    pub genre: String,
    #[validate(custom(function = "validate_price"))]
    pub price: Decimal,
    pub release_date: NaiveDate,
    #[validate(
        length(max = 5, message = "Rating must be at most 5 characters."),
        custom(function = "validate_rating")
    )]
    pub rating: String,
}

/// Genre selection view model for the movie listing.
#[derive(Debug, Clone, Serialize)]
pub struct MovieGenreListing {
    pub movies: Vec<Movie>,
    pub genres: Vec<String>,
    pub selected_genre: Option<String>,
    pub search_string: Option<String>,
}
