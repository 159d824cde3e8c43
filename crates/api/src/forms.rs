//! Allow-listed form bindings for create and edit submissions.
//!
//! Each form struct names exactly the fields a submission may populate.
//! Anything else in the request body (including `id` on create) is dropped
//! by deserialization before binding runs. Values stay raw strings until
//! [`bind`](MovieForm::bind) so a failed submission can be echoed back.

use cinedex_core::binding::{self, FieldErrors, DATE_FORMAT};
use cinedex_core::types::{DbId, RowVersion};
use cinedex_db::models::actor::{Actor, ActorInput};
use cinedex_db::models::movie::{Movie, MovieInput};
use serde::{Deserialize, Serialize};
use validator::Validate;

// ---------------------------------------------------------------------------
// Movies
// ---------------------------------------------------------------------------

/// Movie create form: `title`, `release_date`, `genre`, `price`, `rating`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MovieForm {
    pub title: Option<String>,
    pub release_date: Option<String>,
    pub genre: Option<String>,
    pub price: Option<String>,
    pub rating: Option<String>,
}

impl MovieForm {
    /// Parse and validate the submitted values.
    pub fn bind(&self) -> Result<MovieInput, FieldErrors> {
        let mut errors = FieldErrors::new();
        let title = binding::required_text(&mut errors, "title", self.title.as_deref());
        let release_date =
            binding::required_date(&mut errors, "release_date", self.release_date.as_deref());
        let genre = binding::required_text(&mut errors, "genre", self.genre.as_deref());
        let price = binding::required_decimal(&mut errors, "price", self.price.as_deref());
        let rating = binding::optional_text(&mut errors, "rating", self.rating.as_deref());

        let (Some(title), Some(release_date), Some(genre), Some(price), Some(rating)) =
            (title, release_date, genre, price, rating)
        else {
            return Err(errors);
        };

        let input = MovieInput {
            title,
            genre,
            price,
            release_date,
            rating,
        };
        if let Err(validation) = input.validate() {
            errors.extend_from_validation(&validation);
        }
        errors.into_result(input)
    }
}

impl From<&Movie> for MovieForm {
    fn from(movie: &Movie) -> Self {
        Self {
            title: Some(movie.title.clone()),
            release_date: Some(movie.release_date.format(DATE_FORMAT).to_string()),
            genre: Some(movie.genre.clone()),
            price: Some(movie.price.to_string()),
            rating: Some(movie.rating.clone()),
        }
    }
}

/// Movie edit form: the create fields plus `id` and `row_version`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MovieEditForm {
    pub id: Option<String>,
    pub row_version: Option<String>,
    #[serde(flatten)]
    pub fields: MovieForm,
}

impl MovieEditForm {
    /// The submitted record id, if it parses.
    pub fn submitted_id(&self) -> Option<DbId> {
        parse_id(self.id.as_deref())
    }

    /// Parse and validate the submitted values and row version.
    pub fn bind(&self) -> Result<(RowVersion, MovieInput), FieldErrors> {
        let mut errors = FieldErrors::new();
        let version =
            binding::required_parsed::<RowVersion>(&mut errors, "row_version", self.row_version.as_deref());
        let input = self.fields.bind();
        merge(errors, version, input)
    }
}

impl From<&Movie> for MovieEditForm {
    fn from(movie: &Movie) -> Self {
        Self {
            id: Some(movie.id.to_string()),
            row_version: Some(movie.row_version.to_string()),
            fields: MovieForm::from(movie),
        }
    }
}

// ---------------------------------------------------------------------------
// Actors
// ---------------------------------------------------------------------------

/// Actor create form: `first_name`, `last_name`, `age`, `born_date`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ActorForm {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<String>,
    pub born_date: Option<String>,
}

impl ActorForm {
    /// Parse and validate the submitted values.
    pub fn bind(&self) -> Result<ActorInput, FieldErrors> {
        let mut errors = FieldErrors::new();
        let first_name =
            binding::required_text(&mut errors, "first_name", self.first_name.as_deref());
        let last_name = binding::required_text(&mut errors, "last_name", self.last_name.as_deref());
        let age = binding::required_parsed::<i32>(&mut errors, "age", self.age.as_deref());
        let born_date = binding::required_date(&mut errors, "born_date", self.born_date.as_deref());

        let (Some(first_name), Some(last_name), Some(age), Some(born_date)) =
            (first_name, last_name, age, born_date)
        else {
            return Err(errors);
        };

        let input = ActorInput {
            first_name,
            last_name,
            age,
            born_date,
        };
        if let Err(validation) = input.validate() {
            errors.extend_from_validation(&validation);
        }
        errors.into_result(input)
    }
}

impl From<&Actor> for ActorForm {
    fn from(actor: &Actor) -> Self {
        Self {
            first_name: Some(actor.first_name.clone()),
            last_name: Some(actor.last_name.clone()),
            age: Some(actor.age.to_string()),
            born_date: Some(actor.born_date.format(DATE_FORMAT).to_string()),
        }
    }
}

/// Actor edit form: the create fields plus `id` and `row_version`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ActorEditForm {
    pub id: Option<String>,
    pub row_version: Option<String>,
    #[serde(flatten)]
    pub fields: ActorForm,
}

impl ActorEditForm {
    /// The submitted record id, if it parses.
    pub fn submitted_id(&self) -> Option<DbId> {
        parse_id(self.id.as_deref())
    }

    /// Parse and validate the submitted values and row version.
    pub fn bind(&self) -> Result<(RowVersion, ActorInput), FieldErrors> {
        let mut errors = FieldErrors::new();
        let version =
            binding::required_parsed::<RowVersion>(&mut errors, "row_version", self.row_version.as_deref());
        let input = self.fields.bind();
        merge(errors, version, input)
    }
}

impl From<&Actor> for ActorEditForm {
    fn from(actor: &Actor) -> Self {
        Self {
            id: Some(actor.id.to_string()),
            row_version: Some(actor.row_version.to_string()),
            fields: ActorForm::from(actor),
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_id(raw: Option<&str>) -> Option<DbId> {
    raw.and_then(|v| v.trim().parse().ok())
}

/// Combine the row-version binding with the field binding, keeping every
/// error from both.
fn merge<T>(
    mut errors: FieldErrors,
    version: Option<RowVersion>,
    input: Result<T, FieldErrors>,
) -> Result<(RowVersion, T), FieldErrors> {
    match (version, input) {
        (Some(version), Ok(input)) => Ok((version, input)),
        (None, Ok(_)) => Err(errors),
        (_, Err(field_errors)) => {
            errors.merge(field_errors);
            Err(errors)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
