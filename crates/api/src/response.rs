//! Response types for API handlers.
//!
//! Page rendering is left to an external template layer. Handlers return a
//! [`View`] naming the page and carrying its model as
//! `{ "view": "Movies/Index", "data": ... }`.

use axum::response::{IntoResponse, Response};
use axum::Json;
use cinedex_core::binding::FieldErrors;
use serde::Serialize;

/// A named page and the model it renders.
#[derive(Debug, Serialize)]
pub struct View<T: Serialize> {
    pub view: &'static str,
    pub data: T,
}

impl<T: Serialize> View<T> {
    pub fn new(view: &'static str, data: T) -> Self {
        Self { view, data }
    }
}

impl<T: Serialize> IntoResponse for View<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// Model for a form page: the raw field values plus any field errors.
///
/// On a failed submission `values` echoes exactly what was posted.
#[derive(Debug, Serialize)]
pub struct FormData<T: Serialize> {
    pub values: T,
    pub errors: FieldErrors,
}

impl<T: Serialize> FormData<T> {
    pub fn new(values: T) -> Self {
        Self {
            values,
            errors: FieldErrors::new(),
        }
    }

    pub fn with_errors(values: T, errors: FieldErrors) -> Self {
        Self { values, errors }
    }
}
