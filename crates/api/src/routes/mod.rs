pub mod actors;
pub mod health;
pub mod movies;

use axum::Router;

use crate::state::AppState;

/// Build the page route tree.
///
/// Route hierarchy:
///
/// ```text
/// /Movies                      index (searchString, selectedGenre)
/// /Movies/Details[/{id}]       details
/// /Movies/Create               create form, create
/// /Movies/Edit[/{id}]          edit form, edit
/// /Movies/Delete[/{id}]        delete confirmation, delete
///
/// /Actors                      index
/// /Actors/Details[/{id}]       details
/// /Actors/Create               create form, create
/// /Actors/Edit[/{id}]          edit form, edit
/// /Actors/Delete[/{id}]        delete confirmation, delete
/// ```
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .nest("/Movies", movies::router())
        .nest("/Actors", actors::router())
}
