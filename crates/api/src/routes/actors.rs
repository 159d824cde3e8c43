//! Route definitions for the `/Actors` pages.

use axum::routing::get;
use axum::Router;

use crate::handlers::actors;
use crate::state::AppState;

/// Routes mounted at `/Actors`.
///
/// ```text
/// GET  /                -> index
/// GET  /Details[/{id}]  -> details
/// GET  /Create          -> create_form
/// POST /Create          -> create
/// GET  /Edit[/{id}]     -> edit_form
/// POST /Edit/{id}       -> edit
/// GET  /Delete[/{id}]   -> delete_confirm
/// POST /Delete/{id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(actors::index))
        .route("/Details", get(actors::details))
        .route("/Details/{id}", get(actors::details))
        .route("/Create", get(actors::create_form).post(actors::create))
        .route("/Edit", get(actors::edit_form))
        .route("/Edit/{id}", get(actors::edit_form).post(actors::edit))
        .route("/Delete", get(actors::delete_confirm))
        .route(
            "/Delete/{id}",
            get(actors::delete_confirm).post(actors::delete),
        )
}
