//! Route definitions for the `/Movies` pages.

use axum::routing::get;
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

/// Routes mounted at `/Movies`.
///
/// ```text
/// GET  /                -> index
/// GET  /Details         -> details (not found)
/// GET  /Details/{id}    -> details
/// GET  /Create          -> create_form
/// POST /Create          -> create
/// GET  /Edit            -> edit_form (not found)
/// GET  /Edit/{id}       -> edit_form
/// POST /Edit/{id}       -> edit
/// GET  /Delete          -> delete_confirm (not found)
/// GET  /Delete/{id}     -> delete_confirm
/// POST /Delete/{id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movies::index))
        .route("/Details", get(movies::details))
        .route("/Details/{id}", get(movies::details))
        .route("/Create", get(movies::create_form).post(movies::create))
        .route("/Edit", get(movies::edit_form))
        .route("/Edit/{id}", get(movies::edit_form).post(movies::edit))
        .route("/Delete", get(movies::delete_confirm))
        .route(
            "/Delete/{id}",
            get(movies::delete_confirm).post(movies::delete),
        )
}
