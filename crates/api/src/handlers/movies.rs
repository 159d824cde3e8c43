//! Handlers for the `/Movies` pages.
//!
//! Reads render a [`View`]; successful writes redirect to the listing.
//! Failed form submissions re-render the form with the posted values.

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use cinedex_core::concurrency::UpdateOutcome;
use cinedex_core::error::CoreError;
use cinedex_core::filter::MovieFilter;
use cinedex_core::movie::ENTITY;
use cinedex_core::types::DbId;
use cinedex_db::models::movie::{Movie, MovieGenreListing};
use cinedex_db::repositories::MovieRepo;

use crate::error::{AppError, AppResult};
use crate::extract::OptionalId;
use crate::forms::{MovieEditForm, MovieForm};
use crate::query::MovieIndexParams;
use crate::response::{FormData, View};
use crate::state::AppState;

/// Listing route every successful write redirects to.
pub const INDEX_PATH: &str = "/Movies";

const INDEX_VIEW: &str = "Movies/Index";
const DETAILS_VIEW: &str = "Movies/Details";
const CREATE_VIEW: &str = "Movies/Create";
const EDIT_VIEW: &str = "Movies/Edit";
const DELETE_VIEW: &str = "Movies/Delete";

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Load a movie by id, mapping a missing id or row to "not found".
async fn find_movie(state: &AppState, id: OptionalId) -> AppResult<Movie> {
    let id = id.require(ENTITY)?;
    MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /Movies?searchString=&selectedGenre=
///
/// List movies filtered by title substring and/or exact genre, together with
/// the distinct genre list for the selection control.
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<MovieIndexParams>,
) -> AppResult<View<MovieGenreListing>> {
    let filter = MovieFilter::new(
        params.search_string.as_deref(),
        params.selected_genre.as_deref(),
    );

    let genres = MovieRepo::list_genres(&state.pool).await?;
    let movies = MovieRepo::list(&state.pool, &filter).await?;

    Ok(View::new(
        INDEX_VIEW,
        MovieGenreListing {
            movies,
            genres,
            selected_genre: filter.genre().map(str::to_string),
            search_string: filter.search().map(str::to_string),
        },
    ))
}

/// GET /Movies/Details/{id}
pub async fn details(State(state): State<AppState>, id: OptionalId) -> AppResult<View<Movie>> {
    let movie = find_movie(&state, id).await?;
    Ok(View::new(DETAILS_VIEW, movie))
}

/// GET /Movies/Create
pub async fn create_form() -> View<FormData<MovieForm>> {
    View::new(CREATE_VIEW, FormData::new(MovieForm::default()))
}

/// POST /Movies/Create
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<MovieForm>,
) -> AppResult<Response> {
    let input = match form.bind() {
        Ok(input) => input,
        Err(errors) => {
            return Ok(View::new(CREATE_VIEW, FormData::with_errors(form, errors)).into_response())
        }
    };

    let movie = MovieRepo::create(&state.pool, &input).await?;
    tracing::info!(movie_id = movie.id, title = %movie.title, "Movie created");

    Ok(Redirect::to(INDEX_PATH).into_response())
}

/// GET /Movies/Edit/{id}
pub async fn edit_form(
    State(state): State<AppState>,
    id: OptionalId,
) -> AppResult<View<FormData<MovieEditForm>>> {
    let movie = find_movie(&state, id).await?;
    Ok(View::new(
        EDIT_VIEW,
        FormData::new(MovieEditForm::from(&movie)),
    ))
}

/// POST /Movies/Edit/{id}
///
/// The submitted `id` must equal the path id. The update is guarded by the
/// submitted `row_version`; a row deleted in the meantime is "not found",
/// a row modified in the meantime is an unrecovered conflict.
pub async fn edit(
    State(state): State<AppState>,
    id: OptionalId,
    Form(form): Form<MovieEditForm>,
) -> AppResult<Response> {
    let id: DbId = id.require(ENTITY)?;
    if form.submitted_id() != Some(id) {
        tracing::warn!(path_id = id, submitted_id = ?form.id, "Movie id mismatch on edit");
        return Err(AppError::not_found(ENTITY, id));
    }

    let (expected_version, input) = match form.bind() {
        Ok(bound) => bound,
        Err(errors) => {
            return Ok(View::new(EDIT_VIEW, FormData::with_errors(form, errors)).into_response())
        }
    };

    match MovieRepo::update(&state.pool, id, expected_version, &input).await? {
        UpdateOutcome::Updated(movie) => {
            tracing::info!(movie_id = movie.id, row_version = movie.row_version, "Movie updated");
            Ok(Redirect::to(INDEX_PATH).into_response())
        }
        UpdateOutcome::ConflictGone => Err(AppError::not_found(ENTITY, id)),
        UpdateOutcome::ConflictStillPresent => {
            tracing::error!(movie_id = id, expected_version, "Concurrent modification of movie");
            Err(AppError::Core(CoreError::Conflict(format!(
                "Movie {id} was modified by another request"
            ))))
        }
    }
}

/// GET /Movies/Delete/{id}
pub async fn delete_confirm(
    State(state): State<AppState>,
    id: OptionalId,
) -> AppResult<View<Movie>> {
    let movie = find_movie(&state, id).await?;
    Ok(View::new(DELETE_VIEW, movie))
}

/// POST /Movies/Delete/{id}
///
/// Deletes without re-reading the row. A row that is already gone is a
/// no-op and still redirects to the listing.
pub async fn delete(State(state): State<AppState>, id: OptionalId) -> AppResult<Redirect> {
    let id = id.require(ENTITY)?;
    if MovieRepo::delete(&state.pool, id).await? {
        tracing::info!(movie_id = id, "Movie deleted");
    } else {
        tracing::warn!(movie_id = id, "Movie already deleted");
    }
    Ok(Redirect::to(INDEX_PATH))
}
