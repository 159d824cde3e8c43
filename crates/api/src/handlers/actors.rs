//! Handlers for the `/Actors` pages.

use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use cinedex_core::actor::ENTITY;
use cinedex_core::concurrency::UpdateOutcome;
use cinedex_core::error::CoreError;
use cinedex_db::models::actor::Actor;
use cinedex_db::repositories::ActorRepo;

use crate::error::{AppError, AppResult};
use crate::extract::OptionalId;
use crate::forms::{ActorEditForm, ActorForm};
use crate::response::{FormData, View};
use crate::state::AppState;

/// Listing route every successful write redirects to.
pub const INDEX_PATH: &str = "/Actors";

const INDEX_VIEW: &str = "Actors/Index";
const DETAILS_VIEW: &str = "Actors/Details";
const CREATE_VIEW: &str = "Actors/Create";
const EDIT_VIEW: &str = "Actors/Edit";
const DELETE_VIEW: &str = "Actors/Delete";

async fn find_actor(state: &AppState, id: OptionalId) -> AppResult<Actor> {
    let id = id.require(ENTITY)?;
    ActorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))
}

/// GET /Actors
pub async fn index(State(state): State<AppState>) -> AppResult<View<Vec<Actor>>> {
    let actors = ActorRepo::list(&state.pool).await?;
    Ok(View::new(INDEX_VIEW, actors))
}

/// GET /Actors/Details/{id}
pub async fn details(State(state): State<AppState>, id: OptionalId) -> AppResult<View<Actor>> {
    let actor = find_actor(&state, id).await?;
    Ok(View::new(DETAILS_VIEW, actor))
}

/// GET /Actors/Create
pub async fn create_form() -> View<FormData<ActorForm>> {
    View::new(CREATE_VIEW, FormData::new(ActorForm::default()))
}

/// POST /Actors/Create
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<ActorForm>,
) -> AppResult<Response> {
    let input = match form.bind() {
        Ok(input) => input,
        Err(errors) => {
            return Ok(View::new(CREATE_VIEW, FormData::with_errors(form, errors)).into_response())
        }
    };

    let actor = ActorRepo::create(&state.pool, &input).await?;
    tracing::info!(actor_id = actor.id, "Actor created");

    Ok(Redirect::to(INDEX_PATH).into_response())
}

/// GET /Actors/Edit/{id}
pub async fn edit_form(
    State(state): State<AppState>,
    id: OptionalId,
) -> AppResult<View<FormData<ActorEditForm>>> {
    let actor = find_actor(&state, id).await?;
    Ok(View::new(
        EDIT_VIEW,
        FormData::new(ActorEditForm::from(&actor)),
    ))
}

/// POST /Actors/Edit/{id}
pub async fn edit(
    State(state): State<AppState>,
    id: OptionalId,
    Form(form): Form<ActorEditForm>,
) -> AppResult<Response> {
    let id = id.require(ENTITY)?;
    if form.submitted_id() != Some(id) {
        tracing::warn!(path_id = id, submitted_id = ?form.id, "Actor id mismatch on edit");
        return Err(AppError::not_found(ENTITY, id));
    }

    let (expected_version, input) = match form.bind() {
        Ok(bound) => bound,
        Err(errors) => {
            return Ok(View::new(EDIT_VIEW, FormData::with_errors(form, errors)).into_response())
        }
    };

    match ActorRepo::update(&state.pool, id, expected_version, &input).await? {
        UpdateOutcome::Updated(actor) => {
            tracing::info!(actor_id = actor.id, row_version = actor.row_version, "Actor updated");
            Ok(Redirect::to(INDEX_PATH).into_response())
        }
        UpdateOutcome::ConflictGone => Err(AppError::not_found(ENTITY, id)),
        UpdateOutcome::ConflictStillPresent => {
            tracing::error!(actor_id = id, expected_version, "Concurrent modification of actor");
            Err(AppError::Core(CoreError::Conflict(format!(
                "Actor {id} was modified by another request"
            ))))
        }
    }
}

/// GET /Actors/Delete/{id}
pub async fn delete_confirm(
    State(state): State<AppState>,
    id: OptionalId,
) -> AppResult<View<Actor>> {
    let actor = find_actor(&state, id).await?;
    Ok(View::new(DELETE_VIEW, actor))
}

/// POST /Actors/Delete/{id}
pub async fn delete(State(state): State<AppState>, id: OptionalId) -> AppResult<Redirect> {
    let id = id.require(ENTITY)?;
    if ActorRepo::delete(&state.pool, id).await? {
        tracing::info!(actor_id = id, "Actor deleted");
    } else {
        tracing::warn!(actor_id = id, "Actor already deleted");
    }
    Ok(Redirect::to(INDEX_PATH))
}
