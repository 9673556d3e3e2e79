//! Hero CRUD handlers (create, list, get, delete).
//!
//! Each handler acquires one session on the shared service (the mutex guard,
//! released on every exit path), performs exactly one storage operation, and
//! returns JSON. Create and list return the public projection; get-by-id
//! returns the full record, `secret_name` included.

use axum::extract::{Path, State};
use axum::Json;

use heroes_storage::{Hero, HeroId};

use crate::error::{ApiError, AppJson};
use crate::schema::heroes::{HeroCreate, HeroPublic};
use crate::state::AppState;

/// Creates a new hero and returns its public projection.
///
/// `POST /heroes/`
pub async fn create_hero(
    State(state): State<AppState>,
    AppJson(payload): AppJson<HeroCreate>,
) -> Result<Json<HeroPublic>, ApiError> {
    let mut service = state.service.lock().await;
    let hero = service.create_hero(payload.into())?;
    Ok(Json(HeroPublic::from(hero)))
}

/// Lists all heroes as public projections, ordered by id.
///
/// `GET /heroes/`
pub async fn list_heroes(
    State(state): State<AppState>,
) -> Result<Json<Vec<HeroPublic>>, ApiError> {
    let service = state.service.lock().await;
    let heroes = service.list_heroes()?;
    Ok(Json(heroes.into_iter().map(HeroPublic::from).collect()))
}

/// Returns the full stored record for one hero.
///
/// `GET /heroes/{hero_id}`
pub async fn get_hero(
    State(state): State<AppState>,
    Path(hero_id): Path<i64>,
) -> Result<Json<Hero>, ApiError> {
    let service = state.service.lock().await;
    let hero = service.get_hero(HeroId(hero_id))?;
    Ok(Json(hero))
}

/// Permanently deletes a hero.
///
/// `DELETE /heroes/{hero_id}`
pub async fn delete_hero(
    State(state): State<AppState>,
    Path(hero_id): Path<i64>,
) -> Result<Json<&'static str>, ApiError> {
    let mut service = state.service.lock().await;
    service.delete_hero(HeroId(hero_id))?;
    Ok(Json("Hero deleted successfully"))
}
