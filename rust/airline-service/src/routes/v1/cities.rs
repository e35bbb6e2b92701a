use airline_core::models::{CityPatch, NewCity};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::response::Response;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tracing::info;

use crate::errors::AppError;
use crate::response::{created, ok};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create).get(list))
        .route("/:id", get(fetch).patch(update).delete(remove))
}

async fn create(
    State(state): State<AppState>,
    body: Result<Json<NewCity>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(new) = body?;
    let city = state.with_db(|db| db.create_city(&new))?;
    info!(id = city.id, name = %city.name, "city created");
    Ok(created("Successfully created a city", city))
}

async fn list(State(state): State<AppState>) -> Result<Response, AppError> {
    let cities = state.with_db(|db| db.list_cities())?;
    Ok(ok("Successfully fetched cities", cities))
}

async fn fetch(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Response, AppError> {
    let Path(id) = id?;
    let city = state
        .with_db(|db| db.fetch_city(id))?
        .ok_or_else(|| AppError::NotFound(format!("city with id {id} not found")))?;
    Ok(ok("Successfully fetched the city", city))
}

async fn update(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<CityPatch>, JsonRejection>,
) -> Result<Response, AppError> {
    let Path(id) = id?;
    let Json(patch) = body?;
    let city = state.with_db(|db| db.update_city(id, &patch))?;
    Ok(ok("Successfully updated the city", city))
}

async fn remove(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Response, AppError> {
    let Path(id) = id?;
    let deleted = state.with_db(|db| db.delete_city(id))?;
    info!(id, "city deleted");
    Ok(ok("Successfully deleted the city", json!({ "deleted": deleted })))
}
