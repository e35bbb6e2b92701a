use airline_core::models::{AirportPatch, NewAirport};
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
    body: Result<Json<NewAirport>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(new) = body?;
    let airport = state.with_db(|db| db.create_airport(&new))?;
    info!(id = airport.id, code = %airport.code, city_id = airport.city_id, "airport created");
    Ok(created("Successfully created an airport", airport))
}

async fn list(State(state): State<AppState>) -> Result<Response, AppError> {
    let airports = state.with_db(|db| db.list_airports())?;
    Ok(ok("Successfully fetched airports", airports))
}

async fn fetch(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Response, AppError> {
    let Path(id) = id?;
    let airport = state
        .with_db(|db| db.fetch_airport(id))?
        .ok_or_else(|| AppError::NotFound(format!("airport with id {id} not found")))?;
    Ok(ok("Successfully fetched the airport", airport))
}

async fn update(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<AirportPatch>, JsonRejection>,
) -> Result<Response, AppError> {
    let Path(id) = id?;
    let Json(patch) = body?;
    let airport = state.with_db(|db| db.update_airport(id, &patch))?;
    Ok(ok("Successfully updated the airport", airport))
}

async fn remove(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Response, AppError> {
    let Path(id) = id?;
    let deleted = state.with_db(|db| db.delete_airport(id))?;
    info!(id, "airport deleted");
    Ok(ok("Successfully deleted the airport", json!({ "deleted": deleted })))
}
