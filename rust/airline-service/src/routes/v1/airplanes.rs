use airline_core::models::{AirplanePatch, NewAirplane};
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
    body: Result<Json<NewAirplane>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(new) = body?;
    let airplane = state.with_db(|db| db.create_airplane(&new))?;
    info!(id = airplane.id, model_number = %airplane.model_number, "airplane created");
    Ok(created("Successfully created an airplane", airplane))
}

async fn list(State(state): State<AppState>) -> Result<Response, AppError> {
    let airplanes = state.with_db(|db| db.list_airplanes())?;
    Ok(ok("Successfully fetched airplanes", airplanes))
}

async fn fetch(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Response, AppError> {
    let Path(id) = id?;
    let airplane = state
        .with_db(|db| db.fetch_airplane(id))?
        .ok_or_else(|| AppError::NotFound(format!("airplane with id {id} not found")))?;
    Ok(ok("Successfully fetched the airplane", airplane))
}

async fn update(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<AirplanePatch>, JsonRejection>,
) -> Result<Response, AppError> {
    let Path(id) = id?;
    let Json(patch) = body?;
    let airplane = state.with_db(|db| db.update_airplane(id, &patch))?;
    Ok(ok("Successfully updated the airplane", airplane))
}

async fn remove(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Response, AppError> {
    let Path(id) = id?;
    let deleted = state.with_db(|db| db.delete_airplane(id))?;
    info!(id, "airplane deleted");
    Ok(ok("Successfully deleted the airplane", json!({ "deleted": deleted })))
}
