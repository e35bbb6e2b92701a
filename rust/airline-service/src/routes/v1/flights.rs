use airline_core::db::{FlightFilter, FlightQuery};
use airline_core::models::NewFlight;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::Response;
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::{info, info_span};

use crate::errors::AppError;
use crate::response::{created, ok};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SeatsRequest {
    pub seats: i64,
    #[serde(default = "default_dec")]
    pub dec: bool,
}

fn default_dec() -> bool { true }

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create).get(list))
        .route("/:id", get(fetch))
        .route("/:id/seats", patch(update_seats))
}

async fn create(
    State(state): State<AppState>,
    body: Result<Json<NewFlight>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(new) = body?;
    let flight = state.with_db(|db| db.create_flight(&new))?;
    info!(
        id = flight.id,
        flight_number = %flight.flight_number,
        from = %flight.departure_airport_id,
        to = %flight.arrival_airport_id,
        "flight created"
    );
    Ok(created("Successfully created a flight", flight))
}

async fn list(
    State(state): State<AppState>,
    query: Result<Query<FlightQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(query) = query?;
    let span = info_span!("list_flights", trips = query.trips.as_deref().unwrap_or("<any>"));
    let _enter = span.enter();

    let filter = FlightFilter::parse(&query)?;
    let flights = state.with_db(|db| db.list_flights(&filter))?;
    info!(matched = flights.len(), "flight search done");
    Ok(ok("Successfully fetched flights", flights))
}

async fn fetch(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Response, AppError> {
    let Path(id) = id?;
    let flight = state
        .with_db(|db| db.fetch_flight(id))?
        .ok_or_else(|| AppError::NotFound(format!("flight with id {id} not found")))?;
    Ok(ok("Successfully fetched the flight", flight))
}

async fn update_seats(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<SeatsRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Path(id) = id?;
    let Json(req) = body?;
    let flight = state.with_db(|db| db.adjust_flight_seats(id, req.seats, req.dec))?;
    info!(id, seats = req.seats, dec = req.dec, remaining = flight.total_seats, "flight seats updated");
    Ok(ok("Successfully updated the flight seats", flight))
}
