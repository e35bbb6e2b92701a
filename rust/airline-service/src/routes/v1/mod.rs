use axum::{routing::get, Router};

use crate::state::AppState;

mod airplanes;
mod airports;
mod cities;
mod flights;
mod info;

pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/airplanes", airplanes::router())
        .nest("/cities", cities::router())
        .nest("/airports", airports::router())
        .nest("/flights", flights::router())
        .route("/info", get(info::info))
}
