pub mod config;
pub mod errors;
pub mod response;
pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;

pub fn env_var(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}
