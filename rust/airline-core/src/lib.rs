pub mod db;
pub mod error;
pub mod models;
pub mod seeds;

pub use db::Database;
pub use error::StoreError;
pub use seeds::Seed;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
