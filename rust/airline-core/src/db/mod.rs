use std::path::Path;

use rusqlite::{Connection, Transaction};

use crate::error::Result;

pub mod airplanes;
pub mod airports;
pub mod cities;
pub mod flights;
pub mod open;
pub mod queries;
pub mod schema;

pub use flights::{FlightFilter, FlightQuery, SortDir, SortField};
pub use open::DbOpenConfig;

/// Read-write handle on the airline store. Opening always brings the schema
/// up to date.
pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn open<P: AsRef<Path>>(path: P, cfg: &DbOpenConfig) -> Result<Self> {
        let conn = open::open_read_write_with_config(path, cfg)?;
        Self::from_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        open::apply_pragmas(&conn, &DbOpenConfig::default())?;
        Self::from_connection(conn)
    }

    /// Construct from an existing connection (useful for tests). Runs pending migrations.
    pub fn from_connection(mut conn: Connection) -> Result<Self> {
        schema::migrate(&mut conn)?;
        Ok(Self { conn })
    }

    pub fn conn(&self) -> &Connection { &self.conn }

    pub fn transaction(&mut self) -> Result<Transaction<'_>> {
        Ok(self.conn.transaction()?)
    }

    pub fn schema_version(&self) -> Result<i64> {
        Ok(schema::schema_version(&self.conn)?)
    }
}
