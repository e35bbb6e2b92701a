use chrono::Utc;
use rusqlite::Connection;

use crate::db::cities::insert_city;
use crate::models::NewCity;
use crate::seeds::Seed;

pub const CITIES: &[&str] = &["New Delhi", "London", "Tokyo"];

pub struct CitiesSeed;

impl Seed for CitiesSeed {
    fn name(&self) -> &'static str { "city" }

    fn insert(&self, conn: &Connection) -> rusqlite::Result<usize> {
        let now = Utc::now();
        for name in CITIES {
            insert_city(conn, &NewCity { name: name.to_string() }, now)?;
        }
        Ok(CITIES.len())
    }

    fn keys(&self) -> Vec<&'static str> { CITIES.to_vec() }

    fn key_column(&self) -> (&'static str, &'static str) { ("Cities", "name") }
}
