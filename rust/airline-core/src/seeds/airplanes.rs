use chrono::Utc;
use rusqlite::Connection;

use crate::db::airplanes::insert_airplane;
use crate::models::NewAirplane;
use crate::seeds::Seed;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AirplaneFixture {
    pub model_number: &'static str,
    pub capacity: i64,
}

pub const AIRPLANES: &[AirplaneFixture] = &[
    AirplaneFixture { model_number: "airbus388", capacity: 900 },
    AirplaneFixture { model_number: "airbus389", capacity: 500 },
];

pub struct AirplanesSeed;

impl Seed for AirplanesSeed {
    fn name(&self) -> &'static str { "add-airplanes" }

    fn insert(&self, conn: &Connection) -> rusqlite::Result<usize> {
        let now = Utc::now();
        for a in AIRPLANES {
            let row = NewAirplane { model_number: a.model_number.to_string(), capacity: a.capacity };
            insert_airplane(conn, &row, now)?;
        }
        Ok(AIRPLANES.len())
    }

    fn keys(&self) -> Vec<&'static str> {
        AIRPLANES.iter().map(|a| a.model_number).collect()
    }

    fn key_column(&self) -> (&'static str, &'static str) { ("Airplanes", "modelNumber") }
}
