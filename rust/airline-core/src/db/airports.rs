use chrono::Utc;
use rusqlite::{params, OptionalExtension, Row};

use crate::db::queries::*;
use crate::db::Database;
use crate::error::{Result, StoreError};
use crate::models::{Airport, AirportPatch, NewAirport};

const ENTITY: &str = "airport";

fn map_airport_row(r: &Row) -> rusqlite::Result<Airport> {
    Ok(Airport {
        id: r.get("id")?,
        name: r.get("name")?,
        code: r.get("code")?,
        address: r.get("address")?,
        city_id: r.get("cityId")?,
        created_at: r.get("createdAt")?,
        updated_at: r.get("updatedAt")?,
    })
}

impl Database {
    pub fn create_airport(&self, new: &NewAirport) -> Result<Airport> {
        self.conn().prepare_cached(INSERT_AIRPORT)?
            .execute(params![new.name, new.code, new.address, new.city_id, Utc::now()])?;
        let id = self.conn().last_insert_rowid();
        self.fetch_airport(id)?.ok_or(StoreError::NotFound { entity: ENTITY, id })
    }

    pub fn list_airports(&self) -> Result<Vec<Airport>> {
        let mut stmt = self.conn().prepare_cached(ALL_AIRPORTS)?;
        let mut rows = stmt.query([])?;
        let mut out = Vec::new();
        while let Some(r) = rows.next()? {
            out.push(map_airport_row(r)?);
        }
        Ok(out)
    }

    pub fn fetch_airport(&self, id: i64) -> Result<Option<Airport>> {
        let mut stmt = self.conn().prepare_cached(AIRPORT_BY_ID)?;
        let row = stmt.query_row(params![id], map_airport_row).optional()?;
        Ok(row)
    }

    pub fn update_airport(&self, id: i64, patch: &AirportPatch) -> Result<Airport> {
        let changed = self.conn().prepare_cached(UPDATE_AIRPORT)?
            .execute(params![
                id,
                patch.name,
                patch.code,
                patch.address.is_some(),
                patch.address.clone().flatten(),
                patch.city_id,
                Utc::now(),
            ])?;
        if changed == 0 {
            return Err(StoreError::NotFound { entity: ENTITY, id });
        }
        self.fetch_airport(id)?.ok_or(StoreError::NotFound { entity: ENTITY, id })
    }

    pub fn delete_airport(&self, id: i64) -> Result<usize> {
        let removed = self.conn().prepare_cached(DELETE_AIRPORT)?.execute(params![id])?;
        if removed == 0 {
            return Err(StoreError::NotFound { entity: ENTITY, id });
        }
        Ok(removed)
    }
}
