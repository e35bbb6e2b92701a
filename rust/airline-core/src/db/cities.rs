use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::db::queries::*;
use crate::db::Database;
use crate::error::{Result, StoreError};
use crate::models::{City, CityPatch, NewCity, Timestamp};

const ENTITY: &str = "city";

fn map_city_row(r: &Row) -> rusqlite::Result<City> {
    Ok(City {
        id: r.get("id")?,
        name: r.get("name")?,
        created_at: r.get("createdAt")?,
        updated_at: r.get("updatedAt")?,
    })
}

pub(crate) fn insert_city(conn: &Connection, new: &NewCity, now: Timestamp) -> rusqlite::Result<i64> {
    conn.prepare_cached(INSERT_CITY)?.execute(params![new.name, now])?;
    Ok(conn.last_insert_rowid())
}

impl Database {
    pub fn create_city(&self, new: &NewCity) -> Result<City> {
        let id = insert_city(self.conn(), new, Utc::now())?;
        self.fetch_city(id)?.ok_or(StoreError::NotFound { entity: ENTITY, id })
    }

    pub fn list_cities(&self) -> Result<Vec<City>> {
        let mut stmt = self.conn().prepare_cached(ALL_CITIES)?;
        let mut rows = stmt.query([])?;
        let mut out = Vec::new();
        while let Some(r) = rows.next()? {
            out.push(map_city_row(r)?);
        }
        Ok(out)
    }

    pub fn fetch_city(&self, id: i64) -> Result<Option<City>> {
        let mut stmt = self.conn().prepare_cached(CITY_BY_ID)?;
        let row = stmt.query_row(params![id], map_city_row).optional()?;
        Ok(row)
    }

    pub fn update_city(&self, id: i64, patch: &CityPatch) -> Result<City> {
        let changed = self.conn().prepare_cached(UPDATE_CITY)?
            .execute(params![id, patch.name, Utc::now()])?;
        if changed == 0 {
            return Err(StoreError::NotFound { entity: ENTITY, id });
        }
        self.fetch_city(id)?.ok_or(StoreError::NotFound { entity: ENTITY, id })
    }

    /// Fails with a constraint error while airports still reference the city.
    pub fn delete_city(&self, id: i64) -> Result<usize> {
        let removed = self.conn().prepare_cached(DELETE_CITY)?.execute(params![id])?;
        if removed == 0 {
            return Err(StoreError::NotFound { entity: ENTITY, id });
        }
        Ok(removed)
    }
}
