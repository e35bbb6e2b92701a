use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::db::queries::*;
use crate::db::Database;
use crate::error::{Result, StoreError};
use crate::models::{Airplane, AirplanePatch, NewAirplane, Timestamp};

const ENTITY: &str = "airplane";

fn map_airplane_row(r: &Row) -> rusqlite::Result<Airplane> {
    Ok(Airplane {
        id: r.get("id")?,
        model_number: r.get("modelNumber")?,
        capacity: r.get("capacity")?,
        created_at: r.get("createdAt")?,
        updated_at: r.get("updatedAt")?,
    })
}

pub(crate) fn insert_airplane(conn: &Connection, new: &NewAirplane, now: Timestamp) -> rusqlite::Result<i64> {
    conn.prepare_cached(INSERT_AIRPLANE)?
        .execute(params![new.model_number, new.capacity, now])?;
    Ok(conn.last_insert_rowid())
}

impl Database {
    pub fn create_airplane(&self, new: &NewAirplane) -> Result<Airplane> {
        let id = insert_airplane(self.conn(), new, Utc::now())?;
        self.fetch_airplane(id)?.ok_or(StoreError::NotFound { entity: ENTITY, id })
    }

    pub fn list_airplanes(&self) -> Result<Vec<Airplane>> {
        let mut stmt = self.conn().prepare_cached(ALL_AIRPLANES)?;
        let mut rows = stmt.query([])?;
        let mut out = Vec::new();
        while let Some(r) = rows.next()? {
            out.push(map_airplane_row(r)?);
        }
        Ok(out)
    }

    pub fn fetch_airplane(&self, id: i64) -> Result<Option<Airplane>> {
        let mut stmt = self.conn().prepare_cached(AIRPLANE_BY_ID)?;
        let row = stmt.query_row(params![id], map_airplane_row).optional()?;
        Ok(row)
    }

    pub fn update_airplane(&self, id: i64, patch: &AirplanePatch) -> Result<Airplane> {
        let changed = self.conn().prepare_cached(UPDATE_AIRPLANE)?
            .execute(params![id, patch.model_number, patch.capacity, Utc::now()])?;
        if changed == 0 {
            return Err(StoreError::NotFound { entity: ENTITY, id });
        }
        self.fetch_airplane(id)?.ok_or(StoreError::NotFound { entity: ENTITY, id })
    }

    pub fn delete_airplane(&self, id: i64) -> Result<usize> {
        let removed = self.conn().prepare_cached(DELETE_AIRPLANE)?.execute(params![id])?;
        if removed == 0 {
            return Err(StoreError::NotFound { entity: ENTITY, id });
        }
        Ok(removed)
    }
}
