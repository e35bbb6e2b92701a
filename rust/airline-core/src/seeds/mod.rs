//! Reversible development fixtures.
//!
//! A seed inserts a fixed batch of rows in one transaction and removes them
//! again by natural key. Both directions read the same constant list, so the
//! revert filter cannot drift from what apply inserted.

use rusqlite::{params_from_iter, Connection};
use tracing::info;

use crate::db::Database;
use crate::error::{Result, StoreError};

pub mod airplanes;
pub mod cities;

pub use airplanes::{AirplaneFixture, AirplanesSeed, AIRPLANES};
pub use cities::{CitiesSeed, CITIES};

pub trait Seed: Send + Sync {
    /// Stable identifier used by the seeder CLI.
    fn name(&self) -> &'static str;

    /// Insert the batch inside `conn`'s open transaction. Returns rows inserted.
    fn insert(&self, conn: &Connection) -> rusqlite::Result<usize>;

    /// Natural keys of every row `insert` writes.
    fn keys(&self) -> Vec<&'static str>;

    /// Table and natural-key column the keys live in.
    fn key_column(&self) -> (&'static str, &'static str);

    fn apply(&self, db: &mut Database) -> Result<usize> {
        let tx = db.transaction()?;
        let inserted = self.insert(&tx)?;
        tx.commit()?;
        info!(seed = self.name(), inserted, "seed applied");
        Ok(inserted)
    }

    /// Delete-by-key; rows already gone are not an error.
    fn revert(&self, db: &mut Database) -> Result<usize> {
        let keys = self.keys();
        if keys.is_empty() {
            return Ok(0);
        }
        let (table, column) = self.key_column();
        let placeholders = vec!["?"; keys.len()].join(", ");
        let sql = format!("DELETE FROM {table} WHERE {column} IN ({placeholders})");
        let tx = db.transaction()?;
        let removed = tx.execute(&sql, params_from_iter(keys))?;
        tx.commit()?;
        info!(seed = self.name(), removed, "seed reverted");
        Ok(removed)
    }
}

/// Every seed in apply order.
pub fn all() -> Vec<Box<dyn Seed>> {
    vec![Box::new(AirplanesSeed), Box::new(CitiesSeed)]
}

pub fn find(name: &str) -> Result<Box<dyn Seed>> {
    all()
        .into_iter()
        .find(|s| s.name() == name)
        .ok_or_else(|| StoreError::UnknownSeed(name.to_string()))
}

/// Apply all seeds in order, stopping at the first failure.
pub fn apply_all(db: &mut Database) -> Result<usize> {
    let mut total = 0;
    for seed in all() {
        total += seed.apply(db)?;
    }
    Ok(total)
}

/// Revert all seeds in reverse order.
pub fn revert_all(db: &mut Database) -> Result<usize> {
    let mut total = 0;
    for seed in all().into_iter().rev() {
        total += seed.revert(db)?;
    }
    Ok(total)
}
