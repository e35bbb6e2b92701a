use rusqlite::Connection;
use tracing::info;

/// Ordered schema steps. Step `i` moves `PRAGMA user_version` from `i` to `i + 1`.
pub const MIGRATIONS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS Airplanes (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        modelNumber TEXT NOT NULL UNIQUE,
        capacity INTEGER NOT NULL CHECK (capacity > 0),
        createdAt TEXT NOT NULL,
        updatedAt TEXT NOT NULL
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS Cities (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE,
        createdAt TEXT NOT NULL,
        updatedAt TEXT NOT NULL
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS Airports (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE,
        code TEXT NOT NULL UNIQUE,
        address TEXT UNIQUE,
        cityId INTEGER NOT NULL REFERENCES Cities(id),
        createdAt TEXT NOT NULL,
        updatedAt TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_airports_city ON Airports(cityId);
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS Flights (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        flightNumber TEXT NOT NULL,
        airplaneId INTEGER NOT NULL REFERENCES Airplanes(id),
        departureAirportId TEXT NOT NULL REFERENCES Airports(code),
        arrivalAirportId TEXT NOT NULL REFERENCES Airports(code),
        departureTime TEXT NOT NULL,
        arrivalTime TEXT NOT NULL,
        price INTEGER NOT NULL CHECK (price >= 0),
        boardingGate TEXT,
        totalSeats INTEGER NOT NULL CHECK (totalSeats >= 0),
        createdAt TEXT NOT NULL,
        updatedAt TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_flights_route ON Flights(departureAirportId, arrivalAirportId);
    "#,
];

pub fn schema_version(conn: &Connection) -> rusqlite::Result<i64> {
    conn.query_row("PRAGMA user_version", [], |r| r.get(0))
}

/// Apply every step newer than the stored `user_version`. Returns how many ran.
pub fn migrate(conn: &mut Connection) -> rusqlite::Result<usize> {
    let current = schema_version(conn)?.max(0) as usize;
    let mut applied = 0;
    for (idx, sql) in MIGRATIONS.iter().enumerate().skip(current) {
        let tx = conn.transaction()?;
        tx.execute_batch(sql)?;
        tx.pragma_update(None, "user_version", (idx + 1) as i64)?;
        tx.commit()?;
        applied += 1;
    }
    if applied > 0 {
        info!(applied, version = MIGRATIONS.len(), "schema migrated");
    }
    Ok(applied)
}
