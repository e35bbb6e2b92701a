use std::env;
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::time::Duration;

use rusqlite::{Connection, OpenFlags};

/// Toggles for SQLite PRAGMAs applied when a store is opened read-write.
#[derive(Clone, Debug)]
pub struct DbOpenConfig {
    /// If Some(ms) and ms > 0, set the connection busy timeout.
    pub busy_timeout_ms: Option<u64>,
    /// If Some, set PRAGMA journal_mode accordingly.
    pub journal_mode: Option<JournalMode>,
    /// If Some(kb) and kb > 0, set PRAGMA cache_size = -kb (KB units).
    pub cache_size_kb: Option<i64>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum JournalMode { Wal, Delete }

impl Display for JournalMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self { JournalMode::Wal => write!(f, "WAL"), JournalMode::Delete => write!(f, "DELETE"), }
    }
}

impl Default for DbOpenConfig {
    fn default() -> Self {
        Self {
            busy_timeout_ms: Some(5_000),
            journal_mode: Some(JournalMode::Wal),
            cache_size_kb: Some(20_000),
        }
    }
}

impl DbOpenConfig {
    /// Load toggles from environment variables. Missing/invalid values fall back to defaults.
    ///
    /// Variables:
    /// - AIRLINE_SQLITE_BUSY_TIMEOUT_MS: integer ms; 0 disables
    /// - AIRLINE_SQLITE_JOURNAL_MODE: "WAL" or "DELETE"; empty disables
    /// - AIRLINE_SQLITE_CACHE_SIZE_KB: integer KB; 0 disables
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(v) = env::var("AIRLINE_SQLITE_BUSY_TIMEOUT_MS") {
            match v.parse::<u64>() {
                Ok(0) => cfg.busy_timeout_ms = None,
                Ok(n) => cfg.busy_timeout_ms = Some(n),
                Err(_) => {}
            }
        }
        if let Ok(v) = env::var("AIRLINE_SQLITE_JOURNAL_MODE") {
            let vv = v.trim().to_ascii_uppercase();
            cfg.journal_mode = match vv.as_str() {
                "WAL" => Some(JournalMode::Wal),
                "DELETE" => Some(JournalMode::Delete),
                "" => None,
                _ => cfg.journal_mode,
            };
        }
        if let Ok(v) = env::var("AIRLINE_SQLITE_CACHE_SIZE_KB") {
            match v.parse::<i64>() {
                Ok(n) if n > 0 => cfg.cache_size_kb = Some(n),
                Ok(_) => cfg.cache_size_kb = None,
                Err(_) => {}
            }
        }
        cfg
    }
}

/// Open (creating if missing) a SQLite database for read-write use and apply PRAGMAs.
pub fn open_read_write_with_config<P: AsRef<Path>>(path: P, cfg: &DbOpenConfig) -> rusqlite::Result<Connection> {
    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE | OpenFlags::SQLITE_OPEN_URI,
    )?;
    apply_pragmas(&conn, cfg)?;
    Ok(conn)
}

pub(crate) fn apply_pragmas(conn: &Connection, cfg: &DbOpenConfig) -> rusqlite::Result<()> {
    // Foreign keys are part of the data model, so this one must succeed.
    conn.pragma_update(None, "foreign_keys", true)?;
    if let Some(ms) = cfg.busy_timeout_ms { let _ = conn.busy_timeout(Duration::from_millis(ms)); }
    // journal_mode returns a row; in-memory databases silently keep MEMORY.
    if let Some(mode) = cfg.journal_mode {
        let _ = conn.query_row(&format!("PRAGMA journal_mode = {}", mode), [], |_| Ok(()));
    }
    if let Some(kb) = cfg.cache_size_kb { if kb > 0 { let _ = conn.execute(&format!("PRAGMA cache_size = -{}", kb), []); } }
    Ok(())
}
