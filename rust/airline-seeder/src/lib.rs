use std::path::{Path, PathBuf};

use airline_core::db::DbOpenConfig;
use airline_core::{seeds, Database, Seed, StoreError};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "airline-seeder", version, about = "Apply or revert development fixtures in the airline store")]
pub struct Args {
    /// Path to the SQLite store (created and migrated if missing)
    #[arg(long = "db", value_name = "PATH", env = "AIRLINE_DB")]
    pub db_path: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Apply one seed, or every seed in order
    Up {
        #[arg(long = "seed", value_name = "NAME")]
        seed: Option<String>,
    },
    /// Revert one seed, or every seed in reverse order
    ///
    /// Fails without removing anything while rows from other sources (for
    /// example an airport in a seeded city) still reference seeded rows.
    Down {
        #[arg(long = "seed", value_name = "NAME")]
        seed: Option<String>,
    },
    /// Print registered seed names in apply order
    List,
}

/// Outcome of one run, for the caller to report.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Applied(usize),
    Reverted(usize),
    Listed(Vec<&'static str>),
}

pub fn run(args: &Args) -> Result<Outcome> {
    match &args.command {
        Command::List => Ok(Outcome::Listed(seeds::all().iter().map(|s| s.name()).collect())),
        Command::Up { seed } => {
            let mut db = open_store(&args.db_path)?;
            let n = match seed {
                Some(name) => seeds::find(name)?
                    .apply(&mut db)
                    .with_context(|| format!("seed {name} failed to apply"))?,
                None => seeds::apply_all(&mut db).context("applying seeds failed")?,
            };
            info!(inserted = n, "seeding done");
            Ok(Outcome::Applied(n))
        }
        Command::Down { seed } => {
            let mut db = open_store(&args.db_path)?;
            let n = match seed {
                Some(name) => seeds::find(name)?
                    .revert(&mut db)
                    .map_err(|e| revert_failed(e, format!("seed {name} failed to revert")))?,
                None => seeds::revert_all(&mut db).map_err(|e| revert_failed(e, "reverting seeds failed".into()))?,
            };
            info!(removed = n, "unseeding done");
            Ok(Outcome::Reverted(n))
        }
    }
}

fn revert_failed(err: StoreError, what: String) -> anyhow::Error {
    let hint = if err.is_constraint() { "; rows from other sources still reference seeded rows" } else { "" };
    anyhow::Error::new(err).context(format!("{what}{hint}"))
}

fn open_store(path: &Path) -> Result<Database> {
    Database::open(path, &DbOpenConfig::from_env()).with_context(|| format!("failed to open {:?}", path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_subcommands() {
        let args = Args::try_parse_from(["airline-seeder", "--db", "x.db", "up", "--seed", "city"]).unwrap();
        assert_eq!(args.db_path, PathBuf::from("x.db"));
        assert_eq!(args.command, Command::Up { seed: Some("city".into()) });

        let args = Args::try_parse_from(["airline-seeder", "--db", "x.db", "down"]).unwrap();
        assert_eq!(args.command, Command::Down { seed: None });
    }

    #[test]
    fn down_help_mentions_referenced_rows() {
        use clap::CommandFactory;
        let cmd = Args::command();
        let down = cmd.find_subcommand("down").unwrap();
        let help = down.get_long_about().unwrap().to_string();
        assert!(help.contains("still reference seeded rows"), "{help}");
    }

    #[test]
    fn requires_a_subcommand() {
        assert!(Args::try_parse_from(["airline-seeder", "--db", "x.db"]).is_err());
    }
}
