use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use airline_seeder::{run, Args, Outcome};

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).with_ansi(false).json().finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    let args = Args::parse();
    info!(?args, "starting seeder");

    match run(&args) {
        Ok(Outcome::Listed(names)) => {
            for name in names {
                println!("{name}");
            }
        }
        Ok(Outcome::Applied(n)) => info!(inserted = n, "done"),
        Ok(Outcome::Reverted(n)) => info!(removed = n, "done"),
        Err(e) => {
            error!(error = ?e, "seeder failed");
            return Err(e);
        }
    }
    Ok(())
}
