//! # Ideaboard API Main Entry Point

use clap::{Parser, Subcommand};
use migration::{Migrator, MigratorTrait};

use ideaboard::{config::ConfigLoader, db::init_pool, server::run_server, telemetry};

#[derive(Parser)]
#[command(name = "ideaboard", about = "Multi-tenant feedback and idea tracking API")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run pending database migrations and start the HTTP server (default)
    Serve,
    /// Run pending database migrations and exit
    Migrate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = ConfigLoader::new().load()?;
    telemetry::init_tracing(&config)?;

    tracing::info!(profile = %config.profile, "Loaded configuration");
    if let Ok(redacted) = config.redacted_json() {
        tracing::debug!(config = %redacted, "Effective configuration");
    }

    let db = init_pool(&config).await?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Migrate => {
            Migrator::up(&db, None).await?;
            tracing::info!("Migrations applied");
        }
        Command::Serve => {
            Migrator::up(&db, None).await?;
            run_server(config, db).await?;
        }
    }

    Ok(())
}
