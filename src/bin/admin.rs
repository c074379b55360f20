//! Administrative command line for Aisle.
//!
//! Runs schema migrations and manages vendor credentials against the database configured by
//! the same environment as the server.

use aisle::server::{
    config::{Config, MAX_VENDOR_TOKEN_TTL_DAYS},
    error::Error,
    service::vendor_auth::VendorAuthService,
    startup,
};
use clap::{Parser, Subcommand};
use migration::{Migrator, MigratorTrait};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Aisle administration", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply, roll back or inspect schema migrations
    Migrate {
        #[command(subcommand)]
        action: MigrateAction,
    },
    /// Issue a new access token for a vendor, revoking its previous tokens
    VendorToken {
        vendor_id: i32,
        #[arg(
            long,
            value_parser = clap::value_parser!(i64).range(1..=MAX_VENDOR_TOKEN_TTL_DAYS),
            help = "Days until the token expires (defaults to VENDOR_TOKEN_TTL_DAYS)"
        )]
        days: Option<i64>,
    },
    /// Set the login username and password of a vendor
    VendorPassword {
        vendor_id: i32,
        username: String,
        #[arg(long, env = "VENDOR_PASSWORD", hide_env_values = true)]
        password: String,
    },
}

#[derive(Subcommand)]
enum MigrateAction {
    /// Apply all pending migrations
    Up,
    /// Roll back the most recent migrations
    Down {
        #[arg(short, long, default_value_t = 1)]
        steps: u32,
    },
    /// Show applied and pending migrations
    Status,
    /// Drop every table and reapply all migrations
    Fresh,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("aisle=info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(cli.command, &config).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(command: Commands, config: &Config) -> Result<(), Error> {
    let db = startup::connect(config).await?;

    match command {
        Commands::Migrate { action } => match action {
            MigrateAction::Up => Migrator::up(&db, None).await?,
            MigrateAction::Down { steps } => Migrator::down(&db, Some(steps)).await?,
            MigrateAction::Status => Migrator::status(&db).await?,
            MigrateAction::Fresh => Migrator::fresh(&db).await?,
        },
        Commands::VendorToken { vendor_id, days } => {
            let days = days.unwrap_or(config.vendor_token_ttl_days);

            let issued = VendorAuthService::new(&db)
                .rotate_access_token(vendor_id, days)
                .await?;

            println!("{}", issued.token);
            eprintln!("Expires at {} UTC", issued.expires_at);
        }
        Commands::VendorPassword {
            vendor_id,
            username,
            password,
        } => {
            let vendor = VendorAuthService::new(&db)
                .set_password(vendor_id, &username, &password)
                .await?;

            eprintln!("Set login for vendor {} ({})", vendor.id, vendor.name);
        }
    }

    Ok(())
}
