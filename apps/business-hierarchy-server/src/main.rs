mod config;
mod logging;

use std::path::PathBuf;

use anyhow::{Context, Result};
use business_hierarchy::BusinessHierarchy;
use business_hierarchy_sdk::Role;
use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;
use sea_orm::Database;

use crate::config::{AppConfig, CliOverrides};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Business Hierarchy - registry of economic groups, brands, units and collaborators
#[derive(Parser)]
#[command(name = "business-hierarchy-server")]
#[command(about = "Business Hierarchy - registry of economic groups, brands, units and collaborators")]
#[command(version)]
struct Cli {
    /// Path to configuration file (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Database DSN override (overrides config)
    #[arg(long)]
    dsn: Option<String>,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate,
    /// Validate configuration, print it as YAML and exit
    Check,
    /// List the role presets and the permissions they grant
    Roles,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_cli_overrides(&CliOverrides {
        dsn: cli.dsn,
        verbose: cli.verbose,
    });
    logging::init(&config.logging)?;

    match cli.command {
        Commands::Migrate => migrate(&config).await,
        Commands::Check => check_config(&config),
        Commands::Roles => {
            print_roles();
            Ok(())
        }
    }
}

async fn migrate(config: &AppConfig) -> Result<()> {
    tracing::info!("Running migrations...");
    let db = Database::connect(&config.database.dsn)
        .await
        .context("failed to connect to database")?;
    BusinessHierarchy::migrate(&db)
        .await
        .context("migration failed")?;
    println!("Migrations applied");
    Ok(())
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    config.validate()?;
    println!("Configuration is valid");
    println!("{}", config.to_yaml()?);
    Ok(())
}

fn print_roles() {
    for role in Role::ALL {
        println!("{}:", role.as_str());
        for permission in role.permissions().iter() {
            println!("  - {permission}");
        }
    }
}
