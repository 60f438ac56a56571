// ABOUTME: Health-label catalog seeding utility
// ABOUTME: Creates the default categories, labels, providers, and Edamam/Spoonacular mappings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan

//! Default health-label catalog seeder.
//!
//! Run this once against a fresh database before starting meal planning.
//!
//! Usage:
//! ```bash
//! # Seed the catalog (uses DATABASE_URL from environment)
//! cargo run --bin seed-health-labels
//!
//! # Override database URL
//! cargo run --bin seed-health-labels -- --database-url sqlite:./data/nutriplan.db
//!
//! # Verbose output
//! cargo run --bin seed-health-labels -- -v
//! ```

use anyhow::Result;
use clap::Parser;
use nutriplan_labels::config::{DatabaseConfig, DatabaseUrl};
use nutriplan_labels::database::seed_health_labels::seed_default_catalog;
use nutriplan_labels::database::Database;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "seed-health-labels",
    about = "NutriPlan Health Label Catalog Seeder",
    long_about = "Create the default health-label catalog with Edamam and Spoonacular mappings"
)]
struct SeedArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    info!("=== NutriPlan Health Label Seeder ===");

    let mut config = DatabaseConfig::from_env()?;
    if let Some(url) = args.database_url.as_deref() {
        config.url = DatabaseUrl::parse_url(url)?;
    }

    info!("Connecting to database: {}", config.url);
    let database = Database::new(&config).await?;
    let summary = seed_default_catalog(&database.health_labels()).await?;

    if summary.skipped {
        info!("Catalog already seeded; nothing to do");
    } else {
        info!(
            "Seeded {} categories, {} labels, {} providers, {} mappings",
            summary.categories, summary.labels, summary.providers, summary.mappings
        );
    }
    Ok(())
}
