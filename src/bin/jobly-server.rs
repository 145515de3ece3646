// ABOUTME: Jobly API server binary
// ABOUTME: Initializes logging, loads configuration and the database, then serves HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Jobly API Server Binary
//!
//! Starts the job-board REST API. Configuration comes from environment
//! variables; command-line flags override the port and database URL.

use anyhow::{Context, Result};
use clap::Parser;
use jobly_api::{
    config::environment::ServerConfig, database::Database, logging, resources::ServerResources,
    server::JoblyServer,
};
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "jobly-server")]
#[command(about = "Jobly - REST API for companies, job postings, and applicants")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Before config loading, which logs and may warn
    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database.url = database_url;
    }

    info!("Starting Jobly API");
    info!("{}", config.summary());

    if !config.database.is_memory() {
        ensure_database_dir(&config.database.url)?;
    }

    let database = Database::new(&config.database.url)
        .await
        .context("Failed to initialize database")?;
    info!("Database initialized successfully");

    let port = config.http_port;
    let resources = Arc::new(ServerResources::new(database, Arc::new(config)));
    let server = JoblyServer::new(resources);

    if let Err(e) = server.run(port).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}

/// Create the parent directory of a file-backed `SQLite` URL
fn ensure_database_dir(database_url: &str) -> Result<()> {
    let path = database_url
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:");
    let path = path.split('?').next().unwrap_or(path);

    if let Some(parent) = Path::new(path).parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create database directory {}", parent.display()))?;
    }
    Ok(())
}
