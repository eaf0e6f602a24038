// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Reading-Store fixture tool
//!
//! Loads the configured fixture set, checks it, and writes the resulting
//! store contents to stdout as JSON.

use anyhow::Context;
use reading_store::{
    config::{Config, LogFormat},
    FixtureStore, Fixtures,
};
use std::io::Write;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;
    init_logging(config.log_format)?;

    let fixtures = match &config.fixtures_path {
        Some(path) => Fixtures::load(path)?,
        None => {
            tracing::info!("No FIXTURES_PATH set, using built-in seed");
            Fixtures::seed()
        }
    };

    let store = FixtureStore::from_fixtures(fixtures).context("Fixtures rejected")?;
    for username in store.usernames() {
        let count = store.get_readings(&username)?.len();
        tracing::info!(username = %username, readings = count, "Loaded user");
    }

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &store.snapshot())?;
    writeln!(stdout)?;
    Ok(())
}

/// Initialize the log subscriber (JSON or pretty) on stderr.
fn init_logging(format: LogFormat) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new("reading_store=debug,info").context("Invalid default log filter")
    })?;

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .with_current_span(true)
                    .flatten_event(true)
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Pretty => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .pretty()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
    Ok(())
}
