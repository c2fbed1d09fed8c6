//! Write the store configuration.

use anyhow::Result;
use std::path::Path;

use crate::config::{FlakySettings, StoreConfig};

/// Arguments for the init command.
#[derive(clap::Args, Debug)]
pub struct InitArgs {
    /// Base URL of the remote catalog store
    #[arg(long, default_value = "http://localhost:3000")]
    pub store_url: String,

    /// Percentage for the discounted-price display column
    #[arg(long, default_value = "10")]
    pub discount: f64,

    /// Layer the simulated unreliable channel on every invocation
    #[arg(long)]
    pub flaky: bool,

    /// Chance that a mutating call fails on the flaky channel
    #[arg(long, default_value = "0.2")]
    pub probability: f64,

    /// Simulated latency of the flaky channel in milliseconds
    #[arg(long, default_value = "1000")]
    pub delay_ms: u64,
}

/// Run the init command.
pub async fn run(data_dir: &Path, args: InitArgs) -> Result<()> {
    let config = StoreConfig {
        store_url: args.store_url,
        discount_percent: args.discount,
        flaky: FlakySettings {
            enabled: args.flaky,
            probability: args.probability,
            delay_ms: args.delay_ms,
        },
    };
    config.save(data_dir).await?;

    println!("Store configuration written to {:?}", data_dir);
    println!("  Store URL: {}", config.store_url);
    println!("  Discount:  {}%", config.discount_percent);
    if config.flaky.enabled {
        println!(
            "  Flaky channel: on ({}% failures, {} ms latency)",
            config.flaky.probability * 100.0,
            config.flaky.delay_ms
        );
    }
    Ok(())
}
