//! Binary crate for the `waybar-weather` custom module.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Logging setup (stderr only; stdout carries the JSON payload)
//! - Running the load → fetch → render → emit pass once

use clap::Parser;

mod cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let env = env_logger::Env::default().default_filter_or("warn");
    env_logger::init_from_env(env);

    let cmd = cli::Cli::parse();
    cmd.run().await
}
