/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Main executable for mie-rs

use clap::Parser;
use mie_rs::cli::{run, Cli};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    log::debug!("mie-rs v{}", mie_rs::VERSION);
    run(&cli)
}
