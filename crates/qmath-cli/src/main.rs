// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! qmath CLI entrypoint.
//!
//! Exposes the engine math helpers for inspection from a shell: box/plane
//! classification, Euler frames, rotations, projection, the scalar and
//! fixed-point helpers, float list parsing, and the stored tool config.
//!
//! # Usage
//! ```text
//! qmath [--variant NAME | --game-dir DIR] [--config-dir DIR] [-v...] <command> [args]
//! ```
//!
//! Results go to stdout, logs to stderr. Exit code is `0` on success and
//! non-zero on error.

// The CLI is expected to print to stdout.
#![allow(clippy::print_stdout)]

mod cli;
mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use qmath_config::{ConfigService, FsConfigStore, ToolConfig};
use qmath_core::{set_game_variant, GameVariant};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::cli::{Args, Command};

fn init_tracing(verbose: u8) -> Result<()> {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose)?;

    let store = match &args.config_dir {
        Some(dir) => FsConfigStore::with_base(dir),
        None => FsConfigStore::new(),
    }
    .context("opening config store")?;
    info!(dir = %store.base().display(), "config store ready");
    let svc = ConfigService::new(store);

    // Config actions must work on an out-of-range file so it can be repaired.
    let mut cfg = if matches!(args.cmd, Command::Config { .. }) {
        ToolConfig::load_stored(&svc)
    } else {
        ToolConfig::load_or_default(&svc)
    }
    .context("loading qmath.json")?;
    if let Some(variant) = args.variant {
        cfg.game_variant = variant;
    } else if let Some(dir) = &args.game_dir {
        cfg.game_variant = GameVariant::from_game_dir(dir);
    }
    set_game_variant(cfg.game_variant)?;
    info!(variant = %cfg.game_variant, "game variant published");

    let out = commands::run(&args.cmd, &cfg, &svc)?;
    println!("{out}");
    Ok(())
}
