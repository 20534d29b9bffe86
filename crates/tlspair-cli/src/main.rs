// TlsPair - TLS Identity Loading and Validation
// Copyright (C) 2026 TlsPair Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published
// by the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.

mod commands;
mod output;
mod settings;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tlspair")]
#[command(version, about = "Load and validate TLS key/certificate pairs")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a key/certificate pair and verify it is usable for a TLS handshake
    Check(commands::CheckCmd),

    /// Print non-sensitive metadata about key and certificate files
    Inspect(commands::InspectCmd),
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Check(cmd) => cmd.run(),
        Commands::Inspect(cmd) => cmd.run(),
    };

    if let Err(err) = result {
        output::error(&format!("{err:#}"));
        std::process::exit(1);
    }
}

/// Route library diagnostics to stderr; `-v` lifts the filter to debug.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
