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

//! `tlspair inspect`: print non-sensitive metadata about PEM files.
//!
//! Prints block types, encryption state, and certificate fields only.
//! Key payloads are never decoded for display.

use crate::output;
use anyhow::{bail, Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};
use tlspair_identity::{classify_key_block, decode, parse_certificate};

/// Print non-sensitive metadata about key and certificate files.
#[derive(Args)]
pub struct InspectCmd {
    /// Certificate file (PEM)
    #[arg(long, value_name = "PATH")]
    cert: Option<PathBuf>,

    /// Private key file (PEM)
    #[arg(long, value_name = "PATH")]
    key: Option<PathBuf>,
}

impl InspectCmd {
    /// Run the inspection.
    pub fn run(self) -> Result<()> {
        if self.cert.is_none() && self.key.is_none() {
            bail!("nothing to inspect: pass --cert and/or --key");
        }

        if let Some(cert_path) = &self.cert {
            inspect_certificate(cert_path)?;
        }
        if let Some(key_path) = &self.key {
            inspect_key(key_path)?;
        }

        Ok(())
    }
}

fn inspect_certificate(path: &Path) -> Result<()> {
    let bytes = read(path)?;
    let record = parse_certificate(&bytes)?;

    output::heading(&format!("certificate {}", path.display()));
    output::detail("Subject", record.subject());
    output::detail("Issuer", record.issuer());
    output::detail("Not before", &record.not_before().to_string());
    output::detail("Not after", &record.not_after().to_string());
    Ok(())
}

fn inspect_key(path: &Path) -> Result<()> {
    let bytes = read(path)?;
    let block = decode::decode_single(&bytes)?;
    let encryption = classify_key_block(&block);

    output::heading(&format!("private key {}", path.display()));
    output::detail("Block type", block.tag());
    output::detail("Encryption", &encryption.to_string());
    Ok(())
}

fn read(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))
}
