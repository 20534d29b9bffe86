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

//! Optional TOML configuration file.
//!
//! ```toml
//! [identity]
//! key = "/etc/tlspair/server.key"
//! cert = "/etc/tlspair/server.crt"
//! passphrase_env = "TLSPAIR_PASSPHRASE"
//! expiry = "reject"
//! ```
//!
//! Command-line flags override values from the file. The passphrase itself
//! never appears in the file, only the name of the environment variable
//! that holds it.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tlspair_identity::ExpiryPolicy;

/// Parsed configuration file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// The `[identity]` table.
    pub identity: IdentitySettings,
}

/// The `[identity]` table of the configuration file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IdentitySettings {
    /// Private key file path.
    pub key: Option<PathBuf>,

    /// Certificate file path.
    pub cert: Option<PathBuf>,

    /// Environment variable holding the key passphrase.
    pub passphrase_env: Option<String>,

    /// Expiry policy.
    #[serde(default)]
    pub expiry: ExpiryPolicy,
}

impl Settings {
    /// Load and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read configuration file {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("failed to parse configuration file {}", path.display()))
    }
}
