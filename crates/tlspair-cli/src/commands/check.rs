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

//! `tlspair check`: load an identity and verify it is handshake-ready.

use crate::output;
use crate::settings::Settings;
use anyhow::{bail, Context, Result};
use clap::Args;
use secrecy::SecretString;
use std::path::PathBuf;
use tlspair_identity::{load_identity, ExpiryPolicy, IdentityConfig};

/// Load a key/certificate pair and verify it is usable for a TLS handshake.
#[derive(Args)]
pub struct CheckCmd {
    /// Private key file (PEM)
    #[arg(long, value_name = "PATH")]
    key: Option<PathBuf>,

    /// Certificate file (PEM)
    #[arg(long, value_name = "PATH")]
    cert: Option<PathBuf>,

    /// Environment variable holding the key passphrase
    #[arg(long, value_name = "VAR")]
    passphrase_env: Option<String>,

    /// Expiry policy (warn|reject)
    #[arg(long, value_name = "POLICY")]
    expiry: Option<String>,

    /// TOML configuration file; flags override its values
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl CheckCmd {
    /// Run the check.
    pub fn run(self) -> Result<()> {
        let settings = self.config.as_deref().map(Settings::load).transpose()?;
        let identity = settings.map(|s| s.identity);

        let key_path = self
            .key
            .or_else(|| identity.as_ref().and_then(|i| i.key.clone()))
            .context("no key file given (use --key or a configuration file)")?;
        let cert_path = self
            .cert
            .or_else(|| identity.as_ref().and_then(|i| i.cert.clone()))
            .context("no certificate file given (use --cert or a configuration file)")?;

        let passphrase_env = self
            .passphrase_env
            .or_else(|| identity.as_ref().and_then(|i| i.passphrase_env.clone()));
        let passphrase = resolve_passphrase(passphrase_env.as_deref())?;

        let expiry_policy = match self.expiry.as_deref() {
            Some(value) => parse_expiry(value)?,
            None => identity.map(|i| i.expiry).unwrap_or_default(),
        };

        let config = IdentityConfig::builder()
            .key_path(&key_path)
            .cert_path(&cert_path)
            .passphrase(passphrase)
            .expiry_policy(expiry_policy)
            .build()?;

        let credential = load_identity(&config)?;
        let certificate = credential.certificate();

        output::success("key and certificate form a valid TLS identity");
        output::detail("Subject", certificate.subject());
        output::detail("Issuer", certificate.issuer());
        output::detail("Not before", &certificate.not_before().to_string());
        output::detail("Not after", &certificate.not_after().to_string());

        Ok(())
    }
}

/// Read the passphrase from the named environment variable.
///
/// No variable configured means an empty passphrase: only unencrypted keys
/// will load.
fn resolve_passphrase(var: Option<&str>) -> Result<SecretString> {
    match var {
        Some(name) => {
            let value = std::env::var(name)
                .with_context(|| format!("passphrase environment variable {name} is not set"))?;
            Ok(SecretString::new(value))
        }
        None => Ok(SecretString::new(String::new())),
    }
}

fn parse_expiry(value: &str) -> Result<ExpiryPolicy> {
    match value {
        "warn" => Ok(ExpiryPolicy::Warn),
        "reject" => Ok(ExpiryPolicy::Reject),
        other => bail!("invalid expiry policy {other:?} (expected warn or reject)"),
    }
}
