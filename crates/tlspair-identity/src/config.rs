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

//! Loader configuration.
//!
//! Replaces hardcoded file names and passphrases with an explicit
//! configuration value: where the key and certificate live, the passphrase
//! to try against an encrypted key, and what to do with a certificate whose
//! validity window does not cover the present.

use crate::error::{IdentityError, IdentityResult};
use secrecy::SecretString;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// What to do when the certificate's validity window does not cover `now`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpiryPolicy {
    /// Log a warning and continue loading (the default).
    #[default]
    Warn,
    /// Fail the load with [`IdentityError::CertificateExpired`] or
    /// [`IdentityError::CertificateNotYetValid`].
    Reject,
}

/// Configuration for a single identity load.
#[derive(Debug, Clone)]
pub struct IdentityConfig {
    /// Private key file path (PEM format).
    pub key_path: PathBuf,

    /// Certificate file path (PEM format).
    pub cert_path: PathBuf,

    /// Passphrase tried against an encrypted key. An empty passphrase means
    /// only unencrypted keys will load.
    pub passphrase: SecretString,

    /// Policy for certificates outside their validity window.
    pub expiry_policy: ExpiryPolicy,
}

impl IdentityConfig {
    /// Start building a configuration.
    pub fn builder() -> IdentityConfigBuilder {
        IdentityConfigBuilder::default()
    }

    /// Verify that both configured files exist.
    pub fn validate(&self) -> IdentityResult<()> {
        if !self.key_path.exists() {
            return Err(IdentityError::Config(format!(
                "key file not found: {}",
                self.key_path.display()
            )));
        }
        if !self.cert_path.exists() {
            return Err(IdentityError::Config(format!(
                "certificate file not found: {}",
                self.cert_path.display()
            )));
        }
        Ok(())
    }
}

/// Builder for [`IdentityConfig`].
#[derive(Default)]
pub struct IdentityConfigBuilder {
    key_path: Option<PathBuf>,
    cert_path: Option<PathBuf>,
    passphrase: Option<SecretString>,
    expiry_policy: ExpiryPolicy,
}

impl IdentityConfigBuilder {
    /// Set the private key file path.
    pub fn key_path(mut self, path: impl AsRef<Path>) -> Self {
        self.key_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the certificate file path.
    pub fn cert_path(mut self, path: impl AsRef<Path>) -> Self {
        self.cert_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the key passphrase.
    pub fn passphrase(mut self, passphrase: SecretString) -> Self {
        self.passphrase = Some(passphrase);
        self
    }

    /// Set the expiry policy.
    pub fn expiry_policy(mut self, policy: ExpiryPolicy) -> Self {
        self.expiry_policy = policy;
        self
    }

    /// Build the configuration.
    ///
    /// Requires both paths to be set; does not touch the filesystem
    /// ([`IdentityConfig::validate`] does that at load time).
    pub fn build(self) -> IdentityResult<IdentityConfig> {
        let key_path = self
            .key_path
            .ok_or_else(|| IdentityError::Config("key path is required".to_string()))?;
        let cert_path = self
            .cert_path
            .ok_or_else(|| IdentityError::Config("certificate path is required".to_string()))?;

        Ok(IdentityConfig {
            key_path,
            cert_path,
            passphrase: self
                .passphrase
                .unwrap_or_else(|| SecretString::new(String::new())),
            expiry_policy: self.expiry_policy,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_paths() {
        let err = IdentityConfig::builder().build().unwrap_err();
        assert!(matches!(err, IdentityError::Config(_)));

        let err = IdentityConfig::builder()
            .key_path("server.key")
            .build()
            .unwrap_err();
        assert!(matches!(err, IdentityError::Config(_)));
    }

    #[test]
    fn test_builder_defaults() {
        let config = IdentityConfig::builder()
            .key_path("server.key")
            .cert_path("server.crt")
            .build()
            .unwrap();
        assert_eq!(config.expiry_policy, ExpiryPolicy::Warn);
    }

    #[test]
    fn test_validate_requires_existing_files() {
        let config = IdentityConfig::builder()
            .key_path("/nonexistent/server.key")
            .cert_path("/nonexistent/server.crt")
            .build()
            .unwrap();
        assert!(matches!(
            config.validate().unwrap_err(),
            IdentityError::Config(_)
        ));
    }

    #[test]
    fn test_expiry_policy_deserializes_lowercase() {
        use serde::de::IntoDeserializer;

        let policy = ExpiryPolicy::deserialize(
            IntoDeserializer::<serde::de::value::Error>::into_deserializer("reject"),
        )
        .unwrap();
        assert_eq!(policy, ExpiryPolicy::Reject);
    }
}
