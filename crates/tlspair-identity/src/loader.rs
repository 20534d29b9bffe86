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

//! Credential loading orchestration.
//!
//! Composes the pipeline: decode key → decrypt → parse certificate →
//! temporal check → pairing → [`Credential`]. Every stage failure aborts
//! the load with its specific error kind; no partial credential is ever
//! returned. Each load works on local buffers only, so independent loads
//! are safe to run from parallel threads.

use crate::cert::{self, CertificateRecord};
use crate::config::{ExpiryPolicy, IdentityConfig};
use crate::decrypt;
use crate::error::IdentityResult;
use crate::validate;
use secrecy::{ExposeSecret, SecretString, SecretVec};
use std::fs;
use time::OffsetDateTime;
use tracing::{debug, info};

/// A loaded TLS identity: decrypted private key plus matching certificate.
///
/// The key material is held in secret-wrapped memory, zeroized on drop, and
/// excluded from `Debug` output.
pub struct Credential {
    key_pem: SecretVec<u8>,
    cert_pem: Vec<u8>,
    certificate: CertificateRecord,
}

impl Credential {
    fn new(key_pem: Vec<u8>, cert_pem: Vec<u8>, certificate: CertificateRecord) -> Self {
        Self {
            key_pem: SecretVec::new(key_pem),
            cert_pem,
            certificate,
        }
    }

    /// Decrypted private key in PEM format.
    ///
    /// # Security Warning
    ///
    /// This exposes the key material. Hand it to a TLS stack and nothing
    /// else; never write it to logs or diagnostics.
    pub fn expose_key_pem(&self) -> &[u8] {
        self.key_pem.expose_secret()
    }

    /// Certificate bytes as read from the source, PEM format.
    pub fn cert_pem(&self) -> &[u8] {
        &self.cert_pem
    }

    /// Parsed certificate metadata.
    pub fn certificate(&self) -> &CertificateRecord {
        &self.certificate
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("key_pem", &"<redacted>")
            .field("certificate", &self.certificate)
            .finish()
    }
}

/// Load a TLS identity from the files named by `config`.
///
/// Validates the configuration, reads both files, and runs
/// [`load_identity_from_bytes`] on their contents.
pub fn load_identity(config: &IdentityConfig) -> IdentityResult<Credential> {
    config.validate()?;

    debug!(
        key = %config.key_path.display(),
        cert = %config.cert_path.display(),
        "loading TLS identity"
    );

    let key_bytes = fs::read(&config.key_path)?;
    let cert_bytes = fs::read(&config.cert_path)?;

    load_identity_from_bytes(
        &key_bytes,
        &cert_bytes,
        &config.passphrase,
        config.expiry_policy,
    )
}

/// Load a TLS identity from in-memory key and certificate buffers.
///
/// This is the whole pipeline with byte sources supplied by the caller;
/// where the bytes come from (files, a secret store) is not this crate's
/// concern.
pub fn load_identity_from_bytes(
    key_bytes: &[u8],
    cert_bytes: &[u8],
    passphrase: &SecretString,
    expiry_policy: ExpiryPolicy,
) -> IdentityResult<Credential> {
    let key_pem = decrypt::decrypt_key(key_bytes, passphrase)?;
    let record = cert::parse_certificate(cert_bytes)?;

    validate::check_validity(&record, OffsetDateTime::now_utc(), expiry_policy)?;
    validate::pair_key_certificate(&key_pem, &record)?;

    info!(
        subject = %record.subject(),
        not_after = %record.not_after(),
        "TLS identity loaded"
    );

    Ok(Credential::new(
        key_pem.to_vec(),
        cert_bytes.to_vec(),
        record,
    ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_debug_redacts_key() {
        let record = crate::cert::parse_certificate(&fixture("pkcs1-nocrypt.crt")).unwrap();
        let credential = Credential::new(b"secret key bytes".to_vec(), fixture("pkcs1-nocrypt.crt"), record);
        let rendered = format!("{credential:?}");
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("secret key bytes"));
    }

    fn fixture(name: &str) -> Vec<u8> {
        let dir = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");
        std::fs::read(format!("{dir}/{name}")).unwrap()
    }
}
