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

//! Credential validation: temporal validity and key/certificate pairing.
//!
//! The pairing check forms a rustls `CertifiedKey` from the certificate and
//! the (already decrypted) private key, the same consistency check a TLS
//! server performs before presenting an identity. A certificate outside its
//! validity window is reported through the configured [`ExpiryPolicy`]
//! rather than unconditionally failing the load.

use crate::cert::CertificateRecord;
use crate::config::ExpiryPolicy;
use crate::error::{IdentityError, IdentityResult};
use rustls::pki_types::{CertificateDer, PrivateKeyDer};
use rustls::sign::CertifiedKey;
use time::OffsetDateTime;
use tracing::warn;

/// Check the certificate's validity window against `now`.
///
/// Under [`ExpiryPolicy::Warn`] a violated bound produces a warning event
/// and the check succeeds; under [`ExpiryPolicy::Reject`] it fails with the
/// matching error variant. Both bounds are checked.
pub fn check_validity(
    record: &CertificateRecord,
    now: OffsetDateTime,
    policy: ExpiryPolicy,
) -> IdentityResult<()> {
    if now < record.not_before() {
        match policy {
            ExpiryPolicy::Warn => warn!(
                subject = %record.subject(),
                not_before = %record.not_before(),
                "certificate is not yet valid"
            ),
            ExpiryPolicy::Reject => {
                return Err(IdentityError::CertificateNotYetValid {
                    not_before: record.not_before().to_string(),
                })
            }
        }
    }

    if now > record.not_after() {
        match policy {
            ExpiryPolicy::Warn => warn!(
                subject = %record.subject(),
                not_after = %record.not_after(),
                "certificate has expired"
            ),
            ExpiryPolicy::Reject => {
                return Err(IdentityError::CertificateExpired {
                    not_after: record.not_after().to_string(),
                })
            }
        }
    }

    Ok(())
}

/// Verify that `key_pem` and the certificate form a usable TLS identity.
///
/// Fails with [`IdentityError::KeyCertificateMismatch`] when the key's
/// public component does not correspond to the certificate's public key,
/// and [`IdentityError::InvalidKey`] when the key cannot be loaded at all.
pub fn pair_key_certificate(key_pem: &[u8], record: &CertificateRecord) -> IdentityResult<()> {
    let key_der = private_key_from_pem(key_pem)?;
    let chain = vec![CertificateDer::from(record.der().to_vec())];
    let provider = rustls::crypto::ring::default_provider();

    match CertifiedKey::from_der(chain, key_der, &provider) {
        Ok(_) => Ok(()),
        Err(rustls::Error::InconsistentKeys(_)) => Err(IdentityError::KeyCertificateMismatch),
        Err(e) => Err(IdentityError::InvalidKey(e.to_string())),
    }
}

/// Extract the first private key (PKCS#1, PKCS#8, or SEC1) from a PEM buffer.
fn private_key_from_pem(key_pem: &[u8]) -> IdentityResult<PrivateKeyDer<'static>> {
    rustls_pemfile::private_key(&mut &key_pem[..])
        .map_err(|e| IdentityError::InvalidKey(e.to_string()))?
        .ok_or_else(|| IdentityError::InvalidKey("no private key found in PEM input".to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cert::parse_certificate;
    use time::macros::datetime;

    fn fixture(name: &str) -> Vec<u8> {
        let dir = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");
        std::fs::read(format!("{dir}/{name}")).unwrap()
    }

    #[test]
    fn test_pairing_accepts_matching_pair() {
        let record = parse_certificate(&fixture("pkcs1-nocrypt.crt")).unwrap();
        pair_key_certificate(&fixture("pkcs1-nocrypt.key"), &record).unwrap();
    }

    #[test]
    fn test_pairing_rejects_foreign_key() {
        let record = parse_certificate(&fixture("pkcs1-nocrypt.crt")).unwrap();
        let err = pair_key_certificate(&fixture("other.key"), &record).unwrap_err();
        assert!(matches!(err, IdentityError::KeyCertificateMismatch));
    }

    #[test]
    fn test_pairing_rejects_non_key_input() {
        let record = parse_certificate(&fixture("pkcs1-nocrypt.crt")).unwrap();
        let err = pair_key_certificate(&fixture("pkcs1-nocrypt.crt"), &record).unwrap_err();
        assert!(matches!(err, IdentityError::InvalidKey(_)));
    }

    #[test]
    fn test_validity_inside_window() {
        let record = parse_certificate(&fixture("pkcs1-nocrypt.crt")).unwrap();
        let inside = record.not_before() + time::Duration::days(1);
        check_validity(&record, inside, ExpiryPolicy::Reject).unwrap();
    }

    #[test]
    fn test_expired_warns_by_default() {
        let record = parse_certificate(&fixture("pkcs1-nocrypt.crt")).unwrap();
        let after = record.not_after() + time::Duration::days(1);
        check_validity(&record, after, ExpiryPolicy::Warn).unwrap();
    }

    #[test]
    fn test_expired_fails_under_reject() {
        let record = parse_certificate(&fixture("pkcs1-nocrypt.crt")).unwrap();
        let after = record.not_after() + time::Duration::days(1);
        let err = check_validity(&record, after, ExpiryPolicy::Reject).unwrap_err();
        assert!(matches!(err, IdentityError::CertificateExpired { .. }));
    }

    #[test]
    fn test_not_yet_valid_fails_under_reject() {
        let record = parse_certificate(&fixture("pkcs1-nocrypt.crt")).unwrap();
        let err =
            check_validity(&record, datetime!(2000-01-01 0:00 UTC), ExpiryPolicy::Reject)
                .unwrap_err();
        assert!(matches!(err, IdentityError::CertificateNotYetValid { .. }));
    }
}
