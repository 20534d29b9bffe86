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

//! X.509 certificate parsing.
//!
//! Decodes the first PEM block of a buffer and parses it into a
//! [`CertificateRecord`] carrying the validity window, the subject and
//! issuer names, and the DER bytes needed for key pairing. Trailing blocks
//! (an appended intermediate chain) are ignored; chain validation is out of
//! scope here.

use crate::decode;
use crate::error::{IdentityError, IdentityResult};
use time::OffsetDateTime;
use tracing::debug;
use x509_parser::parse_x509_certificate;

/// PEM block type label of an X.509 certificate.
pub const CERTIFICATE_TAG: &str = "CERTIFICATE";

/// Parsed certificate, immutable after creation.
#[derive(Debug, Clone)]
pub struct CertificateRecord {
    der: Vec<u8>,
    subject: String,
    issuer: String,
    not_before: OffsetDateTime,
    not_after: OffsetDateTime,
}

impl CertificateRecord {
    /// DER-encoded certificate bytes, as found in the PEM payload.
    pub fn der(&self) -> &[u8] {
        &self.der
    }

    /// Subject distinguished name.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Issuer distinguished name.
    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    /// Start of the validity window.
    pub fn not_before(&self) -> OffsetDateTime {
        self.not_before
    }

    /// End of the validity window.
    pub fn not_after(&self) -> OffsetDateTime {
        self.not_after
    }
}

/// Parse the first PEM block of `cert_pem` as an X.509 certificate.
///
/// Fails with [`IdentityError::MalformedInput`] when no PEM block is found
/// and [`IdentityError::InvalidCertificate`] when the block is not a
/// parsable certificate.
pub fn parse_certificate(cert_pem: &[u8]) -> IdentityResult<CertificateRecord> {
    let (block, _rest) = decode::decode_first(cert_pem)?;
    if block.tag() != CERTIFICATE_TAG {
        return Err(IdentityError::InvalidCertificate(format!(
            "unexpected PEM block type {:?}",
            block.tag()
        )));
    }

    let der = block.contents().to_vec();
    let (_, parsed) = parse_x509_certificate(&der)
        .map_err(|e| IdentityError::InvalidCertificate(e.to_string()))?;

    let record = CertificateRecord {
        subject: parsed.subject().to_string(),
        issuer: parsed.issuer().to_string(),
        not_before: parsed.validity().not_before.to_datetime(),
        not_after: parsed.validity().not_after.to_datetime(),
        der,
    };

    debug!(
        subject = %record.subject,
        not_before = %record.not_before,
        not_after = %record.not_after,
        "parsed certificate"
    );

    Ok(record)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn fixture(name: &str) -> Vec<u8> {
        let dir = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");
        std::fs::read(format!("{dir}/{name}")).unwrap()
    }

    #[test]
    fn test_parse_certificate() {
        let record = parse_certificate(&fixture("pkcs1-nocrypt.crt")).unwrap();
        assert!(record.subject().contains("CN=localhost"));
        assert!(record.issuer().contains("CN=localhost"));
        assert!(record.not_before() < record.not_after());
        assert!(!record.der().is_empty());
    }

    #[test]
    fn test_parse_rejects_non_pem_input() {
        let err = parse_certificate(b"not a certificate").unwrap_err();
        assert!(matches!(err, IdentityError::MalformedInput(_)));
    }

    #[test]
    fn test_parse_rejects_wrong_block_type() {
        let err = parse_certificate(&fixture("pkcs1-nocrypt.key")).unwrap_err();
        assert!(matches!(err, IdentityError::InvalidCertificate(_)));
    }

    #[test]
    fn test_parse_rejects_garbage_payload() {
        let block = ::pem::Pem::new(CERTIFICATE_TAG.to_string(), vec![0u8; 64]);
        let err = parse_certificate(::pem::encode(&block).as_bytes()).unwrap_err();
        assert!(matches!(err, IdentityError::InvalidCertificate(_)));
    }

    #[test]
    fn test_parse_takes_first_block_of_chain() {
        let mut chained = fixture("pkcs1-nocrypt.crt");
        chained.extend_from_slice(&fixture("other.crt"));
        let record = parse_certificate(&chained).unwrap();
        assert!(record.subject().contains("CN=localhost"));
    }
}
