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

//! Error taxonomy for the identity loading pipeline.
//!
//! Every pipeline stage fails fast with one of these variants; the loader
//! never downgrades, retries, or substitutes a default. Error messages carry
//! block type labels, header names, and algorithm names only, never key
//! material or passphrases.

use thiserror::Error;

/// Errors produced while loading a TLS identity.
#[derive(Error, Debug)]
pub enum IdentityError {
    /// No PEM block could be decoded at the start of the input buffer.
    #[error("malformed PEM input: {0}")]
    MalformedInput(String),

    /// Non-whitespace bytes remain after the first PEM block.
    ///
    /// A second well-formed block counts as trailing data: key and
    /// certificate inputs are expected to carry exactly one block.
    #[error("unexpected trailing data after PEM block")]
    UnexpectedTrailingData,

    /// The key uses an encryption container this pipeline does not decrypt.
    #[error("unsupported key format: {0}")]
    UnsupportedKeyFormat(String),

    /// The passphrase is wrong or the ciphertext is corrupt.
    #[error("private key decryption failed: {0}")]
    DecryptionFailed(String),

    /// The certificate block payload could not be parsed as X.509.
    #[error("invalid certificate: {0}")]
    InvalidCertificate(String),

    /// The private key's public component does not correspond to the
    /// certificate's public key.
    #[error("private key does not match certificate public key")]
    KeyCertificateMismatch,

    /// The decrypted key is not loadable as any supported key format.
    #[error("private key rejected: {0}")]
    InvalidKey(String),

    /// The certificate's not-after bound has passed and the expiry policy
    /// is [`ExpiryPolicy::Reject`](crate::config::ExpiryPolicy::Reject).
    #[error("certificate expired at {not_after}")]
    CertificateExpired {
        /// The violated not-after timestamp.
        not_after: String,
    },

    /// The certificate's not-before bound is in the future and the expiry
    /// policy is [`ExpiryPolicy::Reject`](crate::config::ExpiryPolicy::Reject).
    #[error("certificate not valid until {not_before}")]
    CertificateNotYetValid {
        /// The violated not-before timestamp.
        not_before: String,
    },

    /// The loader configuration is incomplete or names missing files.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Reading key or certificate bytes from disk failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used across the identity pipeline.
pub type IdentityResult<T> = Result<T, IdentityError>;
