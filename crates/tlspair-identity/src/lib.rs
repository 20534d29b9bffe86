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

//! TLS identity loading and validation.
//!
//! Loads a TLS identity (a private key and its matching certificate) from
//! PEM-encoded byte buffers, transparently decrypting a password-protected
//! key, checking the certificate's validity window, and verifying that key
//! and certificate form a usable pair for a TLS handshake.
//!
//! # Pipeline
//!
//! raw bytes → PEM decode → key decrypt (legacy RFC 1421) → certificate
//! parse → temporal check → pairing → [`Credential`]
//!
//! # What this crate does not do
//!
//! No certificate store, no chain-of-trust validation, no network fetching,
//! no renewal or rotation, no TLS serving. It only prepares the local
//! identity material a TLS server or client would present.
//!
//! # Example
//!
//! ```no_run
//! use secrecy::SecretString;
//! use tlspair_identity::{load_identity, IdentityConfig};
//!
//! # fn main() -> Result<(), tlspair_identity::IdentityError> {
//! let config = IdentityConfig::builder()
//!     .key_path("server.key")
//!     .cert_path("server.crt")
//!     .passphrase(SecretString::new("correct horse".to_string()))
//!     .build()?;
//!
//! let credential = load_identity(&config)?;
//! println!("subject: {}", credential.certificate().subject());
//! # Ok(())
//! # }
//! ```

pub mod cert;
pub mod config;
pub mod decode;
pub mod decrypt;
pub mod error;
pub mod loader;
pub mod validate;

pub use cert::{parse_certificate, CertificateRecord};
pub use config::{ExpiryPolicy, IdentityConfig, IdentityConfigBuilder};
pub use decrypt::{classify_key_block, decrypt_key, KeyEncryption};
pub use error::{IdentityError, IdentityResult};
pub use loader::{load_identity, load_identity_from_bytes, Credential};

pub use ::pem::Pem;
