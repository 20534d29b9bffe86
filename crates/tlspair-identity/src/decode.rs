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

//! PEM block decoding.
//!
//! Splits a byte buffer into its first PEM block plus the unconsumed
//! remainder. Two entry points with different strictness:
//!
//! - [`decode_single`]: the whole buffer must be one block; any
//!   non-whitespace remainder (including a second well-formed block) is
//!   rejected. Used for private key input.
//! - [`decode_first`]: returns the first block and whatever follows it.
//!   Used for certificate input, where a trailing intermediate chain is
//!   ignored rather than rejected.
//!
//! Text before the first `-----BEGIN` boundary is skipped in both modes,
//! matching common certificate files that carry a human-readable preamble.

use crate::error::{IdentityError, IdentityResult};
use ::pem::Pem;

const BEGIN_MARKER: &str = "-----BEGIN ";
const END_MARKER: &str = "-----END ";

/// Decode the first PEM block of `input` and return it together with the
/// unconsumed bytes that follow its end boundary line.
///
/// Fails with [`IdentityError::MalformedInput`] when no block can be decoded:
/// non-UTF-8 input, missing boundaries, mismatched labels, or broken base64.
pub fn decode_first(input: &[u8]) -> IdentityResult<(Pem, &[u8])> {
    let text = std::str::from_utf8(input)
        .map_err(|_| IdentityError::MalformedInput("input is not valid UTF-8".to_string()))?;

    let begin = text
        .find(BEGIN_MARKER)
        .ok_or_else(|| IdentityError::MalformedInput("no PEM begin boundary found".to_string()))?;

    let end = text[begin..]
        .find(END_MARKER)
        .map(|off| begin + off)
        .ok_or_else(|| IdentityError::MalformedInput("no PEM end boundary found".to_string()))?;

    // Consume through the end of the END boundary line.
    let block_end = match text[end..].find('\n') {
        Some(off) => end + off + 1,
        None => text.len(),
    };

    let block = ::pem::parse(&text[begin..block_end])
        .map_err(|e| IdentityError::MalformedInput(e.to_string()))?;

    Ok((block, &input[block_end..]))
}

/// Decode exactly one PEM block from `input`.
///
/// A remainder consisting only of ASCII whitespace (the file's trailing
/// newline) is accepted; anything else fails with
/// [`IdentityError::UnexpectedTrailingData`].
pub fn decode_single(input: &[u8]) -> IdentityResult<Pem> {
    let (block, rest) = decode_first(input)?;
    if !rest.iter().all(u8::is_ascii_whitespace) {
        return Err(IdentityError::UnexpectedTrailingData);
    }
    Ok(block)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_block(tag: &str, contents: &[u8]) -> String {
        ::pem::encode(&Pem::new(tag.to_string(), contents.to_vec()))
    }

    #[test]
    fn test_decode_single_block() {
        let input = sample_block("CERTIFICATE", b"hello");
        let block = decode_single(input.as_bytes()).unwrap();
        assert_eq!(block.tag(), "CERTIFICATE");
        assert_eq!(block.contents(), b"hello");
    }

    #[test]
    fn test_decode_single_tolerates_trailing_whitespace() {
        let input = format!("{}\n\n", sample_block("CERTIFICATE", b"hello"));
        assert!(decode_single(input.as_bytes()).is_ok());
    }

    #[test]
    fn test_decode_single_rejects_trailing_garbage() {
        let input = format!("{}extra", sample_block("CERTIFICATE", b"hello"));
        let err = decode_single(input.as_bytes()).unwrap_err();
        assert!(matches!(err, IdentityError::UnexpectedTrailingData));
    }

    #[test]
    fn test_decode_single_rejects_second_block() {
        let input = format!(
            "{}{}",
            sample_block("RSA PRIVATE KEY", b"first"),
            sample_block("RSA PRIVATE KEY", b"second")
        );
        let err = decode_single(input.as_bytes()).unwrap_err();
        assert!(matches!(err, IdentityError::UnexpectedTrailingData));
    }

    #[test]
    fn test_decode_first_returns_remainder() {
        let second = sample_block("CERTIFICATE", b"second");
        let input = format!("{}{}", sample_block("CERTIFICATE", b"first"), second);
        let (block, rest) = decode_first(input.as_bytes()).unwrap();
        assert_eq!(block.contents(), b"first");
        assert_eq!(rest, second.as_bytes());
    }

    #[test]
    fn test_decode_skips_preamble() {
        let input = format!(
            "subject=/CN=localhost\nissuer=/CN=localhost\n{}",
            sample_block("CERTIFICATE", b"payload")
        );
        let block = decode_single(input.as_bytes()).unwrap();
        assert_eq!(block.contents(), b"payload");
    }

    #[test]
    fn test_decode_rejects_empty_input() {
        let err = decode_single(b"").unwrap_err();
        assert!(matches!(err, IdentityError::MalformedInput(_)));
    }

    #[test]
    fn test_decode_rejects_missing_end_boundary() {
        let err = decode_single(b"-----BEGIN CERTIFICATE-----\nAAAA\n").unwrap_err();
        assert!(matches!(err, IdentityError::MalformedInput(_)));
    }

    #[test]
    fn test_decode_rejects_non_utf8() {
        let err = decode_single(&[0xff, 0xfe, 0x00, 0x01]).unwrap_err();
        assert!(matches!(err, IdentityError::MalformedInput(_)));
    }

    #[test]
    fn test_decode_rejects_mismatched_labels() {
        let input = "-----BEGIN CERTIFICATE-----\nAAAA\n-----END RSA PRIVATE KEY-----\n";
        let err = decode_single(input.as_bytes()).unwrap_err();
        assert!(matches!(err, IdentityError::MalformedInput(_)));
    }

    #[test]
    fn test_decode_preserves_encryption_headers() {
        let raw = include_bytes!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/tests/fixtures/pkcs1-crypt.key"
        ));
        let block = decode_single(raw).unwrap();
        assert_eq!(block.tag(), "RSA PRIVATE KEY");
        assert_eq!(block.headers().get("Proc-Type"), Some("4,ENCRYPTED"));
        let dek_info = block.headers().get("DEK-Info").unwrap();
        assert!(dek_info.starts_with("AES-128-CBC,"));
    }
}
