// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Time-based one-time passwords for the optional second login factor.
//!
//! Standard TOTP: HMAC-SHA1 over a 30-second counter, six digits, one
//! step of clock tolerance on each side. Secrets are base32-encoded and
//! handed to authenticator apps through an `otpauth://` provisioning
//! URL; QR rendering is a client concern.

use base32::Alphabet;
use chrono::Utc;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use url::Url;

type HmacSha1 = Hmac<Sha1>;

/// Code length in digits
const DIGITS: usize = 6;
/// Counter step in seconds
const STEP_SECONDS: u64 = 30;
/// Accepted clock drift in steps, applied on each side of now
const WINDOW: u64 = 1;

/// Generates a fresh base32-encoded 160-bit secret
pub fn generate_secret() -> String {
    let bytes: [u8; 20] = rand::random();
    base32::encode(Alphabet::Rfc4648 { padding: false }, &bytes)
}

/// Builds the provisioning URL an authenticator app enrolls from
pub fn otpauth_url(issuer: &str, account: &str, secret: &str) -> String {
    let mut url = Url::parse("otpauth://totp").expect("Invalid provisioning URL base");
    url.set_path(&format!("{}:{}", issuer, account));
    url.query_pairs_mut()
        .append_pair("secret", secret)
        .append_pair("issuer", issuer)
        .append_pair("algorithm", "SHA1")
        .append_pair("digits", "6")
        .append_pair("period", "30");

    url.to_string()
}

/// Checks a submitted code against a stored secret.
///
/// Undecodable secrets and malformed codes verify as false rather than
/// erroring, so a corrupt enrollment can never lock the login flow up
/// with a 500.
pub fn verify_code(secret: &str, code: &str) -> bool {
    verify_code_at(secret, code, Utc::now().timestamp().max(0) as u64)
}

/// Current code for a secret, used to confirm enrollment in tests
pub fn generate_code(secret: &str) -> Option<String> {
    code_at(secret, Utc::now().timestamp().max(0) as u64)
}

fn verify_code_at(secret: &str, code: &str, now_secs: u64) -> bool {
    if code.len() != DIGITS || !code.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let Some(key) = base32::decode(Alphabet::Rfc4648 { padding: false }, secret) else {
        return false;
    };

    let counter = now_secs / STEP_SECONDS;
    (counter.saturating_sub(WINDOW)..=counter + WINDOW).any(|c| hotp(&key, c) == code)
}

fn code_at(secret: &str, now_secs: u64) -> Option<String> {
    let key = base32::decode(Alphabet::Rfc4648 { padding: false }, secret)?;
    Some(hotp(&key, now_secs / STEP_SECONDS))
}

/// One HOTP value, RFC 4226 dynamic truncation over an HMAC-SHA1 digest
fn hotp(key: &[u8], counter: u64) -> String {
    let mut mac = HmacSha1::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(&counter.to_be_bytes());
    let digest = mac.finalize().into_bytes();

    let offset = (digest[digest.len() - 1] & 0x0f) as usize;
    let binary = ((u32::from(digest[offset]) & 0x7f) << 24)
        | (u32::from(digest[offset + 1]) << 16)
        | (u32::from(digest[offset + 2]) << 8)
        | u32::from(digest[offset + 3]);

    format!("{:06}", binary % 1_000_000)
}
