// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Upload key generation for partner records.

/// Alphabet of the generated keys
const CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Key length in characters
const KEY_LENGTH: usize = 32;

/// Generates a 32-character alphanumeric upload key.
///
/// Keys identify a partner in external upload tooling and carry no
/// structure; they only need to be unguessable and unique, with
/// uniqueness enforced by the database.
pub fn generate_upload_key() -> String {
    (0..KEY_LENGTH)
        .map(|_| CHARS[rand::random_range(0..CHARS.len())] as char)
        .collect()
}
