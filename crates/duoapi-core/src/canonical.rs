//! Canonical request strings for the Duo signature schemes.
//!
//! The string is newline-joined in a fixed order:
//!
//! ```text
//! date
//! METHOD
//! host (lower-cased)
//! /path
//! canonical query
//! sha512(body)        (V5 only)
//! sha512("")          (V5 only, reserved for signed headers)
//! ```

use sha2::{Digest, Sha512};

use crate::params::{encode_pairs, Params};

/// Encodes `params` with keys sorted and each key's values sorted, so the
/// result does not depend on insertion order.
pub fn canon_params(params: &Params) -> String {
    let sorted: Vec<(&String, Vec<&String>)> = params
        .iter()
        .map(|(key, values)| {
            let mut values: Vec<&String> = values.iter().collect();
            values.sort();
            (key, values)
        })
        .collect();

    encode_pairs(
        sorted
            .iter()
            .flat_map(|(key, values)| values.iter().map(move |value| (*key, *value))),
    )
}

/// Canonical string for the V2 scheme.
pub fn canonicalize(method: &str, host: &str, path: &str, params: &Params, date: &str) -> String {
    [
        date.to_owned(),
        method.to_ascii_uppercase(),
        host.to_ascii_lowercase(),
        path.to_owned(),
        canon_params(params),
    ]
    .join("\n")
}

/// Canonical string for the V5 scheme: the V2 string followed by the body
/// hash and the hash of the empty string.
pub fn canonicalize_v5(
    method: &str,
    host: &str,
    path: &str,
    params: &Params,
    body: &str,
    date: &str,
) -> String {
    let mut canon = canonicalize(method, host, path, params, date);
    canon.push('\n');
    canon.push_str(&hash_string(body));
    canon.push('\n');
    canon.push_str(&hash_string(""));
    canon
}

/// Hex-encoded SHA-512 digest.
pub fn hash_string(value: &str) -> String {
    hex::encode(Sha512::digest(value.as_bytes()))
}
