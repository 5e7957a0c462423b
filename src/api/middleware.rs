/// Session token transport
///
/// Clients send `Authorization: Basic <base64(token)>`, where `token` is the
/// decimal session token, optionally followed by a `:`. Only the `Basic`
/// label is borrowed from HTTP Basic auth: the payload is a session token,
/// not a `username:password` pair.

use crate::error::{MediaError, MediaResult};
use axum::http::{header::AUTHORIZATION, HeaderMap};
use base64::prelude::*;

const SCHEME_PREFIX: &str = "Basic ";

/// Extract the presented session token from request headers.
///
/// Missing or malformed headers are `Validation` errors. A well-formed number
/// that can never be a valid token (zero, negative, too large) is an
/// `Authentication` error.
pub fn extract_session_token(headers: &HeaderMap) -> MediaResult<u64> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or_else(|| MediaError::Validation("Missing authorization header".to_string()))?
        .to_str()
        .map_err(|_| MediaError::Validation("Malformed authorization header".to_string()))?;

    parse_session_token(value)
}

/// Parse an authorization header value into a session token
pub fn parse_session_token(value: &str) -> MediaResult<u64> {
    let encoded = value.strip_prefix(SCHEME_PREFIX).ok_or_else(|| {
        MediaError::Validation("Authorization header must start with 'Basic '".to_string())
    })?;

    let decoded = BASE64_STANDARD
        .decode(encoded.trim().as_bytes())
        .map_err(|e| MediaError::Validation(format!("Invalid base64 encoding: {}", e)))?;
    let decoded = String::from_utf8(decoded)
        .map_err(|_| MediaError::Validation("Invalid UTF-8 in session token".to_string()))?;

    let digits = decoded.trim().trim_matches(':');
    let (negative, magnitude) = match digits.as_bytes().first() {
        Some(b'-') => (true, &digits[1..]),
        Some(b'+') => (false, &digits[1..]),
        _ => (false, digits),
    };
    if magnitude.is_empty() || !magnitude.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MediaError::Validation("Malformed session token".to_string()));
    }

    // Any signed decimal is well-formed; only positive u64 values can match a session
    if negative {
        return Err(invalid_session());
    }
    magnitude
        .parse::<u64>()
        .ok()
        .filter(|&token| token > 0)
        .ok_or_else(invalid_session)
}

fn invalid_session() -> MediaError {
    MediaError::Authentication("Invalid or expired session".to_string())
}

/// Build the authorization header value for a token
pub fn encode_session_token(token: u64) -> String {
    format!("{}{}", SCHEME_PREFIX, BASE64_STANDARD.encode(token.to_string()))
}
