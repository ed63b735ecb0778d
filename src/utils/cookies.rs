// ABOUTME: Cookie parsing and Set-Cookie construction for page sessions
// ABOUTME: Reads the session id from a Cookie header and builds the session cookie
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use attempt_core::constants::sessions::COOKIE_NAME;
use axum::http::header::COOKIE;
use axum::http::HeaderMap;
use uuid::Uuid;

/// Find a cookie value by name in a raw `Cookie` header
#[must_use]
pub fn get_cookie_value<'a>(cookie_header: &'a str, name: &str) -> Option<&'a str> {
    cookie_header.split(';').find_map(|cookie| {
        let (key, value) = cookie.trim().split_once('=')?;
        (key == name).then_some(value)
    })
}

/// Page session id carried by the request, if any and well formed
#[must_use]
pub fn session_id(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(|header| get_cookie_value(header, COOKIE_NAME))
        .and_then(|raw| Uuid::parse_str(raw).ok())
}

/// `Set-Cookie` value for a page session.
///
/// The cookie lives for the browser session only; the server side expires
/// it through LRU eviction.
#[must_use]
pub fn session_cookie(id: Uuid, secure: bool) -> String {
    let secure = if secure { "; Secure" } else { "" };
    format!("{COOKIE_NAME}={id}; HttpOnly; Path=/; SameSite=Lax{secure}")
}
