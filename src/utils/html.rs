// ABOUTME: HTML escaping utilities to prevent XSS in server-rendered pages
// ABOUTME: Wraps html-escape for text nodes and double-quoted attribute values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Escape a string for insertion between tags.
///
/// Backend error messages and validation text pass through here before they
/// reach the page.
#[must_use]
pub fn escape_text(input: &str) -> String {
    html_escape::encode_text(input).into_owned()
}

/// Escape a string for safe insertion into double-quoted attribute values
/// such as `value="..."` or `src="..."`.
#[must_use]
pub fn escape_html_attribute(input: &str) -> String {
    html_escape::encode_double_quoted_attribute(input).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_text_neutralizes_markup() {
        let escaped = escape_text("<script>alert('x')</script> & more");
        assert!(!escaped.contains('<'));
        assert!(escaped.contains("&amp;"));
    }

    #[test]
    fn test_escape_attribute_prevents_breakout() {
        let escaped = escape_html_attribute("abc\" onload=\"x");
        assert!(!escaped.contains('"'));
    }
}
