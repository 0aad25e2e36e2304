// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Location fragment handling (`#<urlencoded project id>`).

use anyhow::{bail, Context, Result};

/// Format a project id as a location fragment.
pub fn format(project_id: &str) -> String {
    format!("#{}", urlencoding::encode(project_id))
}

/// Parse a location fragment into a project id.
///
/// The first `#` is removed, the rest is percent-decoded and trimmed.
/// Returns `Ok(None)` when nothing is left. Every `%` must start a
/// two-digit hex escape.
pub fn parse(fragment: &str) -> Result<Option<String>> {
    let raw = fragment.replacen('#', "", 1);
    if !escapes_are_valid(&raw) {
        bail!("Malformed escape in location fragment: {}", fragment);
    }
    let decoded = urlencoding::decode(&raw)
        .with_context(|| format!("Invalid location fragment: {}", fragment))?;
    let id = decoded.trim();
    Ok((!id.is_empty()).then(|| id.to_string()))
}

fn escapes_are_valid(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            match bytes.get(i + 1..i + 3) {
                Some(hex) if hex.iter().all(u8::is_ascii_hexdigit) => i += 3,
                _ => return false,
            }
        } else {
            i += 1;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_encodes() {
        assert_eq!(format("alpha"), "#alpha");
        assert_eq!(format("my project/1"), "#my%20project%2F1");
    }

    #[test]
    fn test_parse_decodes_and_trims() {
        assert_eq!(parse("#my%20project%2F1").unwrap().as_deref(), Some("my project/1"));
        assert_eq!(parse("%20beta%20").unwrap().as_deref(), Some("beta"));
        assert_eq!(parse("").unwrap(), None);
        assert_eq!(parse("#").unwrap(), None);
    }

    #[test]
    fn test_format_parse_agree() {
        let id = "Études & co";
        assert_eq!(parse(&format(id)).unwrap().as_deref(), Some(id));
    }

    #[test]
    fn test_parse_rejects_malformed_escapes() {
        assert!(parse("#%zz").is_err());
        assert!(parse("#%").is_err());
        assert!(parse("#abc%2").is_err());
        assert_eq!(parse("#100%25").unwrap().as_deref(), Some("100%"));
    }

    #[test]
    fn test_parse_rejects_invalid_utf8() {
        assert!(parse("#%FF").is_err());
    }
}
