//! Character encoding detection for byte input.
//!
//! Catalog pages are served as UTF-8, but archived copies occasionally carry a
//! legacy charset declaration. The declaration is honoured when present.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// `charset=` inside a `<meta>` tag, covering both `<meta charset>` and the
/// `http-equiv="Content-Type"` form.
#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+?charset\s*=\s*["']?([^"'\s/>;]+)"#).expect("valid regex")
});

/// Only the head of the document is scanned for a declaration.
const SNIFF_LEN: usize = 1024;

/// Detect the declared encoding of an HTML byte buffer, defaulting to UTF-8.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);

    META_CHARSET
        .captures(&head)
        .and_then(|c| c.get(1))
        .and_then(|m| Encoding::for_label(m.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode HTML bytes to a UTF-8 string, replacing invalid sequences with �.
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    tracing::trace!(encoding = encoding.name(), "decoding page bytes");
    let (text, _, _) = encoding.decode(html);
    text.into_owned()
}
