//! Tag-string sanitization.
//!
//! Detail pages occasionally carry zero-width and control characters inside
//! tag text; they survive HTML extraction and corrupt the CSV downstream.
//! `\p{C}` is the Unicode "Other" general category (Cc, Cf, Cs, Co, Cn),
//! matching what the ingestion contract calls invisible characters.

use once_cell::sync::Lazy;
use regex::Regex;

static INVISIBLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{C}").unwrap());

/// Remove every code point in general category C. Idempotent.
pub fn strip_invisible(s: &str) -> String {
    INVISIBLE.replace_all(s, "").into_owned()
}

/// Post-run anomaly check: does a sanitized string still look corrupted?
/// Flags U+FFFD (bad transcoding) and raw C0 controls other than \t \n \r.
pub fn looks_garbled(s: &str) -> bool {
    s.chars()
        .any(|c| c == '\u{fffd}' || ((c as u32) < 32 && !matches!(c, '\t' | '\n' | '\r')))
}
