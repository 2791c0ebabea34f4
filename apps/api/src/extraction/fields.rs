//! Contact-field recognition over extracted text.
//!
//! The email pattern is deliberately permissive: it matches email-shaped
//! tokens, not RFC-valid addresses. False positives (a trailing dot at a
//! sentence boundary, for instance) are accepted behavior.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    pub static ref EMAIL: Regex =
        Regex::new(r"[\w.-]+@[\w.-]+").expect("EMAIL regex is valid");

    // Alternatives in priority order: full 10-digit, parenthesized area code,
    // bare 7-digit. find_iter's leftmost-first semantics try them in this
    // order at each position and never re-match inside an earlier match, so
    // overlapping alternatives cannot double-count one occurrence.
    pub static ref PHONE: Regex = Regex::new(
        r"\d{3}[-.\s]?\d{3}[-.\s]?\d{4}|\(\d{3}\)\s*\d{3}[-.\s]?\d{4}|\d{3}[-.\s]?\d{4}"
    )
    .expect("PHONE regex is valid");
}

/// Every email-shaped token in `text`, in first-occurrence order.
/// Duplicates are preserved; nothing is normalized.
pub fn find_emails(text: &str) -> Vec<String> {
    EMAIL
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Every phone-shaped token in `text`, in first-occurrence order.
/// Duplicates are preserved; nothing is normalized.
pub fn find_phones(text: &str) -> Vec<String> {
    PHONE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}
