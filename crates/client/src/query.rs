//! Search query normalization and log redaction.
//!
//! Responsibilities:
//! - Ensure every submitted query starts with a search directive.
//! - Produce log-safe stand-ins for query text.
//!
//! Does NOT handle:
//! - Parsing or validating SPL.
//!
//! Invariants:
//! - `normalize_query` is idempotent.
//! - A query whose first token is `search` or which starts with `|` is only trimmed.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Directive prepended to queries that do not start with one.
pub const DEFAULT_DIRECTIVE: &str = "search";

/// Normalize a query so it begins with a search directive.
///
/// Surrounding whitespace is removed. Queries starting with a generating
/// command (`| makeresults ...`) or an explicit `search` are kept as-is;
/// anything else gets `search ` prepended.
pub fn normalize_query(query: &str) -> String {
    let trimmed = query.trim();
    if starts_with_directive(trimmed) {
        trimmed.to_string()
    } else {
        format!("{DEFAULT_DIRECTIVE} {trimmed}").trim_end().to_string()
    }
}

fn starts_with_directive(query: &str) -> bool {
    if query.starts_with('|') {
        return true;
    }
    query.split_whitespace().next() == Some(DEFAULT_DIRECTIVE)
}

/// Redact a query string for logging, showing only length and a short hash prefix.
/// This allows operators to correlate logs without exposing query content.
pub fn redact_query(query: &str) -> String {
    let mut hasher = DefaultHasher::new();
    query.hash(&mut hasher);
    let hash = hasher.finish();
    format!("<{} chars, hash={:08x}>", query.len(), hash)
}
