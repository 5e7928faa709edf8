//! Flattened request attributes with case-insensitive lookup.
//!
//! A gateway hands the request to the process as one JSON document, usually an
//! envelope with `query`, `headers` and `body` objects. Flattening turns every
//! nested object into dotted key paths so handlers can ask for `query.ret`
//! instead of walking the document:
//!
//! ```text
//! {"Query": {"ret": "503"}, "sourceIp": "1.2.3.4", "tags": [1, 2]}
//!
//! query.ret -> "503"
//! sourceip  -> "1.2.3.4"
//! tags      -> [1, 2]
//! ```
//!
//! Values keep their raw JSON text. Only objects are expanded; arrays, strings,
//! numbers, booleans and null are leaves. An empty object has no leaves and
//! therefore leaves no trace in the result.
//!
//! # DoS Protection
//!
//! Object nesting is capped at [`MAX_NESTING_DEPTH`] levels by default. Deeper
//! documents are rejected with [`DecodeError::NestingTooDeep`] rather than
//! expanded.
//!
//! # Usage
//!
//! ```
//! use reflector_core::attributes::flatten_str;
//!
//! let store = flatten_str(r#"{"query": {"RET": "503"}}"#).unwrap();
//! assert_eq!(store.get("Query.Ret"), "503");
//! assert_eq!(store.get_with_found("query.missing"), (String::new(), false));
//!
//! // Top-level arrays are not requests.
//! assert!(flatten_str("[1,2,3]").is_err());
//! ```

mod errors;
mod flattener;

use std::collections::BTreeMap;
use std::fmt;

pub use errors::{DecodeError, FlattenLimits, MAX_NESTING_DEPTH};

/// Flatten a request document using the default limits.
pub fn flatten(raw: &[u8]) -> Result<AttributeStore, DecodeError> {
    flatten_with_limits(raw, FlattenLimits::default())
}

/// Flatten a request document held as a string.
pub fn flatten_str(raw: &str) -> Result<AttributeStore, DecodeError> {
    flatten(raw.as_bytes())
}

pub fn flatten_with_limits(
    raw: &[u8],
    limits: FlattenLimits,
) -> Result<AttributeStore, DecodeError> {
    let entries = flattener::Flattener::new(limits).run(raw)?;
    tracing::debug!(
        attributes = entries.len(),
        max_depth = limits.max_depth,
        "flattened request"
    );
    Ok(AttributeStore { entries })
}

/// Read-only view over one flattened request.
///
/// Keys are case-folded key paths (see [`fold_case`]); values are the raw JSON
/// text of each leaf, so string leaves still carry their quotes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeStore {
    entries: BTreeMap<String, String>,
}

impl AttributeStore {
    /// Returns the attribute with one pair of surrounding quotes removed, or an
    /// empty string if the attribute does not exist.
    pub fn get(&self, name: &str) -> String {
        self.get_with_found(name).0
    }

    /// Like [`get`](Self::get), but also reports whether the attribute exists.
    pub fn get_with_found(&self, name: &str) -> (String, bool) {
        match self.raw(name) {
            Some(raw) => (strip_quotes(raw).to_string(), true),
            None => (String::new(), false),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.raw(name).is_some()
    }

    /// All key paths, each exactly once.
    pub fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serializes every attribute as a tab-indented JSON object.
    ///
    /// Values are the stored raw text encoded as JSON strings, so a string leaf
    /// `"503"` comes out as `"\"503\""` and a number leaf `1` as `"1"`.
    pub fn to_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        use serde::Serialize;

        let mut out = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
        let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
        self.entries.serialize(&mut ser)?;
        Ok(out)
    }

    // Stored keys are already folded, so folding the query is enough.
    fn raw(&self, name: &str) -> Option<&str> {
        self.entries.get(&fold_case(name)).map(String::as_str)
    }
}

impl fmt::Display for AttributeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (k, v) in &self.entries {
            writeln!(f, "k: {k} v: {v}")?;
        }
        Ok(())
    }
}

/// Case folding applied to stored key paths and to lookups.
///
/// Folds one `char` at a time, so a segment folds the same way on its own as
/// inside a longer path (unlike `str::to_lowercase`, which turns a word-final
/// `Σ` into `ς`).
pub fn fold_case(s: &str) -> String {
    s.chars().flat_map(fold_char).collect()
}

// Through upper case first so that ς, σ and Σ (or ſ, s and S) land together.
fn fold_char(c: char) -> std::char::ToLowercase {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u.to_lowercase(),
        _ => c.to_lowercase(),
    }
}

fn strip_quotes(raw: &str) -> &str {
    raw.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(raw)
}
