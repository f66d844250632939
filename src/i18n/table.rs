//! Translation tables: immutable, tree-shaped string content for one locale.

use crate::i18n::{I18nError, Locale};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Kind of value found at a leaf path of a translation document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeafKind {
    Text,
    EmptyText,
    /// Number, bool or null; never resolvable as text
    Other,
}

/// A parsed translation document. The root is always a JSON object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslationTable {
    root: Map<String, Value>,
}

impl TranslationTable {
    /// Parse a JSON document for `locale`.
    pub fn from_json(locale: Locale, raw: &str) -> Result<Self, I18nError> {
        let value: Value =
            serde_json::from_str(raw).map_err(|source| I18nError::InvalidDocument {
                locale: locale.code().to_string(),
                source,
            })?;

        match value {
            Value::Object(root) => Ok(Self { root }),
            _ => Err(I18nError::NotAnObject {
                locale: locale.code().to_string(),
            }),
        }
    }

    /// A table with no entries; every lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Walk a dot-separated key path, one level per segment.
    ///
    /// Objects are indexed by name and arrays by decimal position, so
    /// `testimonials.items.0.quote` works. Returns `None` if any segment is
    /// missing, if the walk hits a scalar early, or if the final value is not a
    /// string.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        let mut segments = key.split('.');
        let mut node = self.root.get(segments.next()?)?;

        for segment in segments {
            node = match node {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(parse_index(segment)?)?,
                _ => return None,
            };
        }

        node.as_str()
    }

    /// Every non-container path in the document, with the kind of value there.
    pub fn leaves(&self) -> BTreeMap<String, LeafKind> {
        let mut leaves = BTreeMap::new();
        for (key, value) in &self.root {
            collect_leaves(key.clone(), value, &mut leaves);
        }
        leaves
    }
}

/// Array positions are plain decimal, as `leaves()` spells them: no sign and
/// no leading zeros.
fn parse_index(segment: &str) -> Option<usize> {
    let canonical = !segment.is_empty()
        && segment.bytes().all(|b| b.is_ascii_digit())
        && (segment == "0" || !segment.starts_with('0'));

    if canonical {
        segment.parse().ok()
    } else {
        None
    }
}

fn collect_leaves(path: String, value: &Value, out: &mut BTreeMap<String, LeafKind>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                collect_leaves(format!("{}.{}", path, key), child, out);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                collect_leaves(format!("{}.{}", path, index), child, out);
            }
        }
        Value::String(text) if text.is_empty() => {
            out.insert(path, LeafKind::EmptyText);
        }
        Value::String(_) => {
            out.insert(path, LeafKind::Text);
        }
        _ => {
            out.insert(path, LeafKind::Other);
        }
    }
}
