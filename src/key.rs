//! Shard key model
//!
//! Keys are opaque, ordered composites: a sequence of typed fields compared
//! field-by-field. The total order is what defines chunk boundaries, so it
//! must be identical everywhere a key is compared — routing, record
//! validation, and membership tests all go through the derived `Ord` here.
//!
//! Comparison is a bounded-depth structural walk over the fields (no
//! allocation, no search), which keeps `Chunk::contains_key` cheap on the
//! hot routing path.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One field of a composite shard key
///
/// The variant order is the cross-type order: the `MinKey`/`MaxKey` sentinels
/// bound every concrete value, and numbers sort before text (BSON-style).
/// `#[derive(Ord)]` relies on this declaration order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum KeyValue {
    /// Global minimum sentinel: sorts before every concrete value
    MinKey,

    /// Integer field
    Number(i64),

    /// Text field
    Text(String),

    /// Global maximum sentinel: sorts after every concrete value
    MaxKey,
}

impl KeyValue {
    /// Render this field for use inside a catalog document identifier
    ///
    /// Deterministic and stable for a given value; not a serialization
    /// format. Text is quoted with `\`-escaped delimiters so a field can
    /// never be mistaken for a sentinel, a number, or a run of several
    /// fields — the rendering must be injective, since catalog documents are
    /// addressed by it.
    fn id_fragment(&self) -> String {
        match self {
            KeyValue::MinKey => "MinKey".to_string(),
            KeyValue::Number(n) => n.to_string(),
            KeyValue::Text(s) => {
                format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
            }
            KeyValue::MaxKey => "MaxKey".to_string(),
        }
    }
}

impl fmt::Display for KeyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyValue::MinKey => write!(f, "MinKey"),
            KeyValue::Number(n) => write!(f, "{}", n),
            KeyValue::Text(s) => write!(f, "\"{}\"", s),
            KeyValue::MaxKey => write!(f, "MaxKey"),
        }
    }
}

impl From<i64> for KeyValue {
    fn from(n: i64) -> Self {
        KeyValue::Number(n)
    }
}

impl From<&str> for KeyValue {
    fn from(s: &str) -> Self {
        KeyValue::Text(s.to_string())
    }
}

/// An ordered composite shard key
///
/// Compared lexicographically field-by-field via the derived `Ord`. All keys
/// of one collection share the same field count (the shard key pattern), so
/// lexicographic comparison is total over the keys a chunk will ever see.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ShardKey(Vec<KeyValue>);

impl ShardKey {
    /// Build a key from its fields
    pub fn new(fields: Vec<KeyValue>) -> Self {
        Self(fields)
    }

    /// The global minimum boundary for a key pattern of `width` fields
    pub fn global_min(width: usize) -> Self {
        Self(vec![KeyValue::MinKey; width])
    }

    /// The global maximum boundary for a key pattern of `width` fields
    pub fn global_max(width: usize) -> Self {
        Self(vec![KeyValue::MaxKey; width])
    }

    /// Fields of this key, in comparison order
    pub fn fields(&self) -> &[KeyValue] {
        &self.0
    }

    /// Number of fields
    pub fn width(&self) -> usize {
        self.0.len()
    }

    /// Whether the key has no fields (malformed; rejected by record validation)
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render this key for use inside a catalog document identifier
    ///
    /// Fields joined by `_`, e.g. `10_"east"`. Deterministic, and distinct
    /// keys always render distinctly: separators only ever appear between
    /// fields or inside quoted text, never ambiguously.
    pub fn id_fragment(&self) -> String {
        self.0
            .iter()
            .map(KeyValue::id_fragment)
            .collect::<Vec<_>>()
            .join("_")
    }
}

impl fmt::Display for ShardKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ ")?;
        for (i, field) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", field)?;
        }
        write!(f, " }}")
    }
}

impl From<i64> for ShardKey {
    fn from(n: i64) -> Self {
        Self(vec![KeyValue::Number(n)])
    }
}

impl From<&str> for ShardKey {
    fn from(s: &str) -> Self {
        Self(vec![KeyValue::Text(s.to_string())])
    }
}
