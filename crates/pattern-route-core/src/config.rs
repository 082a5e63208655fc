//! Configuration for pattern canonicalization.

use serde::{Deserialize, Serialize};

/// Ordering applied to mapping keys when building a route.
///
/// Both ends of a messaging link must use the same ordering, otherwise
/// structurally equal patterns produce different routes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyOrder {
    /// CLDR root collation, the order of ECMAScript `localeCompare` (default).
    #[default]
    Locale,
    /// Raw Unicode scalar value order (`str::cmp`).
    Codepoint,
}

/// Options for pattern canonicalization.
///
/// ## Serialization Format
///
/// Fields are serialized in `kebab-case` (e.g., `key-order`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "kebab-case", default)]
pub struct CanonicalizeOptions {
    /// Key ordering for mapping fragments. Default: [`KeyOrder::Locale`].
    pub key_order: KeyOrder,
}

impl CanonicalizeOptions {
    pub fn with_key_order(key_order: KeyOrder) -> Self {
        Self { key_order }
    }
}
