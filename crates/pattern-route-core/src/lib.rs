//! Canonical routes for message patterns.
//!
//! A publisher and a subscriber can describe the same destination with
//! mappings whose keys arrive in different orders. Both sides canonicalize
//! their pattern to the same route string and use it as the dispatch-table key.
//!
//! ```
//! use pattern_route_core::canonicalize_value;
//! use serde_json::json;
//!
//! let publisher = canonicalize_value(&json!({ "cmd": "sum", "role": "math" })).unwrap();
//! let subscriber = canonicalize_value(&json!({ "role": "math", "cmd": "sum" })).unwrap();
//! assert_eq!(publisher, "{cmd:sum/role:math}");
//! assert_eq!(publisher, subscriber);
//! ```

pub mod canonical;
pub mod collation;
pub mod config;
pub mod error;
pub mod number;
pub mod pattern;
pub mod pointer;

pub use canonical::{
    canonicalize, canonicalize_str, canonicalize_str_with, canonicalize_value,
    canonicalize_value_with, canonicalize_with, routes_match,
};
pub use config::{CanonicalizeOptions, KeyOrder};
pub use error::RouteError;
pub use pattern::Pattern;
pub use pointer::{child_path, escape_pointer_segment};
