//! # JSON Pattern Match
//!
//! Structural pattern matching for JSON-like data, built as an assertion
//! engine for tests that compare loosely specified expected output against
//! concrete runtime output.
//!
//! Given an actual value and a pattern, the matcher decides whether the value
//! satisfies the pattern and, if not, reports every divergence with its path.
//!
//! ```
//! use json_pattern_match::json_string_matches;
//!
//! let report = json_string_matches(
//!     r#"{"id": "3fa85f64-5717-4562-b3fc-2c963f66afa6", "name": "Bob", "age": 30}"#,
//!     r##"{"id": "#uuid-v4", "name": "Bob", "age": "#string"}"##,
//! );
//! assert!(!report.is_match());
//! assert_eq!(report.conflicts.paths(), vec!["/age"]);
//! ```
//!
//! ## Modules
//!
//! - [`value`] - In-memory representation of decoded JSON/YAML values
//! - [`path`] - Paths locating values inside the matched tree
//! - [`matcher`] - Marker interpreter, matchers, conflicts and entry points

pub mod matcher;
pub mod path;
pub mod value;

pub use matcher::{
    json_matches, json_string_matches, value_matches, yaml_matches, Conflict, Conflicts,
    MatchError, MatchReport, Side,
};
pub use path::Path;
pub use value::{Kind, Object, Value};
