//! Matcher module - Pattern matching of actual values against patterns.
//!
//! A pattern is a literal value, a marker string starting with `#`, or any
//! combination of these through arrays and objects. Matching reports every
//! divergence as a path-qualified [`Conflict`] and structural misuse as a
//! [`MatchError`].
//!
//! ## Markers
//!
//! | Marker | Accepts |
//! |---|---|
//! | `#ignore` | anything, including a missing value |
//! | `#null` | null or a missing value |
//! | `#notnull` | any non-null value |
//! | `#present` / `#notpresent` | an object member that exists / does not exist |
//! | `#array`, `#object`, `#bool`, `#boolean`, `#number`, `#string` | a value of that kind |
//! | `#date` | a `YYYY-MM-DD` calendar date string |
//! | `#datetime` | an RFC 3339 timestamp string |
//! | `#uuid`, `#uuid-v4` | a UUID string (any version / version 4) |
//! | `#regex <pattern>` | a string containing a match for `<pattern>` |
//!
//! `["#array-of", <pattern>]` matches an array of any length whose elements
//! all match `<pattern>`.

mod api;
mod array;
mod conflict;
mod dispatch;
mod error;
mod format;
mod marker;
mod object;
mod primitive;
mod report;



pub use api::*;
pub use conflict::*;
pub use error::*;
pub use report::*;
