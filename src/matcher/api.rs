//! Public entry points.

use super::conflict::{Conflict, Conflicts};
use super::dispatch::match_value;
use super::error::{MatchError, Side};
use super::report::MatchReport;
use crate::path::Path;
use crate::value::{self, Value};

/// Checks whether the JSON document `actual` satisfies the JSON pattern
/// `pattern`.
///
/// The pattern can be a literal value (requiring an exact match), a marker
/// (a string starting with `#`), or any combination of these through arrays
/// and objects. Input that fails to decode yields one root conflict carrying
/// the decoder message, plus a [`MatchError::Json`] naming the failing side.
pub fn json_matches(actual: &[u8], pattern: &[u8]) -> MatchReport {
    let actual = match value::from_json_slice(actual) {
        Ok(v) => v,
        Err(source) => {
            let conflict = Conflict::decode_failure(&source);
            let side = Side::Actual;
            return decode_failure(conflict, MatchError::Json { side, source });
        }
    };
    let pattern = match value::from_json_slice(pattern) {
        Ok(v) => v,
        Err(source) => {
            let conflict = Conflict::decode_failure(&source);
            let side = Side::Pattern;
            return decode_failure(conflict, MatchError::Json { side, source });
        }
    };
    value_matches(&actual, &pattern)
}

/// String convenience wrapper over [`json_matches`].
pub fn json_string_matches(actual: &str, pattern: &str) -> MatchReport {
    json_matches(actual.as_bytes(), pattern.as_bytes())
}

/// Like [`json_string_matches`], decoding both sides as YAML.
pub fn yaml_matches(actual: &str, pattern: &str) -> MatchReport {
    let actual = match value::from_yaml(actual) {
        Ok(v) => v,
        Err(source) => {
            let conflict = Conflict::decode_failure(&source);
            let side = Side::Actual;
            return decode_failure(conflict, MatchError::Yaml { side, source });
        }
    };
    let pattern = match value::from_yaml(pattern) {
        Ok(v) => v,
        Err(source) => {
            let conflict = Conflict::decode_failure(&source);
            let side = Side::Pattern;
            return decode_failure(conflict, MatchError::Yaml { side, source });
        }
    };
    value_matches(&actual, &pattern)
}

/// Matches already decoded values.
pub fn value_matches(actual: &Value, pattern: &Value) -> MatchReport {
    let mut conflicts = Conflicts::new();
    let error = match_value(&Path::root(), Some(actual), Some(pattern), &mut conflicts).err();
    MatchReport::new(conflicts.normalize_paths(), error)
}

fn decode_failure(conflict: Conflict, error: MatchError) -> MatchReport {
    let mut conflicts = Conflicts::new();
    conflicts.add(conflict);
    MatchReport::new(conflicts, Some(error))
}
