//! Dispatcher routing each (actual, pattern) pair to its matcher.

use super::array::match_array;
use super::conflict::{Conflict, Conflicts};
use super::error::MatchError;
use super::marker;
use super::object::match_object;
use super::primitive::match_primitive;
use crate::path::Path;
use crate::value::{Kind, Value};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A kind-specific matcher. Both values are present and share a kind.
type MatcherFn = fn(&Path, &Value, &Value, &mut Conflicts) -> Result<(), MatchError>;

static MATCHERS: Lazy<HashMap<Kind, MatcherFn>> = Lazy::new(|| {
    HashMap::from([
        (Kind::Bool, match_primitive as MatcherFn),
        (Kind::Number, match_primitive as MatcherFn),
        (Kind::String, match_primitive as MatcherFn),
        (Kind::Array, match_array as MatcherFn),
        (Kind::Object, match_object as MatcherFn),
    ])
});

/// Matches `actual` against `pattern` at `path`, adding conflicts in
/// traversal order.
///
/// `None` and `Some(Value::Null)` both mean "no value". A missing pattern
/// expects a missing actual value.
pub(super) fn match_value(
    path: &Path,
    actual: Option<&Value>,
    pattern: Option<&Value>,
    conflicts: &mut Conflicts,
) -> Result<(), MatchError> {
    let present = actual.filter(|v| !v.is_null());

    let Some(pattern) = pattern.filter(|p| !p.is_null()) else {
        if present.is_some() {
            conflicts.add(Conflict::new(path, None, actual));
        }
        return Ok(());
    };

    if let Some(text) = pattern.as_marker() {
        return marker::evaluate(path, actual, text, conflicts);
    }

    let Some(present) = present else {
        conflicts.add(Conflict::new(path, Some(pattern), actual));
        return Ok(());
    };

    let kind = pattern.kind();
    if present.kind() != kind {
        conflicts.add(Conflict::new(path, Some(pattern), Some(present)));
        return Ok(());
    }

    match MATCHERS.get(&kind) {
        Some(matcher) => matcher(path, present, pattern, conflicts),
        None => {
            conflicts.add(Conflict::new(path, Some(pattern), Some(present)));
            Err(MatchError::UnsupportedKind {
                value: present.to_string(),
                kind,
            })
        }
    }
}
