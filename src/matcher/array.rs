//! Array matcher.

use super::conflict::{Conflict, Conflicts};
use super::dispatch::match_value;
use super::error::{MatchError, Side};
use super::marker::{is_marker, ARRAY_OF};
use crate::path::Path;
use crate::value::{Kind, Value};

/// Matches an actual array against a pattern array.
///
/// A two-element pattern whose first element is exactly `#array-of` applies
/// its second element to every actual element, whatever the count. Any other
/// pattern requires equal lengths and is matched element by element.
pub(super) fn match_array(
    path: &Path,
    actual: &Value,
    pattern: &Value,
    conflicts: &mut Conflicts,
) -> Result<(), MatchError> {
    let mismatch = || Conflict::new(path, Some(pattern), Some(actual));

    let Some(items) = actual.as_array() else {
        conflicts.add(mismatch());
        return Err(wrong_kind(Side::Actual, actual));
    };
    let Some(pattern_items) = pattern.as_array() else {
        conflicts.add(mismatch());
        return Err(wrong_kind(Side::Pattern, pattern));
    };

    let element_pattern = element_pattern(pattern_items);
    if element_pattern.is_none() && items.len() != pattern_items.len() {
        conflicts.add(mismatch());
        return Ok(());
    }

    for (i, item) in items.iter().enumerate() {
        let expected = match element_pattern {
            Some(p) => p,
            None => &pattern_items[i],
        };
        match_value(&path.index(i), Some(item), Some(expected), conflicts)
            .map_err(|err| err.in_slice_element(i))?;
    }
    Ok(())
}

/// Returns the per-element pattern of an `["#array-of", pattern]` form.
fn element_pattern(pattern: &[Value]) -> Option<&Value> {
    match pattern {
        [first, element] if is_marker(first, ARRAY_OF) => Some(element),
        _ => None,
    }
}

fn wrong_kind(side: Side, value: &Value) -> MatchError {
    MatchError::WrongKind {
        side,
        expected: Kind::Array,
        actual: value.kind(),
    }
}
