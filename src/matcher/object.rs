//! Object matcher.
//!
//! Matching is driven by the pattern: members of the actual object that the
//! pattern does not mention never conflict. It runs in two phases.
//!
//! 1. For every key of the actual object that the pattern also has, match the
//!    two values.
//! 2. Only when phase 1 found nothing, walk the pattern's keys and enforce
//!    presence: `#notpresent` keys must be missing, `#present` keys must
//!    exist, `#ignore` keys are free, and every other key must exist and match.

use super::conflict::{Conflict, Conflicts};
use super::dispatch::match_value;
use super::error::{MatchError, Side};
use super::marker::{is_marker, IGNORE, NOT_PRESENT, PRESENT};
use crate::path::Path;
use crate::value::{Kind, Object, Value};

pub(super) fn match_object(
    path: &Path,
    actual: &Value,
    pattern: &Value,
    conflicts: &mut Conflicts,
) -> Result<(), MatchError> {
    let mismatch = || Conflict::new(path, Some(pattern), Some(actual));

    let Some(actual_object) = actual.as_object() else {
        conflicts.add(mismatch());
        return Err(wrong_kind(Side::Actual, actual));
    };
    let Some(pattern_object) = pattern.as_object() else {
        conflicts.add(mismatch());
        return Err(wrong_kind(Side::Pattern, pattern));
    };

    let before = conflicts.len();
    match_shared_keys(path, actual_object, pattern_object, conflicts)?;
    // Presence checks only run on an otherwise clean object.
    if conflicts.len() > before {
        return Ok(());
    }
    match_pattern_keys(path, actual_object, pattern_object, conflicts)
}

fn match_shared_keys(
    path: &Path,
    actual: &Object,
    pattern: &Object,
    conflicts: &mut Conflicts,
) -> Result<(), MatchError> {
    for (key, value) in actual.iter() {
        let Some(expected) = pattern.get(key) else {
            continue;
        };
        let member = path.key(key);
        match_value(&member, Some(value), Some(expected), conflicts)
            .map_err(|err| err.in_map_element(member.normalized()))?;
    }
    Ok(())
}

fn match_pattern_keys(
    path: &Path,
    actual: &Object,
    pattern: &Object,
    conflicts: &mut Conflicts,
) -> Result<(), MatchError> {
    for (key, expected) in pattern.iter() {
        let member = path.key(key);
        let value = actual.get(key);
        let missing = || Conflict::new(&member, Some(expected), value);

        if is_marker(expected, NOT_PRESENT) {
            if value.is_some() {
                conflicts.add(missing());
            }
            continue;
        }
        if is_marker(expected, PRESENT) {
            if value.is_none() {
                conflicts.add(missing());
            }
            continue;
        }
        if is_marker(expected, IGNORE) {
            continue;
        }

        match value {
            None => conflicts.add(missing()),
            Some(value) => match_value(&member, Some(value), Some(expected), conflicts)
                .map_err(|err| err.in_map_element(member.normalized()))?,
        }
    }
    Ok(())
}

fn wrong_kind(side: Side, value: &Value) -> MatchError {
    MatchError::WrongKind {
        side,
        expected: Kind::Object,
        actual: value.kind(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::from_json;
    use pretty_assertions::assert_eq;

    fn run(actual: &str, pattern: &str) -> (Conflicts, Option<MatchError>) {
        let actual = from_json(actual).unwrap();
        let pattern = from_json(pattern).unwrap();
        let mut conflicts = Conflicts::new();
        let err = match_object(&Path::root(), &actual, &pattern, &mut conflicts).err();
        (conflicts.normalize_paths(), err)
    }

    #[test]
    fn test_extra_actual_keys_are_ignored() {
        let (conflicts, err) = run(r#"{"a": 1, "b": 2, "c": {"d": 3}}"#, r#"{"a": 1}"#);
        assert!(conflicts.is_empty());
        assert!(err.is_none());
    }

    #[test]
    fn test_empty_pattern_matches_any_object() {
        let (conflicts, _) = run(r#"{"a": 1}"#, r#"{}"#);
        assert!(conflicts.is_empty());
    }

    #[test]
    fn test_value_mismatch() {
        let (conflicts, _) = run(r#"{"a": 1, "b": "x"}"#, r#"{"a": 2, "b": "x"}"#);
        assert_eq!(conflicts.paths(), vec!["/a"]);
    }

    #[test]
    fn test_missing_key() {
        let (conflicts, _) = run(r#"{"a": 1}"#, r#"{"a": 1, "b": 2}"#);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].path, "/b");
        assert_eq!(conflicts[0].expected, Some(Value::Int(2)));
        assert_eq!(conflicts[0].actual, None);
    }

    #[test]
    fn test_notpresent() {
        let (conflicts, _) = run(r#"{"a": 1, "b": 2}"#, r##"{"a": 1, "c": "#notpresent"}"##);
        assert!(conflicts.is_empty());

        let (conflicts, _) = run(r#"{"a": 1, "c": 2}"#, r##"{"c": "#notpresent"}"##);
        assert_eq!(conflicts.paths(), vec!["/c"]);

        // A null member still counts as present.
        let (conflicts, _) = run(r#"{"c": null}"#, r##"{"c": "#notpresent"}"##);
        assert_eq!(conflicts.paths(), vec!["/c"]);
    }

    #[test]
    fn test_present() {
        let (conflicts, _) = run(r#"{"a": null}"#, r##"{"a": "#present"}"##);
        assert!(conflicts.is_empty());

        let (conflicts, _) = run(r#"{"b": 1}"#, r##"{"a": "#present"}"##);
        assert_eq!(conflicts.paths(), vec!["/a"]);
    }

    #[test]
    fn test_ignore_allows_missing_key() {
        let (conflicts, _) = run(r#"{}"#, r##"{"a": "#ignore"}"##);
        assert!(conflicts.is_empty());
        let (conflicts, _) = run(r#"{"a": [1, 2]}"#, r##"{"a": "#ignore"}"##);
        assert!(conflicts.is_empty());
    }

    #[test]
    fn test_other_markers_require_presence() {
        let (conflicts, _) = run(r#"{}"#, r##"{"a": "#null"}"##);
        assert_eq!(conflicts.paths(), vec!["/a"]);
        let (conflicts, _) = run(r#"{"a": null}"#, r##"{"a": "#null"}"##);
        assert!(conflicts.is_empty());
    }

    #[test]
    fn test_phase_one_conflicts_skip_presence_checks() {
        let (conflicts, _) = run(
            r#"{"a": 1, "secret": "x"}"#,
            r##"{"a": 2, "secret": "#notpresent", "required": "#present"}"##,
        );
        // `secret` is reported by its leaf evaluation, `required` is not checked.
        assert_eq!(conflicts.paths(), vec!["/a", "/secret"]);
    }

    #[test]
    fn test_nested_paths() {
        let (conflicts, _) = run(
            r#"{"user": {"tags": ["a", 2], "address": {"zip": "123"}}}"#,
            r##"{"user": {"tags": ["#array-of", "#string"], "address": {"zip": "#number"}}}"##,
        );
        assert_eq!(conflicts.paths(), vec!["/user/address/zip", "/user/tags[1]"]);
    }

    #[test]
    fn test_hard_error_is_wrapped_with_member_path() {
        let (conflicts, err) = run(r#"{"a": {"b": "x"}}"#, r##"{"a": {"b": "#nope"}}"##);
        assert_eq!(conflicts.paths(), vec!["/a/b"]);
        let err = err.unwrap();
        assert_eq!(
            err.to_string(),
            "can't compare map element /a: can't compare map element /a/b: unsupported pattern '#nope'"
        );
    }

    #[test]
    fn test_hard_error_keeps_earlier_sibling_conflicts() {
        let (conflicts, err) = run(r#"{"a": 1, "b": "x"}"#, r##"{"a": 2, "b": "#regex"}"##);
        assert!(matches!(err.unwrap().root_cause(), MatchError::MissingArgument { .. }));
        assert_eq!(conflicts.paths(), vec!["/a", "/b"]);
    }
}
