//! Primitive comparator for booleans, strings and numbers.

use super::conflict::{Conflict, Conflicts};
use super::error::MatchError;
use crate::path::Path;
use crate::value::Value;

/// Compares two leaf values of the same kind by value. Numbers compare
/// numerically, so `1` and `1.0` are equal.
pub(super) fn match_primitive(
    path: &Path,
    actual: &Value,
    pattern: &Value,
    conflicts: &mut Conflicts,
) -> Result<(), MatchError> {
    if actual != pattern {
        conflicts.add(Conflict::new(path, Some(pattern), Some(actual)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compare(actual: Value, pattern: Value) -> Conflicts {
        let mut conflicts = Conflicts::new();
        match_primitive(&Path::root().key("v"), &actual, &pattern, &mut conflicts).unwrap();
        conflicts
    }

    #[test]
    fn test_equal_primitives() {
        assert!(compare(Value::Bool(true), Value::Bool(true)).is_empty());
        assert!(compare(Value::from("Bob"), Value::from("Bob")).is_empty());
        assert!(compare(Value::Int(30), Value::Int(30)).is_empty());
        assert!(compare(Value::Int(30), Value::Float(30.0)).is_empty());
        assert!(compare(Value::Float(0.5), Value::Float(0.5)).is_empty());
    }

    #[test]
    fn test_mismatch_yields_one_conflict() {
        let conflicts = compare(Value::from("Alice"), Value::from("Bob"));
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].path, "//v");
        assert_eq!(conflicts[0].expected, Some(Value::from("Bob")));
        assert_eq!(conflicts[0].actual, Some(Value::from("Alice")));

        assert_eq!(compare(Value::Int(1), Value::Float(1.25)).len(), 1);
        assert_eq!(compare(Value::Bool(false), Value::Bool(true)).len(), 1);
    }
}
