//! Conflict types reported by matching.

use crate::path::{self, Path};
use crate::value::Value;
use serde::Serialize;
use std::fmt;

/// Conflict is a single divergence between the actual value and the pattern.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conflict {
    /// Where the divergence was found.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub path: String,
    /// The pattern (literal value or marker text) at `path`, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<Value>,
    /// The actual value at `path`, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<Value>,
    /// Description of a decode failure reported at the root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Conflict {
    /// Creates a new conflict.
    pub fn new(path: &Path, expected: Option<&Value>, actual: Option<&Value>) -> Self {
        Conflict {
            path: path.as_str().to_string(),
            expected: expected.cloned(),
            actual: actual.cloned(),
            error: None,
        }
    }

    /// Creates the root conflict carrying a decode error.
    pub fn decode_failure(error: impl fmt::Display) -> Self {
        Conflict {
            path: Path::root().into(),
            expected: None,
            actual: None,
            error: Some(error.to_string()),
        }
    }
}

fn fmt_side(v: &Option<Value>) -> String {
    match v {
        Some(v) => v.to_string(),
        None => "nothing".to_string(),
    }
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref err) = self.error {
            return write!(f, "{}: {}", self.path, err);
        }
        write!(
            f,
            "{}: expected {}, got {}",
            self.path,
            fmt_side(&self.expected),
            fmt_side(&self.actual)
        )
    }
}

/// Conflicts is an ordered collection of conflicts, in traversal order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Conflicts {
    conflicts: Vec<Conflict>,
}

impl Conflicts {
    /// Creates a new empty Conflicts collection.
    pub fn new() -> Self {
        Conflicts {
            conflicts: Vec::new(),
        }
    }

    /// Adds a conflict.
    pub fn add(&mut self, conflict: Conflict) {
        self.conflicts.push(conflict);
    }

    /// Returns true if there are no conflicts.
    pub fn is_empty(&self) -> bool {
        self.conflicts.is_empty()
    }

    /// Returns the number of conflicts.
    pub fn len(&self) -> usize {
        self.conflicts.len()
    }

    /// Returns an iterator over the conflicts.
    pub fn iter(&self) -> impl Iterator<Item = &Conflict> {
        self.conflicts.iter()
    }

    /// Returns the conflict paths in order.
    pub fn paths(&self) -> Vec<&str> {
        self.conflicts.iter().map(|c| c.path.as_str()).collect()
    }

    /// Applies root path normalization to every conflict.
    pub(crate) fn normalize_paths(mut self) -> Self {
        for c in &mut self.conflicts {
            c.path = path::normalize(&c.path);
        }
        self
    }
}

impl IntoIterator for Conflicts {
    type Item = Conflict;
    type IntoIter = std::vec::IntoIter<Conflict>;

    fn into_iter(self) -> Self::IntoIter {
        self.conflicts.into_iter()
    }
}

impl<'a> IntoIterator for &'a Conflicts {
    type Item = &'a Conflict;
    type IntoIter = std::slice::Iter<'a, Conflict>;

    fn into_iter(self) -> Self::IntoIter {
        self.conflicts.iter()
    }
}

impl std::ops::Index<usize> for Conflicts {
    type Output = Conflict;

    fn index(&self, i: usize) -> &Conflict {
        &self.conflicts[i]
    }
}

impl fmt::Display for Conflicts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, conflict) in self.conflicts.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", conflict)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_conflict_display() {
        let path = Path::root().key("age");
        let conflict = Conflict::new(&path, Some(&Value::from("#string")), Some(&Value::Int(30)));
        assert_eq!(conflict.to_string(), r##"//age: expected "#string", got 30"##);

        let missing = Conflict::new(&path, Some(&Value::Int(1)), None);
        assert_eq!(missing.to_string(), "//age: expected 1, got nothing");
    }

    #[test]
    fn test_conflict_serialization_omits_empty_fields() {
        let conflict = Conflict::new(&Path::root().key("a"), None, Some(&Value::Bool(true)));
        let json = serde_json::to_string(&conflict).unwrap();
        assert_eq!(json, r#"{"path":"//a","actual":true}"#);

        let decode = Conflict::decode_failure("boom");
        let json = serde_json::to_string(&decode).unwrap();
        assert_eq!(json, r#"{"path":"/","error":"boom"}"#);
    }

    #[test]
    fn test_conflicts_collection() {
        let mut conflicts = Conflicts::new();
        assert!(conflicts.is_empty());

        conflicts.add(Conflict::new(&Path::root().key("x"), None, None));
        conflicts.add(Conflict::new(&Path::root().index(3), None, None));
        assert_eq!(conflicts.len(), 2);

        let conflicts = conflicts.normalize_paths();
        assert_eq!(conflicts.paths(), vec!["/x", "/[3]"]);
    }
}
