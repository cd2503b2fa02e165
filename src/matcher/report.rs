//! Result of a top-level match.

use super::conflict::Conflicts;
use super::error::MatchError;
use std::fmt;

/// MatchReport holds both outputs of a match: the conflicts found and an
/// optional hard error.
///
/// The actual value matches the pattern only if there are no conflicts and
/// no error.
#[derive(Debug, Default)]
pub struct MatchReport {
    /// Divergences in traversal order, with root-normalized paths.
    pub conflicts: Conflicts,
    /// A structural failure that stopped part of the match.
    pub error: Option<MatchError>,
}

impl MatchReport {
    /// Creates a report from a finished match.
    pub fn new(conflicts: Conflicts, error: Option<MatchError>) -> Self {
        MatchReport { conflicts, error }
    }

    /// Returns true if the actual value satisfies the pattern.
    pub fn is_match(&self) -> bool {
        self.conflicts.is_empty() && self.error.is_none()
    }

    /// Returns true if matching hit a hard error.
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Converts the report into a Result, keeping the whole report on failure.
    pub fn into_result(self) -> Result<(), MatchReport> {
        if self.is_match() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for MatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_match() {
            return write!(f, "match");
        }
        if let Some(ref err) = self.error {
            writeln!(f, "error: {}", err)?;
        }
        write!(f, "{} conflict(s):", self.conflicts.len())?;
        for conflict in &self.conflicts {
            write!(f, "\n  {}", conflict)?;
        }
        Ok(())
    }
}

impl std::error::Error for MatchReport {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.error.as_ref().map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Asserts that a JSON document matches a JSON pattern.
///
/// Panics with the rendered [`MatchReport`] otherwise.
///
/// ```
/// use json_pattern_match::assert_json_matches;
///
/// assert_json_matches!(r#"{"id": 7, "name": "Bob"}"#, r##"{"id": "#number"}"##);
/// ```
#[macro_export]
macro_rules! assert_json_matches {
    ($actual:expr, $pattern:expr $(,)?) => {{
        let report = $crate::json_string_matches(&$actual, &$pattern);
        if !report.is_match() {
            panic!("JSON does not match pattern\n{}", report);
        }
    }};
}
