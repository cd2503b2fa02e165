//! Hard errors raised while matching.

use crate::value::Kind;
use std::fmt;
use thiserror::Error;

/// Side names which input a decode or kind error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Actual,
    Pattern,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Actual => f.write_str("actual"),
            Side::Pattern => f.write_str("pattern"),
        }
    }
}

/// MatchError is a structural failure, distinct from a reported conflict.
///
/// Every hard error is accompanied by a conflict at the point of failure.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("can't unmarshal {side} argument: {source}")]
    Json {
        side: Side,
        #[source]
        source: serde_json::Error,
    },

    #[error("can't unmarshal {side} argument: {source}")]
    Yaml {
        side: Side,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("expected exactly one argument for {marker}")]
    MissingArgument { marker: String },

    #[error("invalid regex argument to #regex: {source}")]
    InvalidRegex {
        #[source]
        source: regex::Error,
    },

    #[error("unsupported pattern '{marker}'")]
    UnsupportedMarker { marker: String },

    #[error("unable to compare {value} - kind {kind} is not supported")]
    UnsupportedKind { value: String, kind: Kind },

    #[error("wrong kind for {side} value, expected {expected}, got {actual}")]
    WrongKind {
        side: Side,
        expected: Kind,
        actual: Kind,
    },

    #[error("can't compare map element {path}: {source}")]
    MapElement {
        path: String,
        #[source]
        source: Box<MatchError>,
    },

    #[error("can't compare slice element {index}: {source}")]
    SliceElement {
        index: usize,
        #[source]
        source: Box<MatchError>,
    },
}

impl MatchError {
    /// Wraps an error raised below an object member.
    pub fn in_map_element(self, path: impl Into<String>) -> Self {
        MatchError::MapElement {
            path: path.into(),
            source: Box::new(self),
        }
    }

    /// Wraps an error raised below an array element.
    pub fn in_slice_element(self, index: usize) -> Self {
        MatchError::SliceElement {
            index,
            source: Box::new(self),
        }
    }

    /// Returns the innermost error, skipping element context wrappers.
    pub fn root_cause(&self) -> &MatchError {
        match self {
            MatchError::MapElement { source, .. } | MatchError::SliceElement { source, .. } => {
                source.root_cause()
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MatchError::UnsupportedMarker {
            marker: "#frobnicate".into(),
        };
        assert_eq!(err.to_string(), "unsupported pattern '#frobnicate'");

        let err = MatchError::MissingArgument {
            marker: "#regex".into(),
        };
        assert_eq!(err.to_string(), "expected exactly one argument for #regex");
    }

    #[test]
    fn test_context_wrapping() {
        let err = MatchError::UnsupportedMarker { marker: "#x".into() }
            .in_slice_element(2)
            .in_map_element("//items");
        assert_eq!(
            err.to_string(),
            "can't compare map element //items: can't compare slice element 2: unsupported pattern '#x'"
        );
        assert!(matches!(err.root_cause(), MatchError::UnsupportedMarker { .. }));
    }

    #[test]
    fn test_wrong_kind_display() {
        let err = MatchError::WrongKind {
            side: Side::Pattern,
            expected: Kind::Array,
            actual: Kind::Object,
        };
        assert_eq!(
            err.to_string(),
            "wrong kind for pattern value, expected array, got object"
        );
    }
}
