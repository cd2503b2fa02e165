//! Marker interpreter.
//!
//! A marker is a pattern string starting with `#`. Its text is split on the
//! first whitespace character into a name and an optional argument, and the
//! name is looked up in a fixed registry of `(arity, check)` definitions.

use super::conflict::{Conflict, Conflicts};
use super::error::MatchError;
use super::format;
use crate::path::Path;
use crate::value::Value;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

pub const IGNORE: &str = "#ignore";
pub const PRESENT: &str = "#present";
pub const NOT_PRESENT: &str = "#notpresent";
pub const ARRAY_OF: &str = "#array-of";

/// Decides whether the actual value satisfies a marker. `None` stands for an
/// absent or null value.
type Check = fn(Option<&Value>, Option<&str>) -> Result<bool, MatchError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Arity {
    Zero,
    One,
}

struct MarkerDef {
    arity: Arity,
    check: Check,
}

impl MarkerDef {
    fn new(arity: Arity, check: Check) -> Self {
        MarkerDef { arity, check }
    }
}

static MARKERS: Lazy<HashMap<&'static str, MarkerDef>> = Lazy::new(|| {
    use Arity::*;
    HashMap::from([
        (IGNORE, MarkerDef::new(Zero, always)),
        ("#null", MarkerDef::new(Zero, null)),
        ("#notnull", MarkerDef::new(Zero, not_null)),
        (PRESENT, MarkerDef::new(Zero, always)),
        (NOT_PRESENT, MarkerDef::new(Zero, never)),
        ("#array", MarkerDef::new(Zero, array)),
        ("#object", MarkerDef::new(Zero, object)),
        ("#bool", MarkerDef::new(Zero, boolean)),
        ("#boolean", MarkerDef::new(Zero, boolean)),
        ("#number", MarkerDef::new(Zero, number)),
        ("#string", MarkerDef::new(Zero, string)),
        ("#date", MarkerDef::new(Zero, date)),
        ("#datetime", MarkerDef::new(Zero, datetime)),
        ("#uuid", MarkerDef::new(Zero, uuid)),
        ("#uuid-v4", MarkerDef::new(Zero, uuid_v4)),
        ("#regex", MarkerDef::new(One, matches_regex)),
    ])
});

/// Marker is a parsed marker text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker<'a> {
    pub text: &'a str,
    pub name: &'a str,
    pub argument: Option<&'a str>,
}

impl<'a> Marker<'a> {
    /// Splits marker text on its first whitespace character. The argument
    /// keeps any further whitespace.
    pub fn parse(text: &'a str) -> Self {
        match text.split_once(char::is_whitespace) {
            Some((name, argument)) => Marker {
                text,
                name,
                argument: Some(argument),
            },
            None => Marker {
                text,
                name: text,
                argument: None,
            },
        }
    }

    /// Resolves the marker and runs its check against `actual`.
    pub fn check(&self, actual: Option<&Value>) -> Result<bool, MatchError> {
        let def = MARKERS
            .get(self.name)
            .ok_or_else(|| MatchError::UnsupportedMarker {
                marker: self.text.to_string(),
            })?;
        // Markers without an argument ignore any trailing text.
        if def.arity == Arity::One && self.argument.is_none() {
            return Err(MatchError::MissingArgument {
                marker: self.name.to_string(),
            });
        }
        (def.check)(actual, self.argument)
    }
}

/// Returns true if `pattern` is exactly the marker text `marker`.
pub fn is_marker(pattern: &Value, marker: &str) -> bool {
    pattern.as_marker() == Some(marker)
}

/// Evaluates the marker `text` against `actual` at `path`.
///
/// A failed check adds one conflict. A malformed marker adds one conflict and
/// returns the hard error.
pub(super) fn evaluate(
    path: &Path,
    actual: Option<&Value>,
    text: &str,
    conflicts: &mut Conflicts,
) -> Result<(), MatchError> {
    let present = actual.filter(|v| !v.is_null());
    let conflict = || Conflict::new(path, Some(&Value::from(text)), actual);

    match Marker::parse(text).check(present) {
        Ok(true) => Ok(()),
        Ok(false) => {
            conflicts.add(conflict());
            Ok(())
        }
        Err(err) => {
            conflicts.add(conflict());
            Err(err)
        }
    }
}

fn always(_: Option<&Value>, _: Option<&str>) -> Result<bool, MatchError> {
    Ok(true)
}

// Reaching a leaf `#notpresent` means the key exists.
fn never(_: Option<&Value>, _: Option<&str>) -> Result<bool, MatchError> {
    Ok(false)
}

fn null(actual: Option<&Value>, _: Option<&str>) -> Result<bool, MatchError> {
    Ok(actual.is_none())
}

fn not_null(actual: Option<&Value>, _: Option<&str>) -> Result<bool, MatchError> {
    Ok(actual.is_some())
}

fn array(actual: Option<&Value>, _: Option<&str>) -> Result<bool, MatchError> {
    Ok(actual.is_some_and(Value::is_array))
}

fn object(actual: Option<&Value>, _: Option<&str>) -> Result<bool, MatchError> {
    Ok(actual.is_some_and(Value::is_object))
}

fn boolean(actual: Option<&Value>, _: Option<&str>) -> Result<bool, MatchError> {
    Ok(actual.and_then(Value::as_bool).is_some())
}

fn number(actual: Option<&Value>, _: Option<&str>) -> Result<bool, MatchError> {
    Ok(actual.is_some_and(Value::is_number))
}

fn string(actual: Option<&Value>, _: Option<&str>) -> Result<bool, MatchError> {
    Ok(actual.is_some_and(Value::is_string))
}

fn date(actual: Option<&Value>, _: Option<&str>) -> Result<bool, MatchError> {
    Ok(actual.and_then(Value::as_str).is_some_and(format::is_date))
}

fn datetime(actual: Option<&Value>, _: Option<&str>) -> Result<bool, MatchError> {
    Ok(actual.and_then(Value::as_str).is_some_and(format::is_datetime))
}

fn uuid(actual: Option<&Value>, _: Option<&str>) -> Result<bool, MatchError> {
    Ok(actual.and_then(Value::as_str).is_some_and(format::is_uuid))
}

fn uuid_v4(actual: Option<&Value>, _: Option<&str>) -> Result<bool, MatchError> {
    Ok(actual.and_then(Value::as_str).is_some_and(format::is_uuid_v4))
}

// Compiled on every evaluation; the pattern is checked before the value.
fn matches_regex(actual: Option<&Value>, argument: Option<&str>) -> Result<bool, MatchError> {
    let Some(pattern) = argument else {
        return Err(MatchError::MissingArgument {
            marker: "#regex".to_string(),
        });
    };
    let re = Regex::new(pattern).map_err(|source| MatchError::InvalidRegex { source })?;
    Ok(actual.and_then(Value::as_str).is_some_and(|s| re.is_match(s)))
}
