//! Reading and parsing `pubspec.yaml`.
//!
//! The manifest is read in a single attempt and parsed into a
//! [`ManifestDocument`], which classifies the top-level YAML value so that
//! version extraction can match on its shape rather than probe it.

use crate::error::{PubspecError, Result};
use camino::Utf8Path;
use log::debug;
use serde_yaml::{Mapping, Value};
use std::num::FpCategory;

/// Shape of the top-level YAML document.
#[derive(Debug, Clone, PartialEq)]
pub enum ManifestDocument {
    /// The document is empty, `null`, or an empty string, zero or `false`.
    Absent,
    /// A non-empty string, non-zero number or `true`, rendered as text.
    Scalar(String),
    /// A top-level sequence.
    Sequence(Vec<Value>),
    /// A top-level mapping, the only shape that can carry a version.
    Mapping(Mapping),
}

impl ManifestDocument {
    /// Returns a short label for diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Scalar(_) => "scalar",
            Self::Sequence(_) => "sequence",
            Self::Mapping(_) => "mapping",
        }
    }
}

impl From<Value> for ManifestDocument {
    fn from(value: Value) -> Self {
        if is_blank(&value) {
            return Self::Absent;
        }
        match value {
            Value::Null => Self::Absent,
            Value::Bool(flag) => Self::Scalar(flag.to_string()),
            Value::Number(number) => Self::Scalar(number.to_string()),
            Value::String(text) => Self::Scalar(text),
            Value::Sequence(items) => Self::Sequence(items),
            Value::Mapping(mapping) => Self::Mapping(mapping),
            // Tags such as `!Pubspec` do not change the document's shape.
            Value::Tagged(tagged) => Self::from(tagged.value),
        }
    }
}

/// Returns true for values that count as unset: `null`, `false`, zero,
/// `NaN` and the empty string.
///
/// Tagged values are judged by their inner value.
///
/// # Examples
///
/// ```
/// use pubspec_version::manifest::is_blank;
/// use serde_yaml::Value;
///
/// assert!(is_blank(&Value::Bool(false)));
/// assert!(is_blank(&Value::from(0)));
/// assert!(!is_blank(&Value::from("1.0.0+1")));
/// ```
#[must_use]
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::Bool(true) | Value::Sequence(_) | Value::Mapping(_) => false,
        Value::Number(number) => number
            .as_f64()
            .is_some_and(|n| matches!(n.classify(), FpCategory::Zero | FpCategory::Nan)),
        Value::String(text) => text.is_empty(),
        Value::Tagged(tagged) => is_blank(&tagged.value),
    }
}

/// Reads the manifest at `path` as UTF-8 text.
///
/// # Errors
///
/// Returns [`PubspecError::ManifestNotFound`] if nothing exists at `path`,
/// and [`PubspecError::FileRead`] if the file cannot be opened or is not
/// valid UTF-8.
pub fn read_manifest(path: &Utf8Path) -> Result<String> {
    match std::fs::read_to_string(path) {
        Ok(contents) => {
            debug!("read {} bytes from {path}", contents.len());
            Ok(contents)
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            Err(PubspecError::ManifestNotFound {
                path: path.to_owned(),
            })
        }
        Err(source) => Err(PubspecError::FileRead {
            path: path.to_owned(),
            source,
        }),
    }
}

/// Parses manifest text into a [`ManifestDocument`].
///
/// Empty and whitespace-only text yields [`ManifestDocument::Absent`].
///
/// # Errors
///
/// Returns [`PubspecError::Parse`] carrying the parser's own message when the
/// text is not well-formed YAML or holds more than one document.
///
/// # Examples
///
/// ```
/// use pubspec_version::manifest::{ManifestDocument, parse_manifest};
///
/// let doc = parse_manifest("name: app\nversion: 1.0.0+1\n").expect("valid YAML");
/// assert_eq!(doc.kind(), "mapping");
///
/// assert_eq!(parse_manifest("").ok(), Some(ManifestDocument::Absent));
/// ```
pub fn parse_manifest(contents: &str) -> Result<ManifestDocument> {
    if contents.trim().is_empty() {
        return Ok(ManifestDocument::Absent);
    }

    let value: Value = serde_yaml::from_str(contents)?;
    let document = ManifestDocument::from(value);
    debug!("parsed manifest as {}", document.kind());
    Ok(document)
}

/// Reads and parses the manifest at `path`.
///
/// # Errors
///
/// Propagates errors from [`read_manifest`] and [`parse_manifest`].
pub fn load_manifest(path: &Utf8Path) -> Result<ManifestDocument> {
    let contents = read_manifest(path)?;
    parse_manifest(&contents)
}

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod tests;
