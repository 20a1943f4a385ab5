//! Version extraction and validation.
//!
//! Flutter encodes the build number in the pubspec version as
//! `<version_number>+<build_number>`. This module pulls that string out of a
//! parsed manifest and splits it into its two halves without interpreting
//! either of them.

use crate::error::{PubspecError, Result};
use crate::manifest::{ManifestDocument, is_blank};
use camino::Utf8Path;
use serde_yaml::{Mapping, Value};

/// Key holding the version in the manifest mapping.
pub const VERSION_KEY: &str = "version";

/// Separator between the version number and the build number.
pub const BUILD_SEPARATOR: char = '+';

/// The two halves of a pubspec version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionParts {
    /// Text before the separator, e.g. `1.2.3`.
    pub version_number: String,
    /// Text after the separator, e.g. `45`.
    pub build_number: String,
}

/// Splits `version` on [`BUILD_SEPARATOR`] into exactly two parts.
///
/// Segments are returned as-is: no trimming and no numeric parsing.
///
/// # Errors
///
/// Returns [`PubspecError::InvalidVersionFormat`] unless the string contains
/// exactly one separator.
///
/// # Examples
///
/// ```
/// use pubspec_version::version::split_version;
///
/// let parts = split_version("1.2.3+45").expect("valid version");
/// assert_eq!(parts.version_number, "1.2.3");
/// assert_eq!(parts.build_number, "45");
///
/// assert!(split_version("1.2.3").is_err());
/// assert!(split_version("1.2.3+4+5").is_err());
/// ```
pub fn split_version(version: &str) -> Result<VersionParts> {
    let mut segments = version.split(BUILD_SEPARATOR);
    match (segments.next(), segments.next(), segments.next()) {
        (Some(version_number), Some(build_number), None) => Ok(VersionParts {
            version_number: version_number.to_owned(),
            build_number: build_number.to_owned(),
        }),
        _ => Err(PubspecError::InvalidVersionFormat {
            version: version.to_owned(),
        }),
    }
}

/// Extracts and splits the version from a parsed manifest.
///
/// `path` is only used to describe an absent document.
///
/// # Errors
///
/// - [`PubspecError::ManifestNotFound`] for an empty document, or one holding
///   only an empty string, zero or `false`.
/// - [`PubspecError::NotAnObject`] when the document is a scalar or sequence.
/// - [`PubspecError::VersionNotFound`] when `version` is missing, null,
///   empty, zero or `false`.
/// - [`PubspecError::InvalidVersionFormat`] when `version` is not a string or
///   does not split into two parts.
pub fn extract_version(document: &ManifestDocument, path: &Utf8Path) -> Result<VersionParts> {
    let mapping = match document {
        ManifestDocument::Absent => {
            return Err(PubspecError::ManifestNotFound {
                path: path.to_owned(),
            });
        }
        ManifestDocument::Scalar(text) => {
            return Err(PubspecError::NotAnObject {
                value: text.clone(),
            });
        }
        ManifestDocument::Sequence(items) => {
            return Err(PubspecError::NotAnObject {
                value: render_sequence(items),
            });
        }
        ManifestDocument::Mapping(mapping) => mapping,
    };

    let version = version_field(mapping)?;
    split_version(version)
}

fn version_field(mapping: &Mapping) -> Result<&str> {
    match mapping.get(VERSION_KEY).map(untagged) {
        None => Err(PubspecError::VersionNotFound),
        Some(value) if is_blank(value) => Err(PubspecError::VersionNotFound),
        Some(Value::String(version)) => Ok(version.as_str()),
        Some(other) => Err(PubspecError::InvalidVersionFormat {
            version: render_value(other),
        }),
    }
}

fn untagged(value: &Value) -> &Value {
    match value {
        Value::Tagged(tagged) => untagged(&tagged.value),
        other => other,
    }
}

/// Renders a sequence the way a comma-joined list reads in a log line.
fn render_sequence(items: &[Value]) -> String {
    items
        .iter()
        .map(|item| render_value(untagged(item)))
        .collect::<Vec<_>>()
        .join(",")
}

fn render_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.clone(),
        Value::Sequence(items) => render_sequence(items),
        Value::Mapping(_) => "[object]".to_owned(),
        Value::Tagged(tagged) => render_value(&tagged.value),
    }
}

#[cfg(test)]
#[path = "version_tests.rs"]
mod tests;
