//! Error types for the pubspec version action.
//!
//! Every stage of the pipeline returns [`PubspecError`]. The top-level
//! handler reports the `Display` text of the first error verbatim through the
//! runner's failure channel, so the messages below are what users see in the
//! workflow log.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur while extracting the version from `pubspec.yaml`.
#[derive(Debug, Error)]
pub enum PubspecError {
    /// The manifest does not exist or parsed to an empty document.
    #[error("pubspec.yaml not found {path}")]
    ManifestNotFound {
        /// Path where the manifest was expected.
        path: Utf8PathBuf,
    },

    /// The manifest exists but could not be read as UTF-8 text.
    #[error("failed to read {path}: {source}")]
    FileRead {
        /// Path of the manifest that failed to read.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The manifest is not well-formed YAML.
    #[error(transparent)]
    Parse(#[from] serde_yaml::Error),

    /// The top-level YAML document is a scalar or a sequence.
    #[error("{value} is not an object")]
    NotAnObject {
        /// Rendering of the offending document.
        value: String,
    },

    /// The mapping has no `version` key, or its value is null or empty.
    #[error("version not found in pubspec.yaml")]
    VersionNotFound,

    /// The version does not split into exactly two `+`-separated segments.
    #[error("invalid version format in pubspec.yaml")]
    InvalidVersionFormat {
        /// The rejected version value.
        version: String,
    },

    /// An output name or value collides with the file-command delimiter.
    #[error("unexpected input: output {name} contains the delimiter")]
    OutputDelimiter {
        /// Name of the output being written.
        name: String,
    },

    /// Failed to write to the runner's output file.
    #[error("failed to write output: {source}")]
    WriteFailed {
        /// The underlying error that caused the write to fail.
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias using [`PubspecError`].
pub type Result<T> = std::result::Result<T, PubspecError>;
