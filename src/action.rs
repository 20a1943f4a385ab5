//! Pipeline orchestration.
//!
//! [`extract_and_report`] runs the stages in order (resolve the manifest path,
//! load it, extract the version, report both halves) and stops at the first
//! error. [`run`] wraps it as the step entry point: the first error is
//! reported once through [`Reporter::set_failed`], and any output already
//! published stays published.

use crate::config::ActionConfig;
use crate::error::Result;
use crate::manifest::load_manifest;
use crate::reporter::Reporter;
use crate::version::{VersionParts, extract_version};
use crate::workspace::resolve_manifest_path;
use log::debug;

/// Output name for the text before the `+`.
pub const VERSION_NUMBER_OUTPUT: &str = "version_number";

/// Output name for the text after the `+`.
pub const BUILD_NUMBER_OUTPUT: &str = "build_number";

/// Outcome of a step run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Both outputs were published.
    Succeeded,
    /// An error was reported through [`Reporter::set_failed`].
    Failed,
}

impl RunStatus {
    /// Process exit code for this status.
    #[must_use]
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Succeeded => 0,
            Self::Failed => 1,
        }
    }
}

/// Runs the step, converting the first error into a failure report.
pub fn run(config: &ActionConfig, reporter: &mut dyn Reporter) -> RunStatus {
    match extract_and_report(config, reporter) {
        Ok(_) => RunStatus::Succeeded,
        Err(err) => {
            debug!("step failed: {err:?}");
            reporter.set_failed(&err.to_string());
            RunStatus::Failed
        }
    }
}

/// Extracts the version from the configured workspace and reports it.
///
/// Both log lines are written before either output is set.
///
/// # Errors
///
/// Returns the first error raised by path resolution, reading, parsing,
/// validation or output publishing.
pub fn extract_and_report(
    config: &ActionConfig,
    reporter: &mut dyn Reporter,
) -> Result<VersionParts> {
    let manifest_path = resolve_manifest_path(config.workspace());
    debug!("reading manifest at {manifest_path}");

    let document = load_manifest(&manifest_path)?;
    let parts = extract_version(&document, &manifest_path)?;

    reporter.info(&format!("{VERSION_NUMBER_OUTPUT}: {}", parts.version_number));
    reporter.info(&format!("{BUILD_NUMBER_OUTPUT}: {}", parts.build_number));
    reporter.set_output(VERSION_NUMBER_OUTPUT, &parts.version_number)?;
    reporter.set_output(BUILD_NUMBER_OUTPUT, &parts.build_number)?;

    Ok(parts)
}

#[cfg(test)]
#[path = "action_tests.rs"]
mod tests;
