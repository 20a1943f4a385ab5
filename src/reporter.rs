//! Reporting to the GitHub Actions runner.
//!
//! The pipeline talks to the runner through the [`Reporter`] trait so the
//! core logic never writes to the process streams directly. [`ActionsReporter`]
//! implements the runner protocol: log lines and workflow commands on
//! standard output, and step outputs appended to the `GITHUB_OUTPUT` file.

use crate::error::{PubspecError, Result};
use camino::{Utf8Path, Utf8PathBuf};
use log::{debug, trace};
use std::fs::OpenOptions;
use std::io::Write;
use uuid::Uuid;

/// Prefix of the heredoc delimiter used in file commands.
const DELIMITER_PREFIX: &str = "ghadelimiter_";

/// Sinks the pipeline reports through.
#[cfg_attr(test, mockall::automock)]
pub trait Reporter {
    /// Writes an informational log line.
    fn info(&mut self, message: &str);

    /// Publishes a named step output.
    ///
    /// # Errors
    ///
    /// Returns an error if the runner's output channel cannot be written.
    fn set_output(&mut self, name: &str, value: &str) -> Result<()>;

    /// Marks the step as failed with `message`.
    fn set_failed(&mut self, message: &str);
}

/// [`Reporter`] speaking the GitHub Actions runner protocol.
#[derive(Debug)]
pub struct ActionsReporter<W> {
    stdout: W,
    output_file: Option<Utf8PathBuf>,
}

impl<W: Write> ActionsReporter<W> {
    /// Creates a reporter writing log lines to `stdout`.
    ///
    /// Outputs are appended to `output_file` when given; otherwise they are
    /// emitted as legacy `set-output` workflow commands on `stdout`.
    #[must_use]
    pub fn new(stdout: W, output_file: Option<Utf8PathBuf>) -> Self {
        Self {
            stdout,
            output_file,
        }
    }

    /// Consumes the reporter, returning the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.stdout
    }

    fn write_line(&mut self, line: impl std::fmt::Display) {
        if writeln!(self.stdout, "{line}").is_err() {
            // Best-effort logging; ignore write failures.
        }
    }
}

impl<W: Write> Reporter for ActionsReporter<W> {
    fn info(&mut self, message: &str) {
        self.write_line(message);
    }

    fn set_output(&mut self, name: &str, value: &str) -> Result<()> {
        if let Some(path) = &self.output_file {
            debug!("appending output {name} to {path}");
            let delimiter = format!("{DELIMITER_PREFIX}{}", Uuid::new_v4());
            let command = format_file_command(name, value, &delimiter)?;
            return append_file_command(path, &command);
        }

        trace!("GITHUB_OUTPUT unset; issuing set-output command for {name}");
        writeln!(
            self.stdout,
            "\n::set-output name={}::{}",
            escape_property(name),
            escape_data(value)
        )
        .map_err(|source| PubspecError::WriteFailed { source })
    }

    fn set_failed(&mut self, message: &str) {
        self.write_line(format_args!("::error::{}", escape_data(message)));
    }
}

/// Formats a `name<<delimiter` heredoc record for a runner file command.
///
/// # Errors
///
/// Returns [`PubspecError::OutputDelimiter`] if `name` or `value` contains
/// `delimiter`, since the record would then be ambiguous.
pub fn format_file_command(name: &str, value: &str, delimiter: &str) -> Result<String> {
    if name.contains(delimiter) || value.contains(delimiter) {
        return Err(PubspecError::OutputDelimiter {
            name: name.to_owned(),
        });
    }
    Ok(format!("{name}<<{delimiter}\n{value}\n{delimiter}\n"))
}

fn append_file_command(path: &Utf8Path, command: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|source| PubspecError::WriteFailed { source })?;
    file.write_all(command.as_bytes())
        .map_err(|source| PubspecError::WriteFailed { source })
}

/// Escapes a workflow command message.
///
/// # Examples
///
/// ```
/// use pubspec_version::reporter::escape_data;
///
/// assert_eq!(escape_data("100%\nfailed"), "100%25%0Afailed");
/// ```
#[must_use]
pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escapes a workflow command property such as `name=`.
#[must_use]
pub fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

#[cfg(test)]
#[path = "reporter_tests.rs"]
mod tests;
