//! Runtime configuration for the action.
//!
//! Each setting is taken from its command-line flag when given, then from the
//! runner environment, then from a default. Environment lookups go through a
//! caller-supplied function so that tests can describe an environment without
//! mutating the process.

use crate::cli::Cli;
use camino::{Utf8Path, Utf8PathBuf};
use log::debug;

/// Environment variable naming the checked-out workspace.
pub const WORKSPACE_ENV: &str = "GITHUB_WORKSPACE";

/// Environment variable naming the step output file.
pub const OUTPUT_ENV: &str = "GITHUB_OUTPUT";

/// Resolved settings for one run.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ActionConfig {
    /// Directory holding `pubspec.yaml`; `None` means the current directory.
    pub workspace: Option<Utf8PathBuf>,
    /// File that step outputs are appended to; `None` selects the legacy
    /// stdout command.
    pub output_file: Option<Utf8PathBuf>,
}

impl ActionConfig {
    /// Resolves configuration from `cli` and the process environment.
    #[must_use]
    pub fn resolve(cli: &Cli) -> Self {
        Self::resolve_with(cli, |key| std::env::var(key).ok())
    }

    /// Resolves configuration from `cli` and the supplied environment lookup.
    ///
    /// Blank environment values count as unset.
    ///
    /// # Examples
    ///
    /// ```
    /// use pubspec_version::cli::Cli;
    /// use pubspec_version::config::ActionConfig;
    ///
    /// let config = ActionConfig::resolve_with(&Cli::default(), |key| {
    ///     (key == "GITHUB_WORKSPACE").then(|| "/work/app".to_owned())
    /// });
    /// assert_eq!(config.workspace.as_deref().map(|p| p.as_str()), Some("/work/app"));
    /// assert!(config.output_file.is_none());
    /// ```
    #[must_use]
    pub fn resolve_with<F>(cli: &Cli, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| {
            env(key)
                .filter(|value| !value.trim().is_empty())
                .map(Utf8PathBuf::from)
        };

        let config = Self {
            workspace: cli.workspace.clone().or_else(|| lookup(WORKSPACE_ENV)),
            output_file: cli.output_file.clone().or_else(|| lookup(OUTPUT_ENV)),
        };
        debug!(
            "workspace: {:?}, output file: {:?}",
            config.workspace, config.output_file
        );
        config
    }

    /// Returns the configured workspace directory, if any.
    #[must_use]
    pub fn workspace(&self) -> Option<&Utf8Path> {
        self.workspace.as_deref()
    }
}
