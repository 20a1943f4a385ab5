//! CLI argument definitions for the pubspec version action.
//!
//! On a runner the binary is normally invoked without arguments and picks up
//! its settings from the environment; the flags exist for local runs and for
//! workflows that check the package out into a sub-directory.

use camino::Utf8PathBuf;
use clap::Parser;

/// Split the pubspec.yaml version into `version_number` and `build_number`.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "pubspec-version")]
#[command(version, about)]
#[command(long_about = concat!(
    "Split the pubspec.yaml version into step outputs.\n\n",
    "Reads `version: <version_number>+<build_number>` from pubspec.yaml in the ",
    "workspace and publishes both halves as the `version_number` and ",
    "`build_number` outputs of the current GitHub Actions step.",
))]
#[command(after_help = concat!(
    "ENVIRONMENT:\n",
    "  GITHUB_WORKSPACE    Directory holding pubspec.yaml [default: ./]\n",
    "  GITHUB_OUTPUT       File that step outputs are appended to\n\n",
    "EXAMPLES:\n",
    "  Read ./pubspec.yaml:\n",
    "    $ pubspec-version\n\n",
    "  Read a package in a sub-directory:\n",
    "    $ pubspec-version --workspace packages/app\n",
))]
pub struct Cli {
    /// Directory containing pubspec.yaml [overrides GITHUB_WORKSPACE].
    #[arg(short, long, value_name = "DIR")]
    pub workspace: Option<Utf8PathBuf>,

    /// File to append step outputs to [overrides GITHUB_OUTPUT].
    #[arg(short, long, value_name = "FILE")]
    pub output_file: Option<Utf8PathBuf>,
}
