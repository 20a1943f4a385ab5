//! pubspec-version CLI entrypoint.
//!
//! This binary runs as a GitHub Actions step: it reads the version from
//! `pubspec.yaml` in the workspace and publishes `version_number` and
//! `build_number` as step outputs. Any failure is reported as an `::error::`
//! annotation and the process exits with status 1.

use clap::Parser;
use pubspec_version::action::{RunStatus, run};
use pubspec_version::cli::Cli;
use pubspec_version::config::ActionConfig;
use pubspec_version::reporter::ActionsReporter;
use std::io::Write;

fn main() {
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let status = run_step(&cli, stdout.lock());
    let exit_code = status.exit_code();
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn run_step(cli: &Cli, stdout: impl Write) -> RunStatus {
    let config = ActionConfig::resolve(cli);
    let mut reporter = ActionsReporter::new(stdout, config.output_file.clone());
    run(&config, &mut reporter)
}
