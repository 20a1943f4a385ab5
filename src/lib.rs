//! Pubspec version action library.
//!
//! This crate reads the `version` field of a Flutter `pubspec.yaml`, written
//! as `<version_number>+<build_number>`, and publishes both halves as GitHub
//! Actions step outputs. It is used by the `pubspec-version` binary and can be
//! driven programmatically with a custom [`reporter::Reporter`].
//!
//! # Modules
//!
//! - [`action`] - Pipeline orchestration and the top-level failure handler
//! - [`cli`] - Command-line argument definitions
//! - [`config`] - Flag and environment configuration
//! - [`error`] - Error types surfaced as step failure messages
//! - [`manifest`] - Manifest reading and YAML classification
//! - [`reporter`] - GitHub Actions runner protocol
//! - [`version`] - Version extraction and splitting
//! - [`workspace`] - Manifest path resolution

pub mod action;
pub mod cli;
pub mod config;
pub mod error;
pub mod manifest;
pub mod reporter;
pub mod version;
pub mod workspace;
