//! Manifest path resolution.
//!
//! The runner checks the repository out into `GITHUB_WORKSPACE`; the manifest
//! is expected at the root of that directory. Resolution never touches the
//! file system, so a missing manifest is only detected when it is read.

use camino::{Utf8Path, Utf8PathBuf};

/// File name of the Dart/Flutter package manifest.
pub const MANIFEST_FILE_NAME: &str = "pubspec.yaml";

/// Workspace used when none is configured.
pub const DEFAULT_WORKSPACE: &str = "./";

/// Returns the manifest path inside `workspace`.
///
/// An absent or empty workspace resolves against [`DEFAULT_WORKSPACE`].
///
/// # Examples
///
/// ```
/// use camino::Utf8Path;
/// use pubspec_version::workspace::resolve_manifest_path;
///
/// let path = resolve_manifest_path(Some(Utf8Path::new("/home/runner/work/app")));
/// assert_eq!(path.as_str(), "/home/runner/work/app/pubspec.yaml");
///
/// assert_eq!(resolve_manifest_path(None).as_str(), "./pubspec.yaml");
/// ```
#[must_use]
pub fn resolve_manifest_path(workspace: Option<&Utf8Path>) -> Utf8PathBuf {
    let dir = workspace
        .filter(|dir| !dir.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new(DEFAULT_WORKSPACE));
    dir.join(MANIFEST_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::absent(None, "./pubspec.yaml")]
    #[case::empty(Some(""), "./pubspec.yaml")]
    #[case::relative(Some("app"), "app/pubspec.yaml")]
    #[case::trailing_separator(Some("app/"), "app/pubspec.yaml")]
    #[case::absolute(Some("/work/app"), "/work/app/pubspec.yaml")]
    fn resolves_manifest_inside_workspace(#[case] workspace: Option<&str>, #[case] expected: &str) {
        let path = resolve_manifest_path(workspace.map(Utf8Path::new));
        assert_eq!(path.as_str(), expected);
    }

    #[test]
    fn resolution_is_deterministic() {
        let workspace = Utf8Path::new("/work/app");
        assert_eq!(
            resolve_manifest_path(Some(workspace)),
            resolve_manifest_path(Some(workspace))
        );
    }
}
