//! Unit tests for the runner reporter.

use super::{ActionsReporter, Reporter, escape_data, escape_property, format_file_command};
use crate::error::PubspecError;
use camino::Utf8PathBuf;
use rstest::{fixture, rstest};
use tempfile::TempDir;

struct OutputFile {
    _dir: TempDir,
    path: Utf8PathBuf,
}

impl OutputFile {
    fn contents(&self) -> String {
        std::fs::read_to_string(&self.path).expect("failed to read output file")
    }
}

#[fixture]
fn output_file() -> OutputFile {
    let dir = TempDir::new().expect("failed to create temp dir");
    let root = Utf8PathBuf::try_from(dir.path().to_path_buf()).expect("temp dir is not UTF-8");
    let path = root.join("github_output");
    std::fs::write(&path, "").expect("failed to create output file");
    OutputFile { _dir: dir, path }
}

fn stdout_text(reporter: ActionsReporter<Vec<u8>>) -> String {
    String::from_utf8(reporter.into_inner()).expect("stdout was not UTF-8")
}

#[test]
fn info_writes_plain_line() {
    let mut reporter = ActionsReporter::new(Vec::new(), None);
    reporter.info("version_number: 1.2.3");
    assert_eq!(stdout_text(reporter), "version_number: 1.2.3\n");
}

#[test]
fn set_output_without_file_uses_workflow_command() {
    let mut reporter = ActionsReporter::new(Vec::new(), None);
    reporter
        .set_output("build_number", "45")
        .expect("stdout write should succeed");
    assert_eq!(stdout_text(reporter), "\n::set-output name=build_number::45\n");
}

#[rstest]
fn set_output_appends_heredoc_record(output_file: OutputFile) {
    let mut reporter = ActionsReporter::new(Vec::new(), Some(output_file.path.clone()));
    reporter
        .set_output("version_number", "1.2.3")
        .expect("output file write should succeed");
    reporter
        .set_output("build_number", "45")
        .expect("output file write should succeed");

    let contents = output_file.contents();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines.first().is_some_and(|l| l.starts_with("version_number<<ghadelimiter_")));
    assert_eq!(lines.get(1), Some(&"1.2.3"));
    assert!(lines.get(3).is_some_and(|l| l.starts_with("build_number<<ghadelimiter_")));
    assert_eq!(lines.get(4), Some(&"45"));

    // Nothing is echoed to stdout when the file command is used.
    assert!(stdout_text(reporter).is_empty());
}

#[rstest]
fn heredoc_delimiters_match_their_header(output_file: OutputFile) {
    let mut reporter = ActionsReporter::new(Vec::new(), Some(output_file.path.clone()));
    reporter
        .set_output("build_number", "7")
        .expect("output file write should succeed");

    let contents = output_file.contents();
    let mut lines = contents.lines();
    let header = lines.next().expect("header line");
    let delimiter = header
        .strip_prefix("build_number<<")
        .expect("header should name the output");
    assert_eq!(lines.next(), Some("7"));
    assert_eq!(lines.next(), Some(delimiter));
}

#[rstest]
fn existing_output_file_contents_are_kept(output_file: OutputFile) {
    std::fs::write(&output_file.path, "earlier=value\n").expect("failed to seed output file");
    let mut reporter = ActionsReporter::new(Vec::new(), Some(output_file.path.clone()));
    reporter
        .set_output("build_number", "1")
        .expect("output file write should succeed");
    assert!(output_file.contents().starts_with("earlier=value\nbuild_number<<"));
}

#[test]
fn missing_output_file_is_a_write_failure() {
    let dir = TempDir::new().expect("failed to create temp dir");
    let root = Utf8PathBuf::try_from(dir.path().to_path_buf()).expect("temp dir is not UTF-8");
    let mut reporter = ActionsReporter::new(Vec::new(), Some(root.join("missing")));
    let err = reporter
        .set_output("build_number", "1")
        .expect_err("missing file should fail");
    assert!(matches!(err, PubspecError::WriteFailed { .. }));
    let msg = err.to_string();
    assert!(
        msg.starts_with("failed to write output: "),
        "expected the OS cause in {msg:?}"
    );
    assert!(msg.len() > "failed to write output: ".len());
}

#[test]
fn set_failed_emits_single_error_command() {
    let mut reporter = ActionsReporter::new(Vec::new(), None);
    reporter.set_failed("version not found in pubspec.yaml");
    assert_eq!(
        stdout_text(reporter),
        "::error::version not found in pubspec.yaml\n"
    );
}

#[test]
fn set_failed_escapes_multiline_messages() {
    let mut reporter = ActionsReporter::new(Vec::new(), None);
    reporter.set_failed("did not find expected key\nat line 2");
    assert_eq!(
        stdout_text(reporter),
        "::error::did not find expected key%0Aat line 2\n"
    );
}

#[test]
fn file_command_rejects_delimiter_in_value() {
    let err = format_file_command("build_number", "x ghadelimiter_1 y", "ghadelimiter_1")
        .expect_err("value contains delimiter");
    assert!(matches!(err, PubspecError::OutputDelimiter { .. }));
}

#[test]
fn file_command_keeps_value_verbatim() {
    let record = format_file_command("version_number", " 1.0.0 ", "EOF")
        .expect("record should format");
    assert_eq!(record, "version_number<<EOF\n 1.0.0 \nEOF\n");
}

#[rstest]
#[case::plain("1.2.3", "1.2.3")]
#[case::percent("50%", "50%25")]
#[case::newlines("a\r\nb", "a%0D%0Ab")]
#[case::colon_untouched("a:b,c", "a:b,c")]
fn escapes_data(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(escape_data(input), expected);
}

#[rstest]
#[case::colon("a:b", "a%3Ab")]
#[case::comma("a,b", "a%2Cb")]
#[case::percent_first("%:", "%25%3A")]
fn escapes_properties(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(escape_property(input), expected);
}
