#![allow(missing_docs)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

#[test]
fn blank_data_file_is_rejected() {
	let dir = tempfile::tempdir().expect("temp dir is created");
	let data = write_file(dir.path(), "data.json", " \t\n");
	let template = write_file(dir.path(), "out.tmpl", "x");

	let output = run_render(&data, &template);

	assert_runtime_failure(&output, "mock data cannot be blank");
}

#[test]
fn malformed_json_is_rejected() {
	let dir = tempfile::tempdir().expect("temp dir is created");
	let data = write_file(dir.path(), "data.json", r#"{"a": "#);
	let template = write_file(dir.path(), "out.tmpl", "x");

	let output = run_render(&data, &template);

	assert_runtime_failure(&output, "mock data is not valid JSON");
}

#[test]
fn non_object_root_is_rejected_with_kind() {
	let dir = tempfile::tempdir().expect("temp dir is created");
	let data = write_file(dir.path(), "data.json", "[1, 2, 3]");
	let template = write_file(dir.path(), "out.tmpl", "x");

	let output = run_render(&data, &template);

	assert_runtime_failure(&output, "mock data root must be an object, got array");
}

#[test]
fn missing_data_file_is_an_io_failure() {
	let dir = tempfile::tempdir().expect("temp dir is created");
	let template = write_file(dir.path(), "out.tmpl", "x");

	let output = run_render(&dir.path().join("absent.json"), &template);

	assert_runtime_failure(&output, "io:");
}

#[test]
fn template_syntax_error_is_reported() {
	let dir = tempfile::tempdir().expect("temp dir is created");
	let data = write_file(dir.path(), "data.json", r#"{"a": 1}"#);
	let template = write_file(dir.path(), "out.tmpl", "{% if");

	let output = run_render(&data, &template);

	assert_runtime_failure(&output, "template parse");
}

#[test]
fn missing_template_flag_shows_usage() {
	let output = Command::new(env!("CARGO_BIN_EXE_mockdoc"))
		.args(["render", "--data", "data.json"])
		.output()
		.expect("command executes");

	assert_eq!(output.status.code(), Some(2), "argument errors should use the parser exit code");
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("Usage"), "expected usage synopsis, got: {stderr}");
	assert!(stderr.contains("--template"), "expected the missing flag to be named, got: {stderr}");
}

fn assert_runtime_failure(output: &Output, message: &str) {
	assert_eq!(output.status.code(), Some(1), "runtime failures should exit 1");
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.starts_with("mockdoc: "), "expected prefixed diagnostic, got: {stderr}");
	assert!(stderr.contains(message), "expected {message:?} in: {stderr}");
	assert!(!stderr.contains("Usage"), "runtime failures should not re-print usage, got: {stderr}");
	assert!(output.stdout.is_empty(), "failed runs should not write to stdout");
}

fn run_render(data: &Path, template: &Path) -> Output {
	Command::new(env!("CARGO_BIN_EXE_mockdoc"))
		.args(["render", "--data"])
		.arg(data)
		.arg("--template")
		.arg(template)
		.env_remove("RUST_LOG")
		.output()
		.expect("command executes")
}

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
	let path = dir.join(name);
	std::fs::write(&path, contents).expect("fixture file is written");
	path
}
