use std::fs;
use std::path::Path;

use minijinja::Environment;
use serde_json::{Map, Value};

use crate::mock::error::{MockError, Result};

/// Render a template file against substituted mock data.
///
/// The template is registered under its file name, so parse and render
/// diagnostics point back at the file the user passed in.
pub fn render_template(path: &Path, data: &Map<String, Value>) -> Result<String> {
	let source = fs::read_to_string(path)?;
	render_source(template_name(path), &source, data)
}

/// Render template source held in memory.
pub fn render_source(name: &str, source: &str, data: &Map<String, Value>) -> Result<String> {
	let mut env = Environment::new();
	env.add_template(name, source).map_err(MockError::TemplateParse)?;
	let template = env.get_template(name).map_err(MockError::TemplateParse)?;
	template.render(data).map_err(MockError::TemplateRender)
}

fn template_name(path: &Path) -> &str {
	path.file_name().and_then(|name| name.to_str()).unwrap_or("template")
}

#[cfg(test)]
mod tests {
	use std::io::Write;
	use std::path::Path;

	use serde_json::{Map, Value, json};

	use super::{render_source, render_template, template_name};
	use crate::mock::MockError;

	fn data(value: Value) -> Map<String, Value> {
		match value {
			Value::Object(map) => map,
			other => panic!("test data must be an object, got {other:?}"),
		}
	}

	#[test]
	fn renders_fields_into_source() {
		let out = render_source("t", "x={{ n }}", &data(json!({"n": 7}))).expect("render must succeed");
		assert_eq!(out, "x=7");
	}

	#[test]
	fn renders_nested_access_and_loops() {
		let source = "{% for item in items %}{{ item.name }};{% endfor %}";
		let out = render_source("t", source, &data(json!({"items": [{"name": "a"}, {"name": "b"}]}))).expect("render must succeed");
		assert_eq!(out, "a;b;");
	}

	#[test]
	fn bad_syntax_is_a_parse_error() {
		let err = render_source("t", "{% if", &data(json!({}))).expect_err("parse must fail");
		assert!(matches!(err, MockError::TemplateParse(_)));
	}

	#[test]
	fn impossible_operation_is_a_render_error() {
		let err = render_source("t", "{% for x in n %}{{ x }}{% endfor %}", &data(json!({"n": 7}))).expect_err("render must fail");
		assert!(matches!(err, MockError::TemplateRender(_)));
	}

	#[test]
	fn missing_file_is_an_io_error() {
		let err = render_template(Path::new("/no/such/template.txt"), &data(json!({}))).expect_err("open must fail");
		assert!(matches!(err, MockError::Io(_)));
	}

	#[test]
	fn file_render_uses_file_contents() {
		let mut file = tempfile::NamedTempFile::new().expect("temp file must be created");
		write!(file, "hello {{{{ who }}}}").expect("template must be written");
		let out = render_template(file.path(), &data(json!({"who": "tester"}))).expect("render must succeed");
		assert_eq!(out, "hello tester");
	}

	#[test]
	fn template_name_falls_back_without_file_name() {
		assert_eq!(template_name(Path::new("demo/invoice.tmpl")), "invoice.tmpl");
		assert_eq!(template_name(Path::new("/")), "template");
	}
}
