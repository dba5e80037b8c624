use std::fs;
use std::io::Write;
use std::path::PathBuf;

use mockdoc::mock::{Result, render_template, substitute_document};

/// Substitute markers in the data file and render the template to stdout.
pub fn run(data: PathBuf, template: PathBuf) -> Result<()> {
	let raw = fs::read(&data)?;
	let substituted = substitute_document(&raw)?;
	tracing::debug!(document = %serde_json::to_string(&substituted).unwrap_or_default(), "substituted mock data");

	let rendered = render_template(&template, &substituted)?;
	let mut stdout = std::io::stdout().lock();
	stdout.write_all(rendered.as_bytes())?;
	Ok(())
}
