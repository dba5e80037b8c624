use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, MockError>;

/// Errors produced while validating, substituting, and rendering mock data.
#[derive(Debug, Error)]
pub enum MockError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Mock data input was empty or whitespace-only.
	#[error("mock data cannot be blank")]
	BlankInput,
	/// Mock data input was not well-formed JSON.
	#[error("mock data is not valid JSON: {0}")]
	InvalidFormat(#[source] serde_json::Error),
	/// Mock data parsed but its root value is not an object.
	#[error("mock data root must be an object, got {kind}")]
	NotAnObject {
		/// JSON kind found at the document root.
		kind: &'static str,
	},
	/// Template source failed to parse.
	#[error("template parse: {0}")]
	TemplateParse(#[source] minijinja::Error),
	/// Template rendering failed at runtime.
	#[error("template render: {0}")]
	TemplateRender(#[source] minijinja::Error),
}
