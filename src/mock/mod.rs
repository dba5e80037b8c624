mod error;
mod generators;
mod registry;
mod substitute;
mod template;

/// Error and result aliases.
pub use error::{MockError, Result};
/// Marker vocabulary, generator dispatch, and registry queries.
pub use registry::{GROUPS, Generator, MARKER_PREFIX, MarkerGroup, lookup, marker_count};
/// Document validation and marker substitution entry points.
pub use substitute::{parse_document, substitute_array, substitute_document, substitute_object, substitute_value, value_kind};
/// Template rendering entry points.
pub use template::{render_source, render_template};
