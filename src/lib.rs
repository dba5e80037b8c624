//! Mock data templating tools.

/// Marker substitution, generator registry, and template rendering.
pub mod mock;
