/// Marker vocabulary listing command.
pub mod markers;
/// Data substitution and template render command.
pub mod render;
