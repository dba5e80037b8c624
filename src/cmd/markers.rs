use serde::Serialize;

use mockdoc::mock::{GROUPS, MARKER_PREFIX, Result};

#[derive(Serialize)]
struct MarkerRow {
	group: &'static str,
	marker: String,
}

/// List every registered marker, grouped or as JSON rows.
pub fn run(json: bool) -> Result<()> {
	if json {
		let mut rows: Vec<MarkerRow> = GROUPS
			.iter()
			.flat_map(|group| {
				group.entries.iter().map(|(name, _)| MarkerRow {
					group: group.name,
					marker: format!("{MARKER_PREFIX}{name}"),
				})
			})
			.collect();
		rows.sort_by(|left, right| left.marker.cmp(&right.marker));
		let out = serde_json::to_string_pretty(&rows).map_err(std::io::Error::from)?;
		println!("{out}");
		return Ok(());
	}

	for group in GROUPS {
		println!("{}:", group.name);
		for (name, _) in group.entries {
			println!("  {MARKER_PREFIX}{name}");
		}
	}
	Ok(())
}
