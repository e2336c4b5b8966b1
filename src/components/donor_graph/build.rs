// CSV rows to chain graph.

use super::types::{GraphData, GraphLink, GraphNode};

/// Column holding the donor count for a generation.
pub const VALUE_COLUMN: usize = 2;

/// Split raw CSV text into rows of cells. No quoting support; the published
/// sheet never emits quoted cells.
pub fn parse_csv(text: &str) -> Vec<Vec<String>> {
	text.lines()
		.map(|line| {
			line.trim_end_matches('\r')
				.split(',')
				.map(str::to_string)
				.collect()
		})
		.collect()
}

/// Values that survive filtering: the row has some non-empty cell, carries a
/// value column, and that column parses to a finite number.
pub fn surviving_values(rows: &[Vec<String>]) -> Vec<f64> {
	rows.iter()
		.filter(|row| row.iter().any(|cell| !cell.is_empty()))
		.filter_map(|row| row.get(VALUE_COLUMN))
		.filter_map(|cell| cell.trim().parse::<f64>().ok())
		.filter(|v| v.is_finite())
		.collect()
}

/// Build the generation chain: node `i` per surviving value, a directed link
/// between each consecutive pair. The result is always a single path.
/// Returns `None` when no usable rows remain.
pub fn build_graph(rows: &[Vec<String>]) -> Option<GraphData> {
	let values = surviving_values(rows);
	if values.is_empty() {
		return None;
	}

	let nodes = values
		.iter()
		.enumerate()
		.map(|(i, &v)| GraphNode {
			id: i,
			val: v.sqrt() * 2.0,
			label: format!("Gen {}: {:.2} donors", i, v),
		})
		.collect();

	let links = (1..values.len())
		.map(|i| GraphLink {
			source: i - 1,
			target: i,
		})
		.collect();

	Some(GraphData { nodes, links })
}
