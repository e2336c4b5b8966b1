// Host-side tests for the chain-graph builder and highlight state.
// The crate itself targets wasm, so the pure modules are included directly.

#![allow(dead_code)]
mod donor_graph {
	pub mod types {
		include!("../src/components/donor_graph/types.rs");
	}
	pub mod build {
		include!("../src/components/donor_graph/build.rs");
	}
	pub mod highlight {
		include!("../src/components/donor_graph/highlight.rs");
	}
}

use donor_graph::build::{build_graph, parse_csv, surviving_values};
use donor_graph::highlight::HighlightState;
use donor_graph::types::{GraphData, GraphLink};

fn rows(raw: &[&[&str]]) -> Vec<Vec<String>> {
	raw.iter()
		.map(|r| r.iter().map(|c| c.to_string()).collect())
		.collect()
}

fn chain_of(values: &[f64]) -> GraphData {
	let raw: Vec<Vec<String>> = values
		.iter()
		.map(|v| vec![String::from("x"), String::from("y"), v.to_string()])
		.collect();
	build_graph(&raw).expect("chain should build")
}

#[test]
fn node_count_matches_surviving_rows() {
	let input = rows(&[
		&["a", "b", "10"],
		&["", "", ""],
		&["c", "d", "not-a-number"],
		&["e", "f"],
		&["x", "y", "40"],
	]);
	let data = build_graph(&input).expect("two rows survive");
	assert_eq!(data.nodes.len(), 2);
	assert_eq!(data.links.len(), 1);
}

#[test]
fn ids_are_dense_in_row_order() {
	let data = chain_of(&[4.0, 9.0, 16.0, 25.0]);
	for (i, node) in data.nodes.iter().enumerate() {
		assert_eq!(node.id, i);
	}
}

#[test]
fn links_form_a_single_chain() {
	let data = chain_of(&[1.0, 2.0, 3.0, 4.0, 5.0]);
	assert_eq!(data.links.len(), data.nodes.len() - 1);
	for (i, link) in data.links.iter().enumerate() {
		assert_eq!(link.source, i);
		assert_eq!(link.target, i + 1);
	}
}

#[test]
fn val_is_twice_sqrt_of_value() {
	let data = chain_of(&[10.0, 40.0, 2.25]);
	assert_eq!(data.nodes[0].val, 10.0_f64.sqrt() * 2.0);
	assert_eq!(data.nodes[1].val, 40.0_f64.sqrt() * 2.0);
	assert_eq!(data.nodes[2].val, 3.0);
}

#[test]
fn labels_format_value_to_two_decimals() {
	let input = rows(&[&["a", "b", "12.5"]]);
	let data = build_graph(&input).unwrap();
	assert_eq!(data.nodes[0].label, "Gen 0: 12.50 donors");
}

#[test]
fn empty_and_unparsable_input_builds_nothing() {
	assert!(build_graph(&[]).is_none());
	assert!(build_graph(&rows(&[&["", "", ""], &["", "", ""]])).is_none());
	assert!(build_graph(&rows(&[&["a", "b", "donors"]])).is_none());
}

#[test]
fn non_finite_values_are_filtered() {
	let input = rows(&[
		&["a", "b", "inf"],
		&["c", "d", "NaN"],
		&["e", "f", "-inf"],
		&["g", "h", "7"],
	]);
	assert_eq!(surviving_values(&input), vec![7.0]);
}

#[test]
fn short_rows_are_filtered_silently() {
	let input = rows(&[&["lonely"], &["a", "b"], &["a", "b", "3"]]);
	assert_eq!(surviving_values(&input), vec![3.0]);
}

#[test]
fn csv_parsing_splits_rows_and_cells() {
	let parsed = parse_csv("a,b,10\r\nx,y,40\n");
	assert_eq!(parsed, rows(&[&["a", "b", "10"], &["x", "y", "40"]]));

	// A blank line becomes an all-empty row, which filtering removes.
	let gappy = parse_csv("a,b,1\n\nc,d,2");
	assert_eq!(gappy.len(), 3);
	assert_eq!(surviving_values(&gappy), vec![1.0, 2.0]);
}

#[test]
fn link_key_encoding() {
	let link = GraphLink {
		source: 0,
		target: 1,
	};
	assert_eq!(link.key(), "0-1");
}

#[test]
fn worked_example_two_generations() {
	let input = rows(&[&["a", "b", "10"], &["", "", ""], &["x", "y", "40"]]);
	let data = build_graph(&input).unwrap();

	assert_eq!(data.nodes.len(), 2);
	assert_eq!(data.nodes[0].val, 10.0_f64.sqrt() * 2.0);
	assert_eq!(data.nodes[1].val, 40.0_f64.sqrt() * 2.0);
	assert_eq!(data.nodes[0].label, "Gen 0: 10.00 donors");
	assert_eq!(data.nodes[1].label, "Gen 1: 40.00 donors");
	assert_eq!(
		data.links,
		vec![GraphLink {
			source: 0,
			target: 1,
		}]
	);

	let mut hl = HighlightState::default();
	hl.select(&data, 0);
	assert!(hl.is_node_highlighted(0));
	assert!(hl.is_node_highlighted(1));
	assert!(hl.is_link_highlighted(0, 1));
}

#[test]
fn selecting_highlights_the_suffix() {
	let data = chain_of(&[1.0, 2.0, 3.0, 4.0, 5.0]);
	let mut hl = HighlightState::default();

	hl.select(&data, 2);
	for id in 0..5 {
		assert_eq!(hl.is_node_highlighted(id), id >= 2, "node {}", id);
	}
	assert!(!hl.is_link_highlighted(0, 1));
	assert!(!hl.is_link_highlighted(1, 2));
	assert!(hl.is_link_highlighted(2, 3));
	assert!(hl.is_link_highlighted(3, 4));
}

#[test]
fn selecting_the_terminal_node_highlights_only_it() {
	let data = chain_of(&[1.0, 2.0, 3.0]);
	let mut hl = HighlightState::default();

	hl.select(&data, 2);
	assert!(hl.is_node_highlighted(2));
	assert!(!hl.is_node_highlighted(0));
	assert!(!hl.is_node_highlighted(1));
	assert!(!hl.is_link_highlighted(0, 1));
	assert!(!hl.is_link_highlighted(1, 2));
}

#[test]
fn reselection_recomputes_from_scratch() {
	let data = chain_of(&[1.0, 2.0, 3.0, 4.0]);
	let mut hl = HighlightState::default();

	hl.select(&data, 0);
	assert!(hl.is_node_highlighted(1));

	hl.select(&data, 3);
	assert_eq!(hl.selected(), Some(3));
	assert!(!hl.is_node_highlighted(0));
	assert!(!hl.is_node_highlighted(1));
	assert!(!hl.is_node_highlighted(2));
	assert!(hl.is_node_highlighted(3));
	assert!(!hl.is_link_highlighted(0, 1));
}

#[test]
fn clearing_returns_to_unselected_defaults() {
	let data = chain_of(&[1.0, 2.0, 3.0]);
	let mut hl = HighlightState::default();

	hl.select(&data, 1);
	assert!(hl.has_selection());

	hl.clear();
	assert!(!hl.has_selection());
	assert_eq!(hl.selected(), None);
	for id in 0..3 {
		assert!(!hl.is_node_highlighted(id));
		assert_eq!(hl.node_opacity(id), 1.0);
	}
	let (width, _) = hl.link_style(0, 1);
	assert_eq!(width, 1.0);
}

#[test]
fn opacity_and_link_style_follow_selection() {
	let data = chain_of(&[1.0, 2.0, 3.0]);
	let mut hl = HighlightState::default();

	// Idle: everything opaque, every link at the default width.
	for id in 0..3 {
		assert_eq!(hl.node_opacity(id), 1.0);
	}

	hl.select(&data, 1);
	assert_eq!(hl.node_opacity(0), 0.2);
	assert_eq!(hl.node_opacity(1), 1.0);
	assert_eq!(hl.node_opacity(2), 1.0);

	let (plain_width, plain_color) = hl.link_style(0, 1);
	let (hot_width, hot_color) = hl.link_style(1, 2);
	assert!(hot_width > plain_width);
	assert_ne!(plain_color, hot_color);
}
