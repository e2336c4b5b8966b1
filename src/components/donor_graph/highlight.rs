// Click-driven selection and highlight state. Owned by the graph component
// and handed to the renderer, which evaluates the style queries against it
// every frame.

use std::collections::HashSet;

use super::types::GraphData;

const DIMMED_NODE_OPACITY: f64 = 0.2;
const HIGHLIGHT_LINK_WIDTH: f64 = 4.0;
const DEFAULT_LINK_WIDTH: f64 = 1.0;
const HIGHLIGHT_LINK_COLOR: &str = "rgba(255, 214, 0, 0.9)";
const DEFAULT_LINK_COLOR: &str = "rgba(170, 170, 170, 0.35)";

/// Idle (no selection) or Selected(node), plus the node/link highlight sets
/// recomputed in full on every transition.
#[derive(Clone, Debug, Default)]
pub struct HighlightState {
	selected: Option<usize>,
	nodes: HashSet<usize>,
	links: HashSet<String>,
}

impl HighlightState {
	/// Select a node: clear both sets, then walk forward from it, following
	/// the first outgoing link of whatever node the walk reaches, until none
	/// exists. On the chain this highlights the whole suffix path.
	pub fn select(&mut self, data: &GraphData, node_id: usize) {
		self.clear();
		self.selected = Some(node_id);
		self.nodes.insert(node_id);

		let mut cur = node_id;
		while let Some(link) = data.links.iter().find(|l| l.source == cur) {
			self.links.insert(link.key());
			self.nodes.insert(link.target);
			cur = link.target;
		}
	}

	/// Back to Idle: no selection, empty sets.
	pub fn clear(&mut self) {
		self.selected = None;
		self.nodes.clear();
		self.links.clear();
	}

	pub fn selected(&self) -> Option<usize> {
		self.selected
	}

	pub fn has_selection(&self) -> bool {
		self.selected.is_some()
	}

	pub fn is_node_highlighted(&self, id: usize) -> bool {
		self.nodes.contains(&id)
	}

	pub fn is_link_highlighted(&self, source: usize, target: usize) -> bool {
		self.links.contains(&format!("{}-{}", source, target))
	}

	/// Opacity for a node: fully opaque with no selection; under a selection,
	/// members stay opaque and everything else dims.
	pub fn node_opacity(&self, id: usize) -> f64 {
		if !self.has_selection() || self.is_node_highlighted(id) {
			1.0
		} else {
			DIMMED_NODE_OPACITY
		}
	}

	/// Width and color for a link: wide yellow when highlighted, thin
	/// translucent gray otherwise.
	pub fn link_style(&self, source: usize, target: usize) -> (f64, &'static str) {
		if self.is_link_highlighted(source, target) {
			(HIGHLIGHT_LINK_WIDTH, HIGHLIGHT_LINK_COLOR)
		} else {
			(DEFAULT_LINK_WIDTH, DEFAULT_LINK_COLOR)
		}
	}
}
