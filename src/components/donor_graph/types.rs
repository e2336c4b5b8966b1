/// One generation in the giving chain. Ids are dense row indices; `val` is
/// the precomputed visual size and `label` the display string.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	pub id: usize,
	pub val: f64,
	pub label: String,
}

/// Directed edge between consecutive generations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphLink {
	pub source: usize,
	pub target: usize,
}

impl GraphLink {
	/// Key used by the highlight set ("source-target").
	pub fn key(&self) -> String {
		format!("{}-{}", self.source, self.target)
	}
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub links: Vec<GraphLink>,
}
