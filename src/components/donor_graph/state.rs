use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use super::highlight::HighlightState;
use super::types::GraphData;

/// Node auto-colors, indexed by id.
const COLORS: &[&str] = &[
	"#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
	"#bcbd22", "#17becf",
];

/// Floor for hit-testing so small nodes stay clickable.
pub const MIN_HIT_RADIUS: f64 = 12.0;

/// Per-node payload carried through the force simulation.
#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub id: usize,
	pub val: f64,
	pub label: String,
	pub color: String,
}

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub moved: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub node_id: Option<usize>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

pub struct DonorGraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub highlight: HighlightState,
	pub data: GraphData,
	pub width: f64,
	pub height: f64,
	pub animation_running: bool,
}

impl DonorGraphState {
	pub fn new(data: GraphData, width: f64, height: f64) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});

		// Seed the chain along a horizontal run with a slight stagger so the
		// simulation unfolds it readably instead of from a degenerate line.
		let n = data.nodes.len();
		let mut indices: Vec<DefaultNodeIdx> = Vec::with_capacity(n);
		for (i, node) in data.nodes.iter().enumerate() {
			let t = if n > 1 {
				i as f64 / (n - 1) as f64
			} else {
				0.5
			};
			let (x, y) = (
				(width * 0.2 + width * 0.6 * t) as f32,
				(height / 2.0 + if i % 2 == 0 { -20.0 } else { 20.0 }) as f32,
			);
			let idx = graph.add_node(NodeData {
				x,
				y,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo {
					id: node.id,
					val: node.val,
					label: node.label.clone(),
					color: COLORS[node.id % COLORS.len()].into(),
				},
			});
			indices.push(idx);
		}

		// Ids are dense row indices, so a Vec maps id to simulation index.
		for link in &data.links {
			if let (Some(&src), Some(&tgt)) =
				(indices.get(link.source), indices.get(link.target))
			{
				graph.add_edge(src, tgt, EdgeData::default());
			}
		}

		Self {
			graph,
			transform: ViewTransform {
				x: 0.0,
				y: 0.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			highlight: HighlightState::default(),
			data,
			width,
			height,
			animation_running: true,
		}
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	/// Hit-test in graph space; returns the simulation index and node id.
	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<(DefaultNodeIdx, usize)> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			let hit = node.data.user_data.val.max(MIN_HIT_RADIUS);
			if (dx * dx + dy * dy).sqrt() < hit {
				found = Some((node.index(), node.data.user_data.id));
			}
		});
		found
	}

	/// Click transition: recompute the highlight suffix from this node.
	pub fn select_node(&mut self, id: usize) {
		self.highlight.select(&self.data, id);
	}

	/// Escape transition: back to Idle.
	pub fn clear_selection(&mut self) {
		self.highlight.clear();
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}
