// Particle field and donation tally simulation. Pure state, no platform
// APIs; both types take an explicit seed so the browser can feed them
// wall-clock entropy while tests fix the sequence.

use rand::prelude::*;

/// Number of particles in the field; the whole set is replaced on resize.
pub const PARTICLE_COUNT: usize = 600;

/// Star colors, drawn uniformly at spawn.
pub const PALETTE: [&str; 4] = ["#ffffff", "#ffe9c4", "#d4fbff", "#c7b8ff"];

const MIN_ALPHA: f64 = 0.2;
const MAX_ALPHA: f64 = 1.0;
const ALPHA_JITTER: f64 = 0.05;

/// Milliseconds between donation tally ticks.
pub const TICK_INTERVAL_MS: i32 = 400;

/// Notional value of a single supporter unit.
pub const UNIT_PRICE: f64 = 25.0;

const SMALL_GIFT: f64 = 25.0;
const MEDIUM_GIFT: std::ops::Range<f64> = 50.0..250.0;
const LARGE_GIFT: std::ops::Range<f64> = 250.0..1000.0;

/// A single star. Position, radius, and color are fixed at spawn; only the
/// alpha random-walks while the particle is alive.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	pub alpha: f64,
	pub color: &'static str,
}

/// The full particle set plus the bounds it was spawned into.
pub struct StarField {
	particles: Vec<Particle>,
	width: f64,
	height: f64,
	rng: StdRng,
}

impl StarField {
	pub fn new(width: f64, height: f64, seed: u64) -> Self {
		let mut rng = StdRng::seed_from_u64(seed);
		let particles = spawn(&mut rng, width, height);
		Self {
			particles,
			width,
			height,
			rng,
		}
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}

	/// Advance one frame: every particle's alpha takes a small symmetric
	/// step, clamped to the visible range. Nothing else mutates per frame.
	pub fn step(&mut self) {
		for p in &mut self.particles {
			let delta = self.rng.gen_range(-ALPHA_JITTER..=ALPHA_JITTER);
			p.alpha = (p.alpha + delta).clamp(MIN_ALPHA, MAX_ALPHA);
		}
	}

	/// Replace the whole particle set for new surface bounds.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.particles = spawn(&mut self.rng, width, height);
	}
}

fn spawn(rng: &mut StdRng, width: f64, height: f64) -> Vec<Particle> {
	(0..PARTICLE_COUNT)
		.map(|_| Particle {
			x: rng.gen_range(0.0..width),
			y: rng.gen_range(0.0..height),
			radius: rng.gen_range(2.0..6.0),
			alpha: rng.gen_range(0.6..1.0),
			color: PALETTE.choose(rng).copied().unwrap_or(PALETTE[0]),
		})
		.collect()
}

/// Simulated live donation counters: a discrete supporter count and an
/// accumulated gift value, both monotonically non-decreasing.
pub struct DonationTally {
	units: u64,
	accumulated: f64,
	rng: StdRng,
}

impl DonationTally {
	pub fn new(seed: u64) -> Self {
		Self {
			units: 0,
			accumulated: 0.0,
			rng: StdRng::seed_from_u64(seed),
		}
	}

	pub fn units(&self) -> u64 {
		self.units
	}

	pub fn accumulated(&self) -> f64 {
		self.accumulated
	}

	/// One interval tick: 1-3 new supporters, each rolling an independent
	/// weighted gift (60% small fixed, 30% medium, 10% large).
	pub fn tick(&mut self) {
		let added = self.rng.gen_range(1u64..=3);
		self.units += added;
		for _ in 0..added {
			let roll: f64 = self.rng.r#gen();
			let gift = if roll < 0.6 {
				SMALL_GIFT
			} else if roll < 0.9 {
				self.rng.gen_range(MEDIUM_GIFT)
			} else {
				self.rng.gen_range(LARGE_GIFT)
			};
			self.accumulated += gift;
		}
	}

	/// Displayed total: every supporter at the unit price plus the rolled
	/// gift values.
	pub fn total_value(&self) -> f64 {
		self.units as f64 * UNIT_PRICE + self.accumulated
	}
}

/// Group an integer with thousands separators ("1,234,567").
pub fn format_grouped(n: u64) -> String {
	let digits = n.to_string();
	let mut out = String::with_capacity(digits.len() + digits.len() / 3);
	for (i, ch) in digits.chars().enumerate() {
		if i > 0 && (digits.len() - i) % 3 == 0 {
			out.push(',');
		}
		out.push(ch);
	}
	out
}

/// Whole-dollar currency display ("$1,234").
pub fn format_usd(value: f64) -> String {
	format!("${}", format_grouped(value.round().max(0.0) as u64))
}
