use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::sim::StarField;

const BACKGROUND: &str = "#05060f";
const GRID_COLOR: &str = "rgba(255, 255, 255, 0.05)";
const GRID_SPACING: f64 = 80.0;

/// Draw one frame: background, then the reference grid, then every particle
/// at its current alpha. Layer order is fixed.
pub fn render(field: &StarField, ctx: &CanvasRenderingContext2d) {
	let (w, h) = (field.width(), field.height());
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, w, h);
	draw_grid(ctx, w, h);

	for p in field.particles() {
		ctx.set_global_alpha(p.alpha);
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, p.radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(p.color);
		ctx.fill();
	}
	ctx.set_global_alpha(1.0);
}

fn draw_grid(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
	ctx.set_stroke_style_str(GRID_COLOR);
	ctx.set_line_width(1.0);

	let mut x = GRID_SPACING;
	while x < width {
		ctx.begin_path();
		ctx.move_to(x, 0.0);
		ctx.line_to(x, height);
		ctx.stroke();
		x += GRID_SPACING;
	}
	let mut y = GRID_SPACING;
	while y < height {
		ctx.begin_path();
		ctx.move_to(0.0, y);
		ctx.line_to(width, y);
		ctx.stroke();
		y += GRID_SPACING;
	}
}
