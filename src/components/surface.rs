//! Canvas sizing helpers shared by both visualizations.

use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, HtmlElement, Window};

/// Height forced onto a canvas container before measuring it, so a collapsed
/// or unstyled container still yields a usable drawing surface.
pub const MIN_SURFACE_HEIGHT_PX: f64 = 420.0;

/// Measure the canvas's parent box in CSS pixels.
///
/// The container gets a minimum height applied first; if the measured box is
/// still degenerate the viewport dimensions are used instead.
pub fn measure_container(canvas: &HtmlCanvasElement, window: &Window) -> (f64, f64) {
	let mut w = 0.0;
	let mut h = 0.0;
	if let Some(parent) = canvas.parent_element() {
		if let Some(el) = parent.dyn_ref::<HtmlElement>() {
			let _ = el
				.style()
				.set_property("min-height", &format!("{}px", MIN_SURFACE_HEIGHT_PX));
		}
		let rect = parent.get_bounding_client_rect();
		w = rect.width();
		h = rect.height();
	}
	if w <= 0.0 || h <= 0.0 {
		w = window
			.inner_width()
			.ok()
			.and_then(|v| v.as_f64())
			.unwrap_or(800.0);
		h = window
			.inner_height()
			.ok()
			.and_then(|v| v.as_f64())
			.unwrap_or(600.0);
	}
	(w, h)
}

/// Size the canvas backing store for the device pixel ratio and return the
/// ratio so callers can scale their draw context back to CSS pixels.
pub fn sync_backing_size(canvas: &HtmlCanvasElement, window: &Window, css_w: f64, css_h: f64) -> f64 {
	let dpr = window.device_pixel_ratio().max(1.0);
	canvas.set_width(((css_w * dpr) as u32).max(1));
	canvas.set_height(((css_h * dpr) as u32).max(1));
	dpr
}
