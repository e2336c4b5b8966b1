use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::render;
use super::sim::{DonationTally, StarField, TICK_INTERVAL_MS, format_grouped, format_usd};
use crate::components::surface;

#[component]
pub fn StarfieldHero() -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let field: Rc<RefCell<Option<StarField>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let tick_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	let (supporters, set_supporters) = signal(String::from("0"));
	let (raised, set_raised) = signal(String::from("$0"));

	let (field_init, animate_init, resize_cb_init, tick_cb_init) = (
		field.clone(),
		animate.clone(),
		resize_cb.clone(),
		tick_cb.clone(),
	);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let (w, h) = surface::measure_container(&canvas, &window);
		let dpr = surface::sync_backing_size(&canvas, &window, w, h);
		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();
		let _ = ctx.scale(dpr, dpr);

		let seed = js_sys::Date::now() as u64;
		*field_init.borrow_mut() = Some(StarField::new(w, h, seed));

		let (field_resize, canvas_resize, ctx_resize) =
			(field_init.clone(), canvas.clone(), ctx.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let win: Window = web_sys::window().unwrap();
			let (nw, nh) = surface::measure_container(&canvas_resize, &win);
			let dpr = surface::sync_backing_size(&canvas_resize, &win, nw, nh);
			// Resizing the backing store resets the context transform.
			let _ = ctx_resize.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
			if let Some(ref mut f) = *field_resize.borrow_mut() {
				f.resize(nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		// Counter tick, independent of the frame loop.
		let mut tally = DonationTally::new(seed ^ 0x9E37_79B9_7F4A_7C15);
		*tick_cb_init.borrow_mut() = Some(Closure::new(move || {
			tally.tick();
			set_supporters.set(format_grouped(tally.units()));
			set_raised.set(format_usd(tally.total_value()));
		}));
		if let Some(ref cb) = *tick_cb_init.borrow() {
			let _ = window.set_interval_with_callback_and_timeout_and_arguments_0(
				cb.as_ref().unchecked_ref(),
				TICK_INTERVAL_MS,
			);
		}

		let (field_anim, animate_inner) = (field_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut f) = *field_anim.borrow_mut() {
				f.step();
				render::render(f, &ctx);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	view! {
		<div class="starfield">
			<canvas node_ref=canvas_ref class="starfield-canvas" style="display: block;" />
			<div class="hero-overlay">
				<h1>"Donor Constellation"</h1>
				<p class="subtitle">"Every light is a gift. Watch the movement grow."</p>
				<div class="counters">
					<div class="counter">
						<span class="counter-value">{move || supporters.get()}</span>
						<span class="counter-label">"supporters"</span>
					</div>
					<div class="counter">
						<span class="counter-value">{move || raised.get()}</span>
						<span class="counter-label">"raised"</span>
					</div>
				</div>
			</div>
		</div>
	}
}
