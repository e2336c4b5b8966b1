use leptos::prelude::*;

use crate::components::donor_graph::DonorGraphCanvas;
use crate::components::starfield::StarfieldHero;

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	// Written to by the graph component as its data load progresses.
	let status = RwSignal::new(String::from("Loading donor data\u{2026}"));

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<section class="hero">
				<StarfieldHero />
			</section>
			<section class="graph-section">
				<div class="section-heading">
					<h2>"Generations of Giving"</h2>
					<p class="status-line">{move || status.get()}</p>
				</div>
				<DonorGraphCanvas status=status />
			</section>
		</ErrorBoundary>
	}
}
