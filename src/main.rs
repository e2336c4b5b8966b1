//! Binary entry point for the Trunk-served CSR build.

use donor_constellation::{App, init_logging};
use leptos::prelude::*;

fn main() {
	init_logging();
	leptos::mount::mount_to_body(|| view! { <App /> });
}
