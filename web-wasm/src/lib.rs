//! Dedup review web client (Leptos + WASM)

mod api;
mod app;
mod components;
pub mod config;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

pub use config::PageContext;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    match PageContext::from_window() {
        Ok(ctx) => {
            leptos::mount::mount_to_body(move || view! { <App ctx=ctx /> });
        }
        Err(e) => {
            gloo::console::error!(format!("startup failed: {}", e));
            leptos::mount::mount_to_body(|| {
                view! {
                    <p class="text-danger">
                        "Page context is missing. Open this page through the collection view."
                    </p>
                }
            });
        }
    }
}
