//! Page header component

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header>
            <div class="row">
                <div class="mb-2 col-10">
                    <h1>"Dedup review tool"</h1>
                </div>
                <div class="mb-2 col-2 text-end">
                    <a href="/dedup">"Home"</a>
                    "  "
                    <a href="/dedup/logout">"Logout"</a>
                </div>
            </div>
        </header>
    }
}
