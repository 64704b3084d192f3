//! Error banner component
//!
//! Failed backend calls stay scoped to the action that triggered them;
//! this banner is the user-visible side of that.

use leptos::prelude::*;

#[component]
pub fn ErrorBanner<F>(error: ReadSignal<Option<String>>, on_dismiss: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        {move || {
            let on_dismiss = on_dismiss.clone();
            error.get().map(|message| {
                view! {
                    <div class="alert alert-danger" role="alert" id="fetchError">
                        {message}
                        <button
                            type="button"
                            class="btn-close"
                            aria-label="Close"
                            on:click=move |_| on_dismiss(())
                        ></button>
                    </div>
                }
            })
        }}
    }
}
