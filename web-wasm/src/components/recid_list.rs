//! Local record id list with the status filter
//!
//! Pure display plus event emission: the parent fetches the list
//! ("fetch list" callback) and the record data ("record selected"
//! callback). The only state owned here is the transient filter and
//! search input value.

use dedup_common::{RecIdEntry, RecordFilter};
use leptos::prelude::*;

#[component]
pub fn RecidList<FL, FS>(
    rec_ids: ReadSignal<Vec<RecIdEntry>>,
    selected_rec_id: ReadSignal<Option<String>>,
    nb_total_recs: ReadSignal<Option<u64>>,
    /// (filter, record id to center on, advance past the loaded page)
    on_fetch_list: FL,
    on_record_selected: FS,
) -> impl IntoView
where
    FL: Fn(RecordFilter, Option<String>, bool) + 'static + Clone,
    FS: Fn(String) + 'static + Clone + Send + Sync,
{
    let (filter_selected, set_filter_selected) = signal(RecordFilter::default());
    let (recid_input, set_recid_input) = signal(String::new());

    // search button and form submit both request the list centered on
    // the typed id
    let search = {
        let on_fetch_list = on_fetch_list.clone();
        move |()| {
            let input = recid_input.get_untracked();
            let recid = match input.trim() {
                "" => None,
                id => Some(id.to_string()),
            };
            on_fetch_list(filter_selected.get_untracked(), recid, false);
        }
    };

    view! {
        <h2 class="mb-0">"Local IDs"</h2>
        <form
            class="mb-2"
            id="recordFilter"
            on:submit={
                let search = search.clone();
                move |ev| {
                    ev.prevent_default();
                    search(());
                }
            }
        >
            <label for="FilterOptions" class="control-label">"Filter:"</label>
            <select
                id="FilterOptions"
                class="form-select form-select-sm"
                on:change={
                    let on_fetch_list = on_fetch_list.clone();
                    move |ev| {
                        let filter = RecordFilter::from_str(&event_target_value(&ev));
                        set_filter_selected.set(filter);
                        on_fetch_list(filter, None, false);
                    }
                }
            >
                {RecordFilter::ALL
                    .iter()
                    .map(|option| {
                        let option = *option;
                        view! {
                            <option
                                value=option.as_str()
                                selected=move || filter_selected.get() == option
                            >
                                {option.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <label for="IDFilter" class="control-label">"Record ID:"</label>
            <input
                id="IDFilter"
                type="text"
                class="form-control"
                prop:value=move || recid_input.get()
                on:input=move |ev| set_recid_input.set(event_target_value(&ev))
            />

            <button
                id="nextRecords"
                class="btn btn-sm"
                type="button"
                on:click={
                    let on_fetch_list = on_fetch_list.clone();
                    move |_| on_fetch_list(filter_selected.get_untracked(), None, true)
                }
            >"\u{25B6}"</button>
            <button
                id="searchRecords"
                class="btn btn-sm"
                type="button"
                on:click={
                    let search = search.clone();
                    move |_| search(())
                }
            >"\u{1F50E}"</button>
        </form>
        <div class="mb-2 mt-2">
            {move || nb_total_recs.get().map(|n| n.to_string()).unwrap_or_default()}
            " records"
        </div>
        <div id="recids" class="list-group">
            <For
                each=move || rec_ids.get()
                // the flag is part of the key so a row re-renders when its
                // entry is marked human validated
                key=|entry| (entry.rec_id.clone(), entry.human_validated, entry.color)
                children=move |entry| {
                    let on_record_selected = on_record_selected.clone();
                    let rec_id = entry.rec_id.clone();
                    let is_active = {
                        let rec_id = rec_id.clone();
                        move || selected_rec_id.get().as_deref() == Some(rec_id.as_str())
                    };
                    view! {
                        <a
                            href="#"
                            class="list-group-item list-group-item-action"
                            class:active=is_active
                            class:human-validated=entry.human_validated
                            class:list-group-item-dark=entry.color
                            on:click=move |_| on_record_selected(rec_id.clone())
                        >
                            {entry.rec_id.clone()}
                        </a>
                    }
                }
            />
        </div>
    }
}
