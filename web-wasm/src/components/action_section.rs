//! Match action buttons and ranked candidate list
//!
//! Every action except cancel needs a selected candidate. The row of the
//! selected rank is highlighted; the id equal to the persisted matched
//! record gets its own marker class.

use dedup_common::PossibleMatch;
use leptos::prelude::*;

#[component]
pub fn ActionSection<FSel, FDef, FCan, FTr>(
    #[prop(into)] possible_matches: Signal<Vec<PossibleMatch>>,
    #[prop(into)] matched_record: Signal<Option<String>>,
    selected_rank: ReadSignal<Option<usize>>,
    training_message: ReadSignal<Option<String>>,
    on_candidate_selected: FSel,
    on_define_match: FDef,
    on_cancel_match: FCan,
    on_add_training: FTr,
) -> impl IntoView
where
    FSel: Fn(usize) + 'static + Clone + Send + Sync,
    FDef: Fn(usize) + 'static + Clone,
    FCan: Fn(()) + 'static + Clone,
    FTr: Fn(bool) + 'static + Clone,
{
    let has_selection = move || selected_rank.get().is_some();

    view! {
        <div class="row m-2">
            <button
                id="dedup"
                class="btn btn-sm"
                class:btn-primary=has_selection
                disabled=move || !has_selection()
                on:click={
                    let on_define_match = on_define_match.clone();
                    move |_| {
                        if let Some(rank) = selected_rank.get_untracked() {
                            on_define_match(rank);
                        }
                    }
                }
            >"Select matching record"</button>
        </div>
        <div class="row m-2">
            <button
                id="local_dup"
                class="btn btn-sm btn-danger"
                on:click={
                    let on_cancel_match = on_cancel_match.clone();
                    move |_| on_cancel_match(())
                }
            >"Cancel matching record"</button>
        </div>

        <div class="mt-4">
            <h2 class="row m-2">"Add to training data"</h2>
            <div class="row m-2 text-success">{move || training_message.get()}</div>
            <div class="row m-2">
                <button
                    id="training_match"
                    class="btn btn-sm"
                    class:btn-secondary=has_selection
                    disabled=move || !has_selection()
                    on:click={
                        let on_add_training = on_add_training.clone();
                        move |_| on_add_training(true)
                    }
                >"Matching"</button>
            </div>
            <div class="row m-2">
                <button
                    id="training_nomatch"
                    class="btn btn-sm"
                    class:btn-secondary=has_selection
                    disabled=move || !has_selection()
                    on:click={
                        let on_add_training = on_add_training.clone();
                        move |_| on_add_training(false)
                    }
                >"Not matching"</button>
            </div>
        </div>

        <div class="row m-2">
            <table class="table mt-4" id="matched_records">
                <thead>
                    <tr>
                        <th class="col-10">"Record ID"</th>
                        <th class="col-2">"score"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        if selected_rank.get().is_none() {
                            view! {
                                <tr>
                                    <td colspan="2">"No matched records found"</td>
                                </tr>
                            }
                            .into_any()
                        } else {
                            let on_candidate_selected = on_candidate_selected.clone();
                            view! {
                                <For
                                    each=move || {
                                        possible_matches.get().into_iter().enumerate().collect::<Vec<_>>()
                                    }
                                    key=|(index, m)| (*index, m.rec_id.clone())
                                    children=move |(index, m)| {
                                        let on_candidate_selected = on_candidate_selected.clone();
                                        let is_selected = move || selected_rank.get() == Some(index);
                                        let is_matched = {
                                            let rec_id = m.rec_id.clone();
                                            move || {
                                                matched_record.get().as_deref()
                                                    == Some(rec_id.as_str())
                                            }
                                        };
                                        view! {
                                            <tr class:table-primary=is_selected>
                                                <th>
                                                    <a
                                                        href="#"
                                                        class:matchRecord=is_matched
                                                        on:click=move |_| on_candidate_selected(index)
                                                    >
                                                        {m.rec_id.clone()}
                                                    </a>
                                                </th>
                                                <td>{m.similarity_score.to_string()}</td>
                                            </tr>
                                        }
                                    }
                                />
                            }
                            .into_any()
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}
