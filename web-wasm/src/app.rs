//! Main application component
//!
//! Owns all state and performs the backend calls; the panels below only
//! display data and emit callbacks. Each action awaits its fetch before
//! any derived computation (rank derivation, score truncation) runs, so
//! derivations are always sequenced after their data dependency. A failed
//! call logs, raises the error banner and leaves prior state intact.

use dedup_common::{
    confirm_target, first_rec_id, mark_human_validated, next_rec_id, EvaluationModel, LocalRecord,
    RecIdEntry, RecordFilter, TrainingExample,
};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::components::{
    action_section::ActionSection, brief_compare::BriefCompareTable, error_banner::ErrorBanner,
    full_rec::FullRecView, header::Header, model_selector::SelectEvaluationModel,
    recid_list::RecidList,
};
use crate::config::PageContext;

#[component]
pub fn App(ctx: PageContext) -> impl IntoView {
    let ctx = StoredValue::new(ctx);

    let (rec_ids, set_rec_ids) = signal(Vec::<RecIdEntry>::new());
    let (nb_total_recs, set_nb_total_recs) = signal(None::<u64>);
    let (selected_rec_id, set_selected_rec_id) = signal(None::<String>);
    let (local_rec, set_local_rec) = signal(None::<LocalRecord>);
    let (selected_rank, set_selected_rank) = signal(None::<usize>);
    let (selected_model, set_selected_model) = signal(EvaluationModel::default());
    let (training_message, set_training_message) = signal(None::<String>);
    let (error, set_error) = signal(None::<String>);

    /* Fetch one local record and replace the detail state. The selection
    moves only once the fetch resolves; on failure every signal keeps its
    previous value, so actions still operate on the record on screen. */
    let select_record = move |rec_id: String| {
        spawn_local(async move {
            let model = selected_model.get_untracked();
            match api::fetch_local_rec(&ctx.get_value(), &rec_id, model).await {
                Ok(mut rec) => {
                    let rank = rec.candidate_rank();
                    if rank.is_some() {
                        rec.truncate_scores();
                    }
                    set_selected_rec_id.set(Some(rec.rec_id.clone()));
                    set_training_message.set(None);
                    set_selected_rank.set(rank);
                    set_local_rec.set(Some(rec));
                    set_error.set(None);
                }
                Err(e) => {
                    gloo::console::error!(format!("record fetch failed: {}", e));
                    set_error.set(Some(format!("Could not load record {}: {}", rec_id, e)));
                }
            }
        });
    };

    /* Fetch the id list; the first entry of a non-empty result is selected */
    let fetch_rec_list = move |filter: RecordFilter, recid: Option<String>, next: bool| {
        // pagination cursor = last currently loaded id
        let cursor = if next {
            rec_ids.get_untracked().last().map(|e| e.rec_id.clone())
        } else {
            None
        };

        spawn_local(async move {
            match api::fetch_rec_ids(&ctx.get_value(), filter, recid.as_deref(), cursor.as_deref())
                .await
            {
                Ok(list) => {
                    set_nb_total_recs.set(Some(list.total()));
                    let first = first_rec_id(&list);
                    set_rec_ids.set(list.rec_ids);
                    set_error.set(None);
                    match first {
                        Some(first) => select_record(first),
                        None => {
                            // empty result: nothing selected, panels render empty
                            set_selected_rec_id.set(None);
                            set_local_rec.set(None);
                            set_selected_rank.set(None);
                        }
                    }
                }
                Err(e) => {
                    gloo::console::error!(format!("record list fetch failed: {}", e));
                    set_error.set(Some(format!("Could not load the record list: {}", e)));
                }
            }
        });
    };

    /* Persist a decision for `rec_id` (always the record whose candidates
    are on screen), mark the entry validated, advance to the next id */
    let persist_match = move |rec_id: String, matched_record: Option<String>| {
        spawn_local(async move {
            match api::update_matched_record(&ctx.get_value(), &rec_id, matched_record.as_deref())
                .await
            {
                Ok(_) => {
                    set_rec_ids.update(|entries| mark_human_validated(entries, &rec_id));
                    set_local_rec.update(|rec| {
                        if let Some(rec) = rec {
                            rec.matched_record = matched_record.unwrap_or_default();
                        }
                    });
                    set_error.set(None);
                    if let Some(next) = next_rec_id(&rec_ids.get_untracked(), &rec_id) {
                        select_record(next);
                    }
                }
                Err(e) => {
                    gloo::console::error!(format!("matched record update failed: {}", e));
                    set_error.set(Some(format!("Could not save the decision: {}", e)));
                }
            }
        });
    };

    let define_matching_record = move |rank: usize| {
        let target =
            local_rec.with_untracked(|rec| rec.as_ref().and_then(|r| confirm_target(r, rank)));
        if let Some((rec_id, candidate_id)) = target {
            persist_match(rec_id, Some(candidate_id));
        }
    };

    let cancel_matching_record = move |()| {
        let rec_id = local_rec.with_untracked(|rec| rec.as_ref().map(|r| r.rec_id.clone()));
        if let Some(rec_id) = rec_id {
            persist_match(rec_id, None);
        }
    };

    /* Log the displayed pair as a labeled training example */
    let add_to_training_data = move |is_match: bool| {
        let example = local_rec.with_untracked(|rec| {
            let rec = rec.as_ref()?;
            let rank = selected_rank.get_untracked()?;
            let candidate = rec.possible_matches.get(rank)?;
            Some(TrainingExample {
                ext_nz_recid: candidate.rec_id.clone(),
                local_recid: rec.rec_id.clone(),
                col_name: ctx.get_value().col_name,
                is_match,
                selected_model: selected_model.get_untracked().to_string(),
            })
        });
        let Some(example) = example else {
            return;
        };

        spawn_local(async move {
            match api::add_training_example(&ctx.get_value(), &example).await {
                Ok(ack) => {
                    set_training_message.set(Some(ack.message));
                    set_error.set(None);
                }
                Err(e) => {
                    gloo::console::error!(format!("training data insert failed: {}", e));
                    set_error.set(Some(format!("Could not add to training data: {}", e)));
                }
            }
        });
    };

    /* Switch the scoring model and re-fetch the current record under it */
    let define_evaluation_model = move |model: EvaluationModel| {
        set_selected_model.set(model);
        if let Some(rec_id) = selected_rec_id.get_untracked() {
            select_record(rec_id);
        }
    };

    let candidate_selected = move |rank: usize| set_selected_rank.set(Some(rank));

    // views derived from the detail state
    let loc_full_rec = Signal::derive(move || local_rec.get().map(|r| r.fullrec));
    let ext_nz_full_rec = Signal::derive(move || {
        selected_rank.get().and_then(|rank| {
            local_rec.with(|rec| {
                rec.as_ref()
                    .and_then(|r| r.possible_matches.get(rank))
                    .map(|m| m.fullrec.clone())
            })
        })
    });
    let possible_matches = Signal::derive(move || {
        local_rec.with(|rec| {
            rec.as_ref()
                .map(|r| r.possible_matches.clone())
                .unwrap_or_default()
        })
    });
    let matched_record = Signal::derive(move || {
        local_rec.with(|rec| {
            rec.as_ref()
                .map(|r| r.matched_record.clone())
                .filter(|m| !m.is_empty())
        })
    });

    // initial load, unfiltered
    fetch_rec_list(RecordFilter::default(), None, false);

    view! {
        <Header />
        <ErrorBanner error=error on_dismiss=move |()| set_error.set(None) />
        <div class="row">
            <aside class="col-1">
                <RecidList
                    rec_ids=rec_ids
                    selected_rec_id=selected_rec_id
                    nb_total_recs=nb_total_recs
                    on_fetch_list=fetch_rec_list
                    on_record_selected=select_record
                />
            </aside>
            <main class="col-9">
                <div class="row">
                    <BriefCompareTable local_rec=local_rec selected_rank=selected_rank />
                </div>
                <div class="row">
                    <div class="col-6">
                        <FullRecView data=loc_full_rec />
                    </div>
                    <div class="col-6">
                        <FullRecView data=ext_nz_full_rec />
                    </div>
                </div>
            </main>
            <aside class="col-2">
                <ActionSection
                    possible_matches=possible_matches
                    matched_record=matched_record
                    selected_rank=selected_rank
                    training_message=training_message
                    on_candidate_selected=candidate_selected
                    on_define_match=define_matching_record
                    on_cancel_match=cancel_matching_record
                    on_add_training=add_to_training_data
                />
                <SelectEvaluationModel
                    selected_model=selected_model
                    on_define_model=define_evaluation_model
                />
            </aside>
        </div>
    }
}
