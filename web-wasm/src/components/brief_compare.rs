//! Side-by-side brief record comparison table
//!
//! One row per brief record field: local value, candidate value and the
//! per-field similarity score. Rows whose score sits between clearly
//! dissimilar and clearly similar are highlighted.

use dedup_common::{display_value, LocalRecord, Score, BRIEF_REC_FIELDS};
use leptos::prelude::*;

#[component]
pub fn BriefCompareTable(
    local_rec: ReadSignal<Option<LocalRecord>>,
    selected_rank: ReadSignal<Option<usize>>,
) -> impl IntoView {
    view! {
        <table class="table table-striped" id="briefrec">
            <thead>
                <tr>
                    <th class="col-1"></th>
                    <th class="col-5">"Local brief record"</th>
                    <th class="col-5">"NZ / external brief record"</th>
                    <th class="col-1">"Score"</th>
                </tr>
            </thead>
            <tbody>
                <Show when=move || local_rec.with(|rec| rec.is_some())>
                    {BRIEF_REC_FIELDS
                        .iter()
                        .map(|field| {
                            let field: &'static str = field;
                            let local_value = move || {
                                local_rec.with(|rec| {
                                    rec.as_ref()
                                        .map(|r| display_value(r.briefrec.get(field)))
                                        .unwrap_or_default()
                                })
                            };
                            let candidate_value = move || {
                                local_rec
                                    .with(|rec| {
                                        let rec = rec.as_ref()?;
                                        let rank = selected_rank.get()?;
                                        rec.possible_matches
                                            .get(rank)
                                            .map(|m| display_value(m.briefrec.get(field)))
                                    })
                                    .unwrap_or_default()
                            };
                            let field_score = move || -> Option<Score> {
                                local_rec.with(|rec| {
                                    let rec = rec.as_ref()?;
                                    let rank = selected_rank.get()?;
                                    let candidate = rec.possible_matches.get(rank)?;
                                    candidate.scores.get(field).cloned().flatten()
                                })
                            };
                            view! {
                                <tr class:table-danger=move || {
                                    field_score().is_some_and(|s| s.is_disputed())
                                }>
                                    <th class="text-end">{field}</th>
                                    <td>{local_value}</td>
                                    <td>{candidate_value}</td>
                                    <td>{move || {
                                        field_score().map(|s| s.to_string()).unwrap_or_default()
                                    }}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </Show>
            </tbody>
        </table>
    }
}
