//! Full record panel
//!
//! Used for both the local and the candidate pane.

use dedup_common::{display_value, FullRec, FULL_LOCAL_REC_FIELDS};
use leptos::prelude::*;

#[component]
pub fn FullRecView(#[prop(into)] data: Signal<Option<FullRec>>) -> impl IntoView {
    view! {
        {move || {
            data.get().map(|rec| match rec {
                // server-rendered Marc21 markup, displayed verbatim; the
                // backend is trusted to have sanitized it
                FullRec::Html(markup) => {
                    view! { <div class="fullrecdata" inner_html=markup></div> }.into_any()
                }
                FullRec::Fields(fields) => {
                    view! {
                        <table class="table locFullRec">
                            <tbody>
                                {FULL_LOCAL_REC_FIELDS
                                    .iter()
                                    .map(|field| {
                                        let value = display_value(fields.get(*field));
                                        view! {
                                            <tr>
                                                <th class="text-end">{*field}</th>
                                                <td>{value}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                    .into_any()
                }
            })
        }}
    }
}
