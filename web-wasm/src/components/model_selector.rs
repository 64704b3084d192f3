//! Evaluation model selector
//!
//! Stateless dropdown over the fixed model set; the parent re-fetches the
//! selected record under the new model.

use dedup_common::EvaluationModel;
use leptos::prelude::*;

#[component]
pub fn SelectEvaluationModel<F>(
    selected_model: ReadSignal<EvaluationModel>,
    on_define_model: F,
) -> impl IntoView
where
    F: Fn(EvaluationModel) + 'static + Clone,
{
    view! {
        <h2 class="mb-0">"Evaluation models"</h2>
        <form class="mb-2" id="selectModel">
            <label for="modelOptions" class="control-label">"Current model:"</label>
            <select
                id="modelOptions"
                class="form-select form-select-sm"
                on:change={
                    let on_define_model = on_define_model.clone();
                    move |ev| {
                        on_define_model(EvaluationModel::from_str(&event_target_value(&ev)));
                    }
                }
            >
                {EvaluationModel::ALL
                    .iter()
                    .map(|option| {
                        let option = *option;
                        view! {
                            <option
                                value=option.as_str()
                                selected=move || selected_model.get() == option
                            >
                                {option.as_str()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </form>
    }
}
