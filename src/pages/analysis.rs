use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::HttpApi;
use crate::components::analysis_card::AnalysisCard;
use crate::components::region::region_view;
use crate::controller::{self, Region};
use crate::render::AnalysisView;
use crate::view_state::Tab;

/// Single-phrase analysis tab.
#[component]
pub fn AnalysisPage(api: HttpApi, #[prop(into)] active: Signal<bool>) -> impl IntoView {
    let (input, set_input) = signal(String::new());
    let results = RwSignal::new(Region::<AnalysisView>::new());

    let on_analyze = move |_| {
        // Loading is shown synchronously; only the network call is deferred.
        let Some(pending) = controller::begin_analysis(&results, &input.get_untracked()) else {
            return;
        };
        let api = api.clone();
        spawn_local(async move {
            controller::complete_analysis(&api, &results, pending).await;
        });
    };

    view! {
        <section id=Tab::Analysis.id() class="tab-content" class:active=move || active.get()>
            <div class="input-group">
                <textarea
                    id="analysis-input"
                    placeholder="Enter text to analyze..."
                    prop:value=move || input.get()
                    on:input=move |ev| set_input.set(event_target_value(&ev))
                ></textarea>
                <button id="analyze-btn" class="btn btn-primary" on:click=on_analyze>
                    "Analyze"
                </button>
            </div>
            <div id="analysis-results" class="results">
                {move || results.with(|r| region_view(r, |card| {
                    view! { <AnalysisCard card=card.clone() /> }.into_any()
                }))}
            </div>
        </section>
    }
}
