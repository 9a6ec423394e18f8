use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::HttpApi;
use crate::components::comparison_card::ComparisonCard;
use crate::components::region::region_view;
use crate::controller::{self, Region};
use crate::render::ComparisonView;
use crate::view_state::Tab;

/// Two-phrase compatibility tab.
#[component]
pub fn ComparisonPage(api: HttpApi, #[prop(into)] active: Signal<bool>) -> impl IntoView {
    let (phrase1, set_phrase1) = signal(String::new());
    let (phrase2, set_phrase2) = signal(String::new());
    let results = RwSignal::new(Region::<ComparisonView>::new());

    let on_compare = move |_| {
        let Some(pending) = controller::begin_comparison(
            &results,
            &phrase1.get_untracked(),
            &phrase2.get_untracked(),
        ) else {
            return;
        };
        let api = api.clone();
        spawn_local(async move {
            controller::complete_comparison(&api, &results, pending).await;
        });
    };

    view! {
        <section id=Tab::Comparison.id() class="tab-content" class:active=move || active.get()>
            <div class="input-group">
                <input
                    type="text"
                    id="phrase1-input"
                    placeholder="First phrase"
                    prop:value=move || phrase1.get()
                    on:input=move |ev| set_phrase1.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    id="phrase2-input"
                    placeholder="Second phrase"
                    prop:value=move || phrase2.get()
                    on:input=move |ev| set_phrase2.set(event_target_value(&ev))
                />
                <button id="compare-btn" class="btn btn-primary" on:click=on_compare>
                    "Compare"
                </button>
            </div>
            <div id="comparison-results" class="results">
                {move || results.with(|r| region_view(r, |card| {
                    view! { <ComparisonCard card=card.clone() /> }.into_any()
                }))}
            </div>
        </section>
    }
}
