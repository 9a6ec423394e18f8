use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::HttpApi;
use crate::components::history_list::HistoryList;
use crate::components::region::region_view;
use crate::controller::{self, Region};
use crate::render::HistoryView;
use crate::view_state::Tab;

/// History tab. The region is owned by `App`, which loads it on mount.
#[component]
pub fn HistoryPage(
    api: HttpApi,
    history: RwSignal<Region<HistoryView>>,
    #[prop(into)] active: Signal<bool>,
) -> impl IntoView {
    let on_clear = move |_| {
        let api = api.clone();
        spawn_local(async move {
            controller::clear_history(&api, &history).await;
        });
    };

    view! {
        <section id=Tab::History.id() class="tab-content" class:active=move || active.get()>
            <div class="history-actions">
                <button id="clear-history-btn" class="btn btn-secondary" on:click=on_clear>
                    "Clear History"
                </button>
            </div>
            <div id="history-list">
                {move || history.with(|r| region_view(r, |list| {
                    view! { <HistoryList history=list.clone() /> }.into_any()
                }))}
            </div>
        </section>
    }
}
