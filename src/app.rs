use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::HttpApi;
use crate::components::info_modal::InfoModal;
use crate::components::tab_bar::TabBar;
use crate::config::AppConfig;
use crate::controller::{self, Region};
use crate::pages::analysis::AnalysisPage;
use crate::pages::comparison::ComparisonPage;
use crate::pages::history::HistoryPage;
use crate::render::HistoryView;
use crate::view_state::{Tab, ViewState};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let api = HttpApi::new(config);
    let view_state = RwSignal::new(ViewState::default());
    let history = RwSignal::new(Region::<HistoryView>::new());

    {
        let api = api.clone();
        spawn_local(async move {
            controller::load_history_on_mount(&api, &history).await;
        });
    }

    let analysis_api = api.clone();
    let comparison_api = api.clone();
    let is_active = move |tab: Tab| Signal::derive(move || view_state.with(|s| s.is_active(tab)));

    view! {
        <div class="container">
            <style>{include_str!("app.css")}</style>
            <header class="app-header">
                <h1>"Quantum Hermetic Gematria"</h1>
                <p class="subtitle">"Unveiling Divine Patterns Through Sacred Mathematics"</p>
                <button
                    class="info-btn"
                    title="About the metrics"
                    on:click=move |_| view_state.update(ViewState::open_info)
                >
                    "i"
                </button>
            </header>

            <TabBar view_state=view_state />

            <main class="content">
                <AnalysisPage api=analysis_api active=is_active(Tab::Analysis) />
                <ComparisonPage api=comparison_api active=is_active(Tab::Comparison) />
                <HistoryPage api=api history=history active=is_active(Tab::History) />
            </main>

            <InfoModal view_state=view_state />
        </div>
    }
}
