use leptos::prelude::*;

use crate::view_state::{Tab, ViewState};

#[component]
pub fn TabBar(view_state: RwSignal<ViewState>) -> impl IntoView {
    view! {
        <nav class="tabs">
            {Tab::ALL.into_iter().map(|tab| view! {
                <button
                    class="tab-btn"
                    class:active=move || view_state.with(|s| s.is_active(tab))
                    data-tab=tab.id()
                    on:click=move |_| view_state.update(|s| s.select_tab(tab))
                >
                    {tab.label()}
                </button>
            }).collect::<Vec<_>>()}
        </nav>
    }
}
