//! Server-side log of past analyses and comparisons.

use leptos::prelude::*;

use crate::render::history::{Headline, HistoryItemView, HistorySectionView, HistoryView};

#[component]
pub fn HistoryList(history: HistoryView) -> impl IntoView {
    view! {
        <HistorySection section=history.analyses />
        <HistorySection section=history.comparisons />
    }
}

/// One titled list. The header renders even when there are no items.
#[component]
fn HistorySection(section: HistorySectionView) -> impl IntoView {
    view! {
        <div class="history-section">
            <h3>{section.title}</h3>
            {section.items.into_iter().map(|item| view! { <HistoryItem item=item /> }).collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn HistoryItem(item: HistoryItemView) -> impl IntoView {
    let headline = match item.headline {
        Headline::Text(text) => view! { <p><strong>{text}</strong></p> }.into_any(),
        Headline::Versus(first, second) => view! {
            <p><strong>{first}</strong>" vs "<strong>{second}</strong></p>
        }
        .into_any(),
    };

    view! {
        <div class="history-item">
            <p class="timestamp">{item.timestamp}</p>
            {headline}
            <p>{item.summary}</p>
        </div>
    }
}
