use leptos::prelude::*;

use crate::controller::{Region, RegionState};

/// Project a region into DOM. Loading, error and notice states replace the
/// content entirely; `ready` draws the result.
pub fn region_view<T>(region: &Region<T>, ready: impl FnOnce(&T) -> AnyView) -> AnyView {
    let alert = region
        .alert()
        .map(|msg| view! { <div class="error region-alert">{msg.to_string()}</div> });

    let body = match region.state() {
        RegionState::Idle => ().into_any(),
        RegionState::Loading => view! { <div class="loading"></div> }.into_any(),
        RegionState::Ready(content) => ready(content),
        RegionState::Failed(msg) => view! { <div class="error">{msg.clone()}</div> }.into_any(),
        RegionState::Notice(msg) => view! { <p class="notice">{msg.clone()}</p> }.into_any(),
    };

    view! {
        {alert}
        {body}
    }
    .into_any()
}
