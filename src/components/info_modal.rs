//! Informational modal explaining the metrics.
//!
//! Closes from the close button or a click on the backdrop itself; clicks
//! inside the content box do not close it.

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::view_state::ViewState;

#[component]
pub fn InfoModal(view_state: RwSignal<ViewState>) -> impl IntoView {
    let on_backdrop_click = move |ev: leptos::ev::MouseEvent| {
        let on_backdrop = match (ev.target(), ev.current_target()) {
            (Some(target), Some(current)) => JsValue::from(target) == JsValue::from(current),
            _ => false,
        };
        view_state.update(|s| s.backdrop_click(on_backdrop));
    };

    view! {
        <Show when=move || view_state.with(|s| s.modal_visible())>
            <div class="modal" on:click=on_backdrop_click>
                <div class="modal-content">
                    <button
                        class="close-modal"
                        aria-label="Close"
                        on:click=move |_| view_state.update(ViewState::close_info)
                    >
                        "\u{2715}"
                    </button>
                    <h2>"About the Metrics"</h2>
                    <p>
                        <strong>"Quantum Resonance"</strong>
                        " is the core vibration derived from the letters of the text."
                    </p>
                    <p>
                        <strong>"Pattern Significance"</strong>
                        " is the mean strength of the archetypal patterns detected above threshold."
                    </p>
                    <p>
                        <strong>"Energetic Properties"</strong>
                        " are shown as bars. Intelligence and balance can be negative; their bars show the magnitude."
                    </p>
                    <p>
                        <strong>"Compatibility"</strong>
                        " compares two phrases on a 0 to 100 scale, with relationship patterns and recommendations."
                    </p>
                    <p>"Hover a metric name to see its explanation when the service provides one."</p>
                </div>
            </div>
        </Show>
    }
}
