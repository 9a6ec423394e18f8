use leptos::prelude::*;

use crate::render::analysis::EnergyBar;

/// Hover state of a metric label. Only a hovered label carries tooltip text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HoverTooltip {
    explanation: Option<String>,
    shown: Option<String>,
}

impl HoverTooltip {
    pub fn new(explanation: Option<String>) -> Self {
        Self {
            explanation,
            shown: None,
        }
    }

    pub fn has_explanation(&self) -> bool {
        self.explanation.is_some()
    }

    /// Rebuild the tooltip from the current explanation.
    pub fn enter(&mut self) {
        self.shown = self.explanation.clone();
    }

    pub fn leave(&mut self) {
        self.shown = None;
    }

    pub fn text(&self) -> Option<&str> {
        self.shown.as_deref()
    }
}

/// Metric label whose explanation appears as a tooltip while hovered.
///
/// The tooltip node exists only between mouseenter and mouseleave. The
/// label carries no native `title`, so the browser never shows a second
/// copy of the text.
#[component]
pub fn MetricLabel(
    #[prop(into)] label: String,
    explanation: Option<String>,
) -> impl IntoView {
    let hover = RwSignal::new(HoverTooltip::new(explanation));
    let has_explanation = hover.with_untracked(HoverTooltip::has_explanation);

    view! {
        <span
            class="metric-label"
            class:has-tooltip=move || has_explanation
            on:mouseenter=move |_| hover.update(HoverTooltip::enter)
            on:mouseleave=move |_| hover.update(HoverTooltip::leave)
        >
            {format!("{}:", label)}
            {move || {
                hover
                    .with(|h| h.text().map(str::to_string))
                    .map(|text| view! { <div class="tooltip">{text}</div> })
            }}
        </span>
    }
}

#[component]
pub fn MetricLine(
    #[prop(into)] label: String,
    #[prop(into)] value: String,
    explanation: Option<String>,
) -> impl IntoView {
    view! {
        <p>
            <MetricLabel label=label explanation=explanation />
            " "
            <span class="metric-value">{value}</span>
        </p>
    }
}

/// Horizontal bar for one energetic property.
///
/// The signed value is kept on `data-value` even when the bar and its label
/// show only the magnitude.
#[component]
pub fn EnergyBarRow(bar: EnergyBar) -> impl IntoView {
    let fill_style = format!("width: {}", bar.width_css());
    let row_class = if bar.is_negative() {
        "energy-row energy-negative"
    } else {
        "energy-row"
    };

    view! {
        <div class=row_class data-value=bar.raw.to_string()>
            <MetricLabel label=bar.name explanation=bar.explanation.clone() />
            <div class="energy-track">
                <div class="energy-fill" style=fill_style></div>
            </div>
            <span class="metric-value">{bar.label.clone()}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tooltip_exists_only_while_hovered() {
        let mut hover = HoverTooltip::new(Some("Core vibration".to_string()));
        assert!(hover.has_explanation());
        assert_eq!(hover.text(), None);

        hover.enter();
        assert_eq!(hover.text(), Some("Core vibration"));

        hover.leave();
        assert_eq!(hover.text(), None);

        hover.enter();
        assert_eq!(hover.text(), Some("Core vibration"));
    }

    #[test]
    fn test_label_without_explanation_never_shows_tooltip() {
        let mut hover = HoverTooltip::new(None);
        assert!(!hover.has_explanation());
        hover.enter();
        assert_eq!(hover.text(), None);
    }
}
