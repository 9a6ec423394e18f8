use leptos::prelude::*;

use crate::components::metric::MetricLine;
use crate::render::comparison::{AlignmentRow, ComparisonView, PatternRow};

#[component]
pub fn ComparisonCard(card: ComparisonView) -> impl IntoView {
    let ComparisonView {
        heading,
        subtitle,
        overall,
        resonance,
        patterns,
        alignment,
        recommendations,
    } = card;

    view! {
        <div class="result-card">
            <h3>{heading}</h3>
            <p class="card-subtitle">{subtitle}</p>

            <div class="metric-group">
                <MetricLine label="Overall Compatibility" value=overall explanation=None />
                <MetricLine label="Resonance Compatibility" value=resonance explanation=None />
            </div>

            <div class="metric-group">
                <h4>"Relationship Patterns"</h4>
                {patterns.into_iter().map(|p| view! { <PatternLine row=p /> }).collect::<Vec<_>>()}
            </div>

            {(!alignment.is_empty()).then(|| view! {
                <div class="metric-group">
                    <h4>"Alignment Metrics"</h4>
                    {alignment.into_iter().map(|a| view! { <AlignmentLine row=a /> }).collect::<Vec<_>>()}
                </div>
            })}

            <div class="recommendations">
                <h4>"Recommendations"</h4>
                {recommendations.into_iter().map(|rec| view! { <p>{rec}</p> }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[component]
fn PatternLine(row: PatternRow) -> impl IntoView {
    view! {
        <p>
            <span class="metric-label">{format!("{}:", row.label)}</span>
            " "
            <span class="metric-value">{row.strength}</span>
            {row.status.map(|s| view! { <span class="pattern-status">{s}</span> })}
            <br />
            <small>{row.description}</small>
        </p>
    }
}

#[component]
fn AlignmentLine(row: AlignmentRow) -> impl IntoView {
    let rating_class = row
        .rating
        .as_deref()
        .map(|r| format!("rating rating-{}", r.to_lowercase()))
        .unwrap_or_else(|| "rating".to_string());

    view! {
        <p>
            <span class="metric-label">{format!("{}:", row.label)}</span>
            " "
            <span class="metric-value">{row.value}</span>
            {row.rating.map(|r| view! { <span class=rating_class>{r}</span> })}
            <br />
            <small>{row.description}</small>
        </p>
    }
}
