//! Result card for a single-text analysis.

use leptos::prelude::*;

use crate::components::metric::{EnergyBarRow, MetricLabel, MetricLine};
use crate::render::analysis::{AnalysisView, CorrespondenceSection, DetailRow};

#[component]
pub fn AnalysisCard(card: AnalysisView) -> impl IntoView {
    let AnalysisView {
        heading,
        metrics,
        interpretation,
        correspondences,
        energy,
    } = card;

    view! {
        <div class="result-card">
            <h3>{heading}</h3>

            <div class="metric-group">
                {metrics.into_iter().map(|m| view! {
                    <MetricLine label=m.label value=m.value explanation=m.explanation />
                }).collect::<Vec<_>>()}
            </div>

            <div class="metric-group">
                <h4>"Interpretation"</h4>
                {interpretation.into_iter().map(|row| view! { <DetailLine row=row /> }).collect::<Vec<_>>()}
            </div>

            // Flagged correspondences; absent ones render nothing at all
            {correspondences.into_iter().map(|section| view! {
                <Correspondence section=section />
            }).collect::<Vec<_>>()}

            {(!energy.is_empty()).then(|| view! {
                <div class="metric-group energy-group">
                    <h4>"Energetic Properties"</h4>
                    {energy.into_iter().map(|bar| view! { <EnergyBarRow bar=bar /> }).collect::<Vec<_>>()}
                </div>
            })}
        </div>
    }
}

#[component]
fn DetailLine(row: DetailRow) -> impl IntoView {
    view! {
        <p>
            <MetricLabel label=row.label explanation=None />
            " "
            {row.value}
        </p>
    }
}

#[component]
fn Correspondence(section: CorrespondenceSection) -> impl IntoView {
    view! {
        <div class="metric-group">
            <h4>{section.title}</h4>
            {section.rows.into_iter().map(|row| view! { <DetailLine row=row /> }).collect::<Vec<_>>()}
        </div>
    }
}
