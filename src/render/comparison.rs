use crate::api::types::ComparisonResult;
use crate::render::format::{fixed2, humanize_key, percent_label, title_case_key};

#[derive(Debug, Clone, PartialEq)]
pub struct PatternRow {
    pub label: String,
    pub strength: String,
    pub description: String,
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentRow {
    pub label: String,
    pub value: String,
    pub description: String,
    pub rating: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonView {
    pub heading: &'static str,
    pub subtitle: String,
    pub overall: String,
    pub resonance: String,
    pub patterns: Vec<PatternRow>,
    pub alignment: Vec<AlignmentRow>,
    pub recommendations: Vec<String>,
}

pub fn render_comparison(result: &ComparisonResult, phrase1: &str, phrase2: &str) -> ComparisonView {
    let patterns = result
        .relationship_patterns
        .iter()
        .map(|(key, pattern)| PatternRow {
            label: humanize_key(key),
            strength: fixed2(pattern.strength),
            description: pattern.description.clone(),
            status: pattern.status.clone(),
        })
        .collect();

    let alignment = result
        .alignment_metrics
        .iter()
        .map(|(key, metric)| AlignmentRow {
            label: title_case_key(key),
            value: fixed2(metric.value),
            description: metric.description.clone(),
            rating: metric.rating.clone(),
        })
        .collect();

    ComparisonView {
        heading: "Comparison Results",
        subtitle: format!("\"{}\" vs \"{}\"", phrase1, phrase2),
        overall: percent_label(result.overall_compatibility_score),
        resonance: fixed2(result.resonance_compatibility),
        patterns,
        alignment,
        recommendations: result
            .recommendations
            .iter()
            .map(|rec| format!("\u{2022} {}", rec))
            .collect(),
    }
}
