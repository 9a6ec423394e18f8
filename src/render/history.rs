use crate::api::types::{HistoryEntry, HistorySnapshot};
use crate::render::format::{fixed2, percent_label};

/// Bold part of a history row.
#[derive(Debug, Clone, PartialEq)]
pub enum Headline {
    Text(String),
    Versus(String, String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryItemView {
    pub timestamp: String,
    pub headline: Headline,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistorySectionView {
    pub title: &'static str,
    pub items: Vec<HistoryItemView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryView {
    pub analyses: HistorySectionView,
    pub comparisons: HistorySectionView,
}

impl HistoryView {
    pub fn is_empty(&self) -> bool {
        self.analyses.items.is_empty() && self.comparisons.items.is_empty()
    }
}

/// Both sections always render, even with no items.
pub fn render_history(snapshot: &HistorySnapshot) -> HistoryView {
    HistoryView {
        analyses: HistorySectionView {
            title: "Recent Analyses",
            items: snapshot
                .analyses
                .iter()
                .map(|r| render_entry(HistoryEntry::Analysis(r)))
                .collect(),
        },
        comparisons: HistorySectionView {
            title: "Recent Comparisons",
            items: snapshot
                .comparisons
                .iter()
                .map(|r| render_entry(HistoryEntry::Comparison(r)))
                .collect(),
        },
    }
}

fn render_entry(entry: HistoryEntry<'_>) -> HistoryItemView {
    let timestamp = entry.timestamp().to_string();
    match entry {
        HistoryEntry::Analysis(record) => HistoryItemView {
            timestamp,
            headline: Headline::Text(record.text.clone()),
            summary: format!("Quantum Resonance: {}", fixed2(record.result.quantum_resonance)),
        },
        HistoryEntry::Comparison(record) => HistoryItemView {
            timestamp,
            headline: Headline::Versus(record.phrase1.clone(), record.phrase2.clone()),
            summary: format!(
                "Compatibility: {}",
                percent_label(record.result.overall_compatibility_score)
            ),
        },
    }
}
