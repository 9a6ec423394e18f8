//! Analysis result -> result card.

use crate::api::types::{AnalysisResult, EnergeticProperties};
use crate::render::format::fixed2;

/// Label/value line with an optional hover explanation.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRow {
    pub label: &'static str,
    pub value: String,
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
}

/// A flagged correspondence block (Egyptian technology, modern equivalent).
#[derive(Debug, Clone, PartialEq)]
pub struct CorrespondenceSection {
    pub title: &'static str,
    pub rows: Vec<DetailRow>,
}

/// One energetic-property bar.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyBar {
    pub key: &'static str,
    pub name: &'static str,
    /// Signed value as received.
    pub raw: f64,
    /// Width and label use `|raw|` for properties that can go negative.
    pub magnitude_only: bool,
    pub width_percent: f64,
    pub label: String,
    pub explanation: Option<String>,
}

impl EnergyBar {
    fn new(key: &'static str, name: &'static str, raw: f64, magnitude_only: bool) -> Self {
        let shown = if magnitude_only { raw.abs() } else { raw };
        Self {
            key,
            name,
            raw,
            magnitude_only,
            width_percent: shown * 100.0,
            label: fixed2(shown),
            explanation: None,
        }
    }

    /// CSS width, e.g. `42%`.
    pub fn width_css(&self) -> String {
        format!("{}%", self.width_percent)
    }

    pub fn is_negative(&self) -> bool {
        self.raw < 0.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisView {
    pub heading: String,
    pub metrics: Vec<MetricRow>,
    pub interpretation: Vec<DetailRow>,
    pub correspondences: Vec<CorrespondenceSection>,
    pub energy: Vec<EnergyBar>,
}

/// Build the card for `result`, echoing the analyzed `text` as its heading.
pub fn render_analysis(result: &AnalysisResult, text: &str) -> AnalysisView {
    let explain = |key: &str| result.explanations.get(key).cloned();

    let mut metrics = vec![
        MetricRow {
            label: "Quantum Resonance",
            value: fixed2(result.quantum_resonance),
            explanation: explain("quantum_resonance"),
        },
        MetricRow {
            label: "Pattern Significance",
            value: fixed2(result.pattern_significance),
            explanation: explain("pattern_significance"),
        },
    ];
    if let Some(harmonic) = result.harmonic_resonance {
        metrics.push(MetricRow {
            label: "Harmonic Resonance",
            value: fixed2(harmonic),
            explanation: explain("harmonic_resonance"),
        });
    }
    if let Some(base) = result.base_value {
        // Integer letter sum, not a magnitude.
        metrics.push(MetricRow {
            label: "Base Value",
            value: base.to_string(),
            explanation: explain("base_value"),
        });
    }

    let interp = &result.interpretation;
    let mut interpretation = vec![
        DetailRow {
            label: "Primary Pattern",
            value: interp
                .primary_pattern
                .clone()
                .unwrap_or_else(|| "None detected".to_string()),
        },
        DetailRow {
            label: "Resonance Quality",
            value: interp.resonance_quality.clone(),
        },
        DetailRow {
            label: "Geometric Harmony",
            value: interp.geometric_harmony.clone(),
        },
    ];
    if let Some(influence) = &interp.hermetic_influence {
        interpretation.push(DetailRow {
            label: "Hermetic Influence",
            value: influence.clone(),
        });
    }

    let mut correspondences = Vec::new();
    if let Some(tech) = &result.egyptian_tech {
        correspondences.push(CorrespondenceSection {
            title: "Aligned Egyptian Technology",
            rows: vec![
                DetailRow { label: "Device", value: tech.device.clone() },
                DetailRow { label: "Purpose", value: tech.purpose.clone() },
            ],
        });
    }
    if let Some(modern) = &result.modern_equivalent {
        correspondences.push(CorrespondenceSection {
            title: "Modern Equivalent",
            rows: vec![
                DetailRow { label: "Device", value: modern.device.clone() },
                DetailRow { label: "Form", value: modern.common_form.clone() },
            ],
        });
    }

    let energy = result
        .energetic_properties
        .map(|props| {
            energy_bars(&props)
                .into_iter()
                .map(|mut bar| {
                    bar.explanation = explain(bar.key);
                    bar
                })
                .collect()
        })
        .unwrap_or_default();

    AnalysisView {
        heading: format!("\"{}\"", text),
        metrics,
        interpretation,
        correspondences,
        energy,
    }
}

fn energy_bars(props: &EnergeticProperties) -> Vec<EnergyBar> {
    vec![
        EnergyBar::new("harmony", "Harmony", props.harmony, false),
        EnergyBar::new("power", "Power", props.power, false),
        EnergyBar::new("intelligence", "Intelligence", props.intelligence, true),
        EnergyBar::new("creativity", "Creativity", props.creativity, false),
        EnergyBar::new("balance", "Balance", props.balance, true),
    ]
}
