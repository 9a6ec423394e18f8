//! Request and response shapes of the scoring service.
//!
//! Wire structs mirror the server JSON (snake_case keys, unknown fields
//! ignored). `AnalysisEnvelope` is the one response whose wire form differs
//! from what the UI consumes: its presence flags are folded into optional
//! fields by `AnalysisResult::from_envelope`.

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::error::ApiError;

// -- Request bodies --

#[derive(Debug, Serialize)]
pub(crate) struct AnalyzeArgs<'a> {
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct CompareArgs<'a> {
    pub phrase1: &'a str,
    pub phrase2: &'a str,
}

// -- Analysis --

/// Ancient device the resonance lines up with.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TechAlignment {
    pub device: String,
    pub purpose: String,
}

/// Present-day counterpart of the aligned device.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ModernEquivalent {
    pub device: String,
    pub common_form: String,
}

/// Five energetic readings. `intelligence` and `balance` can be negative.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct EnergeticProperties {
    pub harmony: f64,
    pub power: f64,
    pub intelligence: f64,
    pub creativity: f64,
    pub balance: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InterpretationEnvelope {
    #[serde(default)]
    pub primary_pattern: Option<String>,
    pub resonance_quality: String,
    pub geometric_harmony: String,
    #[serde(default)]
    pub hermetic_influence: Option<String>,
    #[serde(default)]
    pub aligned_egyptian_tech: Option<TechAlignment>,
    #[serde(default)]
    pub modern_equivalent: Option<ModernEquivalent>,
}

/// `/analyze` response exactly as the server sends it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalysisEnvelope {
    pub quantum_resonance: f64,
    pub pattern_significance: f64,
    pub interpretation: InterpretationEnvelope,
    #[serde(default)]
    pub base_value: Option<f64>,
    #[serde(default)]
    pub harmonic_resonance: Option<f64>,
    #[serde(default)]
    pub energetic_properties: Option<EnergeticProperties>,
    #[serde(default)]
    pub explanations: Option<HashMap<String, String>>,
    /// Presence flag for `interpretation.aligned_egyptian_tech`.
    #[serde(default)]
    pub egyptian_technology: Value,
    /// Presence flag for `interpretation.modern_equivalent`.
    #[serde(default)]
    pub modern_equivalents: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Interpretation {
    /// `None` when the service detected no pattern above threshold.
    pub primary_pattern: Option<String>,
    pub resonance_quality: String,
    pub geometric_harmony: String,
    pub hermetic_influence: Option<String>,
}

/// Analysis result with correspondences already gated by their flags.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub quantum_resonance: f64,
    pub pattern_significance: f64,
    pub base_value: Option<f64>,
    pub harmonic_resonance: Option<f64>,
    pub interpretation: Interpretation,
    pub egyptian_tech: Option<TechAlignment>,
    pub modern_equivalent: Option<ModernEquivalent>,
    pub energetic_properties: Option<EnergeticProperties>,
    pub explanations: HashMap<String, String>,
}

impl AnalysisResult {
    /// Fold the envelope's presence flags into the nested data they gate.
    ///
    /// A raised flag without its nested object is a contract violation; a
    /// nested object without its flag is dropped.
    pub fn from_envelope(envelope: AnalysisEnvelope) -> Result<Self, ApiError> {
        let AnalysisEnvelope {
            quantum_resonance,
            pattern_significance,
            interpretation,
            base_value,
            harmonic_resonance,
            energetic_properties,
            explanations,
            egyptian_technology,
            modern_equivalents,
        } = envelope;

        let egyptian_tech = gate(
            &egyptian_technology,
            interpretation.aligned_egyptian_tech,
            "egyptian_technology",
        )?;
        let modern_equivalent = gate(
            &modern_equivalents,
            interpretation.modern_equivalent,
            "modern_equivalents",
        )?;

        Ok(Self {
            quantum_resonance,
            pattern_significance,
            base_value,
            harmonic_resonance,
            interpretation: Interpretation {
                primary_pattern: interpretation.primary_pattern,
                resonance_quality: interpretation.resonance_quality,
                geometric_harmony: interpretation.geometric_harmony,
                hermetic_influence: interpretation.hermetic_influence,
            },
            egyptian_tech,
            modern_equivalent,
            energetic_properties,
            explanations: explanations.unwrap_or_default(),
        })
    }
}

/// Truthiness of a presence flag. Empty objects and arrays count as unset
/// because the service sends `{}` when nothing aligned.
pub fn flag_is_set(flag: &Value) -> bool {
    match flag {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn gate<T>(flag: &Value, nested: Option<T>, flag_name: &str) -> Result<Option<T>, ApiError> {
    if !flag_is_set(flag) {
        return Ok(None);
    }
    nested.map(Some).ok_or_else(|| {
        ApiError::Shape(format!(
            "`{}` is set but its interpretation entry is missing",
            flag_name
        ))
    })
}

// -- Comparison --

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RelationshipPattern {
    pub strength: f64,
    pub description: String,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AlignmentMetric {
    pub value: f64,
    pub description: String,
    #[serde(default)]
    pub rating: Option<String>,
}

/// `/compare` response. Map-shaped fields keep the server's key order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ComparisonResult {
    pub overall_compatibility_score: f64,
    pub resonance_compatibility: f64,
    #[serde(deserialize_with = "ordered_entries")]
    pub relationship_patterns: Vec<(String, RelationshipPattern)>,
    #[serde(default, deserialize_with = "ordered_entries")]
    pub alignment_metrics: Vec<(String, AlignmentMetric)>,
    pub recommendations: Vec<String>,
}

/// Deserialize a JSON object into `(key, value)` pairs in document order.
fn ordered_entries<'de, D, T>(deserializer: D) -> Result<Vec<(String, T)>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    struct EntriesVisitor<T>(PhantomData<T>);

    impl<'de, T: Deserialize<'de>> Visitor<'de> for EntriesVisitor<T> {
        type Value = Vec<(String, T)>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a JSON object")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((key, value)) = map.next_entry::<String, T>()? {
                entries.push((key, value));
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(EntriesVisitor(PhantomData))
}

// -- History --

/// The part of a stored analysis the history list shows.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalysisSummary {
    pub quantum_resonance: f64,
}

/// The part of a stored comparison the history list shows.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ComparisonSummary {
    pub overall_compatibility_score: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalysisRecord {
    pub timestamp: String,
    pub text: String,
    pub result: AnalysisSummary,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ComparisonRecord {
    pub timestamp: String,
    pub phrase1: String,
    pub phrase2: String,
    pub result: ComparisonSummary,
}

/// One row of the server-side log.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HistoryEntry<'a> {
    Analysis(&'a AnalysisRecord),
    Comparison(&'a ComparisonRecord),
}

impl<'a> HistoryEntry<'a> {
    pub fn timestamp(&self) -> &'a str {
        match self {
            HistoryEntry::Analysis(r) => &r.timestamp,
            HistoryEntry::Comparison(r) => &r.timestamp,
        }
    }
}

/// `/history` response, most recent first within each list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HistorySnapshot {
    #[serde(default)]
    pub analyses: Vec<AnalysisRecord>,
    #[serde(default)]
    pub comparisons: Vec<ComparisonRecord>,
}

impl HistorySnapshot {
    /// Analyses first, then comparisons, each in server order.
    pub fn entries(&self) -> impl Iterator<Item = HistoryEntry<'_>> {
        self.analyses
            .iter()
            .map(HistoryEntry::Analysis)
            .chain(self.comparisons.iter().map(HistoryEntry::Comparison))
    }

    pub fn is_empty(&self) -> bool {
        self.analyses.is_empty() && self.comparisons.is_empty()
    }
}
