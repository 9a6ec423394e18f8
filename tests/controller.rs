use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use futures::executor::block_on;

use gematria_ui::api::types::{
    AnalysisRecord, AnalysisSummary, EnergeticProperties, Interpretation, RelationshipPattern,
};
use gematria_ui::api::{
    AnalysisResult, ApiError, ComparisonResult, GematriaApi, HistorySnapshot,
};
use gematria_ui::controller::{self, Region, RegionState};
use gematria_ui::render::{AnalysisView, ComparisonView, HistoryView};

/// Scripted stand-in for the scoring service.
#[derive(Default)]
struct FakeApi {
    calls: RefCell<Vec<String>>,
    fail: bool,
    /// When set, `analyze` records whether this region showed loading mid-call.
    watched: Option<Rc<RefCell<Region<AnalysisView>>>>,
    loading_seen: RefCell<Option<bool>>,
    history: HistorySnapshot,
}

impl FakeApi {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

fn sample_analysis() -> AnalysisResult {
    AnalysisResult {
        quantum_resonance: 1.2345,
        pattern_significance: 0.81,
        base_value: None,
        harmonic_resonance: None,
        interpretation: Interpretation {
            primary_pattern: Some("quantum_coherent".to_string()),
            resonance_quality: "Strong".to_string(),
            geometric_harmony: "flower_of_life".to_string(),
            hermetic_influence: None,
        },
        egyptian_tech: None,
        modern_equivalent: None,
        energetic_properties: Some(EnergeticProperties {
            harmony: 0.3,
            power: 0.6,
            intelligence: -0.42,
            creativity: 0.1,
            balance: 0.2,
        }),
        explanations: HashMap::new(),
    }
}

fn sample_comparison() -> ComparisonResult {
    ComparisonResult {
        overall_compatibility_score: 87.5,
        resonance_compatibility: 0.5,
        relationship_patterns: vec![(
            "emotional_bond".to_string(),
            RelationshipPattern {
                strength: 0.77,
                description: "Feeling".to_string(),
                status: None,
            },
        )],
        alignment_metrics: vec![],
        recommendations: vec!["Proceed".to_string()],
    }
}

impl GematriaApi for FakeApi {
    async fn analyze(&self, text: &str) -> Result<AnalysisResult, ApiError> {
        self.calls.borrow_mut().push(format!("analyze:{}", text));
        if let Some(region) = &self.watched {
            *self.loading_seen.borrow_mut() = Some(region.borrow().is_loading());
        }
        if self.fail {
            return Err(ApiError::Status(503));
        }
        Ok(sample_analysis())
    }

    async fn compare(&self, phrase1: &str, phrase2: &str) -> Result<ComparisonResult, ApiError> {
        self.calls
            .borrow_mut()
            .push(format!("compare:{}|{}", phrase1, phrase2));
        if self.fail {
            return Err(ApiError::Shape("broken".to_string()));
        }
        Ok(sample_comparison())
    }

    async fn fetch_history(&self) -> Result<HistorySnapshot, ApiError> {
        self.calls.borrow_mut().push("history".to_string());
        if self.fail {
            return Err(ApiError::Status(500));
        }
        Ok(self.history.clone())
    }

    async fn clear_history(&self) -> Result<(), ApiError> {
        self.calls.borrow_mut().push("clear".to_string());
        if self.fail {
            return Err(ApiError::Status(500));
        }
        Ok(())
    }
}

fn ready<T: Clone>(region: &RefCell<Region<T>>) -> T {
    match region.borrow().state() {
        RegionState::Ready(view) => view.clone(),
        other => panic!("expected ready state, got {:?}", std::mem::discriminant(other)),
    }
}

#[test]
fn test_analysis_sends_trimmed_text_once_and_shows_loading_first() {
    let region = Rc::new(RefCell::new(Region::<AnalysisView>::new()));
    let api = FakeApi {
        watched: Some(region.clone()),
        ..FakeApi::default()
    };

    let issued = block_on(controller::run_analysis(&api, &*region, "  LIGHT \n"));

    assert!(issued);
    assert_eq!(api.calls(), vec!["analyze:LIGHT"]);
    assert_eq!(*api.loading_seen.borrow(), Some(true));

    let view = ready(&region);
    assert_eq!(view.heading, "\"LIGHT\"");
    let intelligence = view.energy.iter().find(|b| b.key == "intelligence").unwrap();
    assert_eq!(intelligence.width_css(), "42%");
    assert_eq!(intelligence.label, "0.42");
}

#[test]
fn test_blank_analysis_sends_nothing() {
    let region = RefCell::new(Region::<AnalysisView>::new());
    let api = FakeApi::default();

    for input in ["", "   ", "\t\n"] {
        assert!(!block_on(controller::run_analysis(&api, &region, input)));
    }
    assert!(api.calls().is_empty());
    assert_eq!(region.borrow().state(), &RegionState::Idle);
}

#[test]
fn test_analysis_failure_replaces_loading_with_error() {
    let region = RefCell::new(Region::<AnalysisView>::new());
    block_on(controller::run_analysis(&FakeApi::failing(), &region, "LIGHT"));

    assert_eq!(
        region.borrow().state(),
        &RegionState::Failed(controller::ANALYSIS_FAILED.to_string())
    );
    assert!(!region.borrow().is_loading());
}

#[test]
fn test_comparison_failure_shows_fixed_error() {
    let region = RefCell::new(Region::<ComparisonView>::new());
    let api = FakeApi::failing();
    block_on(controller::run_comparison(&api, &region, "love", "light"));

    assert_eq!(api.calls(), vec!["compare:love|light"]);
    assert_eq!(
        region.borrow().state(),
        &RegionState::Failed("Comparison failed. Please try again.".to_string())
    );
}

#[test]
fn test_comparison_success_renders_score_and_patterns() {
    let region = RefCell::new(Region::<ComparisonView>::new());
    let api = FakeApi::default();
    assert!(block_on(controller::run_comparison(&api, &region, " love", "light ")));

    assert_eq!(api.calls(), vec!["compare:love|light"]);
    let view = ready(&region);
    assert_eq!(view.overall, "87.5%");
    assert_eq!(view.patterns[0].label, "emotional bond");
}

#[test]
fn test_comparison_with_one_empty_phrase_is_skipped() {
    let region = RefCell::new(Region::<ComparisonView>::new());
    let api = FakeApi::default();
    assert!(!block_on(controller::run_comparison(&api, &region, "love", "  ")));
    assert!(api.calls().is_empty());
}

#[test]
fn test_late_response_for_superseded_request_is_dropped() {
    let region = RefCell::new(Region::<AnalysisView>::new());
    let api = FakeApi::default();

    let first = controller::begin_analysis(&region, "first").unwrap();
    let second = controller::begin_analysis(&region, "second").unwrap();

    // Second request resolves before the first one.
    block_on(controller::complete_analysis(&api, &region, second));
    block_on(controller::complete_analysis(&api, &region, first));

    assert_eq!(ready(&region).heading, "\"second\"");
}

#[test]
fn test_history_load_renders_both_sections() {
    let region = RefCell::new(Region::<HistoryView>::new());
    let api = FakeApi {
        history: HistorySnapshot {
            analyses: vec![AnalysisRecord {
                timestamp: "2024-05-01 12:00:00".to_string(),
                text: "LIGHT".to_string(),
                result: AnalysisSummary {
                    quantum_resonance: 2.5,
                },
            }],
            comparisons: vec![],
        },
        ..FakeApi::default()
    };

    block_on(controller::load_history(&api, &region));

    let view = ready(&region);
    assert_eq!(view.analyses.items.len(), 1);
    assert_eq!(view.analyses.items[0].summary, "Quantum Resonance: 2.50");
    assert_eq!(view.comparisons.title, "Recent Comparisons");
    assert!(view.comparisons.items.is_empty());
}

#[test]
fn test_mount_fetches_history_exactly_once() {
    let region = RefCell::new(Region::<HistoryView>::new());
    let api = FakeApi::default();

    assert!(block_on(controller::load_history_on_mount(&api, &region)));
    assert!(!block_on(controller::load_history_on_mount(&api, &region)));

    assert_eq!(api.calls(), vec!["history"]);
    assert!(matches!(region.borrow().state(), RegionState::Ready(_)));
}

#[test]
fn test_mount_fetch_skipped_after_clear() {
    let region = RefCell::new(Region::<HistoryView>::new());
    let api = FakeApi::default();

    block_on(controller::clear_history(&api, &region));
    assert!(!block_on(controller::load_history_on_mount(&api, &region)));

    assert_eq!(api.calls(), vec!["clear"]);
}

#[test]
fn test_history_load_failure() {
    let region = RefCell::new(Region::<HistoryView>::new());
    block_on(controller::load_history(&FakeApi::failing(), &region));
    assert_eq!(
        region.borrow().state(),
        &RegionState::Failed(controller::HISTORY_LOAD_FAILED.to_string())
    );
}

#[test]
fn test_clear_history_success_shows_notice() {
    let region = RefCell::new(Region::<HistoryView>::new());
    let api = FakeApi::default();
    block_on(controller::load_history(&api, &region));
    block_on(controller::clear_history(&api, &region));

    assert_eq!(api.calls(), vec!["history", "clear"]);
    assert_eq!(
        region.borrow().state(),
        &RegionState::Notice(controller::HISTORY_CLEARED.to_string())
    );
}

#[test]
fn test_clear_history_failure_keeps_prior_view() {
    let region = RefCell::new(Region::<HistoryView>::new());
    block_on(controller::load_history(&FakeApi::default(), &region));
    let before = ready(&region);

    block_on(controller::clear_history(&FakeApi::failing(), &region));

    assert_eq!(ready(&region), before);
    assert_eq!(region.borrow().alert(), Some(controller::HISTORY_CLEAR_FAILED));
}

#[test]
fn test_clear_during_pending_load_wins() {
    let region = RefCell::new(Region::<HistoryView>::new());
    let api = FakeApi::default();

    // A load that is still in flight when the clear is confirmed.
    let stale = region.borrow_mut().begin();
    block_on(controller::clear_history(&api, &region));
    let applied = region.borrow_mut().settle(
        stale,
        RegionState::Failed(controller::HISTORY_LOAD_FAILED.to_string()),
    );

    assert!(!applied);
    assert_eq!(
        region.borrow().state(),
        &RegionState::Notice(controller::HISTORY_CLEARED.to_string())
    );
}
