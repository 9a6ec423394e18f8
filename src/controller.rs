//! Wires user actions to the service and result regions.
//!
//! Each result area on the page is a `Region`. Starting a request bumps the
//! region's counter and shows the loading indicator; a response is applied
//! only if no newer request has been issued for that region since, so a
//! slow reply can never overwrite a fresher one.

use std::cell::RefCell;

use leptos::prelude::{RwSignal, Update};
use tracing::{debug, info, warn};

use crate::api::GematriaApi;
use crate::render::{render_analysis, render_comparison, render_history};
use crate::render::{AnalysisView, ComparisonView, HistoryView};

pub const ANALYSIS_FAILED: &str = "Analysis failed. Please try again.";
pub const COMPARISON_FAILED: &str = "Comparison failed. Please try again.";
pub const HISTORY_LOAD_FAILED: &str = "Failed to load history.";
pub const HISTORY_CLEAR_FAILED: &str = "Failed to clear history.";
pub const HISTORY_CLEARED: &str = "History cleared.";

/// What a result region currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum RegionState<T> {
    /// Nothing requested yet
    Idle,
    Loading,
    Ready(T),
    /// Fixed error text for the region
    Failed(String),
    /// Informational text that replaces the content
    Notice(String),
}

/// Identifies one issued request within a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct Region<T> {
    state: RegionState<T>,
    latest: u64,
    alert: Option<String>,
}

impl<T> Default for Region<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Region<T> {
    pub fn new() -> Self {
        Self {
            state: RegionState::Idle,
            latest: 0,
            alert: None,
        }
    }

    pub fn state(&self) -> &RegionState<T> {
        &self.state
    }

    /// Message shown above the content without replacing it.
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, RegionState::Loading)
    }

    /// No request has ever been issued for this region.
    pub fn is_untouched(&self) -> bool {
        self.latest == 0
    }

    /// Issue a request: the previous content is replaced by the loading
    /// indicator and any outstanding token goes stale.
    pub fn begin(&mut self) -> RequestToken {
        self.latest += 1;
        self.state = RegionState::Loading;
        self.alert = None;
        RequestToken(self.latest)
    }

    /// Apply the outcome of `token`'s request. Returns `false` and leaves the
    /// region untouched if a newer request has been issued.
    pub fn settle(&mut self, token: RequestToken, next: RegionState<T>) -> bool {
        if token.0 != self.latest {
            return false;
        }
        self.state = next;
        true
    }

    /// Replace the content outright and invalidate in-flight requests.
    pub fn supersede(&mut self, next: RegionState<T>) {
        self.latest += 1;
        self.state = next;
        self.alert = None;
    }

    pub fn raise_alert(&mut self, message: impl Into<String>) {
        self.alert = Some(message.into());
    }
}

/// Mutable access to a region, whatever owns it.
pub trait RegionCell<T> {
    /// Run `f` against the region; `None` if the region no longer exists.
    fn with_region<R>(&self, f: impl FnOnce(&mut Region<T>) -> R) -> Option<R>;
}

impl<T> RegionCell<T> for RefCell<Region<T>> {
    fn with_region<R>(&self, f: impl FnOnce(&mut Region<T>) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl<T: Send + Sync + 'static> RegionCell<T> for RwSignal<Region<T>> {
    fn with_region<R>(&self, f: impl FnOnce(&mut Region<T>) -> R) -> Option<R> {
        self.try_update(f)
    }
}

fn settle<T, C: RegionCell<T>>(region: &C, token: RequestToken, next: RegionState<T>, what: &str) {
    if region.with_region(|r| r.settle(token, next)) != Some(true) {
        debug!(what, token = token.0, "discarded superseded response");
    }
}

/// Analysis accepted and shown as loading, awaiting its response.
#[derive(Debug)]
pub struct PendingAnalysis {
    token: RequestToken,
    text: String,
}

#[derive(Debug)]
pub struct PendingComparison {
    token: RequestToken,
    phrase1: String,
    phrase2: String,
}

/// Synchronous half of an analysis: skip empty input, otherwise show the
/// loading indicator right away.
pub fn begin_analysis<C>(region: &C, input: &str) -> Option<PendingAnalysis>
where
    C: RegionCell<AnalysisView>,
{
    let text = input.trim();
    if text.is_empty() {
        return None;
    }
    let token = region.with_region(Region::begin)?;
    Some(PendingAnalysis {
        token,
        text: text.to_string(),
    })
}

pub async fn complete_analysis<A, C>(api: &A, region: &C, pending: PendingAnalysis)
where
    A: GematriaApi,
    C: RegionCell<AnalysisView>,
{
    let next = match api.analyze(&pending.text).await {
        Ok(result) => RegionState::Ready(render_analysis(&result, &pending.text)),
        Err(e) => {
            warn!(error = %e, "analysis failed");
            RegionState::Failed(ANALYSIS_FAILED.to_string())
        }
    };
    settle(region, pending.token, next, "analysis");
}

/// Run a whole analysis. Returns `false` when the input was skipped.
pub async fn run_analysis<A, C>(api: &A, region: &C, input: &str) -> bool
where
    A: GematriaApi,
    C: RegionCell<AnalysisView>,
{
    match begin_analysis(region, input) {
        Some(pending) => {
            complete_analysis(api, region, pending).await;
            true
        }
        None => false,
    }
}

pub fn begin_comparison<C>(region: &C, phrase1: &str, phrase2: &str) -> Option<PendingComparison>
where
    C: RegionCell<ComparisonView>,
{
    let (phrase1, phrase2) = (phrase1.trim(), phrase2.trim());
    if phrase1.is_empty() || phrase2.is_empty() {
        return None;
    }
    let token = region.with_region(Region::begin)?;
    Some(PendingComparison {
        token,
        phrase1: phrase1.to_string(),
        phrase2: phrase2.to_string(),
    })
}

pub async fn complete_comparison<A, C>(api: &A, region: &C, pending: PendingComparison)
where
    A: GematriaApi,
    C: RegionCell<ComparisonView>,
{
    let next = match api.compare(&pending.phrase1, &pending.phrase2).await {
        Ok(result) => {
            RegionState::Ready(render_comparison(&result, &pending.phrase1, &pending.phrase2))
        }
        Err(e) => {
            warn!(error = %e, "comparison failed");
            RegionState::Failed(COMPARISON_FAILED.to_string())
        }
    };
    settle(region, pending.token, next, "comparison");
}

pub async fn run_comparison<A, C>(api: &A, region: &C, phrase1: &str, phrase2: &str) -> bool
where
    A: GematriaApi,
    C: RegionCell<ComparisonView>,
{
    match begin_comparison(region, phrase1, phrase2) {
        Some(pending) => {
            complete_comparison(api, region, pending).await;
            true
        }
        None => false,
    }
}

pub async fn load_history<A, C>(api: &A, region: &C)
where
    A: GematriaApi,
    C: RegionCell<HistoryView>,
{
    let Some(token) = region.with_region(Region::begin) else {
        return;
    };
    let next = match api.fetch_history().await {
        Ok(snapshot) => {
            debug!(
                analyses = snapshot.analyses.len(),
                comparisons = snapshot.comparisons.len(),
                "history loaded"
            );
            RegionState::Ready(render_history(&snapshot))
        }
        Err(e) => {
            warn!(error = %e, "history fetch failed");
            RegionState::Failed(HISTORY_LOAD_FAILED.to_string())
        }
    };
    settle(region, token, next, "history");
}

/// Initial history fetch on mount. Does nothing once the region has seen
/// any request, so remounting never re-fetches or polls.
pub async fn load_history_on_mount<A, C>(api: &A, region: &C) -> bool
where
    A: GematriaApi,
    C: RegionCell<HistoryView>,
{
    if region.with_region(|r| r.is_untouched()) != Some(true) {
        debug!("history already requested; skipping mount fetch");
        return false;
    }
    load_history(api, region).await;
    true
}

/// Clear the server log. The view changes only once the server confirms;
/// on failure the current list stays and an alert is raised.
pub async fn clear_history<A, C>(api: &A, region: &C)
where
    A: GematriaApi,
    C: RegionCell<HistoryView>,
{
    match api.clear_history().await {
        Ok(()) => {
            info!("history cleared");
            region.with_region(|r| r.supersede(RegionState::Notice(HISTORY_CLEARED.to_string())));
        }
        Err(e) => {
            warn!(error = %e, "clear_history failed");
            region.with_region(|r| r.raise_alert(HISTORY_CLEAR_FAILED));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_shows_loading_and_clears_alert() {
        let mut region: Region<u32> = Region::new();
        region.raise_alert("old");
        region.begin();
        assert!(region.is_loading());
        assert_eq!(region.alert(), None);
    }

    #[test]
    fn test_stale_token_is_discarded() {
        let mut region: Region<u32> = Region::new();
        let first = region.begin();
        let second = region.begin();

        assert!(region.settle(second, RegionState::Ready(2)));
        assert!(!region.settle(first, RegionState::Ready(1)));
        assert_eq!(region.state(), &RegionState::Ready(2));
    }

    #[test]
    fn test_supersede_invalidates_pending_request() {
        let mut region: Region<u32> = Region::new();
        let token = region.begin();
        region.supersede(RegionState::Notice("cleared".to_string()));
        assert!(!region.settle(token, RegionState::Ready(7)));
        assert_eq!(region.state(), &RegionState::Notice("cleared".to_string()));
    }

    #[test]
    fn test_region_untouched_until_first_request() {
        let mut region: Region<u32> = Region::new();
        assert!(region.is_untouched());
        region.supersede(RegionState::Notice("cleared".to_string()));
        assert!(!region.is_untouched());
    }

    #[test]
    fn test_begin_analysis_skips_blank_input() {
        let region = RefCell::new(Region::<AnalysisView>::new());
        assert!(begin_analysis(&region, "   \n\t").is_none());
        assert_eq!(region.borrow().state(), &RegionState::Idle);
    }

    #[test]
    fn test_begin_comparison_requires_both_phrases() {
        let region = RefCell::new(Region::<ComparisonView>::new());
        assert!(begin_comparison(&region, "love", " ").is_none());
        assert!(begin_comparison(&region, "", "light").is_none());
        assert_eq!(region.borrow().state(), &RegionState::Idle);

        let pending = begin_comparison(&region, " love ", "light").unwrap();
        assert_eq!(pending.phrase1, "love");
        assert!(region.borrow().is_loading());
    }
}
