//! Pure result -> view-model mapping. Components only project these into DOM.

pub mod analysis;
pub mod comparison;
pub mod format;
pub mod history;

pub use analysis::{render_analysis, AnalysisView};
pub use comparison::{render_comparison, ComparisonView};
pub use history::{render_history, HistoryView};
