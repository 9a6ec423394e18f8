/// Input/output tabs of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Analysis,
    Comparison,
    History,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Analysis, Tab::Comparison, Tab::History];

    /// DOM id of the tab's content panel.
    pub fn id(self) -> &'static str {
        match self {
            Tab::Analysis => "analysis-tab",
            Tab::Comparison => "comparison-tab",
            Tab::History => "history-tab",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Analysis => "Analyze Text",
            Tab::Comparison => "Compare Phrases",
            Tab::History => "History",
        }
    }
}

/// Which tab is shown and whether the info modal is open.
///
/// Changes only through the methods below; the DOM is a projection of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    active_tab: Tab,
    modal_visible: bool,
}

impl ViewState {
    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        self.active_tab == tab
    }

    pub fn modal_visible(&self) -> bool {
        self.modal_visible
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn open_info(&mut self) {
        self.modal_visible = true;
    }

    pub fn close_info(&mut self) {
        self.modal_visible = false;
    }

    /// Click inside the modal layer. Only a click on the backdrop itself
    /// (not on the content box or its children) closes it.
    pub fn backdrop_click(&mut self, target_is_backdrop: bool) {
        if target_is_backdrop {
            self.modal_visible = false;
        }
    }
}
