//! Focus state.

/// Which panel receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// The search input at the top.
    #[default]
    Search,
    /// The order detail area.
    Detail,
}

impl FocusPanel {
    /// Switch to the other panel.
    pub fn toggle(self) -> Self {
        match self {
            FocusPanel::Search => FocusPanel::Detail,
            FocusPanel::Detail => FocusPanel::Search,
        }
    }

    pub fn is_search(self) -> bool {
        matches!(self, FocusPanel::Search)
    }

    pub fn is_detail(self) -> bool {
        matches!(self, FocusPanel::Detail)
    }
}
