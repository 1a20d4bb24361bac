//! Order detail tabs.

/// Detail view tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailTab {
    #[default]
    Overview,
    Delivery,
    Payment,
    Items,
}

impl DetailTab {
    /// Tab header text.
    pub fn name(self) -> &'static str {
        match self {
            DetailTab::Overview => "Overview",
            DetailTab::Delivery => "Delivery",
            DetailTab::Payment => "Payment",
            DetailTab::Items => "Items",
        }
    }

    /// All tabs in declaration order.
    pub fn all() -> &'static [DetailTab] {
        &[
            DetailTab::Overview,
            DetailTab::Delivery,
            DetailTab::Payment,
            DetailTab::Items,
        ]
    }

    /// The next tab, wrapping around.
    pub fn next(self) -> DetailTab {
        match self {
            DetailTab::Overview => DetailTab::Delivery,
            DetailTab::Delivery => DetailTab::Payment,
            DetailTab::Payment => DetailTab::Items,
            DetailTab::Items => DetailTab::Overview,
        }
    }

    /// The previous tab, wrapping around.
    pub fn prev(self) -> DetailTab {
        match self {
            DetailTab::Overview => DetailTab::Items,
            DetailTab::Delivery => DetailTab::Overview,
            DetailTab::Payment => DetailTab::Delivery,
            DetailTab::Items => DetailTab::Payment,
        }
    }
}

/// Tab selection state. Exactly one tab is active at any time; the
/// first declared tab is active on load.
#[derive(Debug, Default)]
pub struct TabsState {
    active: DetailTab,
}

impl TabsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate `tab`, deactivating whichever tab was active before.
    pub fn activate(&mut self, tab: DetailTab) {
        self.active = tab;
    }

    pub fn next_tab(&mut self) {
        self.active = self.active.next();
    }

    pub fn prev_tab(&mut self) {
        self.active = self.active.prev();
    }

    /// The currently active tab.
    pub fn active(&self) -> DetailTab {
        self.active
    }

    /// Whether `tab` is the active one.
    pub fn is_active(&self, tab: DetailTab) -> bool {
        self.active == tab
    }
}
