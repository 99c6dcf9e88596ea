use super::expense::BalanceEntry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BalanceListUiState {
    /// No fetch has completed yet.
    NotLoaded,
    Ready,
    Empty,
}

/// The last successfully fetched balances.
///
/// A failed fetch never reaches this state: entries only change when the
/// ledger answers, so stale-but-valid data survives an outage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceListState {
    ui_state: BalanceListUiState,
    entries: Vec<BalanceEntry>,
}

impl Default for BalanceListState {
    fn default() -> Self {
        Self {
            ui_state: BalanceListUiState::NotLoaded,
            entries: Vec::new(),
        }
    }
}

impl BalanceListState {
    pub fn ui_state(&self) -> BalanceListUiState {
        self.ui_state.clone()
    }

    /// Entries in the exact order the ledger returned them.
    pub fn entries(&self) -> &[BalanceEntry] {
        &self.entries
    }

    /// Replaces the displayed list verbatim with a fetch result.
    pub fn set_ready(&mut self, entries: Vec<BalanceEntry>) {
        if entries.is_empty() {
            self.ui_state = BalanceListUiState::Empty;
            self.entries.clear();
            return;
        }

        self.ui_state = BalanceListUiState::Ready;
        self.entries = entries;
    }
}
