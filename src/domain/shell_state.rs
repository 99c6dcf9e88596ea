use super::{
    balance_list_state::BalanceListState, expense_form_state::ExpenseFormState, notice::Notice,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    running: bool,
    form: ExpenseFormState,
    balances: BalanceListState,
    notice: Option<Notice>,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            running: true,
            form: ExpenseFormState::default(),
            balances: BalanceListState::default(),
            notice: None,
        }
    }
}

impl ShellState {
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn form(&self) -> &ExpenseFormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ExpenseFormState {
        &mut self.form
    }

    pub fn balances(&self) -> &BalanceListState {
        &self.balances
    }

    pub fn balances_mut(&mut self) -> &mut BalanceListState {
        &mut self.balances
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notice::NoticeKind;

    #[test]
    fn starts_running_with_no_notice() {
        let state = ShellState::default();

        assert!(state.is_running());
        assert!(state.notice().is_none());
    }

    #[test]
    fn stop_halts_the_shell() {
        let mut state = ShellState::default();
        state.stop();

        assert!(!state.is_running());
    }

    #[test]
    fn notice_can_be_set_and_cleared() {
        let mut state = ShellState::default();
        state.set_notice(Notice::success("Expense added"));

        assert_eq!(state.notice().map(|n| n.kind), Some(NoticeKind::Success));

        state.clear_notice();
        assert!(state.notice().is_none());
    }
}
