use anyhow::Result;

use crate::{
    domain::{
        events::{AppEvent, KeyInput},
        notice::Notice,
        shell_state::ShellState,
    },
    ledger::api::LedgerApi,
};

use super::{
    contracts::ShellOrchestrator,
    fetch_balances::{fetch_balances, FetchBalancesError},
    submit_expense::{submit_expense, SubmitExpenseCommand, SubmitExpenseError},
};

pub struct DefaultShellOrchestrator<L>
where
    L: LedgerApi,
{
    state: ShellState,
    ledger: L,
}

impl<L> DefaultShellOrchestrator<L>
where
    L: LedgerApi,
{
    pub fn new(ledger: L) -> Self {
        Self {
            state: ShellState::default(),
            ledger,
        }
    }

    fn submit_expense(&mut self) {
        self.state.clear_notice();

        let form = self.state.form();
        let command = SubmitExpenseCommand {
            payer: form.payer_text().to_owned(),
            amount_text: form.amount_text().to_owned(),
            participants_text: form.participants_text().to_owned(),
        };

        match submit_expense(&self.ledger, command) {
            Ok(()) => {
                tracing::info!("expense added");
                self.state
                    .set_notice(Notice::success("Expense added successfully!"));
            }
            Err(error) => {
                tracing::error!(error = ?error, "failed to add expense");
                self.state
                    .set_notice(Notice::error(submit_error_text(&error)));
            }
        }
    }

    fn fetch_balances(&mut self) {
        self.state.clear_notice();

        match fetch_balances(&self.ledger) {
            Ok(entries) => {
                tracing::info!(accounts = entries.len(), "balances fetched");
                self.state.balances_mut().set_ready(entries);
            }
            Err(error) => {
                // The previously displayed list stays as it was.
                tracing::error!(error = ?error, "failed to fetch balances");
                self.state
                    .set_notice(Notice::error(fetch_error_text(&error)));
            }
        }
    }

    fn handle_key(&mut self, key: KeyInput) {
        if key.ctrl {
            if key.key == "b" {
                self.fetch_balances();
            }
            return;
        }

        match key.key.as_str() {
            "esc" => self.state.stop(),
            "enter" => self.submit_expense(),
            "tab" => self.state.form_mut().focus_next(),
            "backtab" => self.state.form_mut().focus_previous(),
            "backspace" => self.state.form_mut().focused_field_mut().delete_char_before(),
            "delete" => self.state.form_mut().focused_field_mut().delete_char_at(),
            "left" => self.state.form_mut().focused_field_mut().move_cursor_left(),
            "right" => self.state.form_mut().focused_field_mut().move_cursor_right(),
            "home" => self.state.form_mut().focused_field_mut().move_cursor_home(),
            "end" => self.state.form_mut().focused_field_mut().move_cursor_end(),
            other => {
                let mut chars = other.chars();
                if let (Some(ch), None) = (chars.next(), chars.next()) {
                    self.state.form_mut().focused_field_mut().insert_char(ch);
                }
            }
        }
    }
}

fn submit_error_text(error: &SubmitExpenseError) -> String {
    match error {
        SubmitExpenseError::InvalidAmount => {
            "Failed to add expense: amount must be a whole number.".to_owned()
        }
        SubmitExpenseError::NotPayer => {
            "Failed to add expense: you are not the payer.".to_owned()
        }
        SubmitExpenseError::EmptySplit => {
            "Failed to add expense: no participants to split across.".to_owned()
        }
        SubmitExpenseError::TemporarilyUnavailable => {
            "Failed to add expense: ledger is unavailable.".to_owned()
        }
    }
}

fn fetch_error_text(error: &FetchBalancesError) -> String {
    match error {
        FetchBalancesError::TemporarilyUnavailable => "Failed to fetch balances.".to_owned(),
    }
}

impl<L> ShellOrchestrator for DefaultShellOrchestrator<L>
where
    L: LedgerApi,
{
    fn state(&self) -> &ShellState {
        &self.state
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Tick => {}
            AppEvent::QuitRequested => self.state.stop(),
            AppEvent::InputKey(key) => self.handle_key(key),
        }

        Ok(())
    }
}
