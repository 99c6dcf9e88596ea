use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::domain::{
    balance_list_state::{BalanceListState, BalanceListUiState},
    expense::BalanceEntry,
    expense_form_state::FormField,
    notice::{Notice, NoticeKind},
    shell_state::ShellState,
};

use super::form::render_form_field;
use super::styles;

const PAYER_PLACEHOLDER: &str = "Payer principal";
const AMOUNT_PLACEHOLDER: &str = "Amount";
const PARTICIPANTS_PLACEHOLDER: &str = "Participants (comma-separated principals)";

const KEY_HINTS: &str =
    "Tab: next field | Enter: add expense | Ctrl+B: fetch balances | Esc: quit";

pub fn render(frame: &mut Frame<'_>, state: &ShellState) {
    let [form_area, balances_area, status_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

    let [payer_area, amount_area, participants_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .areas(form_area);

    let form = state.form();
    render_form_field(
        frame,
        payer_area,
        "Payer",
        PAYER_PLACEHOLDER,
        form,
        FormField::Payer,
    );
    render_form_field(
        frame,
        amount_area,
        "Amount",
        AMOUNT_PLACEHOLDER,
        form,
        FormField::Amount,
    );
    render_form_field(
        frame,
        participants_area,
        "Participants",
        PARTICIPANTS_PLACEHOLDER,
        form,
        FormField::Participants,
    );

    render_balances_panel(frame, balances_area, state.balances());

    let status = Paragraph::new(status_line(state));
    frame.render_widget(status, status_area);
}

fn render_balances_panel(frame: &mut Frame<'_>, area: Rect, balances: &BalanceListState) {
    match balances.ui_state() {
        BalanceListUiState::NotLoaded => render_balances_message(
            frame,
            area,
            "No balances loaded. Press Ctrl+B to fetch them.",
        ),
        BalanceListUiState::Empty => {
            render_balances_message(frame, area, "The ledger has no balances yet.")
        }
        BalanceListUiState::Ready => {
            let entries = balances.entries();
            let items: Vec<ListItem<'static>> = entries
                .iter()
                .map(|entry| ListItem::new(balance_line(entry)))
                .collect();

            let title = format!("Balances ({})", entries.len());
            let list = List::new(items).block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(styles::inactive_panel_border_style()),
            );

            frame.render_widget(list, area);
        }
    }
}

fn render_balances_message(frame: &mut Frame<'_>, area: Rect, message: &str) {
    let message = Paragraph::new(message).block(
        Block::default()
            .title("Balances")
            .borders(Borders::ALL)
            .border_style(styles::inactive_panel_border_style()),
    );
    frame.render_widget(message, area);
}

/// One balances row, in the "principal: amount" shape.
fn balance_line(entry: &BalanceEntry) -> Line<'static> {
    let amount_style = if entry.amount < 0 {
        styles::balance_debt_style()
    } else {
        styles::balance_credit_style()
    };

    Line::from(vec![
        Span::styled(entry.principal.clone(), styles::balance_principal_style()),
        Span::raw(": "),
        Span::styled(entry.amount.to_string(), amount_style),
    ])
}

fn status_line(state: &ShellState) -> Line<'static> {
    match state.notice() {
        Some(notice) => notice_line(notice),
        None => Line::from(Span::styled(KEY_HINTS.to_owned(), styles::hint_style())),
    }
}

fn notice_line(notice: &Notice) -> Line<'static> {
    let style = match notice.kind {
        NoticeKind::Success => styles::notice_success_style(),
        NoticeKind::Error => styles::notice_error_style(),
    };

    Line::from(Span::styled(notice.text.clone(), style))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn balance_line_renders_principal_and_amount() {
        let entry = BalanceEntry {
            principal: "alice".to_owned(),
            amount: 10,
        };

        assert_eq!(line_text(&balance_line(&entry)), "alice: 10");
    }

    #[test]
    fn negative_balance_uses_debt_style() {
        let entry = BalanceEntry {
            principal: "bob".to_owned(),
            amount: -10,
        };

        let line = balance_line(&entry);
        assert_eq!(line_text(&line), "bob: -10");
        assert_eq!(line.spans[2].style, styles::balance_debt_style());
    }

    #[test]
    fn status_line_shows_hints_without_notice() {
        let state = ShellState::default();

        assert!(line_text(&status_line(&state)).contains("Ctrl+B"));
    }

    #[test]
    fn status_line_shows_notice_when_present() {
        let mut state = ShellState::default();
        state.set_notice(Notice::error("Failed to fetch balances."));

        let line = status_line(&state);
        assert_eq!(line_text(&line), "Failed to fetch balances.");
        assert_eq!(line.spans[0].style, styles::notice_error_style());
    }
}
