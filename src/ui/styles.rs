//! Style definitions for the UI components.

use ratatui::style::{Color, Modifier, Style};

/// Border of the panel or field that currently has focus.
pub fn active_panel_border_style() -> Style {
    Style::default().fg(Color::Cyan)
}

/// Border of every other panel.
pub fn inactive_panel_border_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Style for the "> " prompt before field text.
pub fn input_prompt_style() -> Style {
    Style::default().fg(Color::Cyan)
}

/// Style for typed field text.
pub fn input_text_style() -> Style {
    Style::default().fg(Color::White)
}

/// Style for placeholder text in empty fields.
pub fn input_placeholder_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Style for principal names in the balances panel.
pub fn balance_principal_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Style for balances at or above zero.
pub fn balance_credit_style() -> Style {
    Style::default().fg(Color::Green)
}

/// Style for balances below zero.
pub fn balance_debt_style() -> Style {
    Style::default().fg(Color::Red)
}

/// Style for success notices in the status line.
pub fn notice_success_style() -> Style {
    Style::default().fg(Color::Green)
}

/// Style for error notices in the status line.
pub fn notice_error_style() -> Style {
    Style::default()
        .fg(Color::Red)
        .add_modifier(Modifier::BOLD)
}

/// Style for the key-hint status line.
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_border_is_cyan() {
        assert_eq!(active_panel_border_style().fg, Some(Color::Cyan));
    }

    #[test]
    fn balance_debt_style_is_red() {
        assert_eq!(balance_debt_style().fg, Some(Color::Red));
    }

    #[test]
    fn notice_error_style_is_bold_red() {
        let style = notice_error_style();
        assert_eq!(style.fg, Some(Color::Red));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }
}
