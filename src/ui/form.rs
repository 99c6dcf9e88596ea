//! Expense form field rendering.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::domain::{
    expense_form_state::{ExpenseFormState, FormField},
    field_input_state::FieldInputState,
};

use super::styles;

/// Prompt symbol shown before the field text.
const PROMPT_SYMBOL: &str = "> ";

/// Renders one bordered input field of the expense form.
pub fn render_form_field(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &str,
    placeholder: &str,
    form: &ExpenseFormState,
    field: FormField,
) {
    let input_state = form.field(field);
    let is_focused = form.focus() == field;

    let border_style = if is_focused {
        styles::active_panel_border_style()
    } else {
        styles::inactive_panel_border_style()
    };

    let line = build_input_line(input_state, is_focused, placeholder);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .title(title.to_owned())
            .borders(Borders::ALL)
            .border_style(border_style),
    );

    frame.render_widget(paragraph, area);

    if is_focused {
        let cursor_x = area
            .x
            .saturating_add(1)
            .saturating_add(PROMPT_SYMBOL.len() as u16)
            .saturating_add(cursor_offset(input_state).min(u16::MAX as usize) as u16);
        let cursor_y = area.y.saturating_add(1);
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

/// Builds the line content for one field.
fn build_input_line(
    input_state: &FieldInputState,
    is_focused: bool,
    placeholder: &str,
) -> Line<'static> {
    let prompt_style = styles::input_prompt_style();

    if !is_focused && input_state.is_empty() {
        return Line::from(vec![
            Span::styled(PROMPT_SYMBOL.to_owned(), prompt_style),
            Span::styled(placeholder.to_owned(), styles::input_placeholder_style()),
        ]);
    }

    Line::from(vec![
        Span::styled(PROMPT_SYMBOL.to_owned(), prompt_style),
        Span::styled(input_state.text().to_owned(), styles::input_text_style()),
    ])
}

/// Display width of the text left of the cursor (wide characters count as 2).
fn cursor_offset(input_state: &FieldInputState) -> usize {
    UnicodeWidthStr::width(input_state.text_before_cursor())
}
