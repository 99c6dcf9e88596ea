//! The expense submission form: three fields plus focus handling.

use super::field_input_state::FieldInputState;

/// Which form field currently receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Payer,
    Amount,
    Participants,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            Self::Payer => Self::Amount,
            Self::Amount => Self::Participants,
            Self::Participants => Self::Payer,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::Payer => Self::Participants,
            Self::Amount => Self::Payer,
            Self::Participants => Self::Amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExpenseFormState {
    focus: FormField,
    payer: FieldInputState,
    amount: FieldInputState,
    participants: FieldInputState,
}

impl ExpenseFormState {
    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    pub fn field(&self, field: FormField) -> &FieldInputState {
        match field {
            FormField::Payer => &self.payer,
            FormField::Amount => &self.amount,
            FormField::Participants => &self.participants,
        }
    }

    pub fn focused_field(&self) -> &FieldInputState {
        self.field(self.focus)
    }

    pub fn focused_field_mut(&mut self) -> &mut FieldInputState {
        match self.focus {
            FormField::Payer => &mut self.payer,
            FormField::Amount => &mut self.amount,
            FormField::Participants => &mut self.participants,
        }
    }

    pub fn payer_text(&self) -> &str {
        self.payer.text()
    }

    pub fn amount_text(&self) -> &str {
        self.amount.text()
    }

    pub fn participants_text(&self) -> &str {
        self.participants.text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_starts_on_payer() {
        let form = ExpenseFormState::default();

        assert_eq!(form.focus(), FormField::Payer);
    }

    #[test]
    fn focus_cycles_forward_through_all_fields() {
        let mut form = ExpenseFormState::default();

        form.focus_next();
        assert_eq!(form.focus(), FormField::Amount);
        form.focus_next();
        assert_eq!(form.focus(), FormField::Participants);
        form.focus_next();
        assert_eq!(form.focus(), FormField::Payer);
    }

    #[test]
    fn focus_cycles_backward_with_wraparound() {
        let mut form = ExpenseFormState::default();

        form.focus_previous();
        assert_eq!(form.focus(), FormField::Participants);
        form.focus_previous();
        assert_eq!(form.focus(), FormField::Amount);
    }

    #[test]
    fn typing_lands_in_the_focused_field_only() {
        let mut form = ExpenseFormState::default();
        form.focused_field_mut().insert_char('a');
        form.focus_next();
        form.focused_field_mut().insert_char('5');

        assert_eq!(form.focused_field().text(), "5");
        assert_eq!(form.payer_text(), "a");
        assert_eq!(form.amount_text(), "5");
        assert_eq!(form.participants_text(), "");
    }
}
