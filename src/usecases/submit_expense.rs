//! Use case for submitting an expense split to the ledger.
//!
//! Raw form text is parsed up front; a form that does not parse never
//! reaches the ledger.

use crate::{
    domain::expense::{parse_amount, parse_participants, ExpenseDraft, ExpenseFormError},
    ledger::api::{LedgerApi, LedgerError},
};

/// Raw form contents at the moment the user pressed submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitExpenseCommand {
    pub payer: String,
    pub amount_text: String,
    pub participants_text: String,
}

/// Domain-level errors for the submit operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitExpenseError {
    /// The amount field did not parse as a whole number.
    InvalidAmount,
    /// The ledger refused the submission because the caller is not the payer.
    NotPayer,
    /// The ledger refused to split across zero participants.
    EmptySplit,
    /// The ledger could not be reached.
    TemporarilyUnavailable,
}

/// Parses the raw form fields into an [`ExpenseDraft`].
///
/// Pure and independently testable from any rendering concern.
pub fn parse_expense(command: &SubmitExpenseCommand) -> Result<ExpenseDraft, ExpenseFormError> {
    let amount = parse_amount(&command.amount_text)?;

    Ok(ExpenseDraft {
        payer: command.payer.clone(),
        amount,
        participants: parse_participants(&command.participants_text),
    })
}

/// Parses the form and records the expense through the ledger.
///
/// # Errors
/// Returns `SubmitExpenseError::InvalidAmount` without touching the ledger
/// when the amount does not parse. Maps ledger errors to domain errors for
/// the remaining failure cases.
pub fn submit_expense(
    ledger: &dyn LedgerApi,
    command: SubmitExpenseCommand,
) -> Result<(), SubmitExpenseError> {
    let draft = parse_expense(&command).map_err(|error| match error {
        ExpenseFormError::AmountNotANumber => SubmitExpenseError::InvalidAmount,
    })?;

    ledger
        .add_expense(&draft.payer, draft.amount, &draft.participants)
        .map_err(map_ledger_error)
}

fn map_ledger_error(error: LedgerError) -> SubmitExpenseError {
    match error {
        LedgerError::NotPayer => SubmitExpenseError::NotPayer,
        LedgerError::EmptyParticipants => SubmitExpenseError::EmptySplit,
        LedgerError::Unavailable => SubmitExpenseError::TemporarilyUnavailable,
    }
}
