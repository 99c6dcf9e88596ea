//! The two-operation contract of the expense-splitting ledger service.

use crate::domain::expense::BalanceEntry;

/// Errors raised by a ledger implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// The submitted payer does not match the caller identity.
    NotPayer,
    /// An expense cannot be split across zero participants.
    EmptyParticipants,
    /// The service could not be reached or answered abnormally.
    Unavailable,
}

/// Client-side handle to the expense-splitting ledger.
///
/// The composition root constructs one implementation and passes it down;
/// tests substitute stubs implementing the same two operations.
pub trait LedgerApi {
    /// Records an expense paid by `payer`, split evenly across
    /// `participants`.
    fn add_expense(
        &self,
        payer: &str,
        amount: i64,
        participants: &[String],
    ) -> Result<(), LedgerError>;

    /// Returns every known account's net position.
    fn get_all_user_balances(&self) -> Result<Vec<BalanceEntry>, LedgerError>;
}

impl<T: LedgerApi + ?Sized> LedgerApi for &T {
    fn add_expense(
        &self,
        payer: &str,
        amount: i64,
        participants: &[String],
    ) -> Result<(), LedgerError> {
        (*self).add_expense(payer, amount, participants)
    }

    fn get_all_user_balances(&self) -> Result<Vec<BalanceEntry>, LedgerError> {
        (*self).get_all_user_balances()
    }
}
