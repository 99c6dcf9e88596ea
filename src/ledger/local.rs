//! In-process ledger used when no remote service is wired up.
//!
//! Mirrors the remote service's accounting: an expense of `amount` paid by
//! `payer` deducts `amount / participants.len()` from each participant and
//! credits the payer with the full amount. Balances live only for the
//! lifetime of the process.

use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::domain::expense::BalanceEntry;

use super::api::{LedgerApi, LedgerError};

#[derive(Debug, Default)]
pub struct LocalLedger {
    /// Identity the ledger attributes submissions to. Only the payer may
    /// record their own expense.
    caller: String,
    balances: RefCell<BTreeMap<String, i64>>,
}

impl LocalLedger {
    pub fn new(caller: impl Into<String>) -> Self {
        Self {
            caller: caller.into(),
            balances: RefCell::new(BTreeMap::new()),
        }
    }
}

impl LedgerApi for LocalLedger {
    fn add_expense(
        &self,
        payer: &str,
        amount: i64,
        participants: &[String],
    ) -> Result<(), LedgerError> {
        if payer != self.caller {
            tracing::warn!(payer, caller = %self.caller, "expense rejected: caller is not the payer");
            return Err(LedgerError::NotPayer);
        }

        if participants.is_empty() {
            return Err(LedgerError::EmptyParticipants);
        }

        let share = amount / participants.len() as i64;
        tracing::debug!(payer, amount, share, participants = ?participants, "recording expense");

        let mut balances = self.balances.borrow_mut();
        for participant in participants {
            *balances.entry(participant.clone()).or_insert(0) -= share;
        }
        *balances.entry(payer.to_owned()).or_insert(0) += amount;

        Ok(())
    }

    fn get_all_user_balances(&self) -> Result<Vec<BalanceEntry>, LedgerError> {
        let balances = self.balances.borrow();
        tracing::debug!(accounts = balances.len(), "listing balances");

        Ok(balances
            .iter()
            .map(|(principal, amount)| BalanceEntry {
                principal: principal.clone(),
                amount: *amount,
            })
            .collect())
    }
}
