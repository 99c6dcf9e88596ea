//! Use case for fetching the full balance list from the ledger.

use crate::{
    domain::expense::BalanceEntry,
    ledger::api::{LedgerApi, LedgerError},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchBalancesError {
    /// The ledger could not be reached or answered abnormally.
    TemporarilyUnavailable,
}

/// Fetches all account balances, preserving the ledger's ordering.
pub fn fetch_balances(ledger: &dyn LedgerApi) -> Result<Vec<BalanceEntry>, FetchBalancesError> {
    ledger
        .get_all_user_balances()
        .map_err(map_ledger_error)
}

fn map_ledger_error(error: LedgerError) -> FetchBalancesError {
    match error {
        LedgerError::Unavailable | LedgerError::NotPayer | LedgerError::EmptyParticipants => {
            FetchBalancesError::TemporarilyUnavailable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubLedger {
        result: Result<Vec<BalanceEntry>, LedgerError>,
    }

    impl LedgerApi for StubLedger {
        fn add_expense(
            &self,
            _payer: &str,
            _amount: i64,
            _participants: &[String],
        ) -> Result<(), LedgerError> {
            Ok(())
        }

        fn get_all_user_balances(&self) -> Result<Vec<BalanceEntry>, LedgerError> {
            self.result.clone()
        }
    }

    fn entry(principal: &str, amount: i64) -> BalanceEntry {
        BalanceEntry {
            principal: principal.to_owned(),
            amount,
        }
    }

    #[test]
    fn returns_ledger_payload_in_ledger_order() {
        let ledger = StubLedger {
            result: Ok(vec![entry("alice", 10), entry("bob", -10)]),
        };

        let balances = fetch_balances(&ledger).expect("fetch should succeed");

        assert_eq!(balances, vec![entry("alice", 10), entry("bob", -10)]);
    }

    #[test]
    fn maps_unavailable_error() {
        let ledger = StubLedger {
            result: Err(LedgerError::Unavailable),
        };

        let err = fetch_balances(&ledger).expect_err("fetch must fail");

        assert_eq!(err, FetchBalancesError::TemporarilyUnavailable);
    }
}
