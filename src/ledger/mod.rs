//! Ledger integration layer: the remote service contract and its adapters.

pub mod api;
pub mod local;

/// Returns the ledger module name for smoke checks.
pub fn module_name() -> &'static str {
    "ledger"
}
