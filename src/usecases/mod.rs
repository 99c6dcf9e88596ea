//! Use case layer: application workflows and orchestration.

pub mod bootstrap;
pub mod contracts;
pub mod context;
pub mod fetch_balances;
pub mod shell;
pub mod submit_expense;

/// Returns the usecases module name for smoke checks.
pub fn module_name() -> &'static str {
    "usecases"
}
