//! Domain layer: core entities and business rules.

pub mod balance_list_state;
pub mod events;
pub mod expense;
pub mod expense_form_state;
pub mod field_input_state;
pub mod notice;
pub mod shell_state;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
