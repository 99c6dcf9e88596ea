use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;

use crate::{
    infra::{self, config::FileConfigAdapter, contracts::ConfigAdapter, error::AppError},
    ledger::local::LocalLedger,
    ui::CrosstermEventSource,
    usecases::context::AppContext,
};

use super::{
    contracts::{AppEventSource, ShellOrchestrator},
    shell::DefaultShellOrchestrator,
};

pub struct Bootstrapped {
    pub context: AppContext,
    /// Keeps the non-blocking log writer alive for the process lifetime.
    pub log_guard: WorkerGuard,
}

pub fn bootstrap(config_path: Option<&Path>) -> Result<Bootstrapped, AppError> {
    let context = build_context(config_path)?;
    let log_guard = infra::logging::init(&context.config.logging)?;

    Ok(Bootstrapped { context, log_guard })
}

fn build_context(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let config_adapter = FileConfigAdapter::new(config_path);
    let config = config_adapter.load().map_err(AppError::Other)?;

    Ok(AppContext::new(config))
}

pub struct ShellParts {
    pub event_source: Box<dyn AppEventSource>,
    pub orchestrator: Box<dyn ShellOrchestrator>,
}

/// Composition root for the TUI shell: the ledger client is constructed
/// exactly once here and handed to the orchestrator.
pub fn compose_shell(context: &AppContext) -> ShellParts {
    let ledger = LocalLedger::new(context.config.ledger.caller_principal.clone());

    ShellParts {
        event_source: Box::new(CrosstermEventSource),
        orchestrator: Box::new(DefaultShellOrchestrator::new(ledger)),
    }
}
