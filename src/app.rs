use anyhow::Result;

use crate::{
    cli::{Cli, Command},
    domain, infra, ledger, ui,
    usecases::{self, bootstrap},
};

pub fn run(cli: Cli) -> Result<()> {
    match cli.command_or_default() {
        Command::Run => {
            let bootstrapped = bootstrap::bootstrap(cli.config.as_deref())?;
            let _log_guard = bootstrapped.log_guard;

            tracing::debug!(
                ui = ui::module_name(),
                domain = domain::module_name(),
                ledger = ledger::module_name(),
                usecases = usecases::module_name(),
                infra = infra::module_name(),
                "module boundaries loaded"
            );

            let context = bootstrapped.context;
            let mut shell = bootstrap::compose_shell(&context);
            ui::shell::start(
                &context,
                shell.event_source.as_mut(),
                shell.orchestrator.as_mut(),
            )?;
        }
    }

    Ok(())
}
