use anyhow::Result;

use crate::{
    domain::shell_state::ShellState,
    usecases::{
        context::AppContext,
        contracts::{AppEventSource, ShellOrchestrator},
    },
};

use super::{terminal, view};

pub fn start(
    context: &AppContext,
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
) -> Result<()> {
    tracing::info!(
        log_level = %context.config.logging.level,
        caller = %context.config.ledger.caller_principal,
        "starting TUI shell"
    );

    terminal::with_terminal(|tui| {
        run_event_loop(event_source, orchestrator, |state| {
            tui.draw(|frame| view::render(frame, state))?;
            Ok(())
        })
    })
}

/// Drives the shell until the orchestrator stops: present the current
/// state, then feed the next event back in.
fn run_event_loop(
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
    mut present: impl FnMut(&ShellState) -> Result<()>,
) -> Result<()> {
    while orchestrator.state().is_running() {
        present(orchestrator.state())?;

        if let Some(event) = event_source.next_event()? {
            orchestrator.handle_event(event)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::events::{AppEvent, KeyInput},
        ledger::local::LocalLedger,
        ui::event_source::MockEventSource,
        usecases::shell::DefaultShellOrchestrator,
    };

    #[test]
    fn mock_source_produces_quit_event() {
        let mut source = MockEventSource::from(vec![AppEvent::QuitRequested]);
        let event = source.next_event().expect("must read mock event");

        assert_eq!(event, Some(AppEvent::QuitRequested));
    }

    #[test]
    fn event_loop_presents_state_until_quit() {
        let mut source = MockEventSource::from(vec![AppEvent::Tick, AppEvent::QuitRequested]);
        let mut orchestrator = DefaultShellOrchestrator::new(LocalLedger::new("local-user"));
        let mut presented = 0;

        run_event_loop(&mut source, &mut orchestrator, |_state| {
            presented += 1;
            Ok(())
        })
        .expect("loop must finish");

        assert_eq!(presented, 2);
        assert!(!orchestrator.state().is_running());
    }

    #[test]
    fn event_loop_propagates_presentation_failures() {
        let mut source = MockEventSource::from(vec![AppEvent::QuitRequested]);
        let mut orchestrator = DefaultShellOrchestrator::new(LocalLedger::new("local-user"));

        let result = run_event_loop(&mut source, &mut orchestrator, |_state| {
            anyhow::bail!("backend gone")
        });

        assert!(result.is_err());
        // The loop never got as far as handling the quit event.
        assert!(orchestrator.state().is_running());
    }

    #[test]
    fn scripted_session_edits_the_form_and_quits() {
        let events = vec![
            AppEvent::InputKey(KeyInput::new("a", false)),
            AppEvent::Tick,
            AppEvent::InputKey(KeyInput::new("esc", false)),
        ];
        let mut source = MockEventSource::from(events);
        let mut orchestrator = DefaultShellOrchestrator::new(LocalLedger::new("local-user"));

        run_event_loop(&mut source, &mut orchestrator, |_state| Ok(()))
            .expect("loop must finish");

        assert!(!orchestrator.state().is_running());
        assert_eq!(orchestrator.state().form().payer_text(), "a");
    }
}
