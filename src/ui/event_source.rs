use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::{
    domain::events::{AppEvent, KeyInput},
    usecases::contracts::AppEventSource,
};

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

#[derive(Default)]
pub struct CrosstermEventSource;

impl AppEventSource for CrosstermEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        if !event::poll(EVENT_POLL_TIMEOUT)? {
            return Ok(Some(AppEvent::Tick));
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                return Ok(None);
            }

            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

            if key.code == KeyCode::Char('c') && ctrl {
                return Ok(Some(AppEvent::QuitRequested));
            }

            let named = match key.code {
                KeyCode::Enter => Some("enter"),
                KeyCode::Tab => Some("tab"),
                KeyCode::BackTab => Some("backtab"),
                KeyCode::Backspace => Some("backspace"),
                KeyCode::Delete => Some("delete"),
                KeyCode::Left => Some("left"),
                KeyCode::Right => Some("right"),
                KeyCode::Home => Some("home"),
                KeyCode::End => Some("end"),
                KeyCode::Esc => Some("esc"),
                _ => None,
            };

            if let Some(name) = named {
                return Ok(Some(AppEvent::InputKey(KeyInput::new(name, ctrl))));
            }

            if let KeyCode::Char(ch) = key.code {
                return Ok(Some(AppEvent::InputKey(KeyInput::new(
                    ch.to_string(),
                    ctrl,
                ))));
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
pub struct MockEventSource {
    queue: std::collections::VecDeque<AppEvent>,
}

#[cfg(test)]
impl MockEventSource {
    pub fn from(events: Vec<AppEvent>) -> Self {
        Self {
            queue: events.into(),
        }
    }
}

#[cfg(test)]
impl AppEventSource for MockEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        Ok(self.queue.pop_front())
    }
}
