//! Event loop for the terminal demo.

use std::io;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::counter::{CounterAction, CounterReducer, CounterState, DogStatus};
use super::dog::DogClient;
use super::render::{draw, CounterView};
use super::terminal_guard::setup_terminal;
use crate::config::DemoConfig;
use crate::context::{Scope, StoreContext};

enum AppEvent {
    Key(KeyEvent),
    /// A selector saw its value change.
    StoreChanged,
}

/// What a key press asks the app to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(CounterAction),
    Quit,
}

pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(Command::Quit),
        (KeyCode::Char('q'), _) | (KeyCode::Esc, _) => Some(Command::Quit),
        (KeyCode::Char('+'), _) | (KeyCode::Char(' '), _) => {
            Some(Command::Dispatch(CounterAction::Increment))
        }
        (KeyCode::Char('e'), _) => Some(Command::Dispatch(CounterAction::Effect)),
        (KeyCode::Char('d'), _) => Some(Command::Dispatch(CounterAction::FetchDog)),
        _ => None,
    }
}

/// Run the demo until the user quits.
///
/// Effects spawn onto the ambient tokio runtime, so the caller must have
/// entered one.
pub fn run(config: &DemoConfig) -> io::Result<()> {
    let dog = DogClient::new(
        config.dog_api_url.clone(),
        Duration::from_secs(config.request_timeout_seconds),
    )
    .map_err(io::Error::other)?;
    let reducer = CounterReducer::new(Duration::from_millis(config.effect_delay_ms), dog);

    let context = StoreContext::<CounterState, CounterAction>::new("counter");
    let provider = context.provider();
    let scope = provider.render(&Scope::root(), CounterState::default(), reducer);

    let (tx, rx) = mpsc::channel();
    spawn_input_reader(tx.clone());

    let count = context
        .use_store_selector(&scope, |state| state.count, notifier(&tx))
        .map_err(io::Error::other)?;
    let dog = context
        .use_store_selector(&scope, |state| state.dog.clone(), notifier(&tx))
        .map_err(io::Error::other)?;
    let dispatch = context
        .use_store_dispatch(&scope)
        .map_err(io::Error::other)?;

    let tick_rate = Duration::from_millis(config.tick_rate_ms);
    let (mut terminal, guard) = setup_terminal()?;

    loop {
        let view = CounterView {
            count: count.get().unwrap_or_default(),
            dog: dog.get().unwrap_or(DogStatus::Idle),
        };
        terminal.draw(|frame| draw(frame, &view))?;

        match rx.recv_timeout(tick_rate) {
            Ok(AppEvent::Key(key)) => match command_for_key(key) {
                Some(Command::Quit) => break,
                Some(Command::Dispatch(action)) => dispatch.dispatch(action),
                None => {}
            },
            Ok(AppEvent::StoreChanged) | Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}

fn notifier(tx: &Sender<AppEvent>) -> impl Fn() + Send + Sync + 'static {
    let tx = tx.clone();
    move || {
        let _ = tx.send(AppEvent::StoreChanged);
    }
}

fn spawn_input_reader(tx: Sender<AppEvent>) {
    thread::spawn(move || loop {
        match event::poll(Duration::from_millis(50)) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) => {
                    if tx.send(AppEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(err) => {
                    tracing::error!(error = %err, "Failed to read terminal event");
                    break;
                }
            },
            Ok(false) => {}
            Err(err) => {
                tracing::error!(error = %err, "Failed to poll terminal events");
                break;
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn keys_map_to_counter_actions() {
        assert_eq!(
            command_for_key(press(KeyCode::Char('+'))),
            Some(Command::Dispatch(CounterAction::Increment))
        );
        assert_eq!(
            command_for_key(press(KeyCode::Char(' '))),
            Some(Command::Dispatch(CounterAction::Increment))
        );
        assert_eq!(
            command_for_key(press(KeyCode::Char('e'))),
            Some(Command::Dispatch(CounterAction::Effect))
        );
        assert_eq!(
            command_for_key(press(KeyCode::Char('d'))),
            Some(Command::Dispatch(CounterAction::FetchDog))
        );
    }

    #[test]
    fn quit_keys() {
        assert_eq!(command_for_key(press(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(command_for_key(press(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(
            command_for_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
    }

    #[test]
    fn key_release_is_ignored() {
        let mut key = press(KeyCode::Char('e'));
        key.kind = KeyEventKind::Release;
        assert_eq!(command_for_key(key), None);
    }

    #[test]
    fn unmapped_key_is_ignored() {
        assert_eq!(command_for_key(press(KeyCode::Char('x'))), None);
    }
}
