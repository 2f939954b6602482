use crate::app_core::{AppCore, DataEventHandler};
use crate::commands::executor::{self, Effect};
use crate::events::{AppCommand, DataEvent};
use crate::input::{Key, KeyEvent};
use crate::location::Location;
use crate::state::AppState;

/// Mock data event handler for tests (no real async tasks)
///
/// Commands update state synchronously; the background work they would have
/// spawned is recorded so tests can assert on it.
#[derive(Debug, Default)]
pub struct MockDataHandler {
    pub effects: Vec<Effect>,
}

impl MockDataHandler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataEventHandler for MockDataHandler {
    fn execute_with_context(&mut self, command: AppCommand, state: &mut AppState) {
        if let Some(effect) = executor::apply_command(command, state) {
            self.effects.push(effect);
        }
    }
}

pub struct TestApp {
    core: AppCore<MockDataHandler>,
}

impl TestApp {
    /// Test app mounted at `/` with the default page size
    pub fn new() -> Self {
        Self::with_location("/")
    }

    /// Test app mounted at the given href
    pub fn with_location(href: &str) -> Self {
        Self {
            core: AppCore::new(
                AppState::new(Location::parse(href), 10),
                MockDataHandler::new(),
            ),
        }
    }

    pub fn send_key(&mut self, key: Key) {
        self.core.handle_key(KeyEvent::new(key));
    }

    pub fn send_key_event(&mut self, event: KeyEvent) {
        self.core.handle_key(event);
    }

    pub fn send_keys(&mut self, keys: &[Key]) {
        for key in keys {
            self.send_key(*key);
        }
    }

    /// Type each character of `text` as a separate key press
    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.send_key(Key::Char(c));
        }
    }

    pub fn dispatch(&mut self, command: AppCommand) {
        self.core.dispatch(command);
    }

    /// Inject a data event (simulate an API response)
    pub fn send_data_event(&mut self, event: DataEvent) {
        self.core.handle_data_event(event);
    }

    pub fn state(&self) -> &AppState {
        self.core.state()
    }

    /// Background work requested so far, oldest first
    pub fn effects(&self) -> &[Effect] {
        &self.core.handler().effects
    }

    pub fn assert_should_quit(&self) {
        assert!(
            self.core.should_quit(),
            "App should be marked for quit but is not"
        );
    }

    pub fn assert_not_quit(&self) {
        assert!(
            !self.core.should_quit(),
            "App should NOT be marked for quit but is"
        );
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
