//! Key navigation binding
//!
//! A set of handlers meant to be attached to an input that drives a list:
//! arrow keys and Enter become [`Move`]s, edits update a trimmed search
//! string kept apart from the field's own value.

use crate::direction::{Direction, Move};
use crate::event::{ChangeEvent, KeyEvent};

pub struct KeyNavigation<Message> {
    search: String,
    on_move: Box<dyn Fn(Move) -> Message>,
    on_change: Option<Box<dyn Fn(ChangeEvent) -> Message>>,
    on_abort: Option<Message>,
}

impl<Message> KeyNavigation<Message> {
    pub fn new(on_move: impl Fn(Move) -> Message + 'static) -> Self {
        Self {
            search: String::new(),
            on_move: Box::new(on_move),
            on_change: None,
            on_abort: None,
        }
    }

    pub fn on_change(mut self, f: impl Fn(ChangeEvent) -> Message + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn on_abort(mut self, message: Message) -> Self {
        self.on_abort = Some(message);
        self
    }

    /// Current search text, trimmed
    pub fn value(&self) -> &str {
        &self.search
    }

    pub fn handle_key_down(&self, event: &KeyEvent) -> Option<Message> {
        let direction = Direction::from_code(&event.code)?;
        tracing::debug!("Navigation key '{}' -> {:?}", event.code, direction);
        Some((self.on_move)(Move { direction }))
    }

    pub fn handle_change(&mut self, event: ChangeEvent) -> Option<Message> {
        self.search = event.value.trim().to_string();
        self.on_change.as_ref().map(|f| f(event))
    }
}

impl<Message: Clone> KeyNavigation<Message> {
    /// Reset the search text and notify `on_abort`.
    pub fn cancel(&mut self) -> Option<Message> {
        self.search.clear();
        self.on_abort.clone()
    }
}
