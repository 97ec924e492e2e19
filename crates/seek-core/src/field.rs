//! Search field state
//!
//! Holds the displayed text of a search input, mirrors an externally supplied
//! value one way (outside in), and implements the two ways of clearing it:
//! Escape on a non-empty field and the trailing reset button.

use crate::event::{ChangeEvent, KeyEvent};

/// Accessible label and tooltip of the reset button
pub const RESET_LABEL: &str = "Reset search";

/// How the trailing reset button should be rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearButton {
    /// Hidden buttons stay in the layout but are not drawn or pressable
    pub visible: bool,
    pub label: &'static str,
    pub title: &'static str,
    /// Whether sequential keyboard focus may land on the button
    pub tab_stop: bool,
}

pub struct SearchField<Message> {
    value: String,
    /// Last external value seen, in string form
    external: String,
    on_change: Option<Box<dyn Fn(ChangeEvent) -> Message>>,
    on_key_down: Option<Box<dyn Fn(KeyEvent) -> Message>>,
    on_abort: Option<Message>,
}

impl<Message> Default for SearchField<Message> {
    fn default() -> Self {
        Self::new("")
    }
}

impl<Message> SearchField<Message> {
    /// Mount a field showing the string form of `external`.
    pub fn new(external: impl ToString) -> Self {
        let external = external.to_string();
        Self {
            value: external.clone(),
            external,
            on_change: None,
            on_key_down: None,
            on_abort: None,
        }
    }

    pub fn on_change(mut self, f: impl Fn(ChangeEvent) -> Message + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn on_key_down(mut self, f: impl Fn(KeyEvent) -> Message + 'static) -> Self {
        self.on_key_down = Some(Box::new(f));
        self
    }

    /// Message emitted whenever the user clears the field
    pub fn on_abort(mut self, message: Message) -> Self {
        self.on_abort = Some(message);
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the displayed value if the external value changed since the
    /// last mount or sync. Returns whether the field was re-initialized.
    pub fn sync(&mut self, external: impl ToString) -> bool {
        let external = external.to_string();
        if external == self.external {
            return false;
        }
        tracing::debug!("Search field synced to external value '{}'", external);
        self.value = external.clone();
        self.external = external;
        true
    }

    /// Apply an edit and forward the event untouched.
    pub fn handle_change(&mut self, event: ChangeEvent) -> Option<Message> {
        self.value = event.value.clone();
        self.on_change.as_ref().map(|f| f(event))
    }

    pub fn clear_button(&self) -> ClearButton {
        ClearButton {
            visible: !self.value.is_empty(),
            label: RESET_LABEL,
            title: RESET_LABEL,
            tab_stop: false,
        }
    }
}

impl<Message: Clone> SearchField<Message> {
    /// Handle a key press. Escape on a non-empty field clears it and
    /// prevents the default action; the event is always forwarded to
    /// `on_key_down` afterwards.
    pub fn handle_key_down(&mut self, event: &mut KeyEvent) -> Vec<Message> {
        let mut messages = Vec::new();
        if event.key == "Escape" && !self.value.is_empty() {
            event.prevent_default();
            messages.extend(self.abort());
        }
        if let Some(f) = &self.on_key_down {
            messages.push(f(event.clone()));
        }
        messages
    }

    /// Activate the reset button. A hidden button cannot be pressed.
    pub fn press_clear(&mut self) -> Option<Message> {
        if !self.clear_button().visible {
            return None;
        }
        self.abort()
    }

    fn abort(&mut self) -> Option<Message> {
        tracing::debug!("Search field cleared");
        self.value.clear();
        self.on_abort.clone()
    }
}
