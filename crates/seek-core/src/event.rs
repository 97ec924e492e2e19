/// The new raw text of a bound input after an edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub value: String,
}

impl ChangeEvent {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// A key press delivered to a bound input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// Logical key name (e.g. "Escape", "a")
    pub key: String,
    /// Physical key code (e.g. "ArrowUp", "KeyA")
    pub code: String,
    default_prevented: bool,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            code: code.into(),
            default_prevented: false,
        }
    }

    /// Ask whoever handles the event next to skip its default behaviour.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}
