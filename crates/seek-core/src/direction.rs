use serde::{Deserialize, Serialize};

/// Where a navigation key asks the selection to go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Previous,
    Next,
    Current,
}

/// Payload of a navigation callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub direction: Direction,
}

/// Physical key codes that navigate. Matching is exact and case-sensitive.
const KEY_MAP: [(&str, Direction); 3] = [
    ("ArrowUp", Direction::Previous),
    ("ArrowDown", Direction::Next),
    ("Enter", Direction::Current),
];

impl Direction {
    /// Look up the direction bound to a physical key code.
    pub fn from_code(code: &str) -> Option<Self> {
        KEY_MAP
            .iter()
            .find(|(key, _)| *key == code)
            .map(|(_, direction)| *direction)
    }
}
