//! Framework-independent state for a search field and its key navigation.
//!
//! Both pieces are leaves: [`field::SearchField`] owns the displayed text and
//! the clear affordance, [`binding::KeyNavigation`] turns key presses into
//! [`direction::Move`]s and tracks a trimmed search string. An application
//! wires them together by routing the messages they emit.

pub mod binding;
pub mod config;
pub mod direction;
pub mod event;
pub mod field;
