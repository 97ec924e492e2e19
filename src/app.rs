use std::sync::Mutex;

use iced::widget::{column, container};
use iced::window;
use iced::{event, keyboard, Color, Element, Fill, Padding, Size, Subscription, Task, Theme};

use crate::matcher::engine::Matcher;
use crate::source::Entry;
use crate::ui::{result_list, search_field, theme};
use seek_core::binding::KeyNavigation;
use seek_core::config::Config;
use seek_core::direction::{Direction, Move};
use seek_core::event::{ChangeEvent, KeyEvent};
use seek_core::field::SearchField;

/// Entry chosen before the event loop stopped. `None` means cancelled.
static OUTCOME: Mutex<Option<Entry>> = Mutex::new(None);

/// Take the entry the user picked, if any.
pub fn take_outcome() -> Option<Entry> {
    OUTCOME.lock().ok()?.take()
}

pub struct State {
    config: Config,
    field: SearchField<Message>,
    navigation: KeyNavigation<Message>,
    matcher: Matcher,
    results: Vec<Entry>,
    selected: usize,
    window_id: Option<window::Id>,
    /// Set once the picker finished; the inner `None` means cancelled
    outcome: Option<Option<Entry>>,
}

#[derive(Debug, Clone)]
pub enum Message {
    WindowOpened(window::Id),
    WindowClosed(window::Id),
    /// Raw text from the input widget
    Input(String),
    ClearPressed,
    /// Raw key press from the window
    Key(keyboard::Event),
    // Emitted by the search field
    QueryChanged(ChangeEvent),
    KeyDown(KeyEvent),
    Aborted,
    // Emitted by the key navigation binding
    Filter(ChangeEvent),
    Move(Move),
    SearchReset,
    Select(usize),
    MatcherTick,
}

impl State {
    pub fn new(config: Config, query: String, entries: Vec<Entry>) -> (Self, Task<Message>) {
        let field = SearchField::new(&query)
            .on_change(Message::QueryChanged)
            .on_key_down(Message::KeyDown)
            .on_abort(Message::Aborted);
        let navigation = KeyNavigation::new(Message::Move)
            .on_change(Message::Filter)
            .on_abort(Message::SearchReset);

        let (id, open_task) = window::open(window::Settings {
            size: Size::new(config.window.width, config.window.height),
            position: window::Position::Centered,
            decorations: false,
            transparent: true,
            level: window::Level::AlwaysOnTop,
            resizable: false,
            exit_on_close_request: false,
            ..window::Settings::default()
        });

        tracing::info!("Picking from {} entries", entries.len());

        let mut state = Self {
            config,
            field,
            navigation,
            results: entries.clone(),
            matcher: Matcher::new(entries),
            selected: 0,
            window_id: Some(id),
            outcome: None,
        };

        // The binding tracks its own search; seed it with the initial query
        let seed = if query.is_empty() {
            Task::none()
        } else {
            state.update(Message::QueryChanged(ChangeEvent::new(query)))
        };

        (state, Task::batch([open_task.map(Message::WindowOpened), seed]))
    }

    pub fn title(&self, _window: window::Id) -> String {
        String::from("Seek")
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::WindowOpened(id) => {
                self.window_id = Some(id);
                Task::batch([
                    window::gain_focus(id),
                    iced::widget::operation::focus(search_field::SEARCH_INPUT_ID),
                ])
            }
            Message::WindowClosed(id) => {
                if self.window_id == Some(id) {
                    tracing::debug!("Window closed, cancelling");
                    self.window_id = None;
                    return iced::exit();
                }
                Task::none()
            }
            Message::Input(value) => {
                let emitted = self.field.handle_change(ChangeEvent::new(value));
                self.dispatch(emitted)
            }
            Message::ClearPressed => {
                let emitted = self.field.press_clear();
                self.dispatch(emitted)
            }
            Message::Key(kb_event) => match key_event(&kb_event) {
                Some(event) => self.key_down(event),
                None => Task::none(),
            },
            Message::QueryChanged(event) => {
                let emitted = self.navigation.handle_change(event);
                self.dispatch(emitted)
            }
            Message::KeyDown(event) => {
                // Escape the field did not consume cancels the whole picker
                if event.key == "Escape" && !event.is_default_prevented() {
                    return self.finish(None);
                }
                let emitted = self.navigation.handle_key_down(&event);
                self.dispatch(emitted)
            }
            Message::Aborted => Task::batch([
                {
                    let emitted = self.navigation.cancel();
                    self.dispatch(emitted)
                },
                // the input drops focus on Escape
                iced::widget::operation::focus(search_field::SEARCH_INPUT_ID),
            ]),
            Message::Filter(_) | Message::SearchReset => {
                tracing::debug!("Filtering with '{}'", self.navigation.value());
                self.selected = 0;
                self.matcher.update_query(self.navigation.value());
                Task::none()
            }
            Message::Move(Move { direction }) => match direction {
                Direction::Current => {
                    // Pick from the list the current search produces, not a stale one
                    self.refresh_results();
                    self.finish(self.results.get(self.selected).cloned())
                }
                direction => {
                    self.selected = step(self.selected, self.results.len(), direction);
                    Task::none()
                }
            },
            Message::Select(index) => self.finish(self.results.get(index).cloned()),
            Message::MatcherTick => {
                self.refresh_results();
                Task::none()
            }
        }
    }

    pub fn view(&self, _window: window::Id) -> Element<'_, Message> {
        let input = search_field::view(&self.field, &self.config.field.placeholder);
        let results = result_list::view(&self.results, self.selected, self.config.window.height);

        let content = column![input, results]
            .spacing(8)
            .padding(Padding::new(12.0))
            .height(Fill);

        let main = container(content)
            .width(Fill)
            .height(Fill)
            .style(theme::main_container);

        container(main).width(Fill).height(Fill).into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            window::close_events().map(Message::WindowClosed),
            // Every key press reaches the field, including ones the input captured
            event::listen_with(|event, _status, _window| match event {
                iced::Event::Keyboard(kb_event @ keyboard::Event::KeyPressed { .. }) => {
                    Some(Message::Key(kb_event))
                }
                _ => None,
            }),
            iced::time::every(std::time::Duration::from_millis(16)).map(|_| Message::MatcherTick),
        ])
    }

    pub fn theme(&self, _window: window::Id) -> Theme {
        Theme::Dark
    }

    pub fn style(&self, theme: &Theme) -> iced::theme::Style {
        let _ = theme;
        iced::theme::Style {
            background_color: Color::TRANSPARENT,
            text_color: Color::WHITE,
        }
    }

    /// Feed a key press through the field.
    pub fn key_down(&mut self, mut event: KeyEvent) -> Task<Message> {
        let emitted = self.field.handle_key_down(&mut event);
        self.dispatch(emitted)
    }

    pub fn query(&self) -> &str {
        self.field.value()
    }

    pub fn search(&self) -> &str {
        self.navigation.value()
    }

    pub fn outcome(&self) -> Option<&Option<Entry>> {
        self.outcome.as_ref()
    }

    /// Handle messages emitted by the field or binding right away, in order,
    /// so their state never lags behind the event that caused them.
    fn dispatch(&mut self, messages: impl IntoIterator<Item = Message>) -> Task<Message> {
        let tasks: Vec<Task<Message>> = messages
            .into_iter()
            .map(|message| self.update(message))
            .collect();
        Task::batch(tasks)
    }

    fn refresh_results(&mut self) {
        if let Some(results) = self.matcher.refresh(self.config.field.max_results) {
            self.results = results;
            self.selected = self.selected.min(self.results.len().saturating_sub(1));
        }
    }

    /// Record the outcome and stop the event loop.
    fn finish(&mut self, entry: Option<Entry>) -> Task<Message> {
        match &entry {
            Some(entry) => tracing::info!("Selected '{}'", entry.title),
            None => tracing::info!("Cancelled"),
        }
        if let Ok(mut outcome) = OUTCOME.lock() {
            *outcome = entry.clone();
        }
        self.outcome = Some(entry);
        iced::exit()
    }
}

/// New selection index after moving one row, clamped to the list.
fn step(selected: usize, len: usize, direction: Direction) -> usize {
    match direction {
        Direction::Previous => selected.saturating_sub(1),
        Direction::Next if selected + 1 < len => selected + 1,
        Direction::Next | Direction::Current => selected,
    }
}

/// Convert an iced key press into the name/code pair the field expects.
fn key_event(event: &keyboard::Event) -> Option<KeyEvent> {
    let keyboard::Event::KeyPressed {
        key, physical_key, ..
    } = event
    else {
        return None;
    };

    let key = match key {
        keyboard::Key::Named(named) => format!("{named:?}"),
        keyboard::Key::Character(c) => c.to_string(),
        keyboard::Key::Unidentified => "Unidentified".to_string(),
    };
    let code = match physical_key {
        keyboard::key::Physical::Code(code) => format!("{code:?}"),
        keyboard::key::Physical::Unidentified(_) => "Unidentified".to_string(),
    };
    Some(KeyEvent::new(key, code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::entries_from_lines;

    fn picker(query: &str, titles: &[&str]) -> State {
        let entries = entries_from_lines(titles.iter().map(|t| t.to_string()));
        let (state, _) = State::new(Config::default(), query.to_string(), entries);
        state
    }

    fn press(state: &mut State, code: &str) {
        let _ = state.key_down(KeyEvent::new(code, code));
    }

    #[test]
    fn escape_on_empty_field_cancels() {
        let mut state = picker("", &["alpha"]);
        press(&mut state, "Escape");
        assert_eq!(state.outcome(), Some(&None));
    }

    #[test]
    fn escape_on_text_clears_before_cancelling() {
        let mut state = picker("  al ", &["alpha", "beta"]);
        assert_eq!(state.query(), "  al ");
        assert_eq!(state.search(), "al");
        assert_eq!(state.matcher.query(), "al");

        press(&mut state, "Escape");
        assert_eq!(state.query(), "");
        assert_eq!(state.search(), "");
        assert_eq!(state.matcher.query(), "");
        assert_eq!(state.outcome(), None);

        press(&mut state, "Escape");
        assert_eq!(state.outcome(), Some(&None));
    }

    #[test]
    fn clear_button_resets_search() {
        let mut state = picker("be", &["alpha", "beta"]);
        let _ = state.update(Message::ClearPressed);
        assert_eq!(state.query(), "");
        assert_eq!(state.search(), "");
        assert_eq!(state.matcher.query(), "");
        assert_eq!(state.outcome(), None);
    }

    #[test]
    fn typing_filters_with_trimmed_search() {
        let mut state = picker("", &["alpha", "beta"]);
        press(&mut state, "ArrowDown");
        let _ = state.update(Message::Input(" be ".to_string()));

        assert_eq!(state.query(), " be ");
        assert_eq!(state.search(), "be");
        assert_eq!(state.matcher.query(), "be");
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn enter_picks_selected_entry() {
        let mut state = picker("", &["alpha", "beta", "gamma"]);
        press(&mut state, "ArrowDown");
        press(&mut state, "Tab");
        press(&mut state, "Enter");

        let picked = state.outcome().cloned().flatten();
        assert_eq!(picked.map(|e| e.title), Some("beta".to_string()));
    }

    #[test]
    fn enter_right_after_typing_picks_from_new_matches() {
        let mut state = picker("", &["alpha", "beta", "gamma"]);
        let _ = state.update(Message::Input("gam".to_string()));
        press(&mut state, "Enter");

        let picked = state.outcome().cloned().flatten();
        assert_eq!(picked.map(|e| e.title), Some("gamma".to_string()));
    }

    #[test]
    fn arrows_stay_in_bounds() {
        let mut state = picker("", &["alpha", "beta"]);
        press(&mut state, "ArrowUp");
        assert_eq!(state.selected, 0);
        press(&mut state, "ArrowDown");
        press(&mut state, "ArrowDown");
        assert_eq!(state.selected, 1);
        assert_eq!(state.outcome(), None);
    }

    #[test]
    fn step_clamps_at_both_ends() {
        assert_eq!(step(0, 3, Direction::Previous), 0);
        assert_eq!(step(2, 3, Direction::Previous), 1);
        assert_eq!(step(1, 3, Direction::Next), 2);
        assert_eq!(step(2, 3, Direction::Next), 2);
        assert_eq!(step(0, 0, Direction::Next), 0);
    }

    #[test]
    fn current_keeps_selection() {
        assert_eq!(step(1, 3, Direction::Current), 1);
    }
}
