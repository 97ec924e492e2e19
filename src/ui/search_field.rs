use iced::widget::{button, container, row, text, text_input, tooltip};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::ui::theme;
use seek_core::field::{ClearButton, SearchField};

/// The search input ID for focus management
pub const SEARCH_INPUT_ID: &str = "seek-search-input";

/// Build the search field: icon prefix, text input, reset button suffix.
///
/// The reset button is always laid out so the input never shifts; while the
/// field is empty it is drawn transparent, has no press handler and no tooltip.
pub fn view<'a>(field: &'a SearchField<Message>, placeholder: &'a str) -> Element<'a, Message> {
    let icon = text("⌕").size(20).color(theme::TEXT_SECONDARY);

    let input = text_input(placeholder, field.value())
        .on_input(Message::Input)
        .id(SEARCH_INPUT_ID)
        .padding(8)
        .size(18)
        .width(Fill)
        .style(theme::search_input);

    let clear = field.clear_button();
    let reset = button(text("✕").size(14))
        .padding(4)
        .style(theme::clear_button(clear.visible));
    // Hidden: keep the space, but no press handler and no tooltip
    let reset: Element<'a, Message> = if let Some(title) = reset_tooltip(&clear) {
        tooltip(
            reset.on_press(Message::ClearPressed),
            text(title).size(12).color(theme::TEXT_PRIMARY),
            tooltip::Position::Left,
        )
        .into()
    } else {
        reset.into()
    };

    let content = row![icon, input, reset]
        .spacing(6)
        .align_y(Alignment::Center);

    container(content)
        .padding(Padding::from([2, 10]))
        .width(Fill)
        .style(theme::search_field)
        .into()
}

/// Tooltip for the reset button, only while it is shown
fn reset_tooltip(clear: &ClearButton) -> Option<&'static str> {
    clear.visible.then_some(clear.title)
}
