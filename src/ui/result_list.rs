use iced::widget::{column, container, mouse_area, text, Column};
use iced::{Element, Fill, Padding};

use crate::app::Message;
use crate::source::Entry;
use crate::ui::theme;

/// Estimated row height in pixels (padding + title + spacing)
const ROW_HEIGHT_ESTIMATE: f32 = 34.0;
/// Fixed overhead: outer padding (12*2) + search field (~48) + spacing (8)
const LAYOUT_OVERHEAD: f32 = 80.0;

/// How many rows fit in the given window height.
pub fn visible_count(window_height: f32) -> usize {
    let available = (window_height - LAYOUT_OVERHEAD).max(0.0);
    let count = (available / ROW_HEIGHT_ESTIMATE) as usize;
    count.max(1)
}

/// First row to draw so that `selected` stays in view.
pub fn window_start(selected: usize, max_visible: usize) -> usize {
    (selected + 1).saturating_sub(max_visible)
}

/// Build the result list, scrolled so the selected row is visible.
pub fn view(results: &[Entry], selected: usize, window_height: f32) -> Element<'_, Message> {
    if results.is_empty() {
        return column![].into();
    }

    let max_visible = visible_count(window_height);
    let start = window_start(selected, max_visible);
    let end = (start + max_visible).min(results.len());

    let mut rows = Column::new().spacing(2);
    for (i, entry) in results.iter().enumerate().take(end).skip(start) {
        let style = if i == selected {
            theme::result_row_selected as fn(&iced::Theme) -> container::Style
        } else {
            theme::result_row
        };

        let row = container(text(&entry.title).size(16).color(theme::TEXT_PRIMARY))
            .padding(Padding::from([6, 12]))
            .width(Fill)
            .style(style);

        rows = rows.push(mouse_area(row).on_press(Message::Select(i)));
    }

    rows.into()
}
