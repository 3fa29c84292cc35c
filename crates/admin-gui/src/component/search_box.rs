//! Filter input with a clear button.

use iced::widget::{button, container, row, text, text_input};
use iced::{Alignment, Element, Length};

use crate::theme::{SPACING_XS, button_ghost, surface};

/// Creates a filter input; the clear button only shows when there is text.
pub fn search_box<'a, M: Clone + 'a>(
    value: &str,
    placeholder: &str,
    on_change: impl Fn(String) -> M + 'a,
    on_clear: M,
) -> Element<'a, M> {
    let input = text_input(placeholder, value)
        .on_input(on_change)
        .padding(8.0)
        .width(Length::Fill);

    let mut content = row![input].spacing(SPACING_XS).align_y(Alignment::Center);

    if !value.is_empty() {
        content = content.push(
            button(text("×").size(16))
                .on_press(on_clear)
                .padding([4.0, 8.0])
                .style(button_ghost),
        );
    }

    container(content)
        .width(Length::Fixed(320.0))
        .style(surface)
        .into()
}
