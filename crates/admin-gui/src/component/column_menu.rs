//! Column visibility menu.

use iced::widget::{button, checkbox, column, container, row, text};
use iced::{Alignment, Element, Length};

use admin_table::TableState;

use crate::theme::{COLUMN_MENU_WIDTH, SPACING_SM, SPACING_XS, button_secondary, surface};

/// "Columns ▾" toggle button.
pub fn column_menu_button<'a, M: Clone + 'a>(open: bool, on_toggle: M) -> Element<'a, M> {
    button(text(if open { "Columns ▴" } else { "Columns ▾" }).size(13))
        .on_press(on_toggle)
        .padding([6.0, 12.0])
        .style(button_secondary)
        .into()
}

/// Checkbox list of the hideable columns.
pub fn column_menu<'a, M: Clone + 'a>(
    table: &TableState,
    on_change: impl Fn(&'static str, bool) -> M + Clone + 'a,
) -> Element<'a, M> {
    let mut entries = column![].spacing(SPACING_XS);
    for descriptor in table.hideable_columns() {
        let on_change = on_change.clone();
        let id = descriptor.id;
        entries = entries.push(
            row![
                checkbox(table.is_visible(id)).on_toggle(move |visible| on_change(id, visible)),
                text(descriptor.header).size(13),
            ]
            .spacing(SPACING_SM)
            .align_y(Alignment::Center),
        );
    }

    container(entries)
        .width(Length::Fixed(COLUMN_MENU_WIDTH))
        .padding(SPACING_SM)
        .style(surface)
        .into()
}
