//! Table footer: selection summary, rows-per-page selector and page buttons.

use iced::widget::{button, pick_list, row, space, text};
use iced::{Alignment, Element};

use admin_model::PAGE_SIZE_OPTIONS;
use admin_table::TableState;

use crate::theme::{SPACING_LG, SPACING_SM, button_secondary, text_muted};

/// Renders the footer for a table.
///
/// `on_page` receives the zero-based page index to show, `on_page_size` the
/// new number of rows per page.
pub fn pagination<'a, M: Clone + 'a>(
    table: &TableState,
    on_page: impl Fn(u32) -> M,
    on_page_size: impl Fn(u32) -> M + 'a,
) -> Element<'a, M> {
    let index = table.page_index();
    let last_index = table.page_count().map(|count| count.saturating_sub(1));

    let nav = |label: &'static str, target: Option<u32>| {
        button(text(label).size(13))
            .on_press_maybe(target.map(&on_page))
            .padding([4.0, 10.0])
            .style(button_secondary)
    };

    let first = nav("«", table.can_previous().then_some(0));
    let previous = nav("Previous", table.can_previous().then(|| index - 1));
    let next = nav("Next", table.can_next().then(|| index + 1));
    let last = nav(
        "»",
        last_index.filter(|&last| table.can_next() && last > index),
    );

    row![
        text(table.selection_summary()).size(13).style(text_muted),
        space::horizontal(),
        text("Rows per page").size(13),
        pick_list(
            PAGE_SIZE_OPTIONS.to_vec(),
            Some(table.page_size()),
            on_page_size
        ),
        text(table.page_label()).size(13),
        row![first, previous, next, last].spacing(SPACING_SM),
    ]
    .spacing(SPACING_LG)
    .align_y(Alignment::Center)
    .into()
}
