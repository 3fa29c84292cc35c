//! Resource screen view: toolbar, table, footer and confirmation dialogs.

use iced::widget::{column, row, space, text};
use iced::{Alignment, Element, Length};

use admin_model::ResourceKind;

use crate::component::{
    Confirmation, column_menu, column_menu_button, confirm_modal, data_table, pagination,
    search_box,
};
use crate::message::{Message, ScreenMessage};
use crate::state::{AppState, ScreenRecord};
use crate::theme::{SPACING_LG, SPACING_MD};

/// Placeholder of the filter input.
fn filter_placeholder(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::Cards => "Filter card name...",
        ResourceKind::Users => "Filter emails...",
    }
}

/// Renders the screen for records of type `R`.
pub fn view_screen<R: ScreenRecord>(state: &AppState) -> Element<'_, Message> {
    let screen = R::screen(state);
    let kind = R::KIND;

    let toolbar = row![
        search_box(
            screen.table.filter(kind.filter_column()),
            filter_placeholder(kind),
            |value| R::message(ScreenMessage::FilterChanged(value)),
            R::message(ScreenMessage::FilterCleared),
        ),
        space::horizontal(),
        column_menu_button(
            state.column_menu_open,
            R::message(ScreenMessage::ColumnMenuToggled)
        ),
    ]
    .align_y(Alignment::Center);

    let mut content = column![text(kind.title()).size(24), toolbar].spacing(SPACING_MD);

    if state.column_menu_open {
        content = content.push(row![
            space::horizontal(),
            column_menu(&screen.table, |column, visible| {
                R::message(ScreenMessage::ColumnVisibilityChanged(column, visible))
            }),
        ]);
    }

    content = content.push(data_table(screen)).push(pagination(
        &screen.table,
        |index| R::message(ScreenMessage::PageChanged(index)),
        |size| R::message(ScreenMessage::PageSizeChanged(size)),
    ));

    let base: Element<'_, Message> = column![content]
        .padding(SPACING_LG)
        .width(Length::Fill)
        .height(Length::Fill)
        .into();

    if screen.delete.is_open() {
        return confirm_modal(
            base,
            Confirmation {
                title: "Confirm Delete",
                message: format!(
                    "Are you sure you want to delete this {}?",
                    kind.singular_label().to_lowercase()
                ),
                confirm_label: "Delete",
                busy_label: "Deleting...",
                busy: screen.delete.is_in_flight(),
                on_confirm: R::message(ScreenMessage::DeleteConfirmed),
                on_cancel: R::message(ScreenMessage::DeleteCancelled),
            },
        );
    }

    if let Some(prompt) = screen.status.prompt(kind.singular_label()) {
        return confirm_modal(
            base,
            Confirmation {
                title: "Change Status",
                message: prompt,
                confirm_label: "Continue",
                busy_label: "Updating...",
                busy: screen.status.is_pending(),
                on_confirm: R::message(ScreenMessage::StatusConfirmed),
                on_cancel: R::message(ScreenMessage::StatusCancelled),
            },
        );
    }

    base
}
