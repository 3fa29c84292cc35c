//! Data table rendered from column descriptors.
//!
//! The header and every row are built from the screen's visible
//! [`ColumnDescriptor`]s and the [`CellValue`]s of its rows, so one function
//! renders both the cards and the users table.

use iced::widget::{button, checkbox, column, container, row, rule, scrollable, text};
use iced::{Alignment, Element, Length};

use admin_model::RecordId;
use admin_table::{
    CellValue, ColumnDescriptor, ColumnKind, ResourceScreen, RowAction, RowView, SortDirection,
    TableBody, status_label,
};

use crate::message::{Message, ScreenMessage};
use crate::state::ScreenRecord;
use crate::theme::{
    GRAY_100, SPACING_MD, SPACING_XS, TABLE_CELL_PADDING_X, TABLE_CELL_PADDING_Y, WHITE,
    button_danger, button_ghost, button_secondary, status_badge, surface, table_header,
    text_danger, text_muted,
};

// =============================================================================
// DATA TABLE
// =============================================================================

/// Renders the table of a resource screen.
pub fn data_table<R: ScreenRecord>(screen: &ResourceScreen<R>) -> Element<'_, Message> {
    let columns: Vec<&'static ColumnDescriptor> = screen.table.visible_columns().collect();

    let header = view_header(screen, &columns);

    let body: Element<'_, Message> = match screen.body() {
        TableBody::Loading => view_message(text("Loading...").style(text_muted).into()),
        TableBody::Failed(err) => {
            let mut failure = column![text(err.user_message()).style(text_danger)]
                .spacing(SPACING_XS)
                .align_x(Alignment::Center);
            if err.is_retryable() {
                failure = failure.push(
                    button(text("Retry").size(13))
                        .on_press(R::message(ScreenMessage::Reload))
                        .padding([4.0, 12.0])
                        .style(button_secondary),
                );
            }
            view_message(failure.into())
        }
        TableBody::Empty => view_message(text("No results.").into()),
        TableBody::Rows => {
            let mut rows = column![].spacing(0);
            for (index, row_view) in screen.rows().into_iter().enumerate() {
                if index > 0 {
                    rows = rows.push(rule::horizontal(1));
                }
                rows = rows.push(view_row::<R>(&columns, row_view, index));
            }
            scrollable(rows).height(Length::Fill).into()
        }
    };

    container(column![header, rule::horizontal(1), body])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(surface)
        .into()
}

/// Width of a column by the kind of its cells.
fn column_width(kind: ColumnKind) -> Length {
    match kind {
        ColumnKind::Select => Length::Fixed(44.0),
        ColumnKind::RowNumber => Length::Fixed(56.0),
        ColumnKind::Avatar => Length::FillPortion(2),
        ColumnKind::Status => Length::Fixed(110.0),
        ColumnKind::Timestamp => Length::Fixed(190.0),
        ColumnKind::Actions(actions) => Length::Fixed(90.0 * actions.len() as f32),
        ColumnKind::Text => Length::FillPortion(3),
    }
}

fn view_header<'a, R: ScreenRecord>(
    screen: &'a ResourceScreen<R>,
    columns: &[&'static ColumnDescriptor],
) -> Element<'a, Message> {
    let mut header = row![].spacing(0).align_y(Alignment::Center);

    for descriptor in columns {
        let content: Element<'a, Message> = match descriptor.kind {
            ColumnKind::Select => checkbox(screen.table.all_on_page_selected())
                .on_toggle(|selected| R::message(ScreenMessage::AllRowsToggled(selected)))
                .into(),
            _ if descriptor.sortable => {
                let marker = match screen.table.sort_direction(descriptor.id) {
                    Some(SortDirection::Asc) => " ↑",
                    Some(SortDirection::Desc) => " ↓",
                    None => " ↕",
                };
                button(text(format!("{}{marker}", descriptor.header)).size(13))
                    .on_press(R::message(ScreenMessage::SortClicked(descriptor.id)))
                    .padding([2.0, 4.0])
                    .style(button_ghost)
                    .into()
            }
            _ => text(descriptor.header).size(13).into(),
        };

        header = header.push(
            container(content)
                .width(column_width(descriptor.kind))
                .padding([TABLE_CELL_PADDING_Y, TABLE_CELL_PADDING_X]),
        );
    }

    container(header)
        .width(Length::Fill)
        .style(table_header)
        .into()
}

fn view_row<'a, R: ScreenRecord>(
    columns: &[&'static ColumnDescriptor],
    row_view: RowView,
    index: usize,
) -> Element<'a, Message> {
    let RowView { id, cells, .. } = row_view;
    let mut data_row = row![].spacing(0).align_y(Alignment::Center);

    for (descriptor, cell) in columns.iter().zip(cells) {
        let content: Element<'a, Message> = match cell {
            CellValue::Selected(selected) => {
                let id = id.clone();
                checkbox(selected)
                    .on_toggle(move |_| R::message(ScreenMessage::RowToggled(id.clone())))
                    .into()
            }
            CellValue::Number(n) => text(n.to_string()).size(13).style(text_muted).into(),
            CellValue::Avatar(url) => text(url).size(11).style(text_muted).into(),
            CellValue::Status(active) => button(text(status_label(active)).size(12))
                .on_press(R::message(ScreenMessage::StatusRequested(id.clone())))
                .padding([2.0, 10.0])
                .style(status_badge(active))
                .into(),
            CellValue::Actions(actions) => view_actions::<R>(actions, &id),
            CellValue::Text(value) | CellValue::Timestamp(value) => text(value).size(13).into(),
        };

        data_row = data_row.push(
            container(content)
                .width(column_width(descriptor.kind))
                .padding([TABLE_CELL_PADDING_Y, TABLE_CELL_PADDING_X]),
        );
    }

    let is_even = index % 2 == 0;
    container(data_row)
        .width(Length::Fill)
        .style(move |_theme| container::Style {
            background: Some(if is_even { WHITE } else { GRAY_100 }.into()),
            ..Default::default()
        })
        .into()
}

fn view_actions<'a, R: ScreenRecord>(
    actions: &'static [RowAction],
    id: &RecordId,
) -> Element<'a, Message> {
    let mut buttons = row![].spacing(SPACING_XS);
    for &action in actions {
        let message = match action {
            RowAction::Edit => ScreenMessage::EditRequested(id.clone()),
            RowAction::Delete => ScreenMessage::DeleteRequested(id.clone()),
        };
        let action_button = button(text(action.label()).size(12))
            .on_press(R::message(message))
            .padding([4.0, 10.0]);
        buttons = buttons.push(match action {
            RowAction::Edit => action_button.style(button_secondary),
            RowAction::Delete => action_button.style(button_danger),
        });
    }
    buttons.into()
}

/// Single centered line in place of the rows.
fn view_message(content: Element<'_, Message>) -> Element<'_, Message> {
    container(content)
        .padding(SPACING_MD)
        .center_x(Length::Fill)
        .into()
}
