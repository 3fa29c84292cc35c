//! Terminal rendering of admin tables with `comfy-table`.
//!
//! The renderer is generic over [`TableRecord`]: it reads the visible
//! [`ColumnDescriptor`]s and the row cells of a [`ResourceScreen`] and never
//! looks at record fields directly.

use admin_table::{
    CellValue, ColumnDescriptor, ColumnKind, ResourceScreen, SortDirection, TableBody,
    TableRecord, TableState,
};
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

/// Whether a column has a terminal rendering. Checkboxes and action buttons
/// only make sense in the GUI.
fn is_printable(column: &ColumnDescriptor) -> bool {
    !matches!(column.kind, ColumnKind::Select | ColumnKind::Actions(_))
}

/// Builds the table for the screen's current page.
pub fn render_table<R: TableRecord>(screen: &ResourceScreen<R>) -> Table {
    let columns: Vec<(usize, &ColumnDescriptor)> = screen
        .table
        .visible_columns()
        .enumerate()
        .filter(|(_, c)| is_printable(c))
        .collect();

    let mut table = Table::new();
    table.set_header(
        columns
            .iter()
            .map(|(_, c)| header_cell(&screen.table, c))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    for (position, (_, column)) in columns.iter().enumerate() {
        if column.kind == ColumnKind::RowNumber {
            align_column(&mut table, position, CellAlignment::Right);
        }
    }

    match screen.body() {
        TableBody::Loading => {
            table.add_row(vec![dim_cell("Loading...")]);
        }
        TableBody::Failed(err) => {
            table.add_row(vec![Cell::new(err.user_message()).fg(Color::Red)]);
        }
        TableBody::Empty => {
            table.add_row(vec![dim_cell("No results.")]);
        }
        TableBody::Rows => {
            for row in screen.rows() {
                table.add_row(
                    columns
                        .iter()
                        .map(|(index, _)| {
                            row.cells
                                .get(*index)
                                .map_or_else(|| Cell::new(""), value_cell)
                        })
                        .collect::<Vec<_>>(),
                );
            }
        }
    }
    table
}

/// Footer lines printed under the table.
pub fn footer<R: TableRecord>(screen: &ResourceScreen<R>) -> String {
    let total = screen.table.total().unwrap_or(0);
    format!("{}  ({total} total)", screen.table.page_label())
}

fn header_cell(state: &TableState, column: &ColumnDescriptor) -> Cell {
    let label = match state.sort_direction(column.id) {
        Some(SortDirection::Asc) => format!("{} ^", column.header),
        Some(SortDirection::Desc) => format!("{} v", column.header),
        None => column.header.to_string(),
    };
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn value_cell(value: &CellValue) -> Cell {
    match value {
        CellValue::Status(true) => Cell::new(value.display_text()).fg(Color::Green),
        CellValue::Status(false) => Cell::new(value.display_text()).fg(Color::Red),
        CellValue::Avatar(url) => dim_cell(url),
        CellValue::Text(text) if text.is_empty() => dim_cell("-"),
        _ => Cell::new(value.display_text()),
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
