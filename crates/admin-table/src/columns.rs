//! Declarative column descriptors.
//!
//! A screen's columns are plain data: an id, a header, a [`ColumnKind`] and
//! the sortable / hideable flags. Records turn themselves into [`CellValue`]s
//! per column and renderers (GUI table, CLI table) only ever match on those.

use admin_model::{Card, Record, User, format_timestamp};

/// Row-level action offered in an actions column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    /// Open the editor (not implemented yet; shows a notice).
    Edit,
    /// Stage the record for deletion.
    Delete,
}

impl RowAction {
    /// Button label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Edit => "Edit",
            Self::Delete => "Delete",
        }
    }
}

/// How a column's cells are produced and rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Row selection checkbox.
    Select,
    /// 1-based row number across pages.
    RowNumber,
    /// Plain text field of the record.
    Text,
    /// Avatar image URL.
    Avatar,
    /// Active / Blocked badge; clicking it opens the status dialog.
    Status,
    /// Server timestamp shown in local display format.
    Timestamp,
    /// Row action buttons.
    Actions(&'static [RowAction]),
}

/// One table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDescriptor {
    /// Stable id; doubles as the server sort field for sortable columns.
    pub id: &'static str,
    /// Header text.
    pub header: &'static str,
    /// Cell kind.
    pub kind: ColumnKind,
    /// Whether clicking the header cycles the sort.
    pub sortable: bool,
    /// Whether the column appears in the visibility menu.
    pub hideable: bool,
}

impl ColumnDescriptor {
    const fn new(id: &'static str, header: &'static str, kind: ColumnKind) -> Self {
        Self {
            id,
            header,
            kind,
            sortable: false,
            hideable: true,
        }
    }

    const fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    const fn fixed(mut self) -> Self {
        self.hideable = false;
        self
    }
}

/// Finds a column by id.
#[must_use]
pub fn find_column(
    columns: &'static [ColumnDescriptor],
    id: &str,
) -> Option<&'static ColumnDescriptor> {
    columns.iter().find(|c| c.id == id)
}

/// Rendering-ready value of one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    /// Selection checkbox state.
    Selected(bool),
    /// Row number.
    Number(u64),
    /// Plain text (may be empty).
    Text(String),
    /// Image URL.
    Avatar(String),
    /// Active flag.
    Status(bool),
    /// Formatted timestamp.
    Timestamp(String),
    /// Action buttons.
    Actions(&'static [RowAction]),
}

impl CellValue {
    /// Plain-text rendering, used by text renderers such as the CLI table.
    #[must_use]
    pub fn display_text(&self) -> String {
        match self {
            Self::Selected(true) => "[x]".to_string(),
            Self::Selected(false) => "[ ]".to_string(),
            Self::Number(n) => n.to_string(),
            Self::Text(s) | Self::Avatar(s) | Self::Timestamp(s) => s.clone(),
            Self::Status(active) => status_label(*active).to_string(),
            Self::Actions(actions) => actions
                .iter()
                .map(|a| a.label())
                .collect::<Vec<_>>()
                .join(" | "),
        }
    }
}

/// Badge text for an active flag.
#[must_use]
pub const fn status_label(active: bool) -> &'static str {
    if active { "Active" } else { "Blocked" }
}

/// Options applied while formatting cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Hours added to server timestamps.
    pub utc_offset_hours: i32,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            utc_offset_hours: admin_model::DEFAULT_UTC_OFFSET_HOURS,
        }
    }
}

/// A record type that can be shown in an admin table.
pub trait TableRecord: Record {
    /// Columns of the record's table, in display order.
    fn columns() -> &'static [ColumnDescriptor];

    /// Value of a data column (`Text`, `Avatar`, `Status`, `Timestamp`).
    ///
    /// Unknown ids yield an empty text cell.
    fn field(&self, column: &str, display: &DisplayOptions) -> CellValue;
}

/// Builds the cell for any column kind.
#[must_use]
pub fn cell<R: TableRecord>(
    record: &R,
    column: &ColumnDescriptor,
    row_number: u64,
    selected: bool,
    display: &DisplayOptions,
) -> CellValue {
    match column.kind {
        ColumnKind::Select => CellValue::Selected(selected),
        ColumnKind::RowNumber => CellValue::Number(row_number),
        ColumnKind::Actions(actions) => CellValue::Actions(actions),
        ColumnKind::Text | ColumnKind::Avatar | ColumnKind::Status | ColumnKind::Timestamp => {
            record.field(column.id, display)
        }
    }
}

// =============================================================================
// CARDS
// =============================================================================

const CARD_ACTIONS: &[RowAction] = &[RowAction::Delete];

static CARD_COLUMNS: [ColumnDescriptor; 8] = [
    ColumnDescriptor::new("select", "", ColumnKind::Select).fixed(),
    ColumnDescriptor::new("no", "No.", ColumnKind::RowNumber),
    ColumnDescriptor::new("full_name", "Full Name", ColumnKind::Text).sortable(),
    ColumnDescriptor::new("user_name", "Username", ColumnKind::Text).sortable(),
    ColumnDescriptor::new("card_type", "Type", ColumnKind::Text),
    ColumnDescriptor::new("is_active", "Status", ColumnKind::Status),
    ColumnDescriptor::new("created_at", "Created At", ColumnKind::Timestamp),
    ColumnDescriptor::new("actions", "Actions", ColumnKind::Actions(CARD_ACTIONS)),
];

impl TableRecord for Card {
    fn columns() -> &'static [ColumnDescriptor] {
        &CARD_COLUMNS
    }

    fn field(&self, column: &str, display: &DisplayOptions) -> CellValue {
        match column {
            "full_name" => CellValue::Text(self.owner_full_name().to_string()),
            "user_name" => CellValue::Text(self.owner_user_name().to_string()),
            "card_type" => CellValue::Text(self.card_type.clone()),
            "is_active" => CellValue::Status(self.is_active),
            "created_at" => CellValue::Timestamp(format_timestamp(
                &self.created_at,
                display.utc_offset_hours,
            )),
            _ => CellValue::Text(String::new()),
        }
    }
}

// =============================================================================
// USERS
// =============================================================================

const USER_ACTIONS: &[RowAction] = &[RowAction::Edit, RowAction::Delete];

static USER_COLUMNS: [ColumnDescriptor; 9] = [
    ColumnDescriptor::new("select", "", ColumnKind::Select).fixed(),
    ColumnDescriptor::new("no", "No.", ColumnKind::RowNumber),
    ColumnDescriptor::new("avatar", "Avatar", ColumnKind::Avatar),
    ColumnDescriptor::new("full_name", "Full Name", ColumnKind::Text).sortable(),
    ColumnDescriptor::new("user_name", "Username", ColumnKind::Text).sortable(),
    ColumnDescriptor::new("email", "Email", ColumnKind::Text).sortable(),
    ColumnDescriptor::new("is_active", "Status", ColumnKind::Status),
    ColumnDescriptor::new("created_at", "Created At", ColumnKind::Timestamp),
    ColumnDescriptor::new("actions", "Action", ColumnKind::Actions(USER_ACTIONS)),
];

impl TableRecord for User {
    fn columns() -> &'static [ColumnDescriptor] {
        &USER_COLUMNS
    }

    fn field(&self, column: &str, display: &DisplayOptions) -> CellValue {
        match column {
            "avatar" => CellValue::Avatar(self.avatar_url().to_string()),
            "full_name" => CellValue::Text(self.full_name.clone()),
            "user_name" => CellValue::Text(self.user_name.clone()),
            "email" => CellValue::Text(self.email.clone().unwrap_or_default()),
            "is_active" => CellValue::Status(self.is_active),
            "created_at" => CellValue::Timestamp(format_timestamp(
                &self.created_at,
                display.utc_offset_hours,
            )),
            _ => CellValue::Text(String::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use admin_model::{CardOwner, DEFAULT_AVATAR_URL, RecordId};

    use super::*;

    fn user() -> User {
        User {
            id: RecordId::new("u1").unwrap(),
            user_name: "ann".to_string(),
            full_name: "Ann Lee".to_string(),
            email: None,
            avatar: None,
            is_active: false,
            created_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn column_ids_are_unique() {
        for columns in [Card::columns(), User::columns()] {
            let mut ids: Vec<_> = columns.iter().map(|c| c.id).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), columns.len());
        }
    }

    #[test]
    fn select_column_cannot_be_hidden_or_sorted() {
        let select = find_column(User::columns(), "select").unwrap();
        assert!(!select.hideable);
        assert!(!select.sortable);
    }

    #[test]
    fn user_cells_use_fallbacks() {
        let display = DisplayOptions::default();
        let user = user();
        assert_eq!(
            user.field("avatar", &display),
            CellValue::Avatar(DEFAULT_AVATAR_URL.to_string())
        );
        assert_eq!(user.field("email", &display), CellValue::Text(String::new()));
        assert_eq!(user.field("is_active", &display).display_text(), "Blocked");
        assert_eq!(
            user.field("created_at", &display),
            CellValue::Timestamp("2024-01-01 07:00 AM".to_string())
        );
    }

    #[test]
    fn card_owner_columns_read_embedded_user() {
        let card = Card {
            id: RecordId::new("c1").unwrap(),
            user_id: "u1".to_string(),
            gender: String::new(),
            dob: String::new(),
            nationality: String::new(),
            phone: String::new(),
            address: String::new(),
            card_type: "premium".to_string(),
            social: Vec::new(),
            is_active: true,
            is_deleted: false,
            created_at: String::new(),
            updated_at: String::new(),
            user: Some(CardOwner {
                id: "u1".to_string(),
                user_name: "ann".to_string(),
                full_name: "Ann Lee".to_string(),
                email: None,
            }),
        };
        let display = DisplayOptions::default();
        let columns = Card::columns();
        let name = find_column(columns, "full_name").unwrap();
        let actions = find_column(columns, "actions").unwrap();
        let number = find_column(columns, "no").unwrap();

        assert_eq!(
            cell(&card, name, 1, false, &display),
            CellValue::Text("Ann Lee".to_string())
        );
        assert_eq!(cell(&card, actions, 1, false, &display).display_text(), "Delete");
        assert_eq!(cell(&card, number, 11, false, &display), CellValue::Number(11));
    }
}
