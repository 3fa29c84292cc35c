//! Terminal table rendering.

use admin_api::ApiError;
use admin_cli::render::{footer, render_table};
use admin_model::{PageMeta, PageResult, RecordId, User};
use admin_table::{DisplayOptions, ResourceScreen};

fn user(id: &str, name: &str, active: bool) -> User {
    User {
        id: RecordId::new(id).unwrap(),
        user_name: name.to_lowercase(),
        full_name: name.to_string(),
        email: Some(format!("{}@example.com", name.to_lowercase())),
        avatar: None,
        is_active: active,
        created_at: "2024-05-01T20:15:00Z".to_string(),
    }
}

fn loaded_screen(users: Vec<User>, total: u64) -> ResourceScreen<User> {
    let mut screen = ResourceScreen::new(10, DisplayOptions::default());
    let ticket = screen.begin_load();
    screen.finish_load(
        &ticket,
        Ok(PageResult::from_parts(
            users,
            PageMeta {
                total,
                page: 1,
                limit: 10,
            },
        )),
    );
    screen
}

#[test]
fn rows_show_formatted_cells() {
    let screen = loaded_screen(vec![user("u1", "Ann", true), user("u2", "Bob", false)], 12);
    let rendered = render_table(&screen).to_string();

    assert!(rendered.contains("Full Name"));
    assert!(rendered.contains("ann@example.com"));
    assert!(rendered.contains("Active"));
    assert!(rendered.contains("Blocked"));
    assert!(rendered.contains("2024-05-02 03:15 AM"));
    assert!(!rendered.contains("Delete"));
    insta::assert_snapshot!(footer(&screen), @"Page 1 of 2  (12 total)");
}

#[test]
fn hidden_and_sorted_columns_are_reflected_in_header() {
    let mut screen = loaded_screen(vec![user("u1", "Ann", true)], 1);
    screen.table.set_column_visibility("avatar", false);
    screen.table.toggle_sort("email");
    screen.table.toggle_sort("email");

    let rendered = render_table(&screen).to_string();
    assert!(!rendered.contains("Avatar"));
    assert!(rendered.contains("Email v"));
}

#[test]
fn empty_page_says_no_results() {
    let screen = loaded_screen(Vec::new(), 0);
    assert!(render_table(&screen).to_string().contains("No results."));
}

#[test]
fn failed_load_shows_error_message() {
    let mut screen = ResourceScreen::<User>::new(10, DisplayOptions::default());
    let ticket = screen.begin_load();
    screen.finish_load(&ticket, Err(ApiError::Network("refused".to_string())));

    let rendered = render_table(&screen).to_string();
    assert!(rendered.contains("Could not reach the server"));
    assert!(!rendered.contains("No results."));
}
