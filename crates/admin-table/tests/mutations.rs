//! Loading and mutation coordination against an in-memory API.

mod common;

use std::sync::Arc;

use admin_model::{PageResult, RecordId, User};
use admin_query::QueryCache;
use admin_table::{
    DeleteFlow, DisplayOptions, MutationCoordinator, NotificationLevel, PageLoader,
    ResourceScreen, TableBody,
};
use common::FakeClient;

struct Harness {
    client: Arc<FakeClient>,
    loader: PageLoader<User, FakeClient>,
    coordinator: MutationCoordinator<User, FakeClient>,
    screen: ResourceScreen<User>,
}

impl Harness {
    fn new(users: usize) -> Self {
        let client = Arc::new(FakeClient::with_users(users));
        let cache = QueryCache::<PageResult<User>>::new();
        Self {
            loader: PageLoader::new(Arc::clone(&client), cache.clone()),
            coordinator: MutationCoordinator::new(Arc::clone(&client), cache),
            client,
            screen: ResourceScreen::new(10, DisplayOptions::default()),
        }
    }

    /// Loads until the page index settles, as the screens do.
    async fn load(&mut self) {
        loop {
            let ticket = self.screen.begin_load();
            let result = self.loader.load(ticket.key().clone()).await;
            if !self.screen.finish_load(&ticket, result) {
                break;
            }
        }
    }
}

fn id(s: &str) -> RecordId {
    RecordId::new(s).unwrap()
}

#[tokio::test]
async fn first_page_of_42_has_five_pages() {
    let mut h = Harness::new(42);
    h.load().await;

    assert_eq!(h.screen.body(), TableBody::Rows);
    assert_eq!(h.screen.records().len(), 10);
    assert_eq!(h.screen.table.page_count(), Some(5));
    assert_eq!(h.screen.table.page_label(), "Page 1 of 5");
}

#[tokio::test]
async fn revisiting_a_page_is_served_from_cache() {
    let mut h = Harness::new(25);
    h.load().await;
    h.screen.table.set_page_index(1);
    h.load().await;
    h.screen.table.set_page_index(0);
    h.load().await;

    assert_eq!(h.client.list_calls(), 2);
}

#[tokio::test]
async fn status_change_is_visible_on_next_fetch() {
    let mut h = Harness::new(3);
    h.load().await;
    assert_eq!(h.client.list_calls(), 1);

    assert!(h.screen.open_status_dialog(&id("u2")));
    let change = h.screen.status.confirm().unwrap();
    assert!(!change.active());

    let outcome = h.coordinator.set_status(change).await;
    assert!(outcome.succeeded());
    assert_eq!(outcome.notification.message, "User blocked.");
    assert!(h.screen.apply_mutation(&outcome));
    assert!(!h.screen.status.is_open());

    h.load().await;
    assert_eq!(h.client.list_calls(), 2);
    assert!(!h.screen.record(&id("u2")).unwrap().is_active);
}

#[tokio::test]
async fn confirmed_delete_forces_fresh_fetch() {
    let mut h = Harness::new(12);
    h.load().await;

    h.screen.delete.stage(id("u1"));
    let confirmed = h.screen.delete.confirm().unwrap();
    let outcome = h.coordinator.delete_record(confirmed).await;

    assert_eq!(outcome.notification.level, NotificationLevel::Success);
    assert_eq!(outcome.notification.message, "User deleted successfully!");
    assert!(h.screen.apply_mutation(&outcome));
    assert_eq!(h.screen.delete, DeleteFlow::Idle);

    h.load().await;
    assert_eq!(h.client.list_calls(), 2);
    assert_eq!(h.screen.table.total(), Some(11));
    assert!(h.screen.record(&id("u1")).is_none());
}

#[tokio::test]
async fn failed_delete_keeps_staged_record_and_cache() {
    let mut h = Harness::new(5);
    h.load().await;
    h.client.fail_next_mutations(true);

    h.screen.delete.stage(id("u3"));
    let confirmed = h.screen.delete.confirm().unwrap();
    let outcome = h.coordinator.delete_record(confirmed).await;

    assert!(outcome.notification.is_error());
    assert_eq!(outcome.notification.message, "Failed to delete user.");
    assert!(!h.screen.apply_mutation(&outcome));
    assert_eq!(h.screen.delete, DeleteFlow::Staged(id("u3")));

    h.load().await;
    assert_eq!(h.client.list_calls(), 1);
    assert_eq!(h.screen.records().len(), 5);
}

#[tokio::test]
async fn confirm_without_stage_never_calls_remove() {
    let mut h = Harness::new(5);
    h.load().await;

    assert!(h.screen.delete.confirm().is_none());
    assert_eq!(h.client.remove_calls(), 0);
}

#[tokio::test]
async fn deleting_last_row_of_last_page_steps_back() {
    let mut h = Harness::new(11);
    h.load().await;
    h.screen.table.set_page_index(1);
    h.load().await;
    assert_eq!(h.screen.records().len(), 1);

    h.screen.delete.stage(id("u11"));
    let confirmed = h.screen.delete.confirm().unwrap();
    let outcome = h.coordinator.delete_record(confirmed).await;
    h.screen.apply_mutation(&outcome);
    h.load().await;

    assert_eq!(h.screen.table.page_index(), 0);
    assert_eq!(h.screen.records().len(), 10);
}

#[tokio::test]
async fn filter_change_loads_first_page_with_filter() {
    let mut h = Harness::new(30);
    h.load().await;
    h.screen.table.set_page_index(2);
    h.load().await;

    h.screen.table.set_filter("email", "user1");
    let ticket = h.screen.begin_load();
    assert_eq!(ticket.key().query.page, 1);
    assert_eq!(ticket.key().query.filter.as_deref(), Some("user1"));
}
