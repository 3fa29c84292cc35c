//! Resource screen message handler.
//!
//! Table interactions update the screen's [`TableState`](admin_table::TableState)
//! and, when the derived query changed, start a load. Loads and mutations
//! run as [`Task::perform`] futures and come back as `Loaded` and
//! `MutationFinished` messages.

use iced::Task;

use admin_table::Notification;

use super::MessageHandler;
use crate::message::{Message, ScreenMessage};
use crate::state::{AppState, ScreenRecord};

/// Handler for both resource screens.
pub struct ScreenHandler;

impl<R: ScreenRecord> MessageHandler<ScreenMessage<R>> for ScreenHandler {
    fn handle(&self, state: &mut AppState, msg: ScreenMessage<R>) -> Task<Message> {
        match msg {
            // =================================================================
            // Table state
            // =================================================================
            ScreenMessage::SortClicked(column) => {
                let changed = R::screen_mut(state).table.toggle_sort(column);
                reload_if::<R>(state, changed)
            }

            ScreenMessage::FilterChanged(value) => {
                let changed = R::screen_mut(state)
                    .table
                    .set_filter(R::KIND.filter_column(), &value);
                reload_if::<R>(state, changed)
            }

            ScreenMessage::FilterCleared => {
                let changed = R::screen_mut(state)
                    .table
                    .set_filter(R::KIND.filter_column(), "");
                reload_if::<R>(state, changed)
            }

            ScreenMessage::PageChanged(index) => {
                let changed = R::screen_mut(state).table.set_page_index(index);
                reload_if::<R>(state, changed)
            }

            ScreenMessage::PageSizeChanged(size) => {
                let changed = R::screen_mut(state).table.set_page_size(size);
                reload_if::<R>(state, changed)
            }

            ScreenMessage::RowToggled(id) => {
                R::screen_mut(state).table.toggle_row_selection(&id);
                Task::none()
            }

            ScreenMessage::AllRowsToggled(selected) => {
                R::screen_mut(state).table.toggle_all_on_page(selected);
                Task::none()
            }

            ScreenMessage::ColumnMenuToggled => {
                state.column_menu_open = !state.column_menu_open;
                Task::none()
            }

            ScreenMessage::ColumnVisibilityChanged(column, visible) => {
                R::screen_mut(state)
                    .table
                    .set_column_visibility(column, visible);
                Task::none()
            }

            ScreenMessage::Reload => load::<R>(state),

            // =================================================================
            // Delete flow
            // =================================================================
            ScreenMessage::DeleteRequested(id) => {
                R::screen_mut(state).delete.stage(id);
                Task::none()
            }

            ScreenMessage::DeleteCancelled => {
                R::screen_mut(state).delete.cancel();
                Task::none()
            }

            ScreenMessage::DeleteConfirmed => {
                let mutations = match &state.services {
                    Ok(services) => R::services(services).mutations.clone(),
                    Err(err) => {
                        let notification = Notification::error(err.user_message());
                        state.notify(&notification);
                        return Task::none();
                    }
                };
                let Some(confirmed) = R::screen_mut(state).delete.confirm() else {
                    return Task::none();
                };
                tracing::info!("Deleting {} {}", R::KIND.singular_label(), confirmed.id());
                Task::perform(
                    async move { mutations.delete_record(confirmed).await },
                    |outcome| R::message(ScreenMessage::MutationFinished(outcome)),
                )
            }

            // =================================================================
            // Status dialog
            // =================================================================
            ScreenMessage::StatusRequested(id) => {
                if !R::screen_mut(state).open_status_dialog(&id) {
                    tracing::warn!("No displayed {} with id {}", R::KIND.singular_label(), id);
                }
                Task::none()
            }

            ScreenMessage::StatusCancelled => {
                R::screen_mut(state).status.cancel();
                Task::none()
            }

            ScreenMessage::StatusConfirmed => {
                let mutations = match &state.services {
                    Ok(services) => R::services(services).mutations.clone(),
                    Err(err) => {
                        let notification = Notification::error(err.user_message());
                        state.notify(&notification);
                        return Task::none();
                    }
                };
                let Some(change) = R::screen_mut(state).status.confirm() else {
                    return Task::none();
                };
                Task::perform(
                    async move { mutations.set_status(change).await },
                    |outcome| R::message(ScreenMessage::MutationFinished(outcome)),
                )
            }

            ScreenMessage::EditRequested(id) => {
                tracing::debug!("Edit requested for {} {}", R::KIND.singular_label(), id);
                state.notify(&Notification::edit_unavailable(R::KIND));
                Task::none()
            }

            // =================================================================
            // Results
            // =================================================================
            ScreenMessage::Loaded(ticket, result) => {
                if let Err(err) = &result {
                    tracing::error!("Failed to load {}: {}", ticket.key(), err);
                }
                let clamped = R::screen_mut(state).finish_load(&ticket, result);
                reload_if::<R>(state, clamped)
            }

            ScreenMessage::MutationFinished(outcome) => {
                state.notify(&outcome.notification);
                let reload = R::screen_mut(state).apply_mutation(&outcome);
                reload_if::<R>(state, reload)
            }
        }
    }
}

fn reload_if<R: ScreenRecord>(state: &mut AppState, changed: bool) -> Task<Message> {
    if changed { load::<R>(state) } else { Task::none() }
}

/// Loads the page the screen's table state currently describes.
///
/// The result is applied only if no newer load was started in the meantime.
pub fn load<R: ScreenRecord>(state: &mut AppState) -> Task<Message> {
    let ticket = R::screen_mut(state).begin_load();
    let loader = match &state.services {
        Ok(services) => R::services(services).loader.clone(),
        Err(err) => {
            let err = err.clone();
            R::screen_mut(state).finish_load(&ticket, Err(err));
            return Task::none();
        }
    };
    let key = ticket.key().clone();
    Task::perform(async move { loader.load(key).await }, move |result| {
        R::message(ScreenMessage::Loaded(ticket, result))
    })
}

#[cfg(test)]
mod tests {
    use admin_api::{ApiError, Settings};
    use admin_model::{PageMeta, PageResult, RecordId, User};

    use super::*;
    use crate::state::Services;

    fn offline_state() -> AppState {
        AppState::with_services(
            &Settings::default(),
            Err(ApiError::InvalidRequest("no API configured".into())),
        )
    }

    fn online_state() -> AppState {
        let settings = Settings::default();
        let services = Services::new(&settings.api);
        AppState::with_services(&settings, services)
    }

    fn users(range: std::ops::Range<u32>) -> Vec<User> {
        range
            .map(|n| User {
                id: id(&format!("u{n}")),
                user_name: format!("user{n}"),
                full_name: format!("User {n}"),
                email: Some(format!("user{n}@example.com")),
                avatar: None,
                is_active: n % 2 == 0,
                created_at: "2024-05-01T20:15:00.000Z".to_string(),
            })
            .collect()
    }

    fn page(records: Vec<User>, total: u64, page: u32, limit: u32) -> PageResult<User> {
        PageResult::from_parts(records, PageMeta { total, page, limit })
    }

    fn handle(state: &mut AppState, msg: ScreenMessage<User>) {
        let _ = ScreenHandler.handle(state, msg);
    }

    /// Resolves the load the screen is waiting for with `result`.
    fn resolve(state: &mut AppState, result: Result<PageResult<User>, ApiError>) {
        let ticket = state.users.begin_load();
        handle(state, ScreenMessage::Loaded(ticket, result));
    }

    fn id(raw: &str) -> RecordId {
        RecordId::new(raw).expect("non-empty id")
    }

    #[test]
    fn missing_client_shows_error_state() {
        let mut state = offline_state();
        let _ = load::<User>(&mut state);
        assert!(matches!(
            state.users.body(),
            admin_table::TableBody::Failed(ApiError::InvalidRequest(_))
        ));
    }

    #[test]
    fn filter_change_returns_to_first_page() {
        let mut state = online_state();
        resolve(&mut state, Ok(page(users(0..10), 42, 1, 10)));
        handle(&mut state, ScreenMessage::PageChanged(3));
        assert_eq!(state.users.table.page_index(), 3);

        handle(&mut state, ScreenMessage::FilterChanged("ann".into()));
        assert_eq!(state.users.table.page_index(), 0);
        assert_eq!(state.users.table.filter("email"), "ann");
        assert!(state.users.is_loading());

        handle(&mut state, ScreenMessage::FilterCleared);
        assert_eq!(state.users.table.filter("email"), "");
    }

    #[test]
    fn superseded_load_is_ignored() {
        let mut state = online_state();
        let stale = state.users.begin_load();
        handle(&mut state, ScreenMessage::SortClicked("email"));

        handle(
            &mut state,
            ScreenMessage::Loaded(stale, Ok(page(users(0..10), 10, 1, 10))),
        );
        assert!(state.users.is_loading());
        assert!(state.users.records().is_empty());
    }

    #[test]
    fn delete_flow_waits_for_confirmation() {
        let mut state = online_state();
        resolve(&mut state, Ok(page(users(0..3), 3, 1, 10)));

        handle(&mut state, ScreenMessage::DeleteConfirmed);
        assert!(!state.users.delete.is_open());

        handle(&mut state, ScreenMessage::DeleteRequested(id("u1")));
        assert_eq!(state.users.delete.pending(), Some(&id("u1")));

        handle(&mut state, ScreenMessage::DeleteConfirmed);
        assert!(state.users.delete.is_in_flight());

        // Cancel is ignored while the request runs.
        handle(&mut state, ScreenMessage::DeleteCancelled);
        assert!(state.users.delete.is_in_flight());
    }

    #[test]
    fn status_request_opens_dialog_for_displayed_row() {
        let mut state = online_state();
        resolve(&mut state, Ok(page(users(0..3), 3, 1, 10)));

        handle(&mut state, ScreenMessage::StatusRequested(id("missing")));
        assert!(!state.users.status.is_open());

        handle(&mut state, ScreenMessage::StatusRequested(id("u1")));
        assert_eq!(
            state.users.status.prompt("User").as_deref(),
            Some("Are you sure you want to activate this user?")
        );

        handle(&mut state, ScreenMessage::StatusCancelled);
        assert!(!state.users.status.is_open());
    }

    #[test]
    fn confirming_without_client_keeps_dialog_and_reports_error() {
        let mut state = offline_state();
        state.users.delete.stage(id("u1"));
        handle(&mut state, ScreenMessage::DeleteConfirmed);

        assert_eq!(state.users.delete.pending(), Some(&id("u1")));
        assert!(!state.users.delete.is_in_flight());
        let toast = state.toast.as_ref().expect("error toast");
        assert_eq!(toast.toast_type, crate::component::toast::ToastType::Error);
    }

    #[test]
    fn edit_action_only_notifies() {
        let mut state = online_state();
        handle(&mut state, ScreenMessage::EditRequested(id("u1")));
        let toast = state.toast.as_ref().expect("info toast");
        assert_eq!(toast.message, "Editing users is not available yet.");
        assert!(!state.users.is_loading());
    }

    #[test]
    fn failed_mutation_keeps_table_and_reopens_dialog() {
        let mut state = online_state();
        resolve(&mut state, Ok(page(users(0..3), 3, 1, 10)));
        handle(&mut state, ScreenMessage::DeleteRequested(id("u1")));
        handle(&mut state, ScreenMessage::DeleteConfirmed);

        let outcome = admin_table::MutationOutcome {
            resource: admin_model::ResourceKind::Users,
            id: id("u1"),
            kind: admin_table::MutationKind::Delete,
            result: Err(ApiError::Server {
                status: 500,
                message: "boom".into(),
            }),
            notification: Notification::delete_failed(admin_model::ResourceKind::Users),
        };
        handle(&mut state, ScreenMessage::MutationFinished(outcome));

        assert_eq!(state.users.delete.pending(), Some(&id("u1")));
        assert!(!state.users.delete.is_in_flight());
        assert_eq!(state.users.records().len(), 3);
        assert!(!state.users.is_loading());
        assert_eq!(
            state.toast.as_ref().map(|t| t.message.as_str()),
            Some("Failed to delete user.")
        );
    }

    #[test]
    fn successful_mutation_reloads_current_page() {
        let mut state = online_state();
        resolve(&mut state, Ok(page(users(0..3), 3, 1, 10)));
        handle(&mut state, ScreenMessage::StatusRequested(id("u2")));
        handle(&mut state, ScreenMessage::StatusConfirmed);
        assert!(state.users.status.is_pending());

        let outcome = admin_table::MutationOutcome {
            resource: admin_model::ResourceKind::Users,
            id: id("u2"),
            kind: admin_table::MutationKind::SetStatus { active: false },
            result: Ok(()),
            notification: Notification::status_changed(admin_model::ResourceKind::Users, false),
        };
        handle(&mut state, ScreenMessage::MutationFinished(outcome));

        assert!(!state.users.status.is_open());
        assert!(state.users.is_loading());
        assert_eq!(
            state.toast.as_ref().map(|t| t.message.as_str()),
            Some("User blocked.")
        );
    }
}
