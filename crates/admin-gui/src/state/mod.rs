//! Application state.
//!
//! [`AppState`] owns one [`ResourceScreen`] per collection plus the services
//! that load and mutate them. Each collection has its own query cache, shared
//! by its loader and its mutation coordinator so a successful mutation
//! invalidates exactly the pages the loader serves.

use std::sync::Arc;

use admin_api::{ApiError, ApiSettings, HttpClient, Settings};
use admin_model::{Card, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS, ResourceKind, User};
use admin_query::QueryCache;
use admin_table::{
    DisplayOptions, MutationCoordinator, Notification, PageLoader, ResourceScreen, TableRecord,
};

use crate::component::toast::ToastState;
use crate::message::{Message, ScreenMessage};

// =============================================================================
// SERVICES
// =============================================================================

/// Loader and mutation coordinator of one collection.
#[derive(Debug, Clone)]
pub struct ResourceServices<R> {
    pub loader: PageLoader<R, HttpClient>,
    pub mutations: MutationCoordinator<R, HttpClient>,
}

impl<R: TableRecord> ResourceServices<R> {
    fn new(client: &Arc<HttpClient>) -> Self {
        let cache = QueryCache::new();
        Self {
            loader: PageLoader::new(Arc::clone(client), cache.clone()),
            mutations: MutationCoordinator::new(Arc::clone(client), cache),
        }
    }
}

/// Services of both collections over one HTTP client.
#[derive(Debug, Clone)]
pub struct Services {
    pub cards: ResourceServices<Card>,
    pub users: ResourceServices<User>,
}

impl Services {
    pub fn new(settings: &ApiSettings) -> Result<Self, ApiError> {
        let client = Arc::new(HttpClient::new(settings)?);
        tracing::info!("Using admin API at {}", client.base_url());
        Ok(Self {
            cards: ResourceServices::new(&client),
            users: ResourceServices::new(&client),
        })
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// All application state.
#[derive(Debug)]
pub struct AppState {
    /// Screen currently shown.
    pub active: ResourceKind,
    pub cards: ResourceScreen<Card>,
    pub users: ResourceScreen<User>,
    /// API services, or the error that prevented creating the client.
    pub services: Result<Services, ApiError>,
    /// Whether the column visibility menu of the active screen is open.
    pub column_menu_open: bool,
    /// Current toast notification.
    pub toast: Option<ToastState>,
    toasts_issued: u64,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        let services = Services::new(&settings.api);
        if let Err(err) = &services {
            tracing::error!("Failed to create API client: {}", err);
        }
        Self::with_services(settings, services)
    }

    /// Creates the state around already built services.
    pub fn with_services(settings: &Settings, services: Result<Services, ApiError>) -> Self {
        let page_size = initial_page_size(settings.display.page_size);
        let display = DisplayOptions {
            utc_offset_hours: settings.display.utc_offset_hours,
        };
        Self {
            active: ResourceKind::Cards,
            cards: ResourceScreen::new(page_size, display),
            users: ResourceScreen::new(page_size, display),
            services,
            column_menu_open: false,
            toast: None,
            toasts_issued: 0,
        }
    }

    /// Shows a notification as the toast, replacing the previous one.
    pub fn notify(&mut self, notification: &Notification) {
        self.toasts_issued += 1;
        self.toast = Some(ToastState::new(self.toasts_issued, notification));
    }

    /// Clears the toast if it is still toast number `id`.
    pub fn expire_toast(&mut self, id: u64) {
        if self.toast.as_ref().is_some_and(|toast| toast.id == id) {
            self.toast = None;
        }
    }
}

/// Page size from the settings, if it is one the selector offers.
fn initial_page_size(configured: u32) -> u32 {
    if PAGE_SIZE_OPTIONS.contains(&configured) {
        configured
    } else {
        tracing::warn!(
            "Page size {} is not one of {:?}, using {}",
            configured,
            PAGE_SIZE_OPTIONS,
            DEFAULT_PAGE_SIZE
        );
        DEFAULT_PAGE_SIZE
    }
}

// =============================================================================
// SCREEN RECORDS
// =============================================================================

/// Record types that have a screen in the application.
///
/// Connects a record type to its screen, its services and its message
/// variant, so handlers and views can be written once for both screens.
pub trait ScreenRecord: TableRecord {
    fn screen(state: &AppState) -> &ResourceScreen<Self>;
    fn screen_mut(state: &mut AppState) -> &mut ResourceScreen<Self>;
    fn services(services: &Services) -> &ResourceServices<Self>;
    fn message(message: ScreenMessage<Self>) -> Message;
}

impl ScreenRecord for Card {
    fn screen(state: &AppState) -> &ResourceScreen<Self> {
        &state.cards
    }

    fn screen_mut(state: &mut AppState) -> &mut ResourceScreen<Self> {
        &mut state.cards
    }

    fn services(services: &Services) -> &ResourceServices<Self> {
        &services.cards
    }

    fn message(message: ScreenMessage<Self>) -> Message {
        Message::Cards(message)
    }
}

impl ScreenRecord for User {
    fn screen(state: &AppState) -> &ResourceScreen<Self> {
        &state.users
    }

    fn screen_mut(state: &mut AppState) -> &mut ResourceScreen<Self> {
        &mut state.users
    }

    fn services(services: &Services) -> &ResourceServices<Self> {
        &services.users
    }

    fn message(message: ScreenMessage<Self>) -> Message {
        Message::Users(message)
    }
}
