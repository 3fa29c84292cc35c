//! Main application module.
//!
//! Implements the Iced 0.14.0 application with the builder pattern.
//! The architecture follows the Elm pattern: State → Message → Update → View.
//!
//! - **All state changes happen in `update()`** - views are pure functions
//! - **No channels/polling** - page loads and mutations use `Task::perform`

pub mod subscription;

use iced::{Element, Subscription, Task, Theme};

use admin_api::Settings;
use admin_model::{Card, ResourceKind, User};

use crate::handler::{MessageHandler, ScreenHandler, load};
use crate::message::{Message, ToastMessage};
use crate::state::AppState;
use crate::theme::admin_theme;
use crate::view::view_app;

// =============================================================================
// APPLICATION
// =============================================================================

/// Main application struct.
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create a new application instance.
    ///
    /// Called once at startup. Loads settings and starts fetching the first
    /// page of the initial screen.
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        let mut app = Self {
            state: AppState::new(&settings),
        };
        let task = app.load_active();
        (app, task)
    }

    /// Update application state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(kind) => {
                if self.state.active == kind {
                    return Task::none();
                }
                self.state.active = kind;
                self.state.column_menu_open = false;
                // Served from the cache unless a mutation invalidated it.
                self.load_active()
            }

            Message::Cards(msg) => ScreenHandler.handle(&mut self.state, msg),

            Message::Users(msg) => ScreenHandler.handle(&mut self.state, msg),

            Message::Toast(ToastMessage::Dismiss) => {
                self.state.toast = None;
                Task::none()
            }

            Message::Toast(ToastMessage::Expired(id)) => {
                self.state.expire_toast(id);
                Task::none()
            }
        }
    }

    /// Render the main window.
    pub fn view(&self) -> Element<'_, Message> {
        view_app(&self.state)
    }

    /// Window title.
    pub fn title(&self) -> String {
        format!("Admin Console - {}", self.state.active.title())
    }

    pub fn theme(&self) -> Theme {
        admin_theme()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_subscription(&self.state)
    }

    fn load_active(&mut self) -> Task<Message> {
        match self.state.active {
            ResourceKind::Cards => load::<Card>(&mut self.state),
            ResourceKind::Users => load::<User>(&mut self.state),
        }
    }
}
