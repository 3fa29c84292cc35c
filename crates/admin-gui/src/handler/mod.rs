//! Message handler architecture.
//!
//! Each handler implements [`MessageHandler`] for one message type and is
//! dispatched from `App::update()`:
//!
//! ```ignore
//! pub fn update(&mut self, message: Message) -> Task<Message> {
//!     match message {
//!         Message::Cards(msg) => ScreenHandler.handle(&mut self.state, msg),
//!         Message::Users(msg) => ScreenHandler.handle(&mut self.state, msg),
//!         // ...
//!     }
//! }
//! ```

mod screen;

use iced::Task;

use crate::message::Message;
use crate::state::AppState;

pub use screen::{ScreenHandler, load};

/// Trait for handling messages in the Iced architecture.
///
/// Each handler is responsible for a specific message type and can access
/// the full application state.
pub trait MessageHandler<M> {
    /// Handle a message and return any follow-up task.
    fn handle(&self, state: &mut AppState, msg: M) -> Task<Message>;
}
