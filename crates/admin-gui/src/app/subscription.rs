//! Application subscriptions.
//!
//! | Subscription | Interval | Condition | Purpose |
//! |--------------|----------|-----------|---------|
//! | Toast Expiry | 5 seconds | Toast visible, keyed on its id | Auto-dismiss notifications |

use std::time::Duration;

use iced::{Subscription, time};

use crate::message::{Message, ToastMessage};
use crate::state::AppState;

/// How long a toast stays visible.
pub const TOAST_DURATION: Duration = Duration::from_secs(5);

/// Create all application subscriptions.
pub fn create_subscription(state: &AppState) -> Subscription<Message> {
    Subscription::batch([toast_subscription(state)])
}

/// Toast auto-dismiss timer; only runs while a toast is shown.
///
/// The toast id is part of the subscription identity, so a replacing toast
/// starts a fresh timer.
fn toast_subscription(state: &AppState) -> Subscription<Message> {
    match &state.toast {
        Some(toast) => time::every(TOAST_DURATION)
            .with(toast.id)
            .map(|(id, _)| Message::Toast(ToastMessage::Expired(id))),
        None => Subscription::none(),
    }
}
