//! Toast notification component.
//!
//! Shows a transient message produced by a mutation or a row action. The
//! toast is dismissed by its close button or by the auto-dismiss timer in
//! [`crate::app::subscription`].

use iced::widget::{Space, button, container, row, text};
use iced::{Alignment, Element, Length};

use admin_table::{Notification, NotificationLevel};

use crate::message::Message;
use crate::theme::{
    DANGER, GRAY_900, INFO, SPACING_MD, SPACING_SM, SPACING_XS, SUCCESS, button_ghost, surface,
};

/// Toast notification state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastState {
    /// Issue number; the auto-dismiss timer is keyed on it.
    pub id: u64,
    /// The message to display.
    pub message: String,
    /// Toast type determines the marker and its color.
    pub toast_type: ToastType,
}

/// Type of toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastType {
    Success,
    Info,
    Error,
}

impl ToastType {
    fn color(self) -> iced::Color {
        match self {
            ToastType::Success => SUCCESS,
            ToastType::Info => INFO,
            ToastType::Error => DANGER,
        }
    }

    fn marker(self) -> &'static str {
        match self {
            ToastType::Success => "✓",
            ToastType::Info => "i",
            ToastType::Error => "✕",
        }
    }
}

/// Toast message for handling toast events.
#[derive(Debug, Clone)]
pub enum ToastMessage {
    /// Dismiss the toast.
    Dismiss,
    /// The display time of the toast with this id ran out.
    Expired(u64),
}

impl ToastState {
    /// Builds toast number `id` from a notification.
    pub fn new(id: u64, notification: &Notification) -> Self {
        let toast_type = match notification.level {
            NotificationLevel::Success => ToastType::Success,
            NotificationLevel::Info => ToastType::Info,
            NotificationLevel::Error => ToastType::Error,
        };
        Self {
            id,
            message: notification.message.clone(),
            toast_type,
        }
    }
}

/// Renders a toast notification.
pub fn view_toast(state: &ToastState) -> Element<'_, Message> {
    let marker = text(state.toast_type.marker())
        .size(16)
        .color(state.toast_type.color());

    let message_text = text(&state.message).size(14).color(GRAY_900);

    let dismiss_btn = button(text("×").size(14))
        .on_press(Message::Toast(ToastMessage::Dismiss))
        .padding(SPACING_XS)
        .style(button_ghost);

    let content = row![
        marker,
        Space::new().width(SPACING_SM),
        message_text,
        Space::new().width(SPACING_MD),
        dismiss_btn,
    ]
    .align_y(Alignment::Center)
    .spacing(SPACING_XS);

    container(content)
        .padding([SPACING_SM, SPACING_MD])
        .width(Length::Shrink)
        .style(surface)
        .into()
}
