//! Top-level view: navigation bar, active screen and toast overlay.

mod screen;

use iced::widget::{Space, button, column, container, row, rule, stack, text};
use iced::{Alignment, Element, Length};

use admin_model::{Card, ResourceKind, User};

use crate::component::view_toast;
use crate::message::Message;
use crate::state::AppState;
use crate::theme::{SPACING_LG, SPACING_MD, SPACING_SM, button_tab};

pub use screen::view_screen;

/// Renders the main window.
pub fn view_app(state: &AppState) -> Element<'_, Message> {
    let screen = match state.active {
        ResourceKind::Cards => view_screen::<Card>(state),
        ResourceKind::Users => view_screen::<User>(state),
    };

    let content = column![view_nav(state.active), rule::horizontal(1), screen];

    let Some(toast) = &state.toast else {
        return container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into();
    };

    // Bottom-right toast over the content.
    let toast_row = row![
        Space::new().width(Length::Fill),
        container(view_toast(toast)).padding([0.0, SPACING_LG]),
    ];
    let toast_container = column![Space::new().height(Length::Fill), toast_row]
        .padding([SPACING_LG, 0.0]);

    stack![
        container(content).width(Length::Fill).height(Length::Fill),
        toast_container,
    ]
    .into()
}

fn view_nav(active: ResourceKind) -> Element<'static, Message> {
    let mut tabs = row![text("Admin Console").size(18), Space::new().width(SPACING_LG)]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center);

    for kind in ResourceKind::ALL {
        let label = match kind {
            ResourceKind::Cards => "Cards",
            ResourceKind::Users => "Users",
        };
        tabs = tabs.push(
            button(text(label).size(14))
                .on_press(Message::Navigate(kind))
                .padding([6.0, 14.0])
                .style(button_tab(kind == active)),
        );
    }

    container(tabs)
        .padding([SPACING_SM, SPACING_MD])
        .width(Length::Fill)
        .into()
}
