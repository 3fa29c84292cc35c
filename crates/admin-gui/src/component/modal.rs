//! Modal dialog overlay.

use iced::widget::{button, center, column, container, opaque, row, space, stack, text};
use iced::{Border, Element, Length, Shadow, Vector};

use crate::theme::{
    BACKDROP, BORDER_RADIUS_LG, GRAY_200, GRAY_500, GRAY_900, MODAL_WIDTH_MD, SHADOW_STRONG,
    SPACING_LG, SPACING_MD, SPACING_SM, WHITE, button_danger, button_ghost, button_secondary,
};

// =============================================================================
// MODAL DIALOG
// =============================================================================

/// Creates a modal dialog overlay.
///
/// The modal appears centered on top of the base content with a semi-transparent
/// backdrop. Clicking the backdrop does NOT close the modal - use the close button.
pub fn modal<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    title: &'a str,
    content: Element<'a, M>,
    on_close: Option<M>,
    actions: Vec<Element<'a, M>>,
) -> Element<'a, M> {
    let backdrop = container(column![])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(BACKDROP.into()),
            ..Default::default()
        });

    let header = row![
        text(title).size(18).color(GRAY_900),
        space::horizontal(),
        button(text("×").size(20).color(GRAY_500))
            .on_press_maybe(on_close)
            .padding([4.0, 8.0])
            .style(button_ghost),
    ]
    .align_y(iced::Alignment::Center);

    let action_row = {
        let mut r = row![space::horizontal()].spacing(SPACING_SM);
        for action in actions {
            r = r.push(action);
        }
        r
    };

    let dialog = container(
        column![
            header,
            container(content).padding([SPACING_MD, 0.0]),
            action_row,
        ]
        .spacing(SPACING_MD),
    )
    .width(Length::Fixed(MODAL_WIDTH_MD))
    .padding(SPACING_LG)
    .style(|_theme| container::Style {
        background: Some(WHITE.into()),
        border: Border {
            radius: BORDER_RADIUS_LG.into(),
            width: 1.0,
            color: GRAY_200,
        },
        shadow: Shadow {
            color: SHADOW_STRONG,
            offset: Vector::new(0.0, 4.0),
            blur_radius: 24.0,
        },
        ..Default::default()
    });

    // base -> backdrop -> dialog
    stack![base, opaque(backdrop), center(dialog)].into()
}

/// Contents of a confirmation modal.
pub struct Confirmation<'a, M> {
    pub title: &'a str,
    pub message: String,
    pub confirm_label: &'a str,
    /// Confirm button label while the request runs.
    pub busy_label: &'a str,
    pub busy: bool,
    pub on_confirm: M,
    pub on_cancel: M,
}

/// Creates a confirmation modal with Cancel and a destructive confirm button.
///
/// While `busy` is set both buttons are disabled and the confirm button shows
/// `busy_label`, so a running request cannot be confirmed or dismissed twice.
pub fn confirm_modal<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    confirmation: Confirmation<'a, M>,
) -> Element<'a, M> {
    let Confirmation {
        title,
        message,
        confirm_label,
        busy_label,
        busy,
        on_confirm,
        on_cancel,
    } = confirmation;

    let content = text(message).into();

    let cancel_btn: Element<'a, M> = button(text("Cancel"))
        .on_press_maybe((!busy).then(|| on_cancel.clone()))
        .padding([10.0, 20.0])
        .style(button_secondary)
        .into();

    let confirm_btn: Element<'a, M> = button(text(if busy { busy_label } else { confirm_label }))
        .on_press_maybe((!busy).then_some(on_confirm))
        .padding([10.0, 20.0])
        .style(button_danger)
        .into();

    modal(
        base,
        title,
        content,
        (!busy).then_some(on_cancel),
        vec![cancel_btn, confirm_btn],
    )
}
