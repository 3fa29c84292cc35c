//! Spacing scale, colors and widget styles.

use iced::widget::{button, container, text};
use iced::{Border, Color, Shadow, Theme, Vector};

// =============================================================================
// SPACING
// =============================================================================

pub const SPACING_XS: f32 = 4.0;
pub const SPACING_SM: f32 = 8.0;
pub const SPACING_MD: f32 = 16.0;
pub const SPACING_LG: f32 = 24.0;

pub const BORDER_RADIUS_SM: f32 = 4.0;
pub const BORDER_RADIUS_LG: f32 = 8.0;
pub const BORDER_RADIUS_FULL: f32 = 9999.0;

pub const MODAL_WIDTH_MD: f32 = 480.0;
pub const COLUMN_MENU_WIDTH: f32 = 200.0;

pub const TABLE_CELL_PADDING_X: f32 = 12.0;
pub const TABLE_CELL_PADDING_Y: f32 = 8.0;

// =============================================================================
// COLORS
// =============================================================================

pub const WHITE: Color = Color::WHITE;
pub const GRAY_100: Color = Color::from_rgb(0.96, 0.96, 0.96); // #F4F4F5
pub const GRAY_200: Color = Color::from_rgb(0.89, 0.89, 0.91); // #E4E4E7
pub const GRAY_500: Color = Color::from_rgb(0.44, 0.44, 0.48); // #71717A
pub const GRAY_900: Color = Color::from_rgb(0.09, 0.09, 0.11); // #18181B
pub const SUCCESS: Color = Color::from_rgb(0.09, 0.64, 0.29); // #16A34A
pub const INFO: Color = Color::from_rgb(0.15, 0.39, 0.92); // #2563EB
pub const DANGER: Color = Color::from_rgb(0.86, 0.15, 0.15); // #DC2626
const DANGER_HOVER: Color = Color::from_rgb(0.73, 0.11, 0.11); // #B91C1C
pub const BACKDROP: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.5);
pub const SHADOW_STRONG: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.2);

/// Application theme.
pub fn admin_theme() -> Theme {
    Theme::Light
}

// =============================================================================
// BUTTONS
// =============================================================================

/// Primary button style - main actions.
pub fn button_primary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let background = match status {
        button::Status::Active => palette.primary.base.color,
        button::Status::Hovered => palette.primary.strong.color,
        button::Status::Pressed => palette.primary.weak.color,
        button::Status::Disabled => GRAY_200,
    };
    button::Style {
        background: Some(background.into()),
        text_color: if status == button::Status::Disabled {
            GRAY_500
        } else {
            palette.primary.base.text
        },
        border: rounded(BORDER_RADIUS_SM, Color::TRANSPARENT),
        ..Default::default()
    }
}

/// Secondary button style - outlined, for cancel and toolbar actions.
pub fn button_secondary(_theme: &Theme, status: button::Status) -> button::Style {
    button::Style {
        background: Some(
            match status {
                button::Status::Hovered | button::Status::Pressed => GRAY_100,
                _ => WHITE,
            }
            .into(),
        ),
        text_color: if status == button::Status::Disabled {
            GRAY_500
        } else {
            GRAY_900
        },
        border: rounded(BORDER_RADIUS_SM, GRAY_200),
        ..Default::default()
    }
}

/// Destructive button style.
pub fn button_danger(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Disabled => GRAY_200,
        button::Status::Hovered | button::Status::Pressed => DANGER_HOVER,
        button::Status::Active => DANGER,
    };
    button::Style {
        background: Some(background.into()),
        text_color: WHITE,
        border: rounded(BORDER_RADIUS_SM, Color::TRANSPARENT),
        ..Default::default()
    }
}

/// Ghost button style - no chrome until hovered.
pub fn button_ghost(_theme: &Theme, status: button::Status) -> button::Style {
    button::Style {
        background: match status {
            button::Status::Hovered | button::Status::Pressed => Some(GRAY_100.into()),
            _ => None,
        },
        text_color: if status == button::Status::Disabled {
            GRAY_500
        } else {
            GRAY_900
        },
        border: rounded(BORDER_RADIUS_SM, Color::TRANSPARENT),
        ..Default::default()
    }
}

/// Tab button style; `selected` highlights the active screen.
pub fn button_tab(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        if selected {
            button_primary(theme, button::Status::Active)
        } else {
            button_ghost(theme, status)
        }
    }
}

/// Pill badge for the Active / Blocked status cell.
pub fn status_badge(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let base = if active { SUCCESS } else { DANGER };
        let alpha = if status == button::Status::Hovered { 0.25 } else { 0.15 };
        button::Style {
            background: Some(Color { a: alpha, ..base }.into()),
            text_color: base,
            border: rounded(BORDER_RADIUS_FULL, Color::TRANSPARENT),
            ..Default::default()
        }
    }
}

// =============================================================================
// CONTAINERS & TEXT
// =============================================================================

/// Bordered card surface used for the table, menus and toasts.
pub fn surface(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(WHITE.into()),
        border: rounded(BORDER_RADIUS_LG, GRAY_200),
        shadow: Shadow {
            color: SHADOW_STRONG,
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        ..Default::default()
    }
}

/// Table header band.
pub fn table_header(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(GRAY_100.into()),
        ..Default::default()
    }
}

/// Muted secondary text.
pub fn text_muted(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(GRAY_500),
    }
}

/// Error text.
pub fn text_danger(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(DANGER),
    }
}

fn rounded(radius: f32, color: Color) -> Border {
    Border {
        radius: radius.into(),
        width: if color == Color::TRANSPARENT { 0.0 } else { 1.0 },
        color,
    }
}
