//! Custom theme definitions for the application - Dark Theme

use iced::widget::{button, container, scrollable, text_input};
use iced::{Background, Border, Color, Gradient, Shadow, Theme, Vector};

// --- Dark Color Palette ---

// Background gradient - near-black slate
pub const BACKGROUND_START: Color = Color::from_rgb(0.008, 0.024, 0.090); // Slate 950
pub const BACKGROUND_END: Color = Color::from_rgb(0.059, 0.090, 0.165); // Slate 900

// Primary colors - red to amber accent
pub const RED_600: Color = Color::from_rgb(0.863, 0.149, 0.149); // Primary actions
pub const RED_500: Color = Color::from_rgb(0.937, 0.267, 0.267); // Hover / danger
pub const RED_900_SOFT: Color = Color::from_rgba(0.937, 0.267, 0.267, 0.12); // Danger background
pub const ORANGE_500: Color = Color::from_rgb(0.976, 0.451, 0.086); // Accent mid
pub const AMBER_500: Color = Color::from_rgb(0.961, 0.620, 0.094); // Accent end

// Success color - Emerald
pub const EMERALD_500: Color = Color::from_rgb(0.063, 0.725, 0.506);
pub const EMERALD_900_SOFT: Color = Color::from_rgba(0.063, 0.725, 0.506, 0.12);

// Slate scale for text and surfaces
pub const SLATE_200: Color = Color::from_rgb(0.886, 0.910, 0.941); // Primary text
pub const SLATE_400: Color = Color::from_rgb(0.580, 0.639, 0.722); // Secondary text
pub const SLATE_500: Color = Color::from_rgb(0.392, 0.455, 0.545); // Muted text
pub const SLATE_700: Color = Color::from_rgb(0.200, 0.255, 0.333); // Borders
pub const SLATE_800: Color = Color::from_rgb(0.118, 0.161, 0.231); // Raised surface
pub const SLATE_900: Color = Color::from_rgb(0.059, 0.090, 0.165); // Surface

pub const WHITE: Color = Color::from_rgb(1.0, 1.0, 1.0);
pub const SURFACE_GLASS: Color = Color::from_rgba(0.059, 0.090, 0.165, 0.85);

// Text colors for compatibility
pub const TEXT_PRIMARY: Color = SLATE_200;
pub const TEXT_SECONDARY: Color = SLATE_400;

// Status colors
pub const ACCENT: Color = RED_500;
pub const SUCCESS: Color = EMERALD_500;
pub const WARNING: Color = AMBER_500;
pub const DANGER: Color = RED_500;

// --- Container Styles ---

pub struct MainGradientContainer;

impl container::StyleSheet for MainGradientContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(TEXT_PRIMARY),
            background: Some(Background::Gradient(Gradient::Linear(
                iced::gradient::Linear::new(iced::Radians(2.356)) // 135 degrees
                    .add_stop(0.0, BACKGROUND_START)
                    .add_stop(1.0, BACKGROUND_END),
            ))),
            ..Default::default()
        }
    }
}

pub struct GlassContainer;

impl container::StyleSheet for GlassContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(TEXT_PRIMARY),
            background: Some(Background::Color(SURFACE_GLASS)),
            border: Border {
                color: SLATE_700,
                width: 1.0,
                radius: 20.0.into(),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.35),
                offset: Vector::new(0.0, 6.0),
                blur_radius: 18.0,
            },
        }
    }
}

pub struct HeaderContainer;

impl container::StyleSheet for HeaderContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(TEXT_PRIMARY),
            background: Some(Background::Color(Color::from_rgba(0.008, 0.024, 0.090, 0.6))),
            border: Border {
                color: SLATE_800,
                width: 1.0,
                radius: 0.0.into(),
            },
            ..Default::default()
        }
    }
}

/// Pill showing engine connectivity in the header
pub enum StatusPill {
    Connected,
    Disconnected,
}

impl container::StyleSheet for StatusPill {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        let (background, text_color, border_color) = match self {
            StatusPill::Connected => (EMERALD_900_SOFT, EMERALD_500, EMERALD_500),
            StatusPill::Disconnected => (RED_900_SOFT, RED_500, RED_500),
        };

        container::Appearance {
            text_color: Some(text_color),
            background: Some(Background::Color(background)),
            border: Border {
                color: Color { a: 0.3, ..border_color },
                width: 1.0,
                radius: 14.0.into(),
            },
            ..Default::default()
        }
    }
}

/// Transient notification banner
pub enum NotificationBanner {
    Success,
    Warning,
}

impl container::StyleSheet for NotificationBanner {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        let (background, accent) = match self {
            NotificationBanner::Success => (EMERALD_900_SOFT, EMERALD_500),
            NotificationBanner::Warning => (RED_900_SOFT, AMBER_500),
        };

        container::Appearance {
            text_color: Some(accent),
            background: Some(Background::Color(background)),
            border: Border {
                color: Color { a: 0.4, ..accent },
                width: 1.0,
                radius: 12.0.into(),
            },
            ..Default::default()
        }
    }
}

/// Monospace-looking block for the engine script in the setup view
pub struct CodeBlockContainer;

impl container::StyleSheet for CodeBlockContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(SLATE_400),
            background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.5))),
            border: Border {
                color: SLATE_800,
                width: 1.0,
                radius: 10.0.into(),
            },
            ..Default::default()
        }
    }
}

// --- Button Styles ---

pub struct PrimaryButton;

impl button::StyleSheet for PrimaryButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Gradient(Gradient::Linear(
                iced::gradient::Linear::new(iced::Radians(0.0))
                    .add_stop(0.0, RED_600)
                    .add_stop(0.5, ORANGE_500)
                    .add_stop(1.0, AMBER_500),
            ))),
            text_color: WHITE,
            border: Border {
                radius: 14.0.into(),
                ..Default::default()
            },
            shadow: Shadow {
                color: Color::from_rgba(0.863, 0.149, 0.149, 0.35),
                offset: Vector::new(0.0, 4.0),
                blur_radius: 12.0,
            },
            shadow_offset: Vector::new(0.0, 0.0),
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        let active = self.active(style);
        button::Appearance {
            shadow: Shadow {
                color: Color::from_rgba(0.863, 0.149, 0.149, 0.5),
                offset: Vector::new(0.0, 6.0),
                blur_radius: 20.0,
            },
            ..active
        }
    }

    fn pressed(&self, style: &Self::Style) -> button::Appearance {
        let active = self.active(style);
        button::Appearance {
            shadow: Shadow {
                offset: Vector::new(0.0, 2.0),
                blur_radius: 8.0,
                ..active.shadow
            },
            ..active
        }
    }
}

pub struct SecondaryButton;

impl button::StyleSheet for SecondaryButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(SLATE_800)),
            text_color: SLATE_200,
            border: Border {
                radius: 12.0.into(),
                color: SLATE_700,
                width: 1.0,
            },
            shadow: Shadow::default(),
            shadow_offset: Vector::new(0.0, 0.0),
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        let active = self.active(style);
        button::Appearance {
            background: Some(Background::Color(SLATE_700)),
            ..active
        }
    }
}

pub struct IconButton;

impl button::StyleSheet for IconButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: None,
            text_color: SLATE_400,
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn hovered(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            text_color: SLATE_200,
            background: Some(Background::Color(SLATE_800)),
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Toggle pair used by the format selector
pub enum FormatToggle {
    Active,
    Inactive,
}

impl button::StyleSheet for FormatToggle {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        match self {
            Self::Active => button::Appearance {
                background: Some(Background::Color(SLATE_800)),
                text_color: WHITE,
                border: Border {
                    radius: 10.0.into(),
                    color: SLATE_700,
                    width: 1.0,
                },
                ..Default::default()
            },
            Self::Inactive => button::Appearance {
                background: None,
                text_color: SLATE_500,
                border: Border {
                    radius: 10.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            },
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        match self {
            Self::Active => self.active(style),
            Self::Inactive => button::Appearance {
                text_color: SLATE_400,
                ..self.active(style)
            },
        }
    }
}

// --- Input Styles ---

pub struct InputStyle;

impl text_input::StyleSheet for InputStyle {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> text_input::Appearance {
        text_input::Appearance {
            background: Background::Color(SLATE_900),
            border: Border {
                radius: 14.0.into(),
                width: 1.0,
                color: SLATE_700,
            },
            icon_color: SLATE_500,
        }
    }

    fn focused(&self, style: &Self::Style) -> text_input::Appearance {
        let active = self.active(style);
        text_input::Appearance {
            border: Border {
                color: RED_500,
                ..active.border
            },
            ..active
        }
    }

    fn placeholder_color(&self, _style: &Self::Style) -> Color {
        SLATE_500
    }

    fn value_color(&self, _style: &Self::Style) -> Color {
        SLATE_200
    }

    fn selection_color(&self, _style: &Self::Style) -> Color {
        Color::from_rgba(0.937, 0.267, 0.267, 0.3)
    }

    fn disabled(&self, style: &Self::Style) -> text_input::Appearance {
        let active = self.active(style);
        text_input::Appearance {
            background: Background::Color(SLATE_800),
            ..active
        }
    }

    fn disabled_color(&self, _style: &Self::Style) -> Color {
        SLATE_500
    }
}

pub struct InputErrorStyle;

impl text_input::StyleSheet for InputErrorStyle {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> text_input::Appearance {
        text_input::Appearance {
            background: Background::Color(SLATE_900),
            border: Border {
                radius: 14.0.into(),
                width: 1.0,
                color: RED_500,
            },
            icon_color: RED_500,
        }
    }

    fn focused(&self, style: &Self::Style) -> text_input::Appearance {
        self.active(style)
    }

    fn placeholder_color(&self, _style: &Self::Style) -> Color {
        SLATE_500
    }

    fn value_color(&self, _style: &Self::Style) -> Color {
        SLATE_200
    }

    fn selection_color(&self, _style: &Self::Style) -> Color {
        Color::from_rgba(0.937, 0.267, 0.267, 0.3)
    }

    fn disabled(&self, style: &Self::Style) -> text_input::Appearance {
        let active = self.active(style);
        text_input::Appearance {
            background: Background::Color(SLATE_800),
            ..active
        }
    }

    fn disabled_color(&self, _style: &Self::Style) -> Color {
        SLATE_500
    }
}

// --- Scrollable Styles ---

pub struct ScrollableStyle;

impl scrollable::StyleSheet for ScrollableStyle {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> scrollable::Appearance {
        scrollable::Appearance {
            container: container::Appearance::default(),
            scrollbar: scrollable::Scrollbar {
                background: Some(Background::Color(Color::TRANSPARENT)),
                border: Border::default(),
                scroller: scrollable::Scroller {
                    color: Color::from_rgba(0.937, 0.267, 0.267, 0.3),
                    border: Border {
                        radius: 4.0.into(),
                        ..Default::default()
                    },
                },
            },
            gap: None,
        }
    }

    fn hovered(
        &self,
        style: &Self::Style,
        is_mouse_over_scrollbar: bool,
    ) -> scrollable::Appearance {
        let active = self.active(style);
        if is_mouse_over_scrollbar {
            scrollable::Appearance {
                scrollbar: scrollable::Scrollbar {
                    scroller: scrollable::Scroller {
                        color: Color::from_rgba(0.937, 0.267, 0.267, 0.5),
                        ..active.scrollbar.scroller
                    },
                    ..active.scrollbar
                },
                ..active
            }
        } else {
            active
        }
    }
}

// --- Progress Bar Styles ---

pub struct ProgressBarStyle;

impl iced::widget::progress_bar::StyleSheet for ProgressBarStyle {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> iced::widget::progress_bar::Appearance {
        iced::widget::progress_bar::Appearance {
            background: Background::Color(SLATE_800),
            bar: Background::Gradient(Gradient::Linear(
                iced::gradient::Linear::new(iced::Radians(0.0))
                    .add_stop(0.0, RED_600)
                    .add_stop(1.0, AMBER_500),
            )),
            border_radius: 4.0.into(),
        }
    }
}

pub struct ProgressBarCompleted;

impl iced::widget::progress_bar::StyleSheet for ProgressBarCompleted {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> iced::widget::progress_bar::Appearance {
        iced::widget::progress_bar::Appearance {
            background: Background::Color(SLATE_800),
            bar: Background::Color(EMERALD_500),
            border_radius: 4.0.into(),
        }
    }
}
