/// UI module
///
/// Views and the view-side state that goes with them:
/// - Brand palette and shared styles (this file)
/// - Enter/exit transitions (motion.rs)
/// - Portfolio grid cards (grid.rs)
/// - Case-study detail overlay (overlay.rs)
/// - Portfolio section tying grid, selection and overlay together (portfolio.rs)
/// - Contact form and channels (contact.rs)
/// - Static page sections (sections.rs)

pub mod contact;
pub mod grid;
pub mod motion;
pub mod overlay;
pub mod portfolio;
pub mod sections;

use iced::theme::Palette;
use iced::widget::{container, text, Text};
use iced::{border, padding, Color, Element, Shadow, Theme, Vector};
use std::time::Instant;

use motion::Transition;

pub const SKY: Color = Color { r: 0.529, g: 0.808, b: 0.922, a: 1.0 };
pub const OCEAN: Color = Color { r: 0.110, g: 0.663, b: 0.788, a: 1.0 };
pub const DARK: Color = Color { r: 0.067, g: 0.067, b: 0.067, a: 1.0 };
pub const MUTED: Color = Color { r: 0.420, g: 0.447, b: 0.502, a: 1.0 };
pub const WHATSAPP: Color = Color { r: 0.145, g: 0.827, b: 0.400, a: 1.0 };
const DANGER: Color = Color { r: 0.863, g: 0.149, b: 0.149, a: 1.0 };

/// Light theme in the studio's sky/ocean palette
pub fn theme(brand_name: &str) -> Theme {
    Theme::custom(
        brand_name.to_string(),
        Palette {
            background: Color::WHITE,
            text: DARK,
            primary: OCEAN,
            success: WHATSAPP,
            danger: DANGER,
        },
    )
}

/// Secondary copy
pub fn muted<'a>(content: impl text::IntoFragment<'a>) -> Text<'a> {
    text(content).color(MUTED)
}

/// Section heading that fades with the page intro
pub fn heading<'a>(content: impl text::IntoFragment<'a>, visibility: f32) -> Text<'a> {
    text(content).size(32).color(Color { a: visibility, ..DARK })
}

/// White card with a soft shadow
pub fn card_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Color::WHITE.into()),
        border: border::rounded(12.0).width(1.0).color(Color { a: 0.06, ..DARK }),
        shadow: Shadow {
            color: Color { a: 0.06, ..DARK },
            offset: Vector::new(0.0, 10.0),
            blur_radius: 30.0,
        },
        ..container::Style::default()
    }
}

/// Tinted tile used where an image is missing
pub fn placeholder_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Color { a: 0.12, ..SKY }.into()),
        border: border::rounded(8.0),
        ..container::Style::default()
    }
}

/// Shift content down by the transition's current offset
pub fn fade_up<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    transition: &Transition,
    now: Instant,
) -> Element<'a, Message> {
    container(content)
        .padding(padding::top(transition.offset(now)))
        .into()
}
