/// Case-study detail overlay
///
/// Visible exactly when the portfolio selection holds an entry. Pointer
/// presses are classified by where they land:
/// - the close button closes the overlay
/// - the backdrop (outside the content card) closes the overlay
/// - the content card captures the press, so it never reaches the backdrop
///
/// After closing, the last entry is kept only to paint the exit transition;
/// that layer is not interactive.
use iced::widget::{
    button, center, column, container, image, mouse_area, opaque, row, scrollable, text,
};
use iced::{border, padding, Color, Element, Length, Theme};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use super::motion::{Direction, Transition, OVERLAY_DISTANCE, OVERLAY_DURATION};
use super::portfolio::Message;
use super::{placeholder_style, DARK, MUTED};
use crate::assets;
use crate::state::data::CatalogEntry;
use crate::state::selection::Selection;

const CONTENT_WIDTH: f32 = 760.0;
const BACKDROP_ALPHA: f32 = 0.8;

/// Where a pointer press landed while the overlay is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Backdrop,
    Content,
    CloseButton,
}

/// The message a press at `hit` produces, if any
pub fn on_press(hit: Hit) -> Option<Message> {
    match hit {
        Hit::Backdrop | Hit::CloseButton => Some(Message::Close),
        Hit::Content => None,
    }
}

/// Render model of the open overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detail<'a> {
    pub title: &'a str,
    pub desc: &'a str,
    /// (position, reference) in display order; position doubles as the key
    pub images: Vec<(usize, &'a str)>,
}

impl<'a> Detail<'a> {
    pub fn of(entry: &'a CatalogEntry) -> Self {
        Self {
            title: &entry.title,
            desc: &entry.desc,
            images: entry.images.iter().map(String::as_str).enumerate().collect(),
        }
    }
}

/// Presentation state: which transition is playing
#[derive(Debug, Clone, Default)]
pub struct DetailOverlay {
    transition: Option<Transition>,
    /// Entry being animated out after the selection was cleared
    leaving: Option<Arc<CatalogEntry>>,
}

impl DetailOverlay {
    /// Selection went from empty to an entry: play the entrance once.
    /// An exit still playing is reversed from where it is.
    pub fn opened(&mut self, now: Instant) {
        self.leaving = None;
        self.transition = Some(match self.transition {
            Some(current) => Transition::resume(
                Direction::Enter,
                current.visibility(now),
                now,
                OVERLAY_DURATION,
                OVERLAY_DISTANCE,
            ),
            None => Transition::enter(now, OVERLAY_DURATION, OVERLAY_DISTANCE),
        });
    }

    /// Selection was cleared: play the exit once with the entry that was shown.
    /// An entrance still playing is reversed from where it is.
    pub fn closed(&mut self, entry: Arc<CatalogEntry>, now: Instant) {
        self.leaving = Some(entry);
        self.transition = Some(match self.transition {
            Some(current) => Transition::resume(
                Direction::Exit,
                current.visibility(now),
                now,
                OVERLAY_DURATION,
                OVERLAY_DISTANCE,
            ),
            None => Transition::exit(now, OVERLAY_DURATION, OVERLAY_DISTANCE),
        });
    }

    /// Drop finished transitions
    pub fn tick(&mut self, now: Instant) {
        if self.transition.is_some_and(|t| t.is_finished(now)) {
            self.transition = None;
            self.leaving = None;
        }
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    #[cfg(test)]
    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    #[cfg(test)]
    pub fn is_leaving(&self) -> bool {
        self.leaving.is_some()
    }

    /// The overlay layer to stack over the page, if anything is to be drawn
    pub fn view<'a>(
        &'a self,
        selection: &'a Selection,
        assets_dir: &Path,
        now: Instant,
    ) -> Option<Element<'a, Message>> {
        let visibility = self.transition.map_or(1.0, |t| t.visibility(now));
        let offset = self.transition.map_or(0.0, |t| t.offset(now));

        if let Some(entry) = selection.current() {
            let card = content(Detail::of(entry), assets_dir, visibility, offset);
            return Some(backdrop(card, visibility, true));
        }

        self.leaving.as_ref().map(|entry| {
            let card = content(Detail::of(entry), assets_dir, visibility, offset);
            backdrop(card, visibility, false)
        })
    }
}

/// Full-window dimmed layer around the content card
fn backdrop<'a>(
    card: Element<'a, Message>,
    visibility: f32,
    interactive: bool,
) -> Element<'a, Message> {
    let layer = center(card).style(move |_theme: &Theme| container::Style {
        background: Some(
            Color {
                a: BACKDROP_ALPHA * visibility,
                ..Color::BLACK
            }
            .into(),
        ),
        ..container::Style::default()
    });

    if !interactive {
        return layer.into();
    }

    let mut area = mouse_area(layer);
    if let Some(message) = on_press(Hit::Backdrop) {
        area = area.on_press(message);
    }
    // Nothing under the backdrop sees the press either
    opaque(area)
}

fn content<'a>(
    detail: Detail<'a>,
    assets_dir: &Path,
    visibility: f32,
    offset: f32,
) -> Element<'a, Message> {
    let close = button(text("✕").size(18))
        .style(button::text)
        .on_press_maybe(on_press(Hit::CloseButton));

    let header = row![
        text(detail.title)
            .size(28)
            .width(Length::Fill)
            .color(Color { a: visibility, ..DARK }),
        close,
    ];

    let images: Element<'a, Message> = if detail.images.is_empty() {
        container(text("No images for this case study").color(MUTED))
            .padding(24)
            .width(Length::Fill)
            .center_x(Length::Fill)
            .style(placeholder_style)
            .into()
    } else {
        column(
            detail
                .images
                .iter()
                .map(|(_, reference)| -> Element<'a, Message> {
                    image(image::Handle::from_path(assets::resolve(assets_dir, reference)))
                        .width(Length::Fill)
                        .opacity(visibility)
                        .into()
                }),
        )
        .spacing(12)
        .into()
    };

    let body = column![
        header,
        text(detail.desc).color(Color { a: visibility, ..MUTED }),
        scrollable(images).height(Length::Shrink),
    ]
    .spacing(12);

    let card = container(body)
        .padding(24)
        .width(CONTENT_WIDTH)
        .max_height(640.0)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Color { a: visibility, ..Color::WHITE }.into()),
            border: border::rounded(14.0),
            ..container::Style::default()
        });

    let mut area = mouse_area(card);
    if let Some(message) = on_press(Hit::Content) {
        area = area.on_press(message);
    }
    // Presses inside the card stop here and never reach the backdrop
    let card = opaque(area);

    container(card).padding(padding::top(offset)).into()
}
