/// Portfolio grid
///
/// One card per catalog entry, in catalog order. Each card carries the
/// exact entry it represents, so "View case study" always selects that
/// entry and no other.
use iced::widget::{button, column, container, image, text};
use iced::{ContentFit, Element, Length};
use iced_aw::Wrap;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::portfolio::Message;
use super::{card_style, muted, placeholder_style};
use crate::state::data::{Catalog, CatalogEntry};

const CARD_WIDTH: f32 = 280.0;
const CARD_IMAGE_HEIGHT: f32 = 180.0;

/// Progress of a card's thumbnail, keyed by entry id in the section
#[derive(Debug, Clone, PartialEq)]
pub enum ThumbnailState {
    Pending,
    Ready(PathBuf),
    Unavailable(String),
}

/// What a card shows in its image slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Thumb<'a> {
    Loading,
    Ready(&'a Path),
    Unavailable,
    NoImage,
}

/// Render model for one grid card
#[derive(Debug, Clone, Copy)]
pub struct Card<'a> {
    pub entry: &'a Arc<CatalogEntry>,
    pub thumb: Thumb<'a>,
}

impl<'a> Card<'a> {
    /// The message emitted by this card's "View case study" action
    pub fn view_message(&self) -> Message {
        Message::ViewCaseStudy(Arc::clone(self.entry))
    }
}

/// Build the cards for `catalog`, in catalog order
pub fn cards<'a>(
    catalog: &'a Catalog,
    thumbnails: &'a HashMap<String, ThumbnailState>,
) -> Vec<Card<'a>> {
    catalog
        .list()
        .iter()
        .map(|entry| {
            let thumb = match (entry.primary_image(), thumbnails.get(&entry.id)) {
                (None, _) => Thumb::NoImage,
                (Some(_), Some(ThumbnailState::Ready(path))) => Thumb::Ready(path),
                (Some(_), Some(ThumbnailState::Unavailable(_))) => Thumb::Unavailable,
                (Some(_), Some(ThumbnailState::Pending) | None) => Thumb::Loading,
            };
            Card { entry, thumb }
        })
        .collect()
}

pub fn view<'a>(cards: Vec<Card<'a>>) -> Element<'a, Message> {
    if cards.is_empty() {
        return muted("New case studies are on their way.").into();
    }

    Wrap::with_elements(cards.into_iter().map(card_view).collect())
        .spacing(20.0)
        .line_spacing(20.0)
        .into()
}

fn card_view(card: Card<'_>) -> Element<'_, Message> {
    let entry = card.entry;

    let picture: Element<'_, Message> = match card.thumb {
        Thumb::Ready(path) => image(image::Handle::from_path(path))
            .width(Length::Fill)
            .height(CARD_IMAGE_HEIGHT)
            .content_fit(ContentFit::Cover)
            .into(),
        Thumb::Loading => placeholder("Loading…"),
        Thumb::Unavailable => placeholder("Preview unavailable"),
        Thumb::NoImage => placeholder("No images yet"),
    };

    let content = column![
        picture,
        text(&entry.title).size(20),
        muted(&entry.desc),
        button(text("View case study →"))
            .style(button::text)
            .padding(0)
            .on_press(card.view_message()),
    ]
    .spacing(8);

    container(content)
        .width(CARD_WIDTH)
        .padding(18)
        .style(card_style)
        .into()
}

fn placeholder<'a>(label: &'a str) -> Element<'a, Message> {
    container(muted(label).size(14))
        .width(Length::Fill)
        .height(CARD_IMAGE_HEIGHT)
        .center_x(Length::Fill)
        .center_y(CARD_IMAGE_HEIGHT)
        .style(placeholder_style)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            CatalogEntry::new("p1", "Project Alpha", "Enterprise rebrand + system", &["/a1.jpg", "/a2.jpg"]),
            CatalogEntry::new("p2", "Project Beta", "Global logo suite", &["/b1.jpg"]),
            CatalogEntry::new("p3", "Sketches", "", &[]),
        ])
        .unwrap()
    }

    #[test]
    fn test_one_card_per_entry_in_order() {
        let catalog = catalog();
        let thumbnails = HashMap::new();
        let cards = cards(&catalog, &thumbnails);

        let ids: Vec<&str> = cards.iter().map(|c| c.entry.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2", "p3"]);
    }

    #[test]
    fn test_empty_catalog_has_no_cards() {
        let catalog = Catalog::default();
        let thumbnails = HashMap::new();
        assert!(cards(&catalog, &thumbnails).is_empty());
    }

    #[test]
    fn test_view_message_carries_the_cards_own_entry() {
        let catalog = catalog();
        let thumbnails = HashMap::new();

        for (card, entry) in cards(&catalog, &thumbnails).iter().zip(catalog.list()) {
            match card.view_message() {
                Message::ViewCaseStudy(selected) => assert!(Arc::ptr_eq(&selected, entry)),
                other => panic!("unexpected message {:?}", other),
            }
        }
    }

    #[test]
    fn test_thumb_reflects_thumbnail_state() {
        let catalog = catalog();
        let mut thumbnails = HashMap::new();
        thumbnails.insert("p1".to_string(), ThumbnailState::Ready(PathBuf::from("/cache/p1.png")));
        thumbnails.insert("p2".to_string(), ThumbnailState::Unavailable("missing".to_string()));

        let cards = cards(&catalog, &thumbnails);
        assert_eq!(cards[0].thumb, Thumb::Ready(Path::new("/cache/p1.png")));
        assert_eq!(cards[1].thumb, Thumb::Unavailable);
        assert_eq!(cards[2].thumb, Thumb::NoImage);

        thumbnails.insert("p2".to_string(), ThumbnailState::Pending);
        let cards = super::cards(&catalog, &thumbnails);
        assert_eq!(cards[1].thumb, Thumb::Loading);
    }
}
