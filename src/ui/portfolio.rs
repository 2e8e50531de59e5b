/// Portfolio section
///
/// Owns the catalog, the selection and the overlay's presentation state.
/// The grid and the overlay only ever talk to it through `Message`s, which
/// `update` maps onto `Selection::select` and `Selection::clear`.
use iced::widget::column;
use iced::{Element, Task};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

use super::grid::{self, ThumbnailState};
use super::overlay::DetailOverlay;
use super::{heading, muted};
use crate::assets::{self, thumbnail};
use crate::state::data::{Catalog, CatalogEntry};
use crate::state::selection::Selection;

#[derive(Debug, Clone)]
pub enum Message {
    /// A card's "View case study" action fired
    ViewCaseStudy(Arc<CatalogEntry>),
    /// Close button, backdrop press or Escape
    Close,
    /// Background thumbnail generation finished for an entry id
    ThumbnailReady(String, Result<PathBuf, String>),
}

pub struct PortfolioSection {
    catalog: Catalog,
    selection: Selection,
    overlay: DetailOverlay,
    thumbnails: HashMap<String, ThumbnailState>,
    assets_dir: PathBuf,
}

impl PortfolioSection {
    pub fn new(catalog: Catalog, assets_dir: PathBuf) -> Self {
        Self {
            catalog,
            selection: Selection::new(),
            overlay: DetailOverlay::default(),
            thumbnails: HashMap::new(),
            assets_dir,
        }
    }

    /// Start generating a thumbnail for every entry that has an image
    pub fn load_thumbnails(&mut self, cache_dir: Option<PathBuf>) -> Task<Message> {
        let mut tasks = Vec::new();

        for entry in self.catalog.list() {
            let Some(reference) = entry.primary_image() else {
                continue;
            };

            let Some(cache_dir) = cache_dir.clone() else {
                self.thumbnails.insert(
                    entry.id.clone(),
                    ThumbnailState::Unavailable("no thumbnail cache".to_string()),
                );
                continue;
            };

            self.thumbnails.insert(entry.id.clone(), ThumbnailState::Pending);

            let id = entry.id.clone();
            let source = assets::resolve(&self.assets_dir, reference);
            tasks.push(Task::perform(
                thumbnail::load_thumbnail(source, cache_dir, id.clone()),
                move |result| Message::ThumbnailReady(id.clone(), result),
            ));
        }

        Task::batch(tasks)
    }

    pub fn update(&mut self, message: Message, now: Instant) {
        match message {
            Message::ViewCaseStudy(entry) => {
                let was_open = self.selection.is_open();
                info!("🔍 Viewing case study '{}'", entry.title);
                self.selection.select(entry);

                // Replacing an open entry swaps content without replaying the entrance
                if !was_open {
                    self.overlay.opened(now);
                }
            }
            Message::Close => {
                if let Some(entry) = self.selection.current().cloned() {
                    self.selection.clear();
                    self.overlay.closed(entry, now);
                }
            }
            Message::ThumbnailReady(id, result) => {
                if self.catalog.get(&id).is_none() {
                    warn!("⚠️  Thumbnail for unknown entry '{}' ignored", id);
                    return;
                }

                let state = match result {
                    Ok(path) => ThumbnailState::Ready(path),
                    Err(e) => {
                        warn!("⚠️  Thumbnail for '{}' unavailable: {}", id, e);
                        ThumbnailState::Unavailable(e)
                    }
                };
                self.thumbnails.insert(id, state);
            }
        }
    }

    /// Advance the overlay transition
    pub fn tick(&mut self, now: Instant) {
        self.overlay.tick(now);
    }

    pub fn is_animating(&self) -> bool {
        self.overlay.is_animating()
    }

    /// The section as it sits in the page: heading plus grid
    pub fn view(&self, reveal: f32) -> Element<'_, Message> {
        column![
            heading("Selected Work", reveal),
            muted("Case studies and identity systems for enterprise clients."),
            grid::view(grid::cards(&self.catalog, &self.thumbnails)),
        ]
        .spacing(12)
        .into()
    }

    /// The overlay layer, when there is one to draw
    pub fn overlay_view(&self, now: Instant) -> Option<Element<'_, Message>> {
        self.overlay.view(&self.selection, &self.assets_dir, now)
    }
}
