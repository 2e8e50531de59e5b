use iced::keyboard::{self, key::Named, Key};
use iced::widget::{column, container, scrollable, stack};
use iced::{Element, Length, Subscription, Task, Theme};
use std::time::{Duration, Instant};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod assets;
mod error;
mod state;
mod ui;

use assets::thumbnail;
use state::config::SiteConfig;
use state::data::Catalog;
use ui::contact::{self, ContactSection};
use ui::motion::{Transition, FADE_UP_DISTANCE, FADE_UP_DURATION};
use ui::portfolio::{self, PortfolioSection};
use ui::sections;

/// Frame interval while a transition is playing
const FRAME: Duration = Duration::from_millis(16);

/// Main application state
struct Showcase {
    config: SiteConfig,
    /// Portfolio grid, selection and detail overlay
    portfolio: PortfolioSection,
    contact: ContactSection,
    /// Page fade-up on first paint
    intro: Transition,
    /// Time of the last frame or interaction
    now: Instant,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    Portfolio(portfolio::Message),
    Contact(contact::Message),
    /// Animation frame while a transition is playing
    Tick(Instant),
}

impl Showcase {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let config = SiteConfig::load();

        let catalog = config.catalog().unwrap_or_else(|e| {
            warn!("⚠️  {}; using the built-in portfolio", e);
            Catalog::builtin()
        });

        info!(
            "🎨 {} showcase initialized with {} case studies",
            config.brand_name,
            catalog.len()
        );
        if catalog.is_empty() {
            warn!("⚠️  Portfolio is empty; the grid shows a placeholder");
        }

        let cache_dir = match thumbnail::thumbnail_cache_dir() {
            Ok(dir) => Some(dir),
            Err(e) => {
                warn!("⚠️  Thumbnails disabled: {}", e);
                None
            }
        };

        let mut portfolio = PortfolioSection::new(catalog, config.assets_dir.clone());
        let task = portfolio.load_thumbnails(cache_dir).map(Message::Portfolio);
        let contact = ContactSection::new(config.contact.clone());

        let now = Instant::now();
        (
            Showcase {
                config,
                portfolio,
                contact,
                intro: Transition::enter(now, FADE_UP_DURATION, FADE_UP_DISTANCE),
                now,
            },
            task,
        )
    }

    fn title(&self) -> String {
        format!("{} — Brand & Logo Systems", self.config.brand_name)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Portfolio(message) => {
                self.now = Instant::now();
                self.portfolio.update(message, self.now);
            }
            Message::Contact(message) => self.contact.update(message),
            Message::Tick(now) => {
                self.now = now;
                self.portfolio.tick(now);
            }
        }

        Task::none()
    }

    fn is_animating(&self) -> bool {
        self.portfolio.is_animating() || !self.intro.is_finished(self.now)
    }

    fn subscription(&self) -> Subscription<Message> {
        let keys = keyboard::on_key_press(|key, _modifiers| match key {
            Key::Named(Named::Escape) => Some(Message::Portfolio(portfolio::Message::Close)),
            _ => None,
        });

        if self.is_animating() {
            Subscription::batch([keys, iced::time::every(FRAME).map(Message::Tick)])
        } else {
            keys
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let now = self.now;
        let reveal = self.intro.visibility(now);
        let assets_dir = &self.config.assets_dir;

        let page = column![
            ui::fade_up(sections::hero(assets_dir, reveal), &self.intro, now),
            sections::trusted(assets_dir),
            sections::credibility(reveal),
            sections::services(reveal),
            self.portfolio.view(reveal).map(Message::Portfolio),
            sections::about(assets_dir, reveal),
            self.contact.view(reveal).map(Message::Contact),
            sections::footer(&self.config.brand_name),
        ]
        .spacing(56)
        .padding(22)
        .max_width(1200);

        let body = column![
            sections::header(&self.config.brand_name),
            scrollable(container(page).center_x(Length::Fill)).height(Length::Fill),
        ];

        match self.portfolio.overlay_view(now) {
            Some(layer) => stack![body, layer.map(Message::Portfolio)].into(),
            None => body.into(),
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        ui::theme(&self.config.brand_name)
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,brand_showcase=info")),
        )
        .init();

    iced::application(Showcase::title, Showcase::update, Showcase::view)
        .subscription(Showcase::subscription)
        .theme(Showcase::theme)
        .window_size((1280.0, 900.0))
        .centered()
        .run_with(Showcase::new)
}
