/// Static page sections
///
/// Header, hero, trusted-by strip, credibility metrics, services, about
/// and footer. Pure content: the only interaction is a few buttons that
/// open contact channels.
use chrono::Datelike;
use iced::gradient::Linear;
use iced::widget::{button, column, container, image, row, text, Space};
use iced::{border, Background, Color, ContentFit, Degrees, Element, Gradient, Length, Theme};
use iced_aw::Wrap;
use std::path::Path;

use super::{card_style, heading, muted, placeholder_style, DARK, OCEAN, SKY};
use crate::assets;
use crate::state::contact::Channel;
use crate::{ui::contact, Message};

const NAV: [&str; 4] = ["Services", "Portfolio", "About", "Contact"];
const FEATURES: [&str; 3] = ["Brand Systems", "Design Ops", "Tokenized UI"];
const SOCIALS: [&str; 4] = ["Twitter", "LinkedIn", "Behance", "Dribbble"];
const LOGO_COUNT: usize = 8;

/// A headline number with its caption
pub struct Metric {
    pub value: &'static str,
    pub caption: &'static str,
}

pub static METRICS: [Metric; 3] = [
    Metric { value: "120+", caption: "Enterprise projects delivered" },
    Metric { value: "50%", caption: "Average brand recognition uplift" },
    Metric { value: "10", caption: "Design tokens shipped to codebases" },
];

pub struct Service {
    pub title: &'static str,
    pub desc: &'static str,
}

pub static SERVICES: [Service; 3] = [
    Service {
        title: "Logo Systems",
        desc: "Flexible marks + lockups for multi-channel scale.",
    },
    Service {
        title: "Enterprise Branding",
        desc: "Positioning, voice, and identity strategy.",
    },
    Service {
        title: "Design Ops",
        desc: "Tokens, libraries, and handoff-ready assets.",
    },
];

/// Client logo references, `/logo1.png` onwards
pub fn logo_refs() -> Vec<String> {
    (0..LOGO_COUNT)
        .map(|i| format!("/logo{}.png", (i % 9) + 1))
        .collect()
}

pub fn copyright(brand_name: &str, year: i32) -> String {
    format!("© {} {}", year, brand_name)
}

pub fn header<'a>(brand_name: &'a str) -> Element<'a, Message> {
    let swatch = container(Space::new(44, 44)).style(|_theme: &Theme| container::Style {
        background: Some(Background::Gradient(Gradient::Linear(
            Linear::new(Degrees(135.0))
                .add_stop(0.0, SKY)
                .add_stop(1.0, OCEAN),
        ))),
        border: border::rounded(10.0),
        ..container::Style::default()
    });

    let brand = row![swatch, text(brand_name).size(20)]
        .spacing(10)
        .align_y(iced::Alignment::Center);

    let nav = row(NAV.iter().map(|label| -> Element<'a, Message> { text(*label).into() })).spacing(16);

    let actions = row![
        open_button("Contact", Channel::Email, button::secondary),
        open_button("Book Consult", Channel::BookMeeting, button::primary),
    ]
    .spacing(10);

    container(
        row![brand, Space::with_width(Length::Fill), nav, Space::with_width(24), actions]
            .align_y(iced::Alignment::Center),
    )
    .padding([12, 22])
    .width(Length::Fill)
    .style(|_theme: &Theme| container::Style {
        background: Some(Color { a: 0.92, ..Color::WHITE }.into()),
        border: border::width(1.0).color(Color { a: 0.04, ..DARK }),
        ..container::Style::default()
    })
    .into()
}

pub fn hero<'a>(assets_dir: &Path, reveal: f32) -> Element<'a, Message> {
    let pills = row(FEATURES.iter().map(|label| pill(label))).spacing(8);

    let left = column![
        text("Enterprise-grade brand & logo systems that scale.")
            .size(44)
            .color(Color { a: reveal, ..DARK }),
        muted(
            "We build identity systems, governance, and design tokens so your brand \
             behaves predictably across all teams and touchpoints."
        ),
        row![
            open_button("Book a consult", Channel::BookMeeting, button::primary),
            open_button("Book a Call", Channel::BookCall, button::secondary),
        ]
        .spacing(12),
        pills,
    ]
    .spacing(18)
    .width(Length::Fill);

    let visual = container(
        image(image::Handle::from_path(assets::resolve(assets_dir, "/Hero.jpg")))
            .content_fit(ContentFit::Cover)
            .opacity(reveal),
    )
    .width(520)
    .style(card_style);

    row![left, visual].spacing(32).into()
}

pub fn trusted<'a>(assets_dir: &Path) -> Element<'a, Message> {
    let logos = logo_refs()
        .iter()
        .enumerate()
        .map(|(idx, reference)| -> Element<'a, Message> {
            let path = assets::resolve(assets_dir, reference);
            if path.is_file() {
                image(image::Handle::from_path(path))
                    .width(160)
                    .height(48)
                    .content_fit(ContentFit::Contain)
                    .into()
            } else {
                container(muted(format!("Client {}", idx + 1)))
                    .width(160)
                    .height(48)
                    .center_x(160)
                    .center_y(48)
                    .style(placeholder_style)
                    .into()
            }
        })
        .collect();

    column![
        muted("Trusted by"),
        Wrap::with_elements(logos).spacing(28.0).line_spacing(12.0),
    ]
    .spacing(12)
    .into()
}

pub fn credibility<'a>(reveal: f32) -> Element<'a, Message> {
    let metrics = row(METRICS.iter().map(|metric| -> Element<'a, Message> {
        container(
            column![text(metric.value).size(32), muted(metric.caption)]
                .spacing(4)
                .align_x(iced::Alignment::Center),
        )
        .padding(20)
        .width(Length::Fill)
        .style(card_style)
        .into()
    }))
    .spacing(16);

    column![
        metrics,
        text("Process you can trust").size(24).color(Color { a: reveal, ..DARK }),
        muted(
            "We combine research, governance, and design ops to deliver identity systems \
             that survive mergers, scale-ups, and global rollouts."
        ),
    ]
    .spacing(12)
    .into()
}

pub fn services<'a>(reveal: f32) -> Element<'a, Message> {
    let cards = SERVICES
        .iter()
        .map(|service| -> Element<'a, Message> {
            let icon = container(text(&service.title[..1]).size(20).color(Color::WHITE))
                .width(48)
                .height(48)
                .center_x(48)
                .center_y(48)
                .style(|_theme: &Theme| container::Style {
                    background: Some(OCEAN.into()),
                    border: border::rounded(10.0),
                    ..container::Style::default()
                });

            container(column![icon, text(service.title).size(20), muted(service.desc)].spacing(8))
                .padding(18)
                .width(280)
                .style(card_style)
                .into()
        })
        .collect();

    column![
        heading("Services", reveal),
        muted("Enterprise creative services built for scale."),
        Wrap::with_elements(cards).spacing(20.0).line_spacing(20.0),
    ]
    .spacing(12)
    .into()
}

pub fn about<'a>(assets_dir: &Path, reveal: f32) -> Element<'a, Message> {
    let credibility = container(
        column![
            text("Enterprise credibility").size(18),
            muted("Process, audit, and governance for brand at scale."),
        ]
        .spacing(6),
    )
    .padding(18)
    .width(Length::Fill)
    .style(card_style);

    let founder = container(
        row![
            image(image::Handle::from_path(assets::resolve(assets_dir, "/founder.jpg")))
                .width(88)
                .height(88)
                .content_fit(ContentFit::Cover),
            column![
                text("Founder — Lead Strategist").size(18),
                muted("Ex-product design leader with multi-year enterprise branding experience."),
            ]
            .spacing(6),
        ]
        .spacing(12)
        .align_y(iced::Alignment::Center),
    )
    .padding(18)
    .width(Length::Fill)
    .style(card_style);

    column![
        heading("About", reveal),
        muted(
            "We partner with product & brand teams to deliver consistent, measurable \
             brand systems and creative outcomes."
        ),
        row![credibility, founder].spacing(16),
    ]
    .spacing(12)
    .into()
}

pub fn footer<'a>(brand_name: &str) -> Element<'a, Message> {
    let year = chrono::Local::now().year();
    let socials =
        row(SOCIALS.iter().map(|label| -> Element<'a, Message> { muted(*label).into() })).spacing(12);

    column![
        row![muted(copyright(brand_name, year)), Space::with_width(Length::Fill), socials],
        container(muted("Built with Rust + iced").size(12)).center_x(Length::Fill),
    ]
    .spacing(8)
    .padding([36, 0])
    .into()
}

fn pill<'a>(label: &'a str) -> Element<'a, Message> {
    container(text(label))
        .padding([8, 12])
        .style(|_theme: &Theme| container::Style {
            background: Some(Color { a: 0.06, ..OCEAN }.into()),
            border: border::rounded(999.0),
            ..container::Style::default()
        })
        .into()
}

fn open_button(
    label: &'static str,
    channel: Channel,
    style: fn(&Theme, button::Status) -> button::Style,
) -> Element<'static, Message> {
    button(label)
        .style(style)
        .padding([10, 14])
        .on_press(Message::Contact(contact::Message::Open(channel)))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_logo_refs() {
        let logos = logo_refs();
        assert_eq!(logos.len(), 8);
        assert_eq!(logos.first().map(String::as_str), Some("/logo1.png"));
        assert_eq!(logos.last().map(String::as_str), Some("/logo8.png"));
    }

    #[test]
    fn test_copyright_line() {
        assert_eq!(copyright("GraphicsEnterprise", 2026), "© 2026 GraphicsEnterprise");
    }

    #[test]
    fn test_service_titles_are_unique() {
        let titles: HashSet<&str> = SERVICES.iter().map(|s| s.title).collect();
        assert_eq!(titles.len(), SERVICES.len());
    }

    #[test]
    fn test_service_icons_use_first_letter() {
        let initials: HashSet<&str> = SERVICES.iter().map(|s| &s.title[..1]).collect();
        assert_eq!(initials, HashSet::from(["L", "E", "D"]));
    }
}
