/// Contact section: the inquiry form plus direct channels
use iced::widget::{button, column, container, row, text, text_editor, text_input};
use iced::{Color, Element, Length};
use tracing::warn;

use super::{card_style, heading, muted, WHATSAPP};
use crate::state::config::ContactConfig;
use crate::state::contact::{Channel, ContactForm};

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    MessageEdited(text_editor::Action),
    Submit,
    Open(Channel),
}

/// Feedback shown under the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Sent,
    Invalid(String),
    LinkFailed(String),
}

pub struct ContactSection {
    form: ContactForm,
    /// Editor buffer backing `form.message`
    editor: text_editor::Content,
    notice: Option<Notice>,
    links: ContactConfig,
}

impl ContactSection {
    pub fn new(links: ContactConfig) -> Self {
        Self {
            form: ContactForm::default(),
            editor: text_editor::Content::new(),
            notice: None,
            links,
        }
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::NameChanged(name) => self.form.name = name,
            Message::EmailChanged(email) => self.form.email = email,
            Message::MessageEdited(action) => {
                self.editor.perform(action);
                self.form.message = self.editor.text();
            }
            Message::Submit => match self.form.submit() {
                Ok(_) => {
                    self.editor = text_editor::Content::new();
                    self.notice = Some(Notice::Sent);
                }
                Err(e) => self.notice = Some(Notice::Invalid(e.to_string())),
            },
            Message::Open(channel) => {
                let url = self.links.link(channel);
                if let Err(e) = webbrowser::open(&url) {
                    warn!("⚠️  Could not open {}: {}", url, e);
                    self.notice = Some(Notice::LinkFailed(format!("Could not open {}", url)));
                }
            }
        }
    }

    pub fn view(&self, reveal: f32) -> Element<'_, Message> {
        let fields = column![
            row![
                text_input("Full name", &self.form.name)
                    .on_input(Message::NameChanged)
                    .padding(12),
                text_input("Email", &self.form.email)
                    .on_input(Message::EmailChanged)
                    .padding(12),
            ]
            .spacing(12),
            text_editor(&self.editor)
                .placeholder("Brief / message")
                .on_action(Message::MessageEdited)
                .padding(12)
                .height(120),
            row![
                button("Send message")
                    .style(button::primary)
                    .padding([10, 14])
                    .on_press(Message::Submit),
                channel_button(Channel::BookMeeting, button::secondary),
                channel_button(Channel::WhatsApp, button::success),
            ]
            .spacing(12),
        ]
        .spacing(12);

        let mut form = column![fields].spacing(12);
        if let Some(notice) = &self.notice {
            form = form.push(notice_view(notice));
        }

        let side = column![
            contact_card("Email", &self.links.email),
            contact_card("Office", "Remote / By appointment"),
            channel_button(Channel::BookCall, button::secondary),
            channel_button(Channel::Email, button::secondary),
        ]
        .spacing(12)
        .width(320);

        column![
            heading("Contact", reveal),
            muted(
                "Send a short brief, book a consult, or message us directly. \
                 We reply to enterprise inquiries within 48 hours."
            ),
            row![
                container(form)
                    .padding(18)
                    .width(Length::Fill)
                    .style(card_style),
                side,
            ]
            .spacing(24),
        ]
        .spacing(12)
        .into()
    }
}

fn channel_button(
    channel: Channel,
    style: fn(&iced::Theme, button::Status) -> button::Style,
) -> Element<'static, Message> {
    button(channel.label())
        .style(style)
        .padding([10, 14])
        .on_press(Message::Open(channel))
        .into()
}

fn contact_card<'a>(title: &'a str, detail: &'a str) -> Element<'a, Message> {
    container(column![text(title).size(16), muted(detail)].spacing(4))
        .padding(12)
        .width(Length::Fill)
        .style(card_style)
        .into()
}

fn notice_view(notice: &Notice) -> Element<'_, Message> {
    match notice {
        Notice::Sent => text("Message sent (mock). Replace with API/CRM integration.")
            .color(WHATSAPP)
            .into(),
        Notice::Invalid(reason) | Notice::LinkFailed(reason) => text(reason)
            .color(Color::from_rgb(0.863, 0.149, 0.149))
            .into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section() -> ContactSection {
        ContactSection::new(ContactConfig::default())
    }

    #[test]
    fn test_empty_submit_shows_required_notice() {
        let mut section = section();
        section.update(Message::NameChanged("Ada".to_string()));
        section.update(Message::Submit);

        assert_eq!(
            section.notice,
            Some(Notice::Invalid("Please fill required fields".to_string()))
        );
        assert_eq!(section.form.name, "Ada");
    }

    #[test]
    fn test_valid_submit_resets_form() {
        let mut section = section();
        section.update(Message::NameChanged("Ada".to_string()));
        section.update(Message::EmailChanged("ada@example.com".to_string()));
        section.form.message = "A rebrand for 2027".to_string();
        section.update(Message::Submit);

        assert_eq!(section.notice, Some(Notice::Sent));
        assert_eq!(section.form, ContactForm::default());
    }
}
