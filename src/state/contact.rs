/// Contact form and outbound contact channels
///
/// Submissions are mocked: a valid form is logged and reset, nothing is
/// sent anywhere.
use chrono::{DateTime, Local};
use tracing::info;

use super::config::ContactConfig;
use crate::error::ContactError;

/// Current values of the contact form fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A validated, trimmed submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub message: String,
    pub received_at: DateTime<Local>,
}

impl ContactForm {
    /// Validate and "send" the form.
    ///
    /// On success the form is cleared; on failure it keeps what the visitor
    /// typed.
    pub fn submit(&mut self) -> Result<Inquiry, ContactError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();

        let missing: Vec<&'static str> = [("name", name), ("email", email), ("message", message)]
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(field, _)| field)
            .collect();

        if !missing.is_empty() {
            return Err(ContactError::MissingFields(missing));
        }

        if !is_plausible_email(email) {
            return Err(ContactError::InvalidEmail);
        }

        let inquiry = Inquiry {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
            received_at: Local::now(),
        };

        // Delivery is mocked: the inquiry is only logged
        info!(
            "✉️  Inquiry from {} <{}> at {} ({} chars, mock delivery)",
            inquiry.name,
            inquiry.email,
            inquiry.received_at.format("%Y-%m-%d %H:%M"),
            inquiry.message.len()
        );

        *self = Self::default();
        Ok(inquiry)
    }
}

/// `local@domain.tld` shape, the same check a browser email input applies
fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}

/// The ways a visitor can reach the studio besides the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    BookCall,
    BookMeeting,
    WhatsApp,
    Email,
}

impl Channel {
    pub fn label(self) -> &'static str {
        match self {
            Channel::BookCall => "Book a Call",
            Channel::BookMeeting => "Book a meeting",
            Channel::WhatsApp => "Message on WhatsApp",
            Channel::Email => "Send Email",
        }
    }
}

impl ContactConfig {
    /// The URL to open for `channel`
    pub fn link(&self, channel: Channel) -> String {
        match channel {
            Channel::BookCall => self.call_url.clone(),
            Channel::BookMeeting => self.booking_url.clone(),
            Channel::WhatsApp => whatsapp_link(&self.whatsapp_number, &self.whatsapp_greeting),
            Channel::Email => format!("mailto:{}", self.email),
        }
    }
}

/// `wa.me` deep link with a prefilled message
pub fn whatsapp_link(number: &str, greeting: &str) -> String {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    format!("https://wa.me/{}?text={}", digits, urlencoding::encode(greeting))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "  Ada  ".to_string(),
            email: "ada@example.com ".to_string(),
            message: "Need a new identity system.".to_string(),
        }
    }

    #[test]
    fn test_submit_trims_and_resets() {
        let mut form = filled();
        let inquiry = form.submit().unwrap();

        assert_eq!(inquiry.name, "Ada");
        assert_eq!(inquiry.email, "ada@example.com");
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_whitespace_only_fields_are_missing() {
        let mut form = ContactForm {
            name: "   ".to_string(),
            email: "ada@example.com".to_string(),
            message: "\n\t".to_string(),
        };

        let err = form.submit().unwrap_err();
        assert_eq!(err, ContactError::MissingFields(vec!["name", "message"]));
        assert_eq!(err.to_string(), "Please fill required fields");
        // Input is kept for the visitor to fix
        assert_eq!(form.email, "ada@example.com");
    }

    #[test]
    fn test_invalid_email_rejected() {
        for email in ["ada", "@example.com", "ada@", "a da@example.com"] {
            let mut form = ContactForm {
                email: email.to_string(),
                ..filled()
            };
            assert_eq!(form.submit(), Err(ContactError::InvalidEmail), "{email}");
        }
    }

    #[test]
    fn test_whatsapp_link_encodes_greeting() {
        let link = whatsapp_link("+234 801 234 5678", "Hi — let's talk");
        assert_eq!(
            link,
            "https://wa.me/2348012345678?text=Hi%20%E2%80%94%20let%27s%20talk"
        );
    }

    #[test]
    fn test_channel_links() {
        let contact = ContactConfig::default();
        assert_eq!(contact.link(Channel::Email), "mailto:contact@designer.example");
        assert_eq!(contact.link(Channel::BookMeeting), "https://calendly.com/your-link");
        assert_eq!(contact.link(Channel::BookCall), "https://cal.com/your-username");
        assert!(contact.link(Channel::WhatsApp).starts_with("https://wa.me/2348012345678?text=Hi"));
    }
}
