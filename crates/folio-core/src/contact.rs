//! Contact handoff
//!
//! The contact form collects three free-text fields and hands them to an
//! external messaging service as a pre-filled deep link. Delivery is not
//! observed: once the link is opened the form is cleared and the
//! interaction is over.

use crate::config::ContactConfig;
use crate::error::ContactError;
use crate::viewport::{BrowsingContext, ViewportAdapter};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use std::fmt::{self, Display, Formatter};

/// Characters escaped in the `text` query value
///
/// Controls (including `\n`), space, and everything that would end or
/// restructure a query component. `@`, `:` and `/` stay literal.
const QUERY_TEXT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Contact form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    /// Sender name
    Name,
    /// Sender email
    Email,
    /// Message body
    Message,
}

impl ContactField {
    /// Fields in form order
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];
}

impl Display for ContactField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        })
    }
}

/// Form contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
}

impl ContactForm {
    /// Empty form
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace a field's value
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        *self.slot(field) = value.into();
    }

    /// Builder form of [`ContactForm::set`]
    #[must_use]
    pub fn with(mut self, field: ContactField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Current value of a field
    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    /// Whether every field is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        ContactField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Presence check, in form order
    ///
    /// # Errors
    /// [`ContactError::MissingField`] for the first blank field.
    pub fn validate(&self) -> Result<(), ContactError> {
        match ContactField::ALL.into_iter().find(|f| self.get(*f).trim().is_empty()) {
            Some(field) => Err(ContactError::MissingField(field)),
            None => Ok(()),
        }
    }

    /// Empty all fields
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Validate, open the deep link in a new context, clear the form
    ///
    /// Returns the URL handed to the host. On a validation error the form
    /// is left untouched.
    ///
    /// # Errors
    /// [`ContactError::MissingField`] when a field is blank.
    pub fn submit(
        &mut self,
        handoff: &ContactHandoff,
        viewport: &dyn ViewportAdapter,
    ) -> Result<String, ContactError> {
        self.validate()?;
        let url = handoff.whatsapp_link(&self.name, &self.email, &self.message);
        viewport.open_external(&url, BrowsingContext::New);
        tracing::info!("contact handed off to messaging service");
        self.clear();
        Ok(url)
    }

    fn slot(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }
}

/// Builds outbound contact links
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactHandoff {
    whatsapp_number: String,
    email: String,
    phone: String,
}

impl ContactHandoff {
    /// Handoff for the configured endpoints
    #[must_use]
    pub fn new(config: &ContactConfig) -> Self {
        Self {
            whatsapp_number: config.whatsapp_number.clone(),
            email: config.email.clone(),
            phone: config.phone.clone(),
        }
    }

    /// The message body sent to the chat
    #[must_use]
    pub fn message_text(name: &str, email: &str, message: &str) -> String {
        format!("Hello, I'm {name}\n\nEmail: {email}\n\nMessage: {message}")
    }

    /// `https://wa.me/<number>?text=<encoded message>`
    #[must_use]
    pub fn whatsapp_link(&self, name: &str, email: &str, message: &str) -> String {
        let text = Self::message_text(name, email, message);
        format!(
            "https://wa.me/{}?text={}",
            self.whatsapp_number,
            utf8_percent_encode(&text, QUERY_TEXT)
        )
    }

    /// `mailto:` link for the public address
    #[must_use]
    pub fn mailto_link(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// `tel:` link; keeps `+` and digits only
    #[must_use]
    pub fn tel_link(&self) -> String {
        let dialable: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{dialable}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn handoff() -> ContactHandoff {
        ContactHandoff::new(&ContactConfig::default())
    }

    #[test]
    fn link_encodes_newlines_and_keeps_order() {
        let url = handoff().whatsapp_link("Ada", "ada@example.com", "Hello\nWorld");
        assert!(url.starts_with("https://wa.me/254704662432?text="));
        assert!(url.contains("%0A"));
        assert!(!url.contains('\n'));
        let name_at = url.find("Ada").unwrap();
        let email_at = url.find("ada@example.com").unwrap();
        assert!(name_at < email_at);
        assert!(url.ends_with("Hello%0AWorld"));
    }

    #[test]
    fn link_escapes_query_breakers() {
        let url = handoff().whatsapp_link("A&B", "x@y.z", "100% #1 a=b?");
        let query = url.split_once("?text=").unwrap().1;
        assert!(!query.contains('&'));
        assert!(!query.contains('#'));
        assert!(!query.contains('='));
        assert!(!query.contains('?'));
        assert!(query.contains("A%26B"));
        assert!(query.contains("100%25"));
    }

    #[test]
    fn link_encodes_non_ascii() {
        let url = handoff().whatsapp_link("Zoë", "z@e.io", "hi");
        assert!(url.contains("Zo%C3%AB"));
    }

    #[test]
    fn validate_reports_first_blank_field() {
        let form = ContactForm::new().with(ContactField::Name, "Ada");
        assert_eq!(form.validate(), Err(ContactError::MissingField(ContactField::Email)));

        let form = form
            .with(ContactField::Email, "ada@example.com")
            .with(ContactField::Message, "   ");
        assert_eq!(form.validate(), Err(ContactError::MissingField(ContactField::Message)));
    }

    #[test]
    fn validation_is_presence_only() {
        let form = ContactForm::new()
            .with(ContactField::Name, "x")
            .with(ContactField::Email, "not-an-email")
            .with(ContactField::Message, "y");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn mailto_and_tel() {
        let h = handoff();
        assert_eq!(h.mailto_link(), "mailto:msimeon937@gmail.com");
        assert_eq!(h.tel_link(), "tel:+254704662432");
    }
}
