//! # Contact Form
//!
//! The "Get in Touch" form on the contact page. Submissions are validated,
//! stamped, written to the log, and the form is cleared.

use anyhow::{bail, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Full Name",
            ContactField::Email => "Email Address",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            ContactField::Name => "Your full name",
            ContactField::Email => "your.email@example.com",
            ContactField::Subject => "What's this about?",
            ContactField::Message => "Tell us more about your inquiry...",
        }
    }
}

/// A validated message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    selected: usize,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    fn value_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn selected_field(&self) -> ContactField {
        ContactField::ALL[self.selected]
    }

    pub fn next_field(&mut self) {
        self.selected = (self.selected + 1) % ContactField::ALL.len();
    }

    pub fn previous_field(&mut self) {
        let len = ContactField::ALL.len();
        self.selected = (self.selected + len - 1) % len;
    }

    pub fn push_char(&mut self, c: char) {
        let field = self.selected_field();
        self.value_mut(field).push(c);
    }

    pub fn pop_char(&mut self) {
        let field = self.selected_field();
        self.value_mut(field).pop();
    }

    /// Validate and send the message. On success the form is cleared; on
    /// failure it is left as is.
    pub fn submit(&mut self) -> Result<ContactSubmission> {
        for field in ContactField::ALL {
            if self.value(field).trim().is_empty() {
                bail!("{} is required", field.label());
            }
        }
        if !is_plausible_email(self.email.trim()) {
            bail!("'{}' is not a valid email address", self.email.trim());
        }

        let submission = ContactSubmission {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
            submitted_at: Utc::now(),
        };
        log::info!(
            "Contact form submitted by {} <{}>: {}",
            submission.name,
            submission.email,
            submission.subject
        );

        *self = Self::default();
        Ok(submission)
    }
}

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

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Partnership".to_string(),
            message: "Let's talk.".to_string(),
            selected: 0,
        }
    }

    #[test]
    fn test_submit_clears_form() {
        let mut form = filled_form();
        let submission = form.submit().expect("valid form");
        assert_eq!(submission.name, "Ada Lovelace");
        assert_eq!(submission.email, "ada@example.com");
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_missing_field_keeps_form() {
        let mut form = filled_form();
        form.subject = "   ".to_string();
        let err = form.submit().expect_err("subject missing");
        assert!(err.to_string().contains("Subject is required"));
        assert_eq!(form.name, "Ada Lovelace");
    }

    #[test]
    fn test_invalid_email_rejected() {
        for email in ["ada", "@example.com", "ada@", "a@b@c", "ada @example.com"] {
            let mut form = filled_form();
            form.email = email.to_string();
            assert!(form.submit().is_err(), "accepted {email}");
        }
    }

    #[test]
    fn test_typing_targets_selected_field() {
        let mut form = ContactForm::new();
        form.push_char('J');
        form.next_field();
        form.push_char('j');
        form.push_char('x');
        form.pop_char();
        assert_eq!(form.name, "J");
        assert_eq!(form.email, "j");

        form.previous_field();
        form.previous_field();
        assert_eq!(form.selected_field(), ContactField::Message);
    }
}
