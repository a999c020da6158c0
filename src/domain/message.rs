use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{ContactName, EmailAddress, MessageBody, MessageId, PhoneNumber};

/// Number of characters shown in an inbox row before truncation.
pub const PREVIEW_CHARS: usize = 50;

/// A message submitted through the public contact form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: MessageId,
    pub name: ContactName,
    pub email: EmailAddress,
    pub phone: Option<PhoneNumber>,
    pub message: MessageBody,
    pub is_answered: bool,
    pub created_at: NaiveDateTime,
}

impl ContactMessage {
    /// First [`PREVIEW_CHARS`] characters of the body, with `...` appended
    /// when the body is longer. Counts characters, not bytes.
    pub fn preview(&self) -> String {
        let body = self.message.as_str();
        match body.char_indices().nth(PREVIEW_CHARS) {
            Some((cut, _)) => format!("{}...", &body[..cut]),
            None => body.to_string(),
        }
    }
}

/// Data required to insert a new [`ContactMessage`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewContactMessage {
    pub name: ContactName,
    pub email: EmailAddress,
    pub phone: Option<PhoneNumber>,
    pub message: MessageBody,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(body: &str) -> ContactMessage {
        ContactMessage {
            id: MessageId::new(1).unwrap(),
            name: ContactName::new("Lucía Fernández").unwrap(),
            email: EmailAddress::new("lucia@example.com").unwrap(),
            phone: None,
            message: MessageBody::new(body).unwrap(),
            is_answered: false,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }

    #[test]
    fn short_messages_are_not_truncated() {
        assert_eq!(message("Hola, ¿tienen stock?").preview(), "Hola, ¿tienen stock?");
    }

    #[test]
    fn long_messages_are_cut_at_fifty_characters() {
        let body = "x".repeat(80);
        let preview = message(&body).preview();
        assert_eq!(preview, format!("{}...", "x".repeat(50)));
    }

    #[test]
    fn truncation_respects_multibyte_characters() {
        let body = "ñ".repeat(60);
        let preview = message(&body).preview();
        assert_eq!(preview.chars().count(), 53);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn exact_boundary_is_kept_verbatim() {
        let body = "y".repeat(50);
        assert_eq!(message(&body).preview(), body);
    }
}
