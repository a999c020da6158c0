use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::message::ContactMessage;
use crate::domain::types::PhoneNumber;

/// One row of the admin inbox, carrying both the truncated preview and the
/// full message body.
#[derive(Debug, Clone, Serialize)]
pub struct ContactMessageDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub preview: String,
    pub message: String,
    pub is_answered: bool,
    pub created_at: NaiveDateTime,
}

impl From<ContactMessage> for ContactMessageDto {
    fn from(value: ContactMessage) -> Self {
        let preview = value.preview();

        Self {
            id: value.id.get(),
            name: value.name.into_inner(),
            email: value.email.into_inner(),
            phone: value.phone.map(PhoneNumber::into_inner),
            preview,
            message: value.message.into_inner(),
            is_answered: value.is_answered,
            created_at: value.created_at,
        }
    }
}
