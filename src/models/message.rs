use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;

use crate::domain::message::{
    ContactMessage as DomainContactMessage, NewContactMessage as DomainNewMessage,
};
use crate::domain::types::{
    ContactName, EmailAddress, MessageBody, PhoneNumber, TypeConstraintError,
};

/// Diesel model representing the `contact_messages` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::contact_messages)]
pub struct ContactMessage {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub is_answered: bool,
    pub created_at: NaiveDateTime,
}

/// Insertable form of [`ContactMessage`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::contact_messages)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub is_answered: bool,
    pub created_at: NaiveDateTime,
}

impl TryFrom<ContactMessage> for DomainContactMessage {
    type Error = TypeConstraintError;

    fn try_from(message: ContactMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            id: message.id.try_into()?,
            name: ContactName::new(message.name)?,
            email: EmailAddress::new(message.email)?,
            // The column defaults to ''; empty means no phone was given.
            phone: PhoneNumber::new(message.phone).ok(),
            message: MessageBody::new(message.message)?,
            is_answered: message.is_answered,
            created_at: message.created_at,
        })
    }
}

impl From<DomainNewMessage> for NewContactMessage {
    fn from(message: DomainNewMessage) -> Self {
        Self {
            name: message.name.into_inner(),
            email: message.email.into_inner(),
            phone: message
                .phone
                .map(PhoneNumber::into_inner)
                .unwrap_or_default(),
            message: message.message.into_inner(),
            is_answered: false,
            created_at: Utc::now().naive_utc(),
        }
    }
}
