use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::message::NewContactMessage;
use crate::domain::types::{
    ContactName, EmailAddress, MessageBody, PhoneNumber, TypeConstraintError,
};

#[derive(Deserialize, Validate)]
pub struct ContactMessageForm {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(max = 20))]
    pub phone: Option<String>,
    #[validate(length(min = 1))]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactMessageFormPayload {
    pub name: ContactName,
    pub email: EmailAddress,
    pub phone: Option<PhoneNumber>,
    pub message: MessageBody,
}

impl ContactMessageFormPayload {
    pub fn into_new_message(self) -> NewContactMessage {
        NewContactMessage {
            name: self.name,
            email: self.email,
            phone: self.phone,
            message: self.message,
        }
    }
}

#[derive(Debug, Error)]
pub enum ContactMessageFormError {
    #[error("Contact message form validation failed: {0}")]
    Validation(String),
    #[error("Contact message form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for ContactMessageFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for ContactMessageFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<ContactMessageForm> for ContactMessageFormPayload {
    type Error = ContactMessageFormError;

    fn try_from(value: ContactMessageForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            name: ContactName::new(value.name)?,
            email: EmailAddress::new(value.email)?,
            phone: value
                .phone
                .map(|text| text.trim().to_string())
                .filter(|text| !text.is_empty())
                .map(PhoneNumber::new)
                .transpose()?,
            message: MessageBody::new(value.message)?,
        })
    }
}

/// Toggle target for a message's answered flag. Submitted without a value
/// it marks the message answered; the pending button sends `false`.
#[derive(Deserialize)]
pub struct AnswerMessageForm {
    pub answered: Option<bool>,
}
