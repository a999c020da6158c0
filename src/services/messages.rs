use crate::ADMIN_ROLE;
use crate::domain::auth::{AuthenticatedUser, check_role};
use crate::domain::types::MessageId;
use crate::dto::messages::ContactMessageDto;
use crate::forms::messages::ContactMessageFormPayload;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{ContactMessageReader, ContactMessageWriter, MessageListQuery};

use super::{ServiceError, ServiceResult};

pub fn show_messages<R>(
    page: usize,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<Paginated<ContactMessageDto>>
where
    R: ContactMessageReader,
{
    if !check_role(ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    match repo.list_messages(MessageListQuery::default().paginate(page, DEFAULT_ITEMS_PER_PAGE)) {
        Ok((total, messages)) => Ok(Paginated::new(
            messages.into_iter().map(ContactMessageDto::from).collect(),
            page,
            total.div_ceil(DEFAULT_ITEMS_PER_PAGE),
        )),
        Err(e) => {
            log::error!("Failed to list messages: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Stores a message submitted through the public contact form. No role
/// check: any visitor may write to the inbox.
pub fn submit_contact_message<R>(
    payload: ContactMessageFormPayload,
    repo: &R,
) -> ServiceResult<bool>
where
    R: ContactMessageWriter,
{
    match repo.create_message(&payload.into_new_message()) {
        Ok(_) => Ok(true),
        Err(e) => {
            log::error!("Failed to create contact message: {e}");
            Ok(false)
        }
    }
}

pub fn mark_message_answered<R>(
    message_id: i32,
    answered: bool,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<bool>
where
    R: ContactMessageReader + ContactMessageWriter,
{
    if !check_role(ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let Ok(message_id) = MessageId::new(message_id) else {
        return Err(ServiceError::NotFound);
    };

    match repo.get_message_by_id(message_id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get message: {e}");
            return Err(ServiceError::Internal);
        }
    }

    match repo.set_message_answered(message_id, answered) {
        Ok(_) => Ok(true),
        Err(e) => {
            log::error!("Failed to update message: {e}");
            Ok(false)
        }
    }
}

pub fn delete_message<R>(message_id: i32, user: &AuthenticatedUser, repo: &R) -> ServiceResult<bool>
where
    R: ContactMessageReader + ContactMessageWriter,
{
    if !check_role(ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let Ok(message_id) = MessageId::new(message_id) else {
        return Err(ServiceError::NotFound);
    };

    match repo.get_message_by_id(message_id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get message: {e}");
            return Err(ServiceError::Internal);
        }
    }

    match repo.delete_message(message_id) {
        Ok(_) => Ok(true),
        Err(e) => {
            log::error!("Failed to delete message: {e}");
            Ok(false)
        }
    }
}
