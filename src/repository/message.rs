use diesel::prelude::*;

use crate::domain::message::{ContactMessage, NewContactMessage};
use crate::domain::types::MessageId;
use crate::models::message::{
    ContactMessage as DbContactMessage, NewContactMessage as DbNewContactMessage,
};
use crate::repository::{
    ContactMessageReader, ContactMessageWriter, DieselRepository, MessageListQuery,
    RepositoryResult,
};

impl ContactMessageReader for DieselRepository {
    fn list_messages(
        &self,
        query: MessageListQuery,
    ) -> RepositoryResult<(usize, Vec<ContactMessage>)> {
        use crate::schema::contact_messages;

        let mut conn = self.conn()?;

        let query_builder = || {
            let mut messages = contact_messages::table.into_boxed::<diesel::sqlite::Sqlite>();
            if let Some(answered) = query.answered {
                messages = messages.filter(contact_messages::is_answered.eq(answered));
            }
            messages
        };

        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        // Tie-break on id so messages sharing a timestamp page deterministically.
        let mut messages_query = query_builder().order((
            contact_messages::created_at.desc(),
            contact_messages::id.desc(),
        ));

        if let Some(pagination) = &query.pagination {
            let offset = pagination.page.saturating_sub(1) * pagination.per_page;
            messages_query = messages_query
                .offset(offset as i64)
                .limit(pagination.per_page as i64);
        }

        let items = messages_query
            .load::<DbContactMessage>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((total, items))
    }

    fn get_message_by_id(&self, id: MessageId) -> RepositoryResult<Option<ContactMessage>> {
        use crate::schema::contact_messages;

        let mut conn = self.conn()?;

        let message = contact_messages::table
            .filter(contact_messages::id.eq(id.get()))
            .first::<DbContactMessage>(&mut conn)
            .optional()?;

        let message = message.map(TryInto::try_into).transpose()?;
        Ok(message)
    }
}

impl ContactMessageWriter for DieselRepository {
    fn create_message(&self, message: &NewContactMessage) -> RepositoryResult<usize> {
        use crate::schema::contact_messages;

        let mut conn = self.conn()?;
        let db_message: DbNewContactMessage = message.clone().into();

        let inserted = diesel::insert_into(contact_messages::table)
            .values(db_message)
            .execute(&mut conn)?;

        Ok(inserted)
    }

    fn set_message_answered(&self, id: MessageId, answered: bool) -> RepositoryResult<usize> {
        use crate::schema::contact_messages;

        let mut conn = self.conn()?;

        let affected =
            diesel::update(contact_messages::table.filter(contact_messages::id.eq(id.get())))
                .set(contact_messages::is_answered.eq(answered))
                .execute(&mut conn)?;

        Ok(affected)
    }

    fn delete_message(&self, id: MessageId) -> RepositoryResult<usize> {
        use crate::schema::contact_messages;

        let mut conn = self.conn()?;

        let affected =
            diesel::delete(contact_messages::table.filter(contact_messages::id.eq(id.get())))
                .execute(&mut conn)?;

        Ok(affected)
    }
}
