use crate::db::{DbConnection, DbPool};
use crate::pagination::Pagination;

use crate::domain::carousel::CarouselEntry;
use crate::domain::featured::{FeaturedEntry, FeaturedEntryUpdate, NewFeaturedEntry};
use crate::domain::message::{ContactMessage, NewContactMessage};
use crate::domain::product::Product;
use crate::domain::types::{FeaturedEntryId, MessageId, ProductId};

pub mod errors;
pub mod featured;
pub mod message;
pub mod product;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Query parameters used when listing carousel entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeaturedListQuery {
    /// Restrict to entries with the active flag set.
    pub active_only: bool,
}

impl FeaturedListQuery {
    pub fn active_only(mut self) -> Self {
        self.active_only = true;
        self
    }
}

/// Query parameters used when listing inbox messages.
#[derive(Debug, Clone, Default)]
pub struct MessageListQuery {
    /// Filter by answered state.
    pub answered: Option<bool>,
    /// Pagination parameters.
    pub pagination: Option<Pagination>,
}

impl MessageListQuery {
    pub fn answered(mut self, answered: bool) -> Self {
        self.answered = Some(answered);
        self
    }
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Read-only access to the catalog owned by the products subsystem.
///
/// There is deliberately no product writer trait; this crate never mutates
/// the catalog.
pub trait ProductReader {
    /// Retrieve a product with its images and categories resolved.
    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>>;
}

/// Read operations for carousel entries.
pub trait FeaturedEntryReader {
    /// List entries paired with their resolved products, in display order.
    fn list_featured(&self, query: FeaturedListQuery) -> RepositoryResult<Vec<CarouselEntry>>;
    /// Retrieve an entry by its identifier.
    fn get_featured_by_id(&self, id: FeaturedEntryId) -> RepositoryResult<Option<FeaturedEntry>>;
}

/// Write operations for carousel entries.
pub trait FeaturedEntryWriter {
    /// Persist a new entry and return the stored row. Fails with
    /// [`RepositoryError::UniqueViolation`] when the product is already
    /// featured.
    fn create_featured_entry(&self, entry: &NewFeaturedEntry) -> RepositoryResult<FeaturedEntry>;
    /// Update overrides, placement and the active flag of an entry.
    fn update_featured_entry(
        &self,
        id: FeaturedEntryId,
        update: &FeaturedEntryUpdate,
    ) -> RepositoryResult<usize>;
    /// Delete an entry by id.
    fn delete_featured_entry(&self, id: FeaturedEntryId) -> RepositoryResult<usize>;
}

/// Read operations for the contact inbox.
pub trait ContactMessageReader {
    /// List messages newest first using the supplied query options.
    fn list_messages(
        &self,
        query: MessageListQuery,
    ) -> RepositoryResult<(usize, Vec<ContactMessage>)>;
    /// Retrieve a message by its identifier.
    fn get_message_by_id(&self, id: MessageId) -> RepositoryResult<Option<ContactMessage>>;
}

/// Write operations for the contact inbox.
pub trait ContactMessageWriter {
    /// Persist a new message from the public contact form.
    fn create_message(&self, message: &NewContactMessage) -> RepositoryResult<usize>;
    /// Set the answered flag of a message.
    fn set_message_answered(&self, id: MessageId, answered: bool) -> RepositoryResult<usize>;
    /// Delete a message by id.
    fn delete_message(&self, id: MessageId) -> RepositoryResult<usize>;
}
