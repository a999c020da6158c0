use diesel::prelude::*;

use crate::domain::carousel::CarouselEntry;
use crate::domain::featured::{FeaturedEntry, FeaturedEntryUpdate, NewFeaturedEntry};
use crate::domain::types::FeaturedEntryId;
use crate::models::featured::{
    FeaturedEntry as DbFeaturedEntry, FeaturedEntryChangeset, NewFeaturedEntry as DbNewFeaturedEntry,
};
use crate::models::product::Product as DbProduct;
use crate::repository::product::load_products_with_relations;
use crate::repository::{
    DieselRepository, FeaturedEntryReader, FeaturedEntryWriter, FeaturedListQuery, RepositoryResult,
};

impl FeaturedEntryReader for DieselRepository {
    fn list_featured(&self, query: FeaturedListQuery) -> RepositoryResult<Vec<CarouselEntry>> {
        use crate::schema::{featured_entries, products};

        let mut conn = self.conn()?;

        let mut rows = featured_entries::table
            .inner_join(products::table)
            .into_boxed::<diesel::sqlite::Sqlite>();

        if query.active_only {
            rows = rows.filter(featured_entries::is_active.eq(true));
        }

        let rows = rows
            .order((
                featured_entries::display_order.asc(),
                featured_entries::created_at.desc(),
            ))
            .load::<(DbFeaturedEntry, DbProduct)>(&mut conn)?;

        let (entry_rows, product_rows): (Vec<_>, Vec<_>) = rows.into_iter().unzip();
        let products = load_products_with_relations(&mut conn, product_rows)?;

        entry_rows
            .into_iter()
            .zip(products)
            .map(|(entry, product)| {
                Ok(CarouselEntry {
                    entry: entry.try_into()?,
                    product,
                })
            })
            .collect()
    }

    fn get_featured_by_id(&self, id: FeaturedEntryId) -> RepositoryResult<Option<FeaturedEntry>> {
        use crate::schema::featured_entries;

        let mut conn = self.conn()?;

        let entry = featured_entries::table
            .filter(featured_entries::id.eq(id.get()))
            .first::<DbFeaturedEntry>(&mut conn)
            .optional()?;

        let entry = entry.map(TryInto::try_into).transpose()?;
        Ok(entry)
    }
}

impl FeaturedEntryWriter for DieselRepository {
    fn create_featured_entry(&self, entry: &NewFeaturedEntry) -> RepositoryResult<FeaturedEntry> {
        use crate::schema::featured_entries;

        let mut conn = self.conn()?;
        let db_entry: DbNewFeaturedEntry = entry.clone().into();

        let created = diesel::insert_into(featured_entries::table)
            .values(db_entry)
            .get_result::<DbFeaturedEntry>(&mut conn)?;

        Ok(created.try_into()?)
    }

    fn update_featured_entry(
        &self,
        id: FeaturedEntryId,
        update: &FeaturedEntryUpdate,
    ) -> RepositoryResult<usize> {
        use crate::schema::featured_entries;

        let mut conn = self.conn()?;

        let affected =
            diesel::update(featured_entries::table.filter(featured_entries::id.eq(id.get())))
                .set(FeaturedEntryChangeset::from(update))
                .execute(&mut conn)?;

        Ok(affected)
    }

    fn delete_featured_entry(&self, id: FeaturedEntryId) -> RepositoryResult<usize> {
        use crate::schema::featured_entries;

        let mut conn = self.conn()?;

        let affected =
            diesel::delete(featured_entries::table.filter(featured_entries::id.eq(id.get())))
                .execute(&mut conn)?;

        Ok(affected)
    }
}
