use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;

use crate::domain::featured::{
    FeaturedEntry as DomainFeaturedEntry, FeaturedEntryUpdate, NewFeaturedEntry as DomainNewEntry,
};
use crate::domain::types::{CustomSubtitle, CustomTitle, TypeConstraintError};

/// Diesel model representing the `featured_entries` table.
///
/// Override columns are `TEXT NOT NULL DEFAULT ''`; an empty string in
/// storage means "no override" and maps to `None` on the domain side.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::featured_entries)]
pub struct FeaturedEntry {
    pub id: i32,
    pub product_id: i32,
    pub custom_title: String,
    pub custom_subtitle: String,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

/// Insertable form of [`FeaturedEntry`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::featured_entries)]
pub struct NewFeaturedEntry {
    pub product_id: i32,
    pub custom_title: String,
    pub custom_subtitle: String,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

/// Changeset applied when editing an entry. The product reference and the
/// creation timestamp never change.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::featured_entries)]
pub struct FeaturedEntryChangeset {
    pub custom_title: String,
    pub custom_subtitle: String,
    pub display_order: i32,
    pub is_active: bool,
}

impl TryFrom<FeaturedEntry> for DomainFeaturedEntry {
    type Error = TypeConstraintError;

    fn try_from(entry: FeaturedEntry) -> Result<Self, Self::Error> {
        Ok(Self {
            id: entry.id.try_into()?,
            product_id: entry.product_id.try_into()?,
            // Whitespace-only overrides normalize to None as well.
            custom_title: CustomTitle::new(entry.custom_title).ok(),
            custom_subtitle: CustomSubtitle::new(entry.custom_subtitle).ok(),
            display_order: entry.display_order.try_into()?,
            is_active: entry.is_active,
            created_at: entry.created_at,
        })
    }
}

impl From<DomainNewEntry> for NewFeaturedEntry {
    fn from(entry: DomainNewEntry) -> Self {
        Self {
            product_id: entry.product_id.get(),
            custom_title: entry
                .custom_title
                .map(CustomTitle::into_inner)
                .unwrap_or_default(),
            custom_subtitle: entry
                .custom_subtitle
                .map(CustomSubtitle::into_inner)
                .unwrap_or_default(),
            display_order: entry.display_order.get(),
            is_active: entry.is_active,
            created_at: Utc::now().naive_utc(),
        }
    }
}

impl From<&FeaturedEntryUpdate> for FeaturedEntryChangeset {
    fn from(update: &FeaturedEntryUpdate) -> Self {
        Self {
            custom_title: update
                .custom_title
                .clone()
                .map(CustomTitle::into_inner)
                .unwrap_or_default(),
            custom_subtitle: update
                .custom_subtitle
                .clone()
                .map(CustomSubtitle::into_inner)
                .unwrap_or_default(),
            display_order: update.display_order.get(),
            is_active: update.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(custom_title: &str, custom_subtitle: &str) -> FeaturedEntry {
        FeaturedEntry {
            id: 1,
            product_id: 2,
            custom_title: custom_title.to_string(),
            custom_subtitle: custom_subtitle.to_string(),
            display_order: 0,
            is_active: true,
            created_at: Utc::now().naive_utc(),
        }
    }

    #[test]
    fn empty_overrides_normalize_to_none() {
        let entry: DomainFeaturedEntry = row("", "   ").try_into().unwrap();
        assert!(entry.custom_title.is_none());
        assert!(entry.custom_subtitle.is_none());
    }

    #[test]
    fn present_overrides_are_kept_trimmed() {
        let entry: DomainFeaturedEntry = row(" Oferta ", "Rebajas").try_into().unwrap();
        assert_eq!(entry.custom_title.unwrap().as_str(), "Oferta");
        assert_eq!(entry.custom_subtitle.unwrap().as_str(), "Rebajas");
    }
}
