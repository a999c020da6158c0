use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CustomSubtitle, CustomTitle, DisplayOrder, FeaturedEntryId, ProductId};

/// A product's slot in the storefront carousel.
///
/// Overrides are `None` when the slide should fall back to catalog data;
/// the resolver in [`crate::domain::carousel`] applies the fallback chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeaturedEntry {
    pub id: FeaturedEntryId,
    pub product_id: ProductId,
    pub custom_title: Option<CustomTitle>,
    pub custom_subtitle: Option<CustomSubtitle>,
    pub display_order: DisplayOrder,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

/// Data required to insert a new [`FeaturedEntry`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewFeaturedEntry {
    pub product_id: ProductId,
    pub custom_title: Option<CustomTitle>,
    pub custom_subtitle: Option<CustomSubtitle>,
    pub display_order: DisplayOrder,
    pub is_active: bool,
}

/// Mutable fields of an existing entry. The product reference is fixed at
/// creation; swapping products means delete and recreate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeaturedEntryUpdate {
    pub custom_title: Option<CustomTitle>,
    pub custom_subtitle: Option<CustomSubtitle>,
    pub display_order: DisplayOrder,
    pub is_active: bool,
}
