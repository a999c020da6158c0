use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::carousel::CarouselEntry;
use crate::domain::types::{CustomSubtitle, CustomTitle};

/// A fully resolved slide as rendered by the storefront carousel.
#[derive(Debug, Clone, Serialize)]
pub struct CarouselSlideDto {
    pub title: String,
    pub subtitle: String,
    pub image_url: Option<String>,
    pub detail_url: String,
}

impl From<CarouselEntry> for CarouselSlideDto {
    fn from(value: CarouselEntry) -> Self {
        Self {
            title: value.title().to_string(),
            subtitle: value.subtitle().to_string(),
            image_url: value.image().map(|image| image.media_url()),
            detail_url: value.detail_link(),
        }
    }
}

/// One row of the featured-entries management table, with the resolved
/// presentation next to the stored overrides.
///
/// The overrides are kept raw (empty string when unset) so the edit form
/// never round-trips a resolved fallback into storage.
#[derive(Debug, Clone, Serialize)]
pub struct FeaturedEntryDto {
    pub id: i32,
    pub product_id: i32,
    pub product_name: String,
    pub title: String,
    pub subtitle: String,
    pub custom_title: String,
    pub custom_subtitle: String,
    pub image_url: Option<String>,
    pub categories: String,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

impl From<CarouselEntry> for FeaturedEntryDto {
    fn from(value: CarouselEntry) -> Self {
        let title = value.title().to_string();
        let subtitle = value.subtitle().to_string();
        let image_url = value.image().map(|image| image.media_url());
        let categories = value.product.categories_summary();

        Self {
            id: value.entry.id.get(),
            product_id: value.entry.product_id.get(),
            product_name: value.product.name.into_inner(),
            title,
            subtitle,
            custom_title: value
                .entry
                .custom_title
                .map(CustomTitle::into_inner)
                .unwrap_or_default(),
            custom_subtitle: value
                .entry
                .custom_subtitle
                .map(CustomSubtitle::into_inner)
                .unwrap_or_default(),
            image_url,
            categories,
            display_order: value.entry.display_order.get(),
            is_active: value.entry.is_active,
            created_at: value.entry.created_at,
        }
    }
}
