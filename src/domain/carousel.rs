//! Derived-presentation logic for the storefront carousel.
//!
//! A [`FeaturedEntry`] only stores overrides and placement metadata; the
//! values a slide actually shows (title, subtitle, image, link) are computed
//! here from the entry and its resolved [`Product`]. Keeping the fallback
//! chains as plain functions makes them testable without a database.

use std::cmp::Reverse;

use thiserror::Error;

use crate::domain::featured::FeaturedEntry;
use crate::domain::product::{Product, ProductImage};

/// Subtitle shown when neither an override nor a category is available.
pub const NO_CATEGORY_SUBTITLE: &str = "Sin categoría";

/// Why a product cannot be featured.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EligibilityError {
    /// Featuring requires at least one gallery image.
    #[error("El producto debe tener al menos una imagen para ser destacado")]
    NoImages,
}

/// Checks the featurability precondition for `product`.
///
/// Runs before an entry referencing the product is persisted, on create and
/// on update. Nothing re-checks existing entries afterwards: a product that
/// later loses its images leaves a stale entry whose [`CarouselEntry::image`]
/// degrades to `None` instead of being flagged invalid.
pub fn validate_featurable(product: &Product) -> Result<(), EligibilityError> {
    if product.images.is_empty() {
        return Err(EligibilityError::NoImages);
    }
    Ok(())
}

/// A carousel entry paired with its resolved product.
#[derive(Debug, Clone)]
pub struct CarouselEntry {
    pub entry: FeaturedEntry,
    pub product: Product,
}

impl CarouselEntry {
    /// Override title when set, product name otherwise.
    pub fn title(&self) -> &str {
        match &self.entry.custom_title {
            Some(title) => title.as_str(),
            None => self.product.name.as_str(),
        }
    }

    /// Override subtitle when set, else the first category name, else
    /// [`NO_CATEGORY_SUBTITLE`]. Total; the chain always terminates in the
    /// sentinel.
    pub fn subtitle(&self) -> &str {
        if let Some(subtitle) = &self.entry.custom_subtitle {
            return subtitle.as_str();
        }
        self.product
            .categories
            .first()
            .map(|category| category.name.as_str())
            .unwrap_or(NO_CATEGORY_SUBTITLE)
    }

    /// First image flagged main, else the first image, else `None`.
    ///
    /// `None` is only reachable when images were removed after the entry
    /// passed validation; callers render a placeholder instead of failing.
    pub fn image(&self) -> Option<&ProductImage> {
        self.product
            .images
            .iter()
            .find(|image| image.is_main)
            .or_else(|| self.product.images.first())
    }

    /// Canonical detail link of the underlying product.
    pub fn detail_link(&self) -> String {
        self.product.detail_url()
    }

    /// Re-checks featurability against the currently resolved product.
    pub fn validate(&self) -> Result<(), EligibilityError> {
        validate_featurable(&self.product)
    }
}

/// Sorts entries for carousel display: `display_order` ascending, newest
/// first on equal order values.
pub fn sort_for_display(entries: &mut [CarouselEntry]) {
    entries.sort_by_key(|resolved| {
        (
            resolved.entry.display_order,
            Reverse(resolved.entry.created_at),
        )
    });
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;

    use super::*;
    use crate::domain::category::Category;
    use crate::domain::types::{
        CategoryId, CategoryName, CustomSubtitle, CustomTitle, DisplayOrder, FeaturedEntryId,
        ImageId, ImagePath, ProductId, ProductName, ProductSku,
    };

    fn timestamp(minute: u32) -> NaiveDateTime {
        chrono::NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(12, minute, 0)
            .unwrap()
    }

    fn image(id: i32, is_main: bool) -> ProductImage {
        ProductImage {
            id: ImageId::new(id).unwrap(),
            product_id: ProductId::new(1).unwrap(),
            path: ImagePath::new(format!("products/{id}.jpg")).unwrap(),
            is_main,
        }
    }

    fn category(id: i32, name: &str) -> Category {
        Category {
            id: CategoryId::new(id).unwrap(),
            name: CategoryName::new(name).unwrap(),
        }
    }

    fn product(name: &str, images: Vec<ProductImage>, categories: Vec<Category>) -> Product {
        Product {
            id: ProductId::new(1).unwrap(),
            name: ProductName::new(name).unwrap(),
            sku: ProductSku::new("SKU-1").unwrap(),
            created_at: timestamp(0),
            updated_at: timestamp(0),
            images,
            categories,
        }
    }

    fn entry(
        title: Option<&str>,
        subtitle: Option<&str>,
        display_order: i32,
        created_at: NaiveDateTime,
    ) -> FeaturedEntry {
        FeaturedEntry {
            id: FeaturedEntryId::new(1).unwrap(),
            product_id: ProductId::new(1).unwrap(),
            custom_title: title.map(|value| CustomTitle::new(value).unwrap()),
            custom_subtitle: subtitle.map(|value| CustomSubtitle::new(value).unwrap()),
            display_order: DisplayOrder::new(display_order).unwrap(),
            is_active: true,
            created_at,
        }
    }

    fn resolved(
        title: Option<&str>,
        subtitle: Option<&str>,
        images: Vec<ProductImage>,
        categories: Vec<Category>,
    ) -> CarouselEntry {
        CarouselEntry {
            entry: entry(title, subtitle, 0, timestamp(0)),
            product: product("Guantes de portero", images, categories),
        }
    }

    #[test]
    fn title_prefers_override() {
        let slide = resolved(Some("Oferta de verano"), None, vec![image(1, true)], vec![]);
        assert_eq!(slide.title(), "Oferta de verano");
    }

    #[test]
    fn title_falls_back_to_product_name() {
        let slide = resolved(None, None, vec![image(1, true)], vec![]);
        assert_eq!(slide.title(), "Guantes de portero");
    }

    #[test]
    fn subtitle_prefers_override_even_without_categories() {
        let slide = resolved(None, Some("Edición limitada"), vec![image(1, true)], vec![]);
        assert_eq!(slide.subtitle(), "Edición limitada");
    }

    #[test]
    fn subtitle_falls_back_to_first_category() {
        let slide = resolved(
            None,
            None,
            vec![image(1, true)],
            vec![category(3, "Porteros"), category(5, "Guantes")],
        );
        assert_eq!(slide.subtitle(), "Porteros");
    }

    #[test]
    fn subtitle_falls_back_to_sentinel_without_categories() {
        let slide = resolved(None, None, vec![image(1, true)], vec![]);
        assert_eq!(slide.subtitle(), NO_CATEGORY_SUBTITLE);
    }

    #[test]
    fn image_prefers_main_flag_regardless_of_position() {
        let slide = resolved(
            None,
            None,
            vec![image(1, false), image(2, false), image(3, true)],
            vec![],
        );
        assert_eq!(slide.image().unwrap().id, 3);
    }

    #[test]
    fn image_falls_back_to_first_when_none_is_main() {
        let slide = resolved(None, None, vec![image(4, false), image(5, false)], vec![]);
        assert_eq!(slide.image().unwrap().id, 4);
    }

    #[test]
    fn image_is_none_when_images_were_removed_later() {
        let slide = resolved(None, None, vec![], vec![]);
        assert!(slide.image().is_none());
    }

    #[test]
    fn validate_fails_only_without_images() {
        let with_images = product("Balón", vec![image(1, false)], vec![]);
        assert!(validate_featurable(&with_images).is_ok());

        let without_images = product("Balón", vec![], vec![]);
        assert_eq!(
            validate_featurable(&without_images).unwrap_err(),
            EligibilityError::NoImages
        );
    }

    #[test]
    fn resolves_every_field_for_entry_without_overrides() {
        let slide = resolved(
            None,
            None,
            vec![image(10, false), image(11, true)],
            vec![],
        );
        assert_eq!(slide.title(), "Guantes de portero");
        assert_eq!(slide.subtitle(), NO_CATEGORY_SUBTITLE);
        assert_eq!(slide.image().unwrap().id, 11);
        assert_eq!(slide.detail_link(), "/productos/1");
    }

    #[test]
    fn sorts_by_display_order_then_newest_first() {
        let mut entries = vec![
            CarouselEntry {
                entry: entry(Some("a"), None, 2, timestamp(1)),
                product: product("A", vec![image(1, true)], vec![]),
            },
            CarouselEntry {
                entry: entry(Some("b"), None, 1, timestamp(2)),
                product: product("B", vec![image(2, true)], vec![]),
            },
            CarouselEntry {
                entry: entry(Some("c"), None, 1, timestamp(3)),
                product: product("C", vec![image(3, true)], vec![]),
            },
        ];
        sort_for_display(&mut entries);

        let titles: Vec<&str> = entries.iter().map(|slide| slide.title()).collect();
        assert_eq!(titles, vec!["c", "b", "a"]);
    }
}
