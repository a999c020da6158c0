use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::category::Category;
use crate::domain::types::{ImageId, ImagePath, ProductId, ProductName, ProductSku};

/// Summary text used when a product belongs to no category.
pub const NO_CATEGORIES_SUMMARY: &str = "Sin categorías";

/// A catalog product together with its resolved images and categories.
///
/// The catalog is owned by another subsystem; this crate only reads it, so
/// there is no `NewProduct` counterpart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    pub sku: ProductSku,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    /// Gallery images in upload order.
    pub images: Vec<ProductImage>,
    /// Categories in canonical (id) order.
    pub categories: Vec<Category>,
}

impl Product {
    /// Canonical storefront link for this product's detail page.
    pub fn detail_url(&self) -> String {
        format!("/productos/{}", self.id)
    }

    /// Comma-joined category names, or [`NO_CATEGORIES_SUMMARY`] when the
    /// product has none.
    pub fn categories_summary(&self) -> String {
        if self.categories.is_empty() {
            return NO_CATEGORIES_SUMMARY.to_string();
        }
        self.categories
            .iter()
            .map(|category| category.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A single gallery image attached to a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductImage {
    pub id: ImageId,
    pub product_id: ProductId,
    /// Path relative to the media root.
    pub path: ImagePath,
    /// Marks the preferred carousel/detail image. More than one image may
    /// carry the flag; consumers take the first.
    pub is_main: bool,
}

impl ProductImage {
    /// Servable URL under the `/media` mount.
    pub fn media_url(&self) -> String {
        format!("/media/{}", self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{CategoryId, CategoryName};

    fn product(categories: Vec<Category>) -> Product {
        let now = chrono::Utc::now().naive_utc();
        Product {
            id: ProductId::new(7).unwrap(),
            name: ProductName::new("Balón de fútbol").unwrap(),
            sku: ProductSku::new("BAL-001").unwrap(),
            created_at: now,
            updated_at: now,
            images: vec![],
            categories,
        }
    }

    fn category(id: i32, name: &str) -> Category {
        Category {
            id: CategoryId::new(id).unwrap(),
            name: CategoryName::new(name).unwrap(),
        }
    }

    #[test]
    fn detail_url_uses_product_id() {
        assert_eq!(product(vec![]).detail_url(), "/productos/7");
    }

    #[test]
    fn categories_summary_joins_names() {
        let product = product(vec![category(1, "Fútbol"), category(2, "Balones")]);
        assert_eq!(product.categories_summary(), "Fútbol, Balones");
    }

    #[test]
    fn categories_summary_falls_back_when_empty() {
        assert_eq!(product(vec![]).categories_summary(), NO_CATEGORIES_SUMMARY);
    }

    #[test]
    fn media_url_prefixes_media_root() {
        let image = ProductImage {
            id: ImageId::new(1).unwrap(),
            product_id: ProductId::new(7).unwrap(),
            path: ImagePath::new("products/balon.jpg").unwrap(),
            is_main: true,
        };
        assert_eq!(image.media_url(), "/media/products/balon.jpg");
    }
}
