use serde::Serialize;

use crate::domain::product::{Product, ProductImage};

/// Catalog data shown on the public product page.
#[derive(Debug, Clone, Serialize)]
pub struct ProductDetailDto {
    pub id: i32,
    pub name: String,
    pub sku: String,
    pub image_urls: Vec<String>,
    pub categories: String,
}

impl From<Product> for ProductDetailDto {
    fn from(value: Product) -> Self {
        let image_urls = value.images.iter().map(ProductImage::media_url).collect();
        let categories = value.categories_summary();

        Self {
            id: value.id.get(),
            name: value.name.into_inner(),
            sku: value.sku.into_inner(),
            image_urls,
            categories,
        }
    }
}
