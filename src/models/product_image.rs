use diesel::prelude::*;

use crate::domain::product::ProductImage as DomainProductImage;
use crate::domain::types::{ImagePath, TypeConstraintError};

/// Diesel model representing the `product_images` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::product_images)]
pub struct ProductImage {
    pub id: i32,
    pub product_id: i32,
    pub image: String,
    pub is_main: bool,
}

impl TryFrom<ProductImage> for DomainProductImage {
    type Error = TypeConstraintError;

    fn try_from(image: ProductImage) -> Result<Self, Self::Error> {
        Ok(Self {
            id: image.id.try_into()?,
            product_id: image.product_id.try_into()?,
            path: ImagePath::new(image.image)?,
            is_main: image.is_main,
        })
    }
}
