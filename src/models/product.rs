use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::category::Category as DomainCategory;
use crate::domain::product::{Product as DomainProduct, ProductImage as DomainProductImage};
use crate::domain::types::{ProductName, ProductSku, TypeConstraintError};

/// Diesel model representing the `products` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub sku: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Product {
    /// Builds the domain product from this row plus its resolved relations.
    pub fn into_domain(
        self,
        images: Vec<DomainProductImage>,
        categories: Vec<DomainCategory>,
    ) -> Result<DomainProduct, TypeConstraintError> {
        Ok(DomainProduct {
            id: self.id.try_into()?,
            name: ProductName::new(self.name)?,
            sku: ProductSku::new(self.sku)?,
            created_at: self.created_at,
            updated_at: self.updated_at,
            images,
            categories,
        })
    }
}
