use std::collections::HashMap;

use diesel::prelude::*;

use crate::db::DbConnection;
use crate::domain::category::Category;
use crate::domain::product::{Product, ProductImage};
use crate::domain::types::ProductId;
use crate::models::category::Category as DbCategory;
use crate::models::product::Product as DbProduct;
use crate::models::product_image::ProductImage as DbProductImage;
use crate::repository::{DieselRepository, ProductReader, RepositoryResult};

impl ProductReader for DieselRepository {
    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let row = products::table
            .filter(products::id.eq(id.get()))
            .first::<DbProduct>(&mut conn)
            .optional()?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut hydrated = load_products_with_relations(&mut conn, vec![row])?;
        Ok(hydrated.pop())
    }
}

/// Attaches images (upload order) and categories (id order) to product rows.
///
/// Relations are fetched in two batch queries instead of per-product
/// round-trips; the row order of `rows` is preserved.
pub(crate) fn load_products_with_relations(
    conn: &mut DbConnection,
    rows: Vec<DbProduct>,
) -> RepositoryResult<Vec<Product>> {
    use crate::schema::{categories, product_categories, product_images};

    let ids: Vec<i32> = rows.iter().map(|product| product.id).collect();

    let image_rows = product_images::table
        .filter(product_images::product_id.eq_any(&ids))
        .order(product_images::id.asc())
        .load::<DbProductImage>(conn)?;

    let mut images_by_product: HashMap<i32, Vec<ProductImage>> = HashMap::new();
    for row in image_rows {
        let product_id = row.product_id;
        images_by_product
            .entry(product_id)
            .or_default()
            .push(row.try_into()?);
    }

    let category_rows: Vec<(i32, DbCategory)> = product_categories::table
        .inner_join(categories::table)
        .filter(product_categories::product_id.eq_any(&ids))
        .order(categories::id.asc())
        .select((product_categories::product_id, categories::all_columns))
        .load(conn)?;

    let mut categories_by_product: HashMap<i32, Vec<Category>> = HashMap::new();
    for (product_id, row) in category_rows {
        categories_by_product
            .entry(product_id)
            .or_default()
            .push(row.try_into()?);
    }

    rows.into_iter()
        .map(|row| {
            let images = images_by_product.remove(&row.id).unwrap_or_default();
            let categories = categories_by_product.remove(&row.id).unwrap_or_default();
            row.into_domain(images, categories).map_err(Into::into)
        })
        .collect()
}
