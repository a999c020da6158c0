use crate::domain::types::ProductId;
use crate::dto::featured::CarouselSlideDto;
use crate::dto::products::ProductDetailDto;
use crate::repository::{FeaturedEntryReader, FeaturedListQuery, ProductReader};

use super::{ServiceError, ServiceResult};

/// Core business logic for rendering the storefront home page.
///
/// Fetches the active carousel entries in display order and resolves each
/// one into the slide the template renders. Repository errors are
/// translated into [`ServiceError`] so that the HTTP route can remain a
/// thin wrapper.
pub fn show_home<R>(repo: &R) -> ServiceResult<Vec<CarouselSlideDto>>
where
    R: FeaturedEntryReader,
{
    match repo.list_featured(FeaturedListQuery::default().active_only()) {
        Ok(entries) => Ok(entries.into_iter().map(CarouselSlideDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list featured entries: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Core business logic for rendering a public product page.
///
/// A non-positive or unknown id is reported as [`ServiceError::NotFound`];
/// visitors reach these through stale links, not through bugs.
pub fn show_product<R>(product_id: i32, repo: &R) -> ServiceResult<ProductDetailDto>
where
    R: ProductReader,
{
    let Ok(product_id) = ProductId::new(product_id) else {
        return Err(ServiceError::NotFound);
    };

    match repo.get_product_by_id(product_id) {
        Ok(Some(product)) => Ok(ProductDetailDto::from(product)),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get product: {e}");
            Err(ServiceError::Internal)
        }
    }
}
