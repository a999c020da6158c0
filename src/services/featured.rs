use crate::ADMIN_ROLE;
use crate::domain::auth::{AuthenticatedUser, check_role};
use crate::domain::carousel::validate_featurable;
use crate::domain::types::FeaturedEntryId;
use crate::dto::featured::FeaturedEntryDto;
use crate::forms::featured::{AddFeaturedEntryFormPayload, UpdateFeaturedEntryFormPayload};
use crate::repository::{
    FeaturedEntryReader, FeaturedEntryWriter, FeaturedListQuery, ProductReader, RepositoryError,
};

use super::{ServiceError, ServiceResult};

pub fn show_featured<R>(user: &AuthenticatedUser, repo: &R) -> ServiceResult<Vec<FeaturedEntryDto>>
where
    R: FeaturedEntryReader,
{
    if !check_role(ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    match repo.list_featured(FeaturedListQuery::default()) {
        Ok(entries) => Ok(entries.into_iter().map(FeaturedEntryDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list featured entries: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn add_featured_entry<R>(
    payload: AddFeaturedEntryFormPayload,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<bool>
where
    R: ProductReader + FeaturedEntryWriter,
{
    if !check_role(ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let product = match repo.get_product_by_id(payload.product_id) {
        Ok(Some(product)) => product,
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get product: {e}");
            return Err(ServiceError::Internal);
        }
    };

    validate_featurable(&product)?;

    match repo.create_featured_entry(&payload.into_new_entry()) {
        Ok(_) => Ok(true),
        Err(RepositoryError::UniqueViolation(_)) => Err(ServiceError::Conflict(format!(
            "El producto \"{}\" ya está destacado.",
            product.name
        ))),
        Err(e) => {
            log::error!("Failed to create featured entry: {e}");
            Ok(false)
        }
    }
}

pub fn update_featured_entry<R>(
    entry_id: i32,
    payload: UpdateFeaturedEntryFormPayload,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<bool>
where
    R: ProductReader + FeaturedEntryReader + FeaturedEntryWriter,
{
    if !check_role(ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let Ok(entry_id) = FeaturedEntryId::new(entry_id) else {
        return Err(ServiceError::NotFound);
    };

    let entry = match repo.get_featured_by_id(entry_id) {
        Ok(Some(entry)) => entry,
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get featured entry: {e}");
            return Err(ServiceError::Internal);
        }
    };

    // The FK cascade keeps the product row alive as long as the entry is.
    let product = match repo.get_product_by_id(entry.product_id) {
        Ok(Some(product)) => product,
        Ok(None) => {
            log::error!("Featured entry {entry_id} references a missing product");
            return Err(ServiceError::Internal);
        }
        Err(e) => {
            log::error!("Failed to get product: {e}");
            return Err(ServiceError::Internal);
        }
    };

    validate_featurable(&product)?;

    match repo.update_featured_entry(entry_id, &payload.into_update()) {
        Ok(_) => Ok(true),
        Err(e) => {
            log::error!("Failed to update featured entry: {e}");
            Ok(false)
        }
    }
}

pub fn delete_featured_entry<R>(
    entry_id: i32,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<bool>
where
    R: FeaturedEntryReader + FeaturedEntryWriter,
{
    if !check_role(ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let Ok(entry_id) = FeaturedEntryId::new(entry_id) else {
        return Err(ServiceError::NotFound);
    };

    match repo.get_featured_by_id(entry_id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get featured entry: {e}");
            return Err(ServiceError::Internal);
        }
    }

    match repo.delete_featured_entry(entry_id) {
        Ok(_) => Ok(true),
        Err(e) => {
            log::error!("Failed to delete featured entry: {e}");
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use super::*;
    use crate::domain::category::Category;
    use crate::domain::featured::FeaturedEntry;
    use crate::domain::product::{Product, ProductImage};
    use crate::domain::types::{
        CategoryId, CategoryName, CustomTitle, DisplayOrder, ImageId, ImagePath, ProductId,
        ProductName, ProductSku,
    };
    use crate::repository::test::TestRepository;

    fn sample_user() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "1".into(),
            email: "admin@example.com".into(),
            name: "Admin".into(),
            roles: vec![ADMIN_ROLE.into()],
        }
    }

    fn visitor() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "2".into(),
            email: "visitor@example.com".into(),
            name: "Visitor".into(),
            roles: vec![],
        }
    }

    fn sample_product(id: i32, name: &str) -> Product {
        let timestamp = DateTime::from_timestamp(0, 0).unwrap().naive_utc();
        Product {
            id: ProductId::new(id).unwrap(),
            name: ProductName::new(name).unwrap(),
            sku: ProductSku::new(format!("SKU-{id}")).unwrap(),
            created_at: timestamp,
            updated_at: timestamp,
            images: vec![ProductImage {
                id: ImageId::new(id).unwrap(),
                product_id: ProductId::new(id).unwrap(),
                path: ImagePath::new(format!("products/{id}.jpg")).unwrap(),
                is_main: true,
            }],
            categories: vec![Category {
                id: CategoryId::new(1).unwrap(),
                name: CategoryName::new("Fútbol").unwrap(),
            }],
        }
    }

    fn sample_entry(id: i32, product_id: i32) -> FeaturedEntry {
        FeaturedEntry {
            id: FeaturedEntryId::new(id).unwrap(),
            product_id: ProductId::new(product_id).unwrap(),
            custom_title: Some(CustomTitle::new("Oferta").unwrap()),
            custom_subtitle: None,
            display_order: DisplayOrder::new(0).unwrap(),
            is_active: true,
            created_at: DateTime::from_timestamp(id as i64, 0).unwrap().naive_utc(),
        }
    }

    fn add_payload(product_id: i32) -> AddFeaturedEntryFormPayload {
        AddFeaturedEntryFormPayload {
            product_id: ProductId::new(product_id).unwrap(),
            custom_title: None,
            custom_subtitle: None,
            display_order: DisplayOrder::new(0).unwrap(),
            is_active: true,
        }
    }

    #[test]
    fn listing_requires_admin_role() {
        let repo = TestRepository::default();

        assert_eq!(
            show_featured(&visitor(), &repo).unwrap_err(),
            ServiceError::Unauthorized
        );
    }

    #[test]
    fn listing_includes_inactive_entries() {
        let mut inactive = sample_entry(2, 2);
        inactive.is_active = false;
        let repo = TestRepository::new(
            vec![sample_product(1, "Balón"), sample_product(2, "Guantes")],
            vec![sample_entry(1, 1), inactive],
            vec![],
        );

        let entries = show_featured(&sample_user(), &repo).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "Oferta");
        assert_eq!(entries[0].categories, "Fútbol");
    }

    #[test]
    fn adding_a_featurable_product_succeeds() {
        let repo = TestRepository::new(vec![sample_product(1, "Balón")], vec![], vec![]);

        assert_eq!(
            add_featured_entry(add_payload(1), &sample_user(), &repo),
            Ok(true)
        );
    }

    #[test]
    fn adding_an_unknown_product_is_not_found() {
        let repo = TestRepository::default();

        assert_eq!(
            add_featured_entry(add_payload(8), &sample_user(), &repo).unwrap_err(),
            ServiceError::NotFound
        );
    }

    #[test]
    fn adding_a_product_without_images_is_rejected() {
        let mut product = sample_product(1, "Balón");
        product.images.clear();
        let repo = TestRepository::new(vec![product], vec![], vec![]);

        let error = add_featured_entry(add_payload(1), &sample_user(), &repo).unwrap_err();

        assert_eq!(
            error,
            ServiceError::Form(
                "El producto debe tener al menos una imagen para ser destacado".to_string()
            )
        );
    }

    #[test]
    fn adding_an_already_featured_product_conflicts() {
        let repo = TestRepository::new(
            vec![sample_product(1, "Balón de fútbol")],
            vec![sample_entry(1, 1)],
            vec![],
        );

        let error = add_featured_entry(add_payload(1), &sample_user(), &repo).unwrap_err();

        match error {
            ServiceError::Conflict(message) => {
                assert!(message.contains("Balón de fútbol"));
            }
            other => panic!("expected conflict, got {other:?}"),
        }
    }

    #[test]
    fn updating_an_unknown_entry_is_not_found() {
        let repo = TestRepository::default();
        let payload = UpdateFeaturedEntryFormPayload {
            custom_title: None,
            custom_subtitle: None,
            display_order: DisplayOrder::new(1).unwrap(),
            is_active: false,
        };

        assert_eq!(
            update_featured_entry(3, payload, &sample_user(), &repo).unwrap_err(),
            ServiceError::NotFound
        );
    }

    #[test]
    fn updating_revalidates_product_images() {
        let mut product = sample_product(1, "Balón");
        product.images.clear();
        let repo = TestRepository::new(vec![product], vec![sample_entry(1, 1)], vec![]);
        let payload = UpdateFeaturedEntryFormPayload {
            custom_title: None,
            custom_subtitle: None,
            display_order: DisplayOrder::new(1).unwrap(),
            is_active: true,
        };

        let error = update_featured_entry(1, payload, &sample_user(), &repo).unwrap_err();

        assert!(matches!(error, ServiceError::Form(_)));
    }

    #[test]
    fn deleting_an_existing_entry_succeeds() {
        let repo = TestRepository::new(
            vec![sample_product(1, "Balón")],
            vec![sample_entry(1, 1)],
            vec![],
        );

        assert_eq!(delete_featured_entry(1, &sample_user(), &repo), Ok(true));
        assert_eq!(
            delete_featured_entry(99, &sample_user(), &repo).unwrap_err(),
            ServiceError::NotFound
        );
    }
}
