use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::featured::{FeaturedEntryUpdate, NewFeaturedEntry};
use crate::domain::types::{
    CustomSubtitle, CustomTitle, DisplayOrder, ProductId, TypeConstraintError,
};

/// Trims an optional text field and drops it entirely when nothing is left.
///
/// Browsers submit override inputs as empty strings when the admin leaves
/// them blank; an absent override and a blank one mean the same thing.
fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

#[derive(Deserialize, Validate)]
pub struct AddFeaturedEntryForm {
    #[validate(range(min = 1))]
    pub product_id: i32,
    #[validate(length(max = 100))]
    pub custom_title: Option<String>,
    #[validate(length(max = 200))]
    pub custom_subtitle: Option<String>,
    #[validate(range(min = 0))]
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddFeaturedEntryFormPayload {
    pub product_id: ProductId,
    pub custom_title: Option<CustomTitle>,
    pub custom_subtitle: Option<CustomSubtitle>,
    pub display_order: DisplayOrder,
    pub is_active: bool,
}

impl AddFeaturedEntryFormPayload {
    pub fn into_new_entry(self) -> NewFeaturedEntry {
        NewFeaturedEntry {
            product_id: self.product_id,
            custom_title: self.custom_title,
            custom_subtitle: self.custom_subtitle,
            display_order: self.display_order,
            is_active: self.is_active,
        }
    }
}

#[derive(Debug, Error)]
pub enum AddFeaturedEntryFormError {
    #[error("Add featured entry form validation failed: {0}")]
    Validation(String),
    #[error("Add featured entry form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for AddFeaturedEntryFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for AddFeaturedEntryFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<AddFeaturedEntryForm> for AddFeaturedEntryFormPayload {
    type Error = AddFeaturedEntryFormError;

    fn try_from(value: AddFeaturedEntryForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            product_id: ProductId::new(value.product_id)?,
            custom_title: optional_text(value.custom_title)
                .map(CustomTitle::new)
                .transpose()?,
            custom_subtitle: optional_text(value.custom_subtitle)
                .map(CustomSubtitle::new)
                .transpose()?,
            display_order: DisplayOrder::new(value.display_order.unwrap_or(0))?,
            is_active: value.is_active.unwrap_or(false),
        })
    }
}

#[derive(Deserialize, Validate)]
pub struct UpdateFeaturedEntryForm {
    #[validate(length(max = 100))]
    pub custom_title: Option<String>,
    #[validate(length(max = 200))]
    pub custom_subtitle: Option<String>,
    #[validate(range(min = 0))]
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateFeaturedEntryFormPayload {
    pub custom_title: Option<CustomTitle>,
    pub custom_subtitle: Option<CustomSubtitle>,
    pub display_order: DisplayOrder,
    pub is_active: bool,
}

impl UpdateFeaturedEntryFormPayload {
    pub fn into_update(self) -> FeaturedEntryUpdate {
        FeaturedEntryUpdate {
            custom_title: self.custom_title,
            custom_subtitle: self.custom_subtitle,
            display_order: self.display_order,
            is_active: self.is_active,
        }
    }
}

#[derive(Debug, Error)]
pub enum UpdateFeaturedEntryFormError {
    #[error("Update featured entry form validation failed: {0}")]
    Validation(String),
    #[error("Update featured entry form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for UpdateFeaturedEntryFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for UpdateFeaturedEntryFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<UpdateFeaturedEntryForm> for UpdateFeaturedEntryFormPayload {
    type Error = UpdateFeaturedEntryFormError;

    fn try_from(value: UpdateFeaturedEntryForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            custom_title: optional_text(value.custom_title)
                .map(CustomTitle::new)
                .transpose()?,
            custom_subtitle: optional_text(value.custom_subtitle)
                .map(CustomSubtitle::new)
                .transpose()?,
            display_order: DisplayOrder::new(value.display_order.unwrap_or(0))?,
            is_active: value.is_active.unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_form_trims_overrides_and_drops_blank_ones() {
        let form = AddFeaturedEntryForm {
            product_id: 7,
            custom_title: Some(" Oferta de verano ".to_string()),
            custom_subtitle: Some("   ".to_string()),
            display_order: Some(3),
            is_active: Some(true),
        };

        let payload: AddFeaturedEntryFormPayload = form.try_into().unwrap();
        assert_eq!(payload.product_id.get(), 7);
        assert_eq!(payload.custom_title.unwrap().as_str(), "Oferta de verano");
        assert!(payload.custom_subtitle.is_none());
        assert_eq!(payload.display_order.get(), 3);
        assert!(payload.is_active);
    }

    #[test]
    fn add_form_defaults_order_and_active_flag() {
        let form = AddFeaturedEntryForm {
            product_id: 1,
            custom_title: None,
            custom_subtitle: None,
            display_order: None,
            is_active: None,
        };

        let payload: AddFeaturedEntryFormPayload = form.try_into().unwrap();
        assert_eq!(payload.display_order.get(), 0);
        assert!(!payload.is_active);
    }

    #[test]
    fn add_form_rejects_non_positive_product_id() {
        let form = AddFeaturedEntryForm {
            product_id: 0,
            custom_title: None,
            custom_subtitle: None,
            display_order: None,
            is_active: None,
        };

        let payload: Result<AddFeaturedEntryFormPayload, _> = form.try_into();
        assert!(payload.is_err());
    }

    #[test]
    fn update_form_rejects_negative_display_order() {
        let form = UpdateFeaturedEntryForm {
            custom_title: None,
            custom_subtitle: None,
            display_order: Some(-1),
            is_active: Some(true),
        };

        let payload: Result<UpdateFeaturedEntryFormPayload, _> = form.try_into();
        assert!(payload.is_err());
    }

    #[test]
    fn update_form_payload_builds_changeset() {
        let form = UpdateFeaturedEntryForm {
            custom_title: Some("Rebajas".to_string()),
            custom_subtitle: None,
            display_order: Some(5),
            is_active: None,
        };

        let payload: UpdateFeaturedEntryFormPayload = form.try_into().unwrap();
        let update = payload.into_update();
        assert_eq!(update.custom_title.unwrap().as_str(), "Rebajas");
        assert!(update.custom_subtitle.is_none());
        assert_eq!(update.display_order.get(), 5);
        assert!(!update.is_active);
    }
}
