use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::domain::coupon::{Coupon, NewCoupon, UpdateCoupon};

/// Maximum allowed length for a coupon name.
const NAME_MAX_LEN: usize = 128;
const NAME_MAX_LEN_VALIDATOR: u64 = NAME_MAX_LEN as u64;

/// Message reported when the validator yields no usable field message.
pub const VALIDATION_FALLBACK: &str = "Validation failed.";

/// Result type returned by the coupon form helpers.
pub type CouponFormResult<T> = Result<T, CouponFormError>;

/// Errors that can occur while processing coupon payloads.
#[derive(Debug, Error)]
pub enum CouponFormError {
    /// First field violation reported by the `validator` crate.
    #[error("{0}")]
    Validation(String),
}

/// JSON body accepted by the create endpoint.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCouponForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR, message = "Coupon name cannot be empty"))]
    pub name: String,
    #[validate(range(min = 1, max = 100, message = "Percent must be between 1 and 100"))]
    pub percent: i32,
    pub is_active: bool,
}

impl CreateCouponForm {
    /// Validates the payload into a domain `NewCoupon`.
    pub fn into_new_coupon(self) -> CouponFormResult<NewCoupon> {
        if let Err(errors) = self.validate() {
            return Err(CouponFormError::Validation(first_violation(&errors)));
        }

        Ok(NewCoupon::new(self.name, self.percent, self.is_active))
    }
}

/// JSON body accepted by the update endpoint.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCouponForm {
    /// Identifier of the coupon to update.
    #[validate(range(min = 1, message = "Id must be a positive integer"))]
    pub id: i32,
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR, message = "Coupon name cannot be empty"))]
    pub name: String,
    #[validate(range(min = 1, max = 100, message = "Percent must be between 1 and 100"))]
    pub percent: i32,
    pub is_active: bool,
}

impl UpdateCouponForm {
    /// Validates the payload into a domain `UpdateCoupon` stamped with `last_updated`.
    pub fn into_update_coupon(self, last_updated: NaiveDateTime) -> CouponFormResult<UpdateCoupon> {
        if let Err(errors) = self.validate() {
            return Err(CouponFormError::Validation(first_violation(&errors)));
        }

        Ok(UpdateCoupon {
            name: self.name,
            percent: self.percent,
            is_active: self.is_active,
            last_updated,
        })
    }
}

/// Externally visible shape of a coupon.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CouponView {
    pub id: i32,
    pub name: String,
    pub percent: i32,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub last_updated: Option<NaiveDateTime>,
}

impl From<Coupon> for CouponView {
    fn from(value: Coupon) -> Self {
        Self {
            id: value.id,
            name: value.name,
            percent: value.percent,
            is_active: value.is_active,
            created_at: value.created_at,
            last_updated: value.last_updated,
        }
    }
}

/// Extracts a single violation message; only the first failing field is
/// reported even when several are invalid.
fn first_violation(errors: &ValidationErrors) -> String {
    errors
        .errors()
        .iter()
        .find_map(|(field, kind)| match kind {
            ValidationErrorsKind::Field(violations) => violations.first().map(|violation| {
                violation
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid"))
            }),
            _ => None,
        })
        .unwrap_or_else(|| VALIDATION_FALLBACK.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn create_form_converts_valid_payload() {
        let form = CreateCouponForm {
            name: "WELCOME5".to_string(),
            percent: 5,
            is_active: true,
        };

        let new_coupon = form
            .into_new_coupon()
            .expect("expected conversion to succeed");

        assert_eq!(new_coupon.name, "WELCOME5");
        assert_eq!(new_coupon.percent, 5);
        assert!(new_coupon.is_active);
    }

    #[test]
    fn create_form_rejects_empty_name() {
        let form = CreateCouponForm {
            name: String::new(),
            percent: 10,
            is_active: true,
        };

        let err = form.into_new_coupon().expect_err("expected validation to fail");

        assert_eq!(err.to_string(), "Coupon name cannot be empty");
    }

    #[test]
    fn create_form_rejects_out_of_range_percent() {
        let form = CreateCouponForm {
            name: "SAVE10".to_string(),
            percent: 0,
            is_active: false,
        };

        let err = form.into_new_coupon().expect_err("expected validation to fail");

        assert_eq!(err.to_string(), "Percent must be between 1 and 100");
    }

    #[test]
    fn create_form_reports_only_one_violation() {
        let form = CreateCouponForm {
            name: String::new(),
            percent: 500,
            is_active: true,
        };

        let err = form.into_new_coupon().expect_err("expected validation to fail");

        let message = err.to_string();
        assert!(
            message == "Coupon name cannot be empty"
                || message == "Percent must be between 1 and 100",
            "unexpected message: {message}"
        );
    }

    #[test]
    fn update_form_builds_patch() {
        let last_updated = NaiveDate::from_ymd_opt(2024, 6, 1)
            .and_then(|date| date.and_hms_opt(12, 0, 0))
            .expect("valid timestamp");
        let form = UpdateCouponForm {
            id: 3,
            name: "WELCOME5".to_string(),
            percent: 10,
            is_active: false,
        };

        let update = form
            .into_update_coupon(last_updated)
            .expect("expected payload conversion to succeed");

        assert_eq!(update.name, "WELCOME5");
        assert_eq!(update.percent, 10);
        assert!(!update.is_active);
        assert_eq!(update.last_updated, last_updated);
    }

    #[test]
    fn update_form_rejects_non_positive_id() {
        let last_updated = NaiveDate::from_ymd_opt(2024, 6, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .expect("valid timestamp");
        let form = UpdateCouponForm {
            id: 0,
            name: "SAVE10".to_string(),
            percent: 10,
            is_active: true,
        };

        let err = form
            .into_update_coupon(last_updated)
            .expect_err("expected validation to fail");

        assert_eq!(err.to_string(), "Id must be a positive integer");
    }
}
