use chrono::Utc;

use crate::domain::coupon::Coupon;
use crate::forms::coupons::{CreateCouponForm, UpdateCouponForm};
use crate::repository::{CouponReader, CouponWriter};
use crate::services::{ServiceError, ServiceResult};

/// Returns every stored coupon in store order.
pub fn list_coupons<R>(repo: &R) -> ServiceResult<Vec<Coupon>>
where
    R: CouponReader + ?Sized,
{
    repo.list_coupons().map_err(ServiceError::from)
}

/// Looks up a single coupon. Absence is not an error at this layer; callers
/// receive `Ok(None)` for an unknown identifier.
pub fn get_coupon<R>(repo: &R, coupon_id: i32) -> ServiceResult<Option<Coupon>>
where
    R: CouponReader + ?Sized,
{
    repo.get_coupon_by_id(coupon_id).map_err(ServiceError::from)
}

/// Creates a new coupon. Gates, in order: field validation, then a
/// case-insensitive name uniqueness check. No record is written when either
/// gate fails.
pub fn create_coupon<R>(repo: &R, form: CreateCouponForm) -> ServiceResult<Coupon>
where
    R: CouponReader + CouponWriter + ?Sized,
{
    let new_coupon = form
        .into_new_coupon()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    if repo.get_coupon_by_name(&new_coupon.name)?.is_some() {
        return Err(ServiceError::Conflict);
    }

    repo.create_coupon(&new_coupon).map_err(ServiceError::from)
}

/// Overwrites name, percent and is_active on an existing coupon and stamps
/// `last_updated`. Name uniqueness is deliberately not re-checked here.
pub fn update_coupon<R>(repo: &R, form: UpdateCouponForm) -> ServiceResult<Coupon>
where
    R: CouponWriter + ?Sized,
{
    let coupon_id = form.id;
    let updates = form
        .into_update_coupon(Utc::now().naive_utc())
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_coupon(coupon_id, &updates)
        .map_err(ServiceError::from)
}

/// Deletes a coupon by identifier.
pub fn remove_coupon<R>(repo: &R, coupon_id: i32) -> ServiceResult<()>
where
    R: CouponWriter + ?Sized,
{
    repo.delete_coupon(coupon_id).map_err(ServiceError::from)
}
