use crate::db::{DbConnection, DbPool};
use crate::domain::coupon::{Coupon, NewCoupon, UpdateCoupon};
use crate::repository::errors::RepositoryResult;

pub mod coupon;
pub mod errors;

#[cfg(test)]
pub mod mock;

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over coupon records.
pub trait CouponReader {
    fn list_coupons(&self) -> RepositoryResult<Vec<Coupon>>;
    fn get_coupon_by_id(&self, id: i32) -> RepositoryResult<Option<Coupon>>;
    /// Case-insensitive lookup by coupon name.
    fn get_coupon_by_name(&self, name: &str) -> RepositoryResult<Option<Coupon>>;
}

/// Write operations over coupon records.
pub trait CouponWriter {
    fn create_coupon(&self, new_coupon: &NewCoupon) -> RepositoryResult<Coupon>;
    fn update_coupon(&self, coupon_id: i32, updates: &UpdateCoupon) -> RepositoryResult<Coupon>;
    fn delete_coupon(&self, coupon_id: i32) -> RepositoryResult<()>;
}
