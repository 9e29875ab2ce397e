use mockall::mock;

use super::{CouponReader, CouponWriter};
use crate::domain::coupon::{Coupon, NewCoupon, UpdateCoupon};
use crate::repository::errors::RepositoryResult;

mock! {
    pub CouponReader {}

    impl CouponReader for CouponReader {
        fn list_coupons(&self) -> RepositoryResult<Vec<Coupon>>;
        fn get_coupon_by_id(&self, id: i32) -> RepositoryResult<Option<Coupon>>;
        fn get_coupon_by_name(&self, name: &str) -> RepositoryResult<Option<Coupon>>;
    }
}

mock! {
    pub CouponWriter {}

    impl CouponWriter for CouponWriter {
        fn create_coupon(&self, new_coupon: &NewCoupon) -> RepositoryResult<Coupon>;
        fn update_coupon(&self, coupon_id: i32, updates: &UpdateCoupon) -> RepositoryResult<Coupon>;
        fn delete_coupon(&self, coupon_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub CouponRepository {}

    impl CouponReader for CouponRepository {
        fn list_coupons(&self) -> RepositoryResult<Vec<Coupon>>;
        fn get_coupon_by_id(&self, id: i32) -> RepositoryResult<Option<Coupon>>;
        fn get_coupon_by_name(&self, name: &str) -> RepositoryResult<Option<Coupon>>;
    }

    impl CouponWriter for CouponRepository {
        fn create_coupon(&self, new_coupon: &NewCoupon) -> RepositoryResult<Coupon>;
        fn update_coupon(&self, coupon_id: i32, updates: &UpdateCoupon) -> RepositoryResult<Coupon>;
        fn delete_coupon(&self, coupon_id: i32) -> RepositoryResult<()>;
    }
}
