use diesel::prelude::*;
use diesel::sql_types::Text;

use crate::domain::coupon::{
    Coupon as DomainCoupon, NewCoupon as DomainNewCoupon, UpdateCoupon as DomainUpdateCoupon,
};
use crate::models::coupon::{Coupon as DbCoupon, NewCoupon as DbNewCoupon, UpdateCoupon as DbUpdateCoupon};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CouponReader, CouponWriter, DieselRepository};

diesel::define_sql_function! {
    fn lower(x: Text) -> Text;
}

impl CouponReader for DieselRepository {
    fn list_coupons(&self) -> RepositoryResult<Vec<DomainCoupon>> {
        use crate::schema::coupons;

        let mut conn = self.conn()?;

        let db_coupons = coupons::table
            .order(coupons::id.asc())
            .load::<DbCoupon>(&mut conn)?;

        Ok(db_coupons.into_iter().map(DomainCoupon::from).collect())
    }

    fn get_coupon_by_id(&self, id: i32) -> RepositoryResult<Option<DomainCoupon>> {
        use crate::schema::coupons;

        let mut conn = self.conn()?;

        let db_coupon = coupons::table
            .filter(coupons::id.eq(id))
            .first::<DbCoupon>(&mut conn)
            .optional()?;

        Ok(db_coupon.map(DomainCoupon::from))
    }

    fn get_coupon_by_name(&self, name: &str) -> RepositoryResult<Option<DomainCoupon>> {
        use crate::schema::coupons;

        let mut conn = self.conn()?;

        let db_coupon = coupons::table
            .filter(lower(coupons::name).eq(name.to_lowercase()))
            .first::<DbCoupon>(&mut conn)
            .optional()?;

        Ok(db_coupon.map(DomainCoupon::from))
    }
}

impl CouponWriter for DieselRepository {
    fn create_coupon(&self, new_coupon: &DomainNewCoupon) -> RepositoryResult<DomainCoupon> {
        use crate::schema::coupons;

        let mut conn = self.conn()?;
        let insertable = DbNewCoupon::from(new_coupon);

        let created = diesel::insert_into(coupons::table)
            .values(&insertable)
            .get_result::<DbCoupon>(&mut conn)?;

        Ok(created.into())
    }

    fn update_coupon(
        &self,
        coupon_id: i32,
        updates: &DomainUpdateCoupon,
    ) -> RepositoryResult<DomainCoupon> {
        use crate::schema::coupons;

        let mut conn = self.conn()?;
        let db_updates = DbUpdateCoupon::from(updates);

        let target = coupons::table.filter(coupons::id.eq(coupon_id));

        let updated = diesel::update(target)
            .set(&db_updates)
            .get_result::<DbCoupon>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_coupon(&self, coupon_id: i32) -> RepositoryResult<()> {
        use crate::schema::coupons;

        let mut conn = self.conn()?;
        let target = coupons::table.filter(coupons::id.eq(coupon_id));

        let deleted = diesel::delete(target).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
