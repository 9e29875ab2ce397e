use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::coupon::{
    Coupon as DomainCoupon, NewCoupon as DomainNewCoupon, UpdateCoupon as DomainUpdateCoupon,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::coupons)]
pub struct Coupon {
    pub id: i32,
    pub name: String,
    pub percent: i32,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub last_updated: Option<NaiveDateTime>,
}

// created_at is filled in by the table default at insert time.
#[derive(Insertable)]
#[diesel(table_name = crate::schema::coupons)]
pub struct NewCoupon<'a> {
    pub name: &'a str,
    pub percent: i32,
    pub is_active: bool,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::coupons)]
pub struct UpdateCoupon<'a> {
    pub name: &'a str,
    pub percent: i32,
    pub is_active: bool,
    pub last_updated: NaiveDateTime,
}

impl From<Coupon> for DomainCoupon {
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

impl<'a> From<&'a DomainNewCoupon> for NewCoupon<'a> {
    fn from(value: &'a DomainNewCoupon) -> Self {
        Self {
            name: value.name.as_str(),
            percent: value.percent,
            is_active: value.is_active,
        }
    }
}

impl<'a> From<&'a DomainUpdateCoupon> for UpdateCoupon<'a> {
    fn from(value: &'a DomainUpdateCoupon) -> Self {
        Self {
            name: value.name.as_str(),
            percent: value.percent,
            is_active: value.is_active,
            last_updated: value.last_updated,
        }
    }
}
