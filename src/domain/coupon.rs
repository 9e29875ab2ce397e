use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain representation of a discount coupon.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Coupon {
    /// Unique identifier assigned by the store.
    pub id: i32,
    /// Coupon name, unique case-insensitively among stored coupons.
    pub name: String,
    /// Discount percentage applied when the coupon is redeemed.
    pub percent: i32,
    /// Whether the coupon can currently be redeemed.
    pub is_active: bool,
    /// Timestamp for when the coupon record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp of the last update, absent until the first update.
    pub last_updated: Option<NaiveDateTime>,
}

/// Payload required to insert a new coupon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCoupon {
    pub name: String,
    pub percent: i32,
    pub is_active: bool,
}

impl NewCoupon {
    pub fn new(name: impl Into<String>, percent: i32, is_active: bool) -> Self {
        Self {
            name: name.into(),
            percent,
            is_active,
        }
    }
}

/// Patch data applied when updating an existing coupon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCoupon {
    pub name: String,
    pub percent: i32,
    pub is_active: bool,
    /// Timestamp captured when the patch was created.
    pub last_updated: NaiveDateTime,
}
