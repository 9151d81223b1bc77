//! Result codes reported by the product and order services.
//!
//! ## Summary
//! A closed set of domain outcomes, each paired with a numeric code and the
//! message shown to API consumers. Entries are compile-time constants: naming
//! an entry that does not exist fails to build, and nothing can alter an
//! entry's code or message at runtime.

use serde::Serialize;

use crate::error::CoreError;

/// A domain outcome of the sell backend.
///
/// Codes are unique across the registry. Messages are not:
/// [`ResultCode::OrderNotExist`] and [`ResultCode::OrderdetailNotExist`]
/// report the same text under different codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultCode {
    /// `PRODUCT_NOT_EXIST` (10)
    ProductNotExist,
    /// `PRODUCT_STOCK_ERROR` (11)
    ProductStockError,
    /// `ORDER_NOT_EXIST` (12)
    OrderNotExist,
    /// `ORDERDETAIL_NOT_EXIST` (13)
    OrderdetailNotExist,
    /// `ORDER_STATUS_ERROR` (14)
    OrderStatusError,
    /// `ORDER_UPDATE_FAIL` (15)
    OrderUpdateFail,
    /// `ORDER_DETAIL_EMPTY` (16)
    OrderDetailEmpty,
    /// `ORDER_PAY_STATUS_ERROR` (17)
    OrderPayStatusError,
}

impl ResultCode {
    /// All entries, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::ProductNotExist,
        Self::ProductStockError,
        Self::OrderNotExist,
        Self::OrderdetailNotExist,
        Self::OrderStatusError,
        Self::OrderUpdateFail,
        Self::OrderDetailEmpty,
        Self::OrderPayStatusError,
    ];

    /// ## Summary
    /// Returns every entry in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &Self::ALL
    }

    /// ## Summary
    /// Returns the numeric code reported for this entry.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::ProductNotExist => 10,
            Self::ProductStockError => 11,
            Self::OrderNotExist => 12,
            Self::OrderdetailNotExist => 13,
            Self::OrderStatusError => 14,
            Self::OrderUpdateFail => 15,
            Self::OrderDetailEmpty => 16,
            Self::OrderPayStatusError => 17,
        }
    }

    /// ## Summary
    /// Returns the human-readable message for this entry.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::ProductNotExist => "Product does not exist",
            Self::ProductStockError => "Product stock is incorrect",
            Self::OrderNotExist | Self::OrderdetailNotExist => "Order does not exist",
            Self::OrderStatusError => "Order status is incorrect",
            Self::OrderUpdateFail => "Update failed",
            Self::OrderDetailEmpty => "Order detail is empty",
            Self::OrderPayStatusError => "Order payment failed",
        }
    }

    /// ## Summary
    /// Returns the symbolic name of this entry, e.g. `PRODUCT_NOT_EXIST`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ProductNotExist => "PRODUCT_NOT_EXIST",
            Self::ProductStockError => "PRODUCT_STOCK_ERROR",
            Self::OrderNotExist => "ORDER_NOT_EXIST",
            Self::OrderdetailNotExist => "ORDERDETAIL_NOT_EXIST",
            Self::OrderStatusError => "ORDER_STATUS_ERROR",
            Self::OrderUpdateFail => "ORDER_UPDATE_FAIL",
            Self::OrderDetailEmpty => "ORDER_DETAIL_EMPTY",
            Self::OrderPayStatusError => "ORDER_PAY_STATUS_ERROR",
        }
    }

    /// ## Summary
    /// Finds the entry carrying `code`, if any.
    #[must_use]
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|entry| entry.code() == code)
    }

    /// ## Summary
    /// Returns a serializable snapshot of this entry.
    #[must_use]
    pub const fn entry(self) -> ResultCodeEntry {
        ResultCodeEntry {
            name: self.name(),
            code: self.code(),
            message: self.message(),
        }
    }
}

impl TryFrom<i32> for ResultCode {
    type Error = CoreError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| CoreError::NotFound(format!("result code {code}")))
    }
}

impl std::fmt::Display for ResultCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code(), self.message())
    }
}

/// Wire view of a registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultCodeEntry {
    pub name: &'static str,
    pub code: i32,
    pub message: &'static str,
}
