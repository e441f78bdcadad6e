//! Money calculation using rust_decimal for precision
//!
//! Prices travel as `f64`; sums are computed as `Decimal` and rounded
//! half-up to 2 decimal places on the way back.

use super::types::OrderItem;
use rust_decimal::prelude::*;

const DECIMAL_PLACES: u32 = 2;

#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Line total: unit price x quantity
pub fn line_total(item: &OrderItem) -> Decimal {
    to_decimal(item.price) * Decimal::from(item.quantity.max(0))
}

/// Bill summary of a set of lines
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrderTotals {
    /// Number of portions/units across all lines
    pub item_count: i32,
    pub subtotal: f64,
}

impl OrderTotals {
    pub fn from_items(items: &[OrderItem]) -> Self {
        let subtotal: Decimal = items.iter().map(line_total).sum();
        let item_count = items
            .iter()
            .fold(0i32, |acc, i| acc.saturating_add(i.quantity.max(0)));
        Self {
            item_count,
            subtotal: to_f64(subtotal),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }
}
