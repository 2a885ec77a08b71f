//! Price Resolver
//!
//! Combines the base price with the price modifiers of all currently
//! selected options. Uses rust_decimal for precise arithmetic; the
//! resolver itself never rounds. Display formatting rounds to whole
//! currency units.

use rust_decimal::prelude::*;
use shared::models::Product;

use crate::config::Config;
use crate::selection::{Selection, has_variants};

/// Convert f64 to Decimal for calculation
#[inline]
pub(crate) fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
pub(crate) fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Price quote for display
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct PriceQuote {
    /// Total in currency units
    pub total: f64,
    /// True when the product has variants ("configured total" semantics);
    /// false for a bare base price ("from" semantics)
    pub configured: bool,
}

/// Total price: base plus exactly one modifier per group.
///
/// Modifiers may be negative and the total is not clamped; callers must
/// not assume non-negativity.
pub fn total_price(product: &Product, selection: &Selection) -> Decimal {
    let mut total = to_decimal(product.base_price);
    for group in product.groups_by_order() {
        if let Some(option) = selection.selected_option(group) {
            total += to_decimal(option.price_modifier);
        }
    }
    total
}

/// Quote for the current selection
pub fn quote(product: &Product, selection: &Selection) -> PriceQuote {
    PriceQuote {
        total: to_f64(total_price(product, selection)),
        configured: has_variants(product),
    }
}

/// Format an amount for display: rounded to whole currency units
/// (half-up), thousands separated with spaces, currency suffix appended.
pub fn format_amount(amount: Decimal, config: &Config) -> String {
    let units = amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i128()
        .unwrap_or(0);

    let digits = units.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    let sign = if units < 0 { "-" } else { "" };
    if config.currency.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped} {}", config.currency)
    }
}
