//! Checkout total computation.

use kiosk_core::{Email, ItemId};
use rust_decimal::Decimal;

use crate::store::{CatalogError, CatalogStore};

/// One requested cart line, resolved against the store at checkout time.
#[derive(Debug, Clone)]
pub struct CartLine {
    pub id: ItemId,
    pub quantity: i64,
    /// Free-text option tag; carried but not priced.
    pub option: Option<String>,
}

/// The customer attached to a checkout request.
///
/// Validated at the boundary and passed through untouched: no field
/// affects totals and nothing is persisted.
#[derive(Debug, Clone)]
pub struct Customer {
    pub name: String,
    pub email: Email,
    pub message: Option<String>,
}

/// Computed order totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    /// Grand total, rounded to cents.
    pub total: Decimal,
    /// Sum of effective line quantities.
    pub count: i64,
}

/// Resolve a cart against the store and total it.
///
/// Lines are processed in input order; the first id that fails to resolve
/// aborts the whole computation with [`CatalogError::ItemNotFound`] and no
/// partial totals. A non-positive quantity counts as 1. The grand total is
/// rounded to two decimal places half-to-even.
///
/// An empty cart is not an error: it totals to zero.
///
/// # Errors
///
/// Returns [`CatalogError::ItemNotFound`] for the first unresolved line.
pub fn checkout(
    store: &CatalogStore,
    lines: &[CartLine],
    _customer: &Customer,
) -> Result<OrderSummary, CatalogError> {
    let mut total = Decimal::ZERO;
    let mut count = 0_i64;

    for line in lines {
        let item = store.get(line.id)?;
        let quantity = line.quantity.max(1);
        total += item.price.amount() * Decimal::from(quantity);
        count += quantity;
    }

    Ok(OrderSummary {
        total: total.round_dp(2),
        count,
    })
}
