//! Price Lookup
//!
//! The order builder only needs "what does one kilogram of X cost".
//! [`PriceLookup`] answers that for a persisted catalog snapshot or a
//! closure, so pricing can be tested without a database.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::db::models::Apple;
use crate::db::repository::{apple, record_id};

/// Normalise a client supplied apple id (`apple:key` or bare `key`) to the
/// snapshot key
pub fn canonical_reference(apple_id: &str) -> String {
    record_id(apple::TABLE, apple_id).to_string()
}

/// Per-kilogram price source
pub trait PriceLookup {
    /// Unit price for `reference`, `None` if the variety is unknown or not for sale
    fn unit_price(&self, reference: &str) -> Option<Decimal>;
}

impl<F> PriceLookup for F
where
    F: Fn(&str) -> Option<Decimal>,
{
    fn unit_price(&self, reference: &str) -> Option<Decimal> {
        self(reference)
    }
}

/// One priced variety in a snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub name: String,
    pub unit_price: Decimal,
}

/// Prices captured once per request
///
/// Keyed by the apple id in `table:key` form (see
/// [`canonical_reference`]). Only varieties that are currently available
/// are included.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    entries: HashMap<String, CatalogEntry>,
}

impl CatalogSnapshot {
    pub fn from_apples(apples: impl IntoIterator<Item = Apple>) -> Self {
        let entries = apples
            .into_iter()
            .filter(|apple| apple.available)
            .map(|apple| {
                let key = apple.id_string();
                (
                    key,
                    CatalogEntry {
                        name: apple.name,
                        unit_price: apple.price,
                    },
                )
            })
            .collect();
        Self { entries }
    }

    /// Built-in varieties used when no database is reachable
    pub fn development() -> Self {
        Self::from_apples(Apple::demo_catalog())
    }

    pub fn get(&self, reference: &str) -> Option<&CatalogEntry> {
        self.entries.get(reference)
    }

    /// Display name for a priced reference, falling back to the reference
    pub fn name_of<'a>(&'a self, reference: &'a str) -> &'a str {
        self.get(reference)
            .map(|entry| entry.name.as_str())
            .unwrap_or(reference)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PriceLookup for CatalogSnapshot {
    fn unit_price(&self, reference: &str) -> Option<Decimal> {
        self.get(reference).map(|entry| entry.unit_price)
    }
}
