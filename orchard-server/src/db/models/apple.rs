//! Apple Model
//!
//! One catalog entry per variety, priced per kilogram.

use super::serde_helpers;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use validator::Validate;

use crate::utils::validation::{MAX_DESCRIPTION_LEN, MAX_NAME_LEN, positive_price};

/// Apple variety as stored and returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Apple {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub name: String,
    pub description: String,
    /// Price per kilogram
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default = "default_true", deserialize_with = "serde_helpers::bool_true")]
    pub available: bool,
    #[serde(default)]
    pub photo_url: Option<String>,
    /// Upper bound the storefront offers in its quantity picker
    #[serde(default)]
    pub max_quantity_kg: Option<u32>,
    /// Unix millis
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

fn default_true() -> bool {
    true
}

impl Apple {
    /// `table:key` form of the id, empty for unsaved documents
    pub fn id_string(&self) -> String {
        self.id.as_ref().map(|id| id.to_string()).unwrap_or_default()
    }

    /// Varieties served while the database is unreachable
    pub fn demo_catalog() -> Vec<Apple> {
        [
            ("1", "Gala", "Słodkie i socziste", Decimal::new(450, 2)),
            ("2", "Jonagold", "Mieszanka słodkości i kwaskości", Decimal::new(500, 2)),
            ("3", "Granny Smith", "Kwaśne i chrupiące", Decimal::new(400, 2)),
        ]
        .into_iter()
        .map(|(key, name, description, price)| Apple {
            id: Some(RecordId::from_table_key("apple", key)),
            name: name.to_string(),
            description: description.to_string(),
            price,
            available: true,
            photo_url: None,
            max_quantity_kg: None,
            created_at: 0,
            updated_at: 0,
        })
        .collect()
    }
}

/// Create apple payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AppleCreate {
    #[validate(length(min = 1, max = MAX_NAME_LEN))]
    pub name: String,
    #[validate(length(min = 1, max = MAX_DESCRIPTION_LEN))]
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[validate(custom(function = "positive_price"))]
    pub price: Decimal,
    #[serde(default = "default_true")]
    pub available: bool,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub max_quantity_kg: Option<u32>,
}

/// Update apple payload (all optional)
#[derive(Debug, Clone, Serialize, Deserialize, Default, Validate)]
pub struct AppleUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = MAX_NAME_LEN))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = MAX_DESCRIPTION_LEN))]
    pub description: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    #[validate(custom(function = "positive_price"))]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_quantity_kg: Option<u32>,
}

/// Apples listing response
#[derive(Debug, Clone, Serialize)]
pub struct AppleList {
    pub apples: Vec<Apple>,
}
