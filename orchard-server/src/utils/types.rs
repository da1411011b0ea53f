//! Shared Types
//!
//! Common types used across the API handlers

use serde::Deserialize;

/// Upper bound for a single page of admin listings
pub const MAX_PAGE_LIMIT: u32 = 500;

/// Skip/limit query parameters for admin listings
#[derive(Debug, Clone, Deserialize)]
pub struct SkipLimitParams {
    #[serde(default)]
    pub skip: u32,

    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    100
}

impl Default for SkipLimitParams {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: default_limit(),
        }
    }
}

impl SkipLimitParams {
    /// Limit clamped to [`MAX_PAGE_LIMIT`]
    pub fn limit(&self) -> u32 {
        self.limit.min(MAX_PAGE_LIMIT)
    }

    /// Slice one page out of an already ordered list
    pub fn page<T>(&self, items: Vec<T>) -> Vec<T> {
        items
            .into_iter()
            .skip(self.skip as usize)
            .take(self.limit() as usize)
            .collect()
    }
}
