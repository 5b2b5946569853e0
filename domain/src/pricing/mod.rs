//! Membership pricing.

use crate::core::validation::Validated;
use serde::{Deserialize, Serialize};

/// A membership tier (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingTier {
    pub name: String,
    /// Monthly price in whole dollars.
    pub price: u32,
    pub description: String,
    pub features: Vec<String>,
    #[serde(default)]
    pub is_popular: bool,
}

impl PricingTier {
    pub fn is_free(&self) -> bool {
        self.price == 0
    }
}

impl Validated for PricingTier {
    const SUBJECT: &'static str = "pricing tier";
}
