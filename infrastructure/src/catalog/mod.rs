//! Static catalogs
//!
//! The persona directory, dashboard summaries and pricing tiers are fixed
//! data served with optional artificial latency.

mod data;
mod directory;

pub use data::{builtin_personas, builtin_pricing, builtin_summaries};
pub use directory::{CatalogLatency, StaticCatalog};
