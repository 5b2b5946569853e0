//! HTTP client adapters

mod client;

pub use client::HttpApiClient;
