//! In-process catalog adapter

use super::data::{builtin_personas, builtin_pricing, builtin_summaries};
use async_trait::async_trait;
use persona_application::ports::persona_directory::{
    ChatSummarySource, DirectoryError, PersonaDirectory, PricingCatalog,
};
use persona_domain::{ChatSummary, Persona, PersonaDetail, PersonaId, PricingTier};
use std::time::Duration;
use tracing::debug;

/// Simulated latency per catalog query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogLatency {
    /// Delay before the persona list is returned
    pub personas: Duration,
    /// Delay before dashboard summaries are returned
    pub summaries: Duration,
}

impl Default for CatalogLatency {
    fn default() -> Self {
        Self {
            personas: Duration::from_millis(500),
            summaries: Duration::from_millis(600),
        }
    }
}

impl CatalogLatency {
    pub fn none() -> Self {
        Self {
            personas: Duration::ZERO,
            summaries: Duration::ZERO,
        }
    }
}

/// Immutable catalog of personas, chat summaries and pricing tiers.
///
/// Detail lookups are immediate; only the list endpoints are delayed.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    personas: Vec<PersonaDetail>,
    summaries: Vec<ChatSummary>,
    pricing: Vec<PricingTier>,
    latency: CatalogLatency,
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl StaticCatalog {
    /// The built-in data set with default latency.
    pub fn builtin() -> Self {
        Self {
            personas: builtin_personas(),
            summaries: builtin_summaries(),
            pricing: builtin_pricing(),
            latency: CatalogLatency::default(),
        }
    }

    pub fn new(personas: Vec<PersonaDetail>) -> Self {
        Self {
            personas,
            summaries: Vec::new(),
            pricing: Vec::new(),
            latency: CatalogLatency::none(),
        }
    }

    pub fn with_latency(mut self, latency: CatalogLatency) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_summaries(mut self, summaries: Vec<ChatSummary>) -> Self {
        self.summaries = summaries;
        self
    }

    pub fn with_pricing(mut self, pricing: Vec<PricingTier>) -> Self {
        self.pricing = pricing;
        self
    }

    pub fn latency(&self) -> CatalogLatency {
        self.latency
    }

    /// Synchronous lookup, no latency.
    pub fn find(&self, id: PersonaId) -> Option<&PersonaDetail> {
        self.personas.iter().find(|p| p.id() == id)
    }
}

async fn simulate(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

#[async_trait]
impl PersonaDirectory for StaticCatalog {
    async fn list(&self) -> Result<Vec<Persona>, DirectoryError> {
        simulate(self.latency.personas).await;
        Ok(self.personas.iter().map(PersonaDetail::summary).collect())
    }

    async fn get(&self, id: PersonaId) -> Result<PersonaDetail, DirectoryError> {
        debug!("Looking up persona {}", id);
        self.find(id).cloned().ok_or(DirectoryError::NotFound(id))
    }
}

#[async_trait]
impl ChatSummarySource for StaticCatalog {
    async fn recent_chats(&self) -> Result<Vec<ChatSummary>, DirectoryError> {
        simulate(self.latency.summaries).await;
        let mut rows = self.summaries.clone();
        rows.sort_by(|a, b| b.last_updated.cmp(&a.last_updated));
        Ok(rows)
    }
}

#[async_trait]
impl PricingCatalog for StaticCatalog {
    async fn tiers(&self) -> Result<Vec<PricingTier>, DirectoryError> {
        Ok(self.pricing.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test]
    async fn test_list_matches_details() {
        let catalog = StaticCatalog::builtin().with_latency(CatalogLatency::none());
        let personas = catalog.list().await.unwrap();

        let names: Vec<&str> = personas.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Lapwing", "Nia", "Momoi"]);
        for persona in &personas {
            let detail = catalog.get(persona.id).await.unwrap();
            assert_eq!(&detail.summary(), persona);
        }
    }

    #[tokio::test]
    async fn test_unknown_persona_is_not_found() {
        let catalog = StaticCatalog::builtin();
        let err = catalog.get(PersonaId::new(99)).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test(start_paused = true)]
    async fn test_list_waits_for_configured_latency() {
        let catalog = StaticCatalog::builtin();
        let start = Instant::now();
        catalog.list().await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(500));

        let start = Instant::now();
        let rows = catalog.recent_chats().await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(600));
        assert_eq!(rows.len(), 3);
    }

    #[tokio::test]
    async fn test_summaries_sorted_on_read() {
        let mut rows = builtin_summaries();
        rows.reverse();
        let catalog = StaticCatalog::new(Vec::new()).with_summaries(rows);

        let sorted = catalog.recent_chats().await.unwrap();
        assert_eq!(sorted[0].id, "chat_abc_123");
    }

    #[tokio::test]
    async fn test_pricing_tiers() {
        let catalog = StaticCatalog::builtin();
        let tiers = catalog.tiers().await.unwrap();
        let prices: Vec<u32> = tiers.iter().map(|t| t.price).collect();
        assert_eq!(prices, vec![0, 10, 50]);
    }
}
