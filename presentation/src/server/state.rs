//! Shared handler state

use super::gate::AccessGate;
use persona_application::{ChatSummarySource, PersonaDirectory, PricingCatalog, ReplyService};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<dyn PersonaDirectory>,
    pub replies: Arc<dyn ReplyService>,
    pub summaries: Arc<dyn ChatSummarySource>,
    pub pricing: Arc<dyn PricingCatalog>,
    pub gate: Arc<AccessGate>,
}
