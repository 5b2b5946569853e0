//! Persona domain.
//!
//! - [`entities::Persona`]: summary record shown in persona lists
//! - [`entities::PersonaDetail`]: profile page record (bio + labelled facts)
//! - [`details::DetailMap`]: ordered label → value mapping

pub mod details;
pub mod entities;
