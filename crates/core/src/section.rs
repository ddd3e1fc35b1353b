//! Typed dispatch over editable landing-page sections.
//!
//! The admin panel saves one section at a time. Instead of a string-keyed
//! handler table, the payload is an internally tagged enum so every section
//! carries its own typed body and the save path is an exhaustive match.

use serde::Deserialize;

use crate::landing::{
    AboutContent, BrandPhilosophyContent, HeroContent, PortfolioMeta, ServicesContent,
};

/// A single-section save request, tagged by `"section"` on the wire:
///
/// ```json
/// { "section": "hero", "heading": { "ja": "...", "en": "..." }, ... }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "section", rename_all = "kebab-case")]
pub enum SectionUpdate {
    Hero(HeroContent),
    About(AboutContent),
    Services(ServicesContent),
    Portfolio(PortfolioMeta),
    BrandPhilosophy(BrandPhilosophyContent),
}

impl SectionUpdate {
    /// Section name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            SectionUpdate::Hero(_) => "hero",
            SectionUpdate::About(_) => "about",
            SectionUpdate::Services(_) => "services",
            SectionUpdate::Portfolio(_) => "portfolio",
            SectionUpdate::BrandPhilosophy(_) => "brand-philosophy",
        }
    }
}
