//! Read-side composition of the full landing aggregate.

use korin_core::landing::{
    LandingContent, PortfolioContent, ServicesContent,
};
use korin_core::locale::LocalizedText;
use sqlx::PgPool;

use crate::repositories::{ContentRepo, HeroRepo, PortfolioRepo, ServiceRepo};

pub struct LandingRepo;

impl LandingRepo {
    /// Load the full aggregate. Sections that have never been saved fall
    /// back to the seed content, so a fresh deployment renders a complete
    /// page.
    pub async fn load(pool: &PgPool) -> Result<LandingContent, sqlx::Error> {
        let defaults = LandingContent::default_content();

        let hero = HeroRepo::get(pool)
            .await?
            .map(Into::into)
            .unwrap_or(defaults.hero);

        let sections = ContentRepo::get(pool).await?;
        let about = sections.about.unwrap_or(defaults.about);
        let brand_philosophy = sections.brand_philosophy.unwrap_or(defaults.brand_philosophy);

        let services = match ServiceRepo::get_meta(pool).await? {
            None => defaults.services,
            Some(meta) => ServicesContent {
                intro: LocalizedText::new(meta.intro_ja, meta.intro_en),
                items: ServiceRepo::list_items(pool)
                    .await?
                    .into_iter()
                    .map(Into::into)
                    .collect(),
            },
        };

        let portfolio = match PortfolioRepo::get_meta(pool).await? {
            None => defaults.portfolio,
            Some(meta) => PortfolioContent {
                heading: LocalizedText::new(meta.heading_ja, meta.heading_en),
                subheading: LocalizedText::new(meta.subheading_ja, meta.subheading_en),
                items: PortfolioRepo::list_all_items(pool)
                    .await?
                    .into_iter()
                    .map(Into::into)
                    .collect(),
            },
        };

        Ok(LandingContent {
            hero,
            about,
            services,
            portfolio,
            brand_philosophy,
        })
    }
}
