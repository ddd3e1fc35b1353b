//! Landing-page content model.
//!
//! `LandingContent` is the aggregate root for everything the public site
//! renders: hero, about, services, portfolio, and brand philosophy. The
//! portfolio item list is the single source of truth for service "works";
//! a service's bucket is always the derived filter over `portfolio.items`
//! (see [`crate::portfolio`]).
//!
//! Editor-facing structs carry both locales ([`LocalizedText`]); the public
//! site consumes the `*View` mirrors produced by `resolve`, which apply the
//! locale fallback to every localized field.

use serde::{Deserialize, Serialize};

use crate::locale::{Locale, LocalizedText};
use crate::types::EntityId;

// ---------------------------------------------------------------------------
// Editor-facing content (both locales)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub heading: LocalizedText,
    pub subheading: LocalizedText,
    pub cta_label: LocalizedText,
    pub cta_link: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    pub heading: LocalizedText,
    pub description: LocalizedText,
}

/// A service offering, displayed in order on the landing page and on its own
/// `/services/{slug}` detail page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceItem {
    pub id: EntityId,
    /// URL segment, restricted by [`crate::slug`].
    pub slug: String,
    pub title: LocalizedText,
    pub description: LocalizedText,
    pub background_color: String,
    /// Ordered gallery image URLs.
    #[serde(default)]
    pub gallery: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicesContent {
    pub intro: LocalizedText,
    #[serde(default)]
    pub items: Vec<ServiceItem>,
}

/// A portfolio ("works") card.
///
/// `service_id = None` places the item in the unassigned bucket. `sort_order`
/// is the position within its bucket and is (re)assigned on every bulk save;
/// relink appends past the destination bucket's maximum.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    pub id: EntityId,
    pub title: LocalizedText,
    pub description: LocalizedText,
    pub image_url: String,
    #[serde(default)]
    pub link_url: Option<String>,
    #[serde(default)]
    pub service_id: Option<EntityId>,
    #[serde(default)]
    pub sort_order: i64,
}

/// Portfolio section heading/subheading, editable independently of the items.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioMeta {
    pub heading: LocalizedText,
    pub subheading: LocalizedText,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioContent {
    pub heading: LocalizedText,
    pub subheading: LocalizedText,
    /// Full ordered item list across all buckets.
    #[serde(default)]
    pub items: Vec<PortfolioItem>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandPhilosophyStructureItem {
    pub id: EntityId,
    pub label: String,
    pub title: LocalizedText,
    pub description: LocalizedText,
    #[serde(default)]
    pub sub_description: Option<LocalizedText>,
}

/// Display style of one closing-sentence fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClosingVariant {
    #[default]
    Default,
    Primary,
    Accent,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandPhilosophyClosingPart {
    pub id: EntityId,
    pub text: LocalizedText,
    #[serde(default)]
    pub variant: ClosingVariant,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandPhilosophySummaryItem {
    pub id: EntityId,
    pub label: String,
    pub title: LocalizedText,
    pub description: LocalizedText,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrandPhilosophyContent {
    pub heading: LocalizedText,
    pub subheading: LocalizedText,
    pub intro_heading: LocalizedText,
    pub intro_paragraphs: Vec<LocalizedText>,
    pub structure_label: String,
    pub structure_description: LocalizedText,
    pub structure_items: Vec<BrandPhilosophyStructureItem>,
    pub closing_title: LocalizedText,
    pub closing_description_parts: Vec<BrandPhilosophyClosingPart>,
    pub summary_label: String,
    pub summary_description: LocalizedText,
    pub summary_supporting_text: LocalizedText,
    pub summary_items_label: String,
    pub summary_items: Vec<BrandPhilosophySummaryItem>,
    pub core_values_label: String,
    pub core_values: Vec<LocalizedText>,
}

/// Aggregate root for the whole landing page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingContent {
    pub hero: HeroContent,
    pub about: AboutContent,
    pub services: ServicesContent,
    pub portfolio: PortfolioContent,
    pub brand_philosophy: BrandPhilosophyContent,
}

// ---------------------------------------------------------------------------
// Public-site views (single locale, fallback applied)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroView {
    pub heading: String,
    pub subheading: String,
    pub cta_label: String,
    pub cta_link: String,
    pub image_url: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutView {
    pub heading: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceView {
    pub id: EntityId,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub background_color: String,
    pub gallery: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicesView {
    pub intro: String,
    pub items: Vec<ServiceView>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItemView {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub link_url: Option<String>,
    pub service_id: Option<EntityId>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioView {
    pub heading: String,
    pub subheading: String,
    pub items: Vec<PortfolioItemView>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureItemView {
    pub id: EntityId,
    pub label: String,
    pub title: String,
    pub description: String,
    pub sub_description: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClosingPartView {
    pub id: EntityId,
    pub text: String,
    pub variant: ClosingVariant,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryItemView {
    pub id: EntityId,
    pub label: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandPhilosophyView {
    pub heading: String,
    pub subheading: String,
    pub intro_heading: String,
    pub intro_paragraphs: Vec<String>,
    pub structure_label: String,
    pub structure_description: String,
    pub structure_items: Vec<StructureItemView>,
    pub closing_title: String,
    pub closing_description_parts: Vec<ClosingPartView>,
    pub summary_label: String,
    pub summary_description: String,
    pub summary_supporting_text: String,
    pub summary_items_label: String,
    pub summary_items: Vec<SummaryItemView>,
    pub core_values_label: String,
    pub core_values: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingView {
    pub hero: HeroView,
    pub about: AboutView,
    pub services: ServicesView,
    pub portfolio: PortfolioView,
    pub brand_philosophy: BrandPhilosophyView,
}

// ---------------------------------------------------------------------------
// Locale resolution
// ---------------------------------------------------------------------------

impl HeroContent {
    pub fn resolve(&self, locale: Locale) -> HeroView {
        HeroView {
            heading: self.heading.resolve(locale).to_string(),
            subheading: self.subheading.resolve(locale).to_string(),
            cta_label: self.cta_label.resolve(locale).to_string(),
            cta_link: self.cta_link.clone(),
            image_url: self.image_url.clone(),
        }
    }
}

impl AboutContent {
    pub fn resolve(&self, locale: Locale) -> AboutView {
        AboutView {
            heading: self.heading.resolve(locale).to_string(),
            description: self.description.resolve(locale).to_string(),
        }
    }
}

impl ServiceItem {
    pub fn resolve(&self, locale: Locale) -> ServiceView {
        ServiceView {
            id: self.id.clone(),
            slug: self.slug.clone(),
            title: self.title.resolve(locale).to_string(),
            description: self.description.resolve(locale).to_string(),
            background_color: self.background_color.clone(),
            gallery: self.gallery.clone(),
        }
    }
}

impl ServicesContent {
    pub fn resolve(&self, locale: Locale) -> ServicesView {
        ServicesView {
            intro: self.intro.resolve(locale).to_string(),
            items: self.items.iter().map(|item| item.resolve(locale)).collect(),
        }
    }
}

impl PortfolioItem {
    pub fn resolve(&self, locale: Locale) -> PortfolioItemView {
        PortfolioItemView {
            id: self.id.clone(),
            title: self.title.resolve(locale).to_string(),
            description: self.description.resolve(locale).to_string(),
            image_url: self.image_url.clone(),
            link_url: self.link_url.clone(),
            service_id: self.service_id.clone(),
        }
    }
}

impl PortfolioContent {
    pub fn resolve(&self, locale: Locale) -> PortfolioView {
        PortfolioView {
            heading: self.heading.resolve(locale).to_string(),
            subheading: self.subheading.resolve(locale).to_string(),
            items: self.items.iter().map(|item| item.resolve(locale)).collect(),
        }
    }
}

impl BrandPhilosophyContent {
    pub fn resolve(&self, locale: Locale) -> BrandPhilosophyView {
        BrandPhilosophyView {
            heading: self.heading.resolve(locale).to_string(),
            subheading: self.subheading.resolve(locale).to_string(),
            intro_heading: self.intro_heading.resolve(locale).to_string(),
            intro_paragraphs: self
                .intro_paragraphs
                .iter()
                .map(|p| p.resolve(locale).to_string())
                .collect(),
            structure_label: self.structure_label.clone(),
            structure_description: self.structure_description.resolve(locale).to_string(),
            structure_items: self
                .structure_items
                .iter()
                .map(|item| StructureItemView {
                    id: item.id.clone(),
                    label: item.label.clone(),
                    title: item.title.resolve(locale).to_string(),
                    description: item.description.resolve(locale).to_string(),
                    sub_description: item
                        .sub_description
                        .as_ref()
                        .map(|d| d.resolve(locale).to_string()),
                })
                .collect(),
            closing_title: self.closing_title.resolve(locale).to_string(),
            closing_description_parts: self
                .closing_description_parts
                .iter()
                .map(|part| ClosingPartView {
                    id: part.id.clone(),
                    text: part.text.resolve(locale).to_string(),
                    variant: part.variant,
                })
                .collect(),
            summary_label: self.summary_label.clone(),
            summary_description: self.summary_description.resolve(locale).to_string(),
            summary_supporting_text: self.summary_supporting_text.resolve(locale).to_string(),
            summary_items_label: self.summary_items_label.clone(),
            summary_items: self
                .summary_items
                .iter()
                .map(|item| SummaryItemView {
                    id: item.id.clone(),
                    label: item.label.clone(),
                    title: item.title.resolve(locale).to_string(),
                    description: item.description.resolve(locale).to_string(),
                })
                .collect(),
            core_values_label: self.core_values_label.clone(),
            core_values: self
                .core_values
                .iter()
                .map(|v| v.resolve(locale).to_string())
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Save normalization
// ---------------------------------------------------------------------------
//
// Applied immediately before every persist: localized fields are trimmed and
// an empty secondary is backfilled from the primary, so stored rows never
// carry an empty English string while the Japanese one is set.

impl HeroContent {
    pub fn normalize_for_save(&self) -> HeroContent {
        HeroContent {
            heading: self.heading.normalize_for_save(),
            subheading: self.subheading.normalize_for_save(),
            cta_label: self.cta_label.normalize_for_save(),
            cta_link: self.cta_link.trim().to_string(),
            image_url: self.image_url.trim().to_string(),
        }
    }
}

impl AboutContent {
    pub fn normalize_for_save(&self) -> AboutContent {
        AboutContent {
            heading: self.heading.normalize_for_save(),
            description: self.description.normalize_for_save(),
        }
    }
}

impl ServiceItem {
    /// Normalize for persistence, including slug normalization. The slug
    /// rule itself is enforced separately by the validation gate.
    pub fn normalize_for_save(&self) -> ServiceItem {
        ServiceItem {
            id: self.id.clone(),
            slug: crate::slug::normalize_slug(&self.slug),
            title: self.title.normalize_for_save(),
            description: self.description.normalize_for_save(),
            background_color: self.background_color.trim().to_string(),
            gallery: self
                .gallery
                .iter()
                .map(|url| url.trim().to_string())
                .filter(|url| !url.is_empty())
                .collect(),
        }
    }
}

impl ServicesContent {
    pub fn normalize_for_save(&self) -> ServicesContent {
        ServicesContent {
            intro: self.intro.normalize_for_save(),
            items: self.items.iter().map(ServiceItem::normalize_for_save).collect(),
        }
    }
}

impl PortfolioMeta {
    pub fn normalize_for_save(&self) -> PortfolioMeta {
        PortfolioMeta {
            heading: self.heading.normalize_for_save(),
            subheading: self.subheading.normalize_for_save(),
        }
    }
}

impl BrandPhilosophyContent {
    pub fn normalize_for_save(&self) -> BrandPhilosophyContent {
        BrandPhilosophyContent {
            heading: self.heading.normalize_for_save(),
            subheading: self.subheading.normalize_for_save(),
            intro_heading: self.intro_heading.normalize_for_save(),
            intro_paragraphs: self
                .intro_paragraphs
                .iter()
                .map(LocalizedText::normalize_for_save)
                .collect(),
            structure_label: self.structure_label.trim().to_string(),
            structure_description: self.structure_description.normalize_for_save(),
            structure_items: self
                .structure_items
                .iter()
                .map(|item| BrandPhilosophyStructureItem {
                    id: item.id.clone(),
                    label: item.label.trim().to_string(),
                    title: item.title.normalize_for_save(),
                    description: item.description.normalize_for_save(),
                    sub_description: item
                        .sub_description
                        .as_ref()
                        .map(LocalizedText::normalize_for_save),
                })
                .collect(),
            closing_title: self.closing_title.normalize_for_save(),
            closing_description_parts: self
                .closing_description_parts
                .iter()
                .map(|part| BrandPhilosophyClosingPart {
                    id: part.id.clone(),
                    text: part.text.normalize_for_save(),
                    variant: part.variant,
                })
                .collect(),
            summary_label: self.summary_label.trim().to_string(),
            summary_description: self.summary_description.normalize_for_save(),
            summary_supporting_text: self.summary_supporting_text.normalize_for_save(),
            summary_items_label: self.summary_items_label.trim().to_string(),
            summary_items: self
                .summary_items
                .iter()
                .map(|item| BrandPhilosophySummaryItem {
                    id: item.id.clone(),
                    label: item.label.trim().to_string(),
                    title: item.title.normalize_for_save(),
                    description: item.description.normalize_for_save(),
                })
                .collect(),
            core_values_label: self.core_values_label.trim().to_string(),
            core_values: self
                .core_values
                .iter()
                .map(LocalizedText::normalize_for_save)
                .collect(),
        }
    }
}

impl LandingContent {
    pub fn resolve(&self, locale: Locale) -> LandingView {
        LandingView {
            hero: self.hero.resolve(locale),
            about: self.about.resolve(locale),
            services: self.services.resolve(locale),
            portfolio: self.portfolio.resolve(locale),
            brand_philosophy: self.brand_philosophy.resolve(locale),
        }
    }

    /// Seed content served when the store has no rows yet, so a fresh
    /// deployment renders a complete page instead of empty sections.
    pub fn default_content() -> LandingContent {
        LandingContent {
            hero: HeroContent {
                heading: LocalizedText::new(
                    "つくるで、世界を動かす。",
                    "We move the world by making.",
                ),
                subheading: LocalizedText::new(
                    "コリンはブランドとデジタル体験のためのクリエイティブスタジオです。",
                    "Korin is a creative studio for brands and digital experiences.",
                ),
                cta_label: LocalizedText::shared("Contact"),
                cta_link: "#contact".to_string(),
                image_url: String::new(),
            },
            about: AboutContent {
                heading: LocalizedText::new("コリンについて", "About Korin"),
                description: LocalizedText::new(
                    "戦略からデザイン、実装までを一気通貫で手がける少数精鋭のチームです。",
                    "A small team covering strategy, design, and build end to end.",
                ),
            },
            services: ServicesContent {
                intro: LocalizedText::new(
                    "映像、ブランディング、デジタルプロダクトの3領域を提供しています。",
                    "We work across film, branding, and digital products.",
                ),
                items: vec![
                    ServiceItem {
                        id: "creative-production".to_string(),
                        slug: "creative-production".to_string(),
                        title: LocalizedText::new(
                            "クリエイティブプロダクション",
                            "Creative Production",
                        ),
                        description: LocalizedText::new(
                            "映像・グラフィックを中心としたビジュアル制作。",
                            "Visual content production centered on film and graphics.",
                        ),
                        background_color: "#F2426D".to_string(),
                        gallery: Vec::new(),
                    },
                    ServiceItem {
                        id: "brand-strategy".to_string(),
                        slug: "brand-strategy".to_string(),
                        title: LocalizedText::new("ブランド戦略", "Brand Strategy"),
                        description: LocalizedText::new(
                            "ロゴからガイドラインまで、一貫したブランドづくり。",
                            "Cohesive brand building, from logo to guidelines.",
                        ),
                        background_color: "#E4EEFA".to_string(),
                        gallery: Vec::new(),
                    },
                ],
            },
            portfolio: PortfolioContent {
                heading: LocalizedText::shared("Our Portfolio"),
                subheading: LocalizedText::new(
                    "これまでの実績の一部をご紹介します。",
                    "A curated selection of our past work.",
                ),
                items: Vec::new(),
            },
            brand_philosophy: BrandPhilosophyContent {
                heading: LocalizedText::shared("Brand Philosophy"),
                subheading: LocalizedText::new("私たちは何者か", "Who we are"),
                intro_heading: LocalizedText::new(
                    "「つくる」ことを、信じ続ける。",
                    "We keep believing in making.",
                ),
                intro_paragraphs: vec![LocalizedText::new(
                    "コリンは、手を動かすことから価値が生まれると考えています。",
                    "Korin believes value starts where hands start moving.",
                )],
                structure_label: "Structure".to_string(),
                structure_description: LocalizedText::default(),
                structure_items: Vec::new(),
                closing_title: LocalizedText::default(),
                closing_description_parts: Vec::new(),
                summary_label: "Philosophy Summary".to_string(),
                summary_description: LocalizedText::default(),
                summary_supporting_text: LocalizedText::default(),
                summary_items_label: String::new(),
                summary_items: Vec::new(),
                core_values_label: "Core Values".to_string(),
                core_values: Vec::new(),
            },
        }
    }
}
