//! Two-locale text model with deterministic fallback.
//!
//! Every user-facing text field on the landing site is stored as a
//! Japanese/English pair. Japanese is the primary locale: an empty English
//! string defers to the Japanese one at display time, and is backfilled from
//! it at save time so stored rows never carry an empty secondary while the
//! primary is set.

use serde::{Deserialize, Serialize};

/// Display locale selected per request.
///
/// Japanese is the primary locale; unknown or absent selectors fall back to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ja,
    En,
}

impl Locale {
    /// Parse a `locale` query-parameter value. Anything other than `"en"`
    /// (case-insensitive) selects Japanese.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("en") => Locale::En,
            _ => Locale::Ja,
        }
    }
}

/// A Japanese/English string pair.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocalizedText {
    pub ja: String,
    #[serde(default)]
    pub en: String,
}

impl LocalizedText {
    pub fn new(ja: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            ja: ja.into(),
            en: en.into(),
        }
    }

    /// Both locales carry the same string.
    pub fn shared(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            ja: text.clone(),
            en: text,
        }
    }

    /// Select the string for `locale`, falling back to Japanese when the
    /// requested locale's string is empty. Total: an empty result is valid.
    pub fn resolve(&self, locale: Locale) -> &str {
        match locale {
            Locale::Ja => &self.ja,
            Locale::En => {
                if self.en.is_empty() {
                    &self.ja
                } else {
                    &self.en
                }
            }
        }
    }

    /// Trim both locales; an empty trimmed English string is backfilled from
    /// the trimmed Japanese one. Applied immediately before every persist.
    pub fn normalize_for_save(&self) -> LocalizedText {
        let ja = self.ja.trim().to_string();
        let en = self.en.trim();
        let en = if en.is_empty() {
            ja.clone()
        } else {
            en.to_string()
        };
        LocalizedText { ja, en }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Locale::from_param --------------------------------------------------

    #[test]
    fn param_en_selects_english() {
        assert_eq!(Locale::from_param(Some("en")), Locale::En);
        assert_eq!(Locale::from_param(Some("EN")), Locale::En);
    }

    #[test]
    fn param_absent_or_unknown_selects_japanese() {
        assert_eq!(Locale::from_param(None), Locale::Ja);
        assert_eq!(Locale::from_param(Some("ja")), Locale::Ja);
        assert_eq!(Locale::from_param(Some("fr")), Locale::Ja);
    }

    // -- resolve -------------------------------------------------------------

    #[test]
    fn resolve_returns_requested_locale_when_present() {
        let text = LocalizedText::new("A", "B");
        assert_eq!(text.resolve(Locale::En), "B");
        assert_eq!(text.resolve(Locale::Ja), "A");
    }

    #[test]
    fn resolve_falls_back_to_primary_when_secondary_empty() {
        let text = LocalizedText::new("A", "");
        assert_eq!(text.resolve(Locale::En), "A");
    }

    #[test]
    fn resolve_is_total_for_empty_pair() {
        let text = LocalizedText::default();
        assert_eq!(text.resolve(Locale::En), "");
        assert_eq!(text.resolve(Locale::Ja), "");
    }

    // -- normalize_for_save --------------------------------------------------

    #[test]
    fn normalize_trims_both_locales() {
        let text = LocalizedText::new("  こんにちは  ", "  hello  ");
        let normalized = text.normalize_for_save();
        assert_eq!(normalized.ja, "こんにちは");
        assert_eq!(normalized.en, "hello");
    }

    #[test]
    fn normalize_backfills_empty_secondary_from_primary() {
        let text = LocalizedText::new("タイトル", "   ");
        let normalized = text.normalize_for_save();
        assert_eq!(normalized.en, "タイトル");
    }

    #[test]
    fn normalize_of_empty_pair_stays_empty() {
        let normalized = LocalizedText::default().normalize_for_save();
        assert_eq!(normalized, LocalizedText::default());
    }
}
