use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CommonError;
use crate::model::{LinkRecord, LinkSection};

pub const CANONICAL_LANGUAGE: &str = "en";

/// Anything carrying a canonical name plus per-language names.
pub trait Localized {
    fn canonical_name(&self) -> Option<&str>;
    fn localized_name(&self, language: &str) -> Option<&str>;
}

impl Localized for LinkSection {
    fn canonical_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn localized_name(&self, language: &str) -> Option<&str> {
        self.names.get(language).map(String::as_str)
    }
}

impl Localized for LinkRecord {
    fn canonical_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn localized_name(&self, language: &str) -> Option<&str> {
        self.names.get(language).map(String::as_str)
    }
}

/// UI captions the search results are grouped and described with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labels {
    pub external_links: String,
    pub useful_links: String,
    pub see_related_links: String,
}

/// Resolves display strings for records and result groups.
///
/// A missing translation is `None`, never an error.
pub trait TranslationProvider: Send + Sync {
    fn translated_name(&self, language: &str, record: &dyn Localized) -> Option<String>;
    fn english_name(&self, record: &dyn Localized) -> Option<String>;
    fn labels(&self, language: &str) -> Labels;
}

/// Label catalogs keyed by language, with built-in English and French.
#[derive(Debug, Clone)]
pub struct CatalogTranslations {
    catalogs: HashMap<String, Labels>,
}

impl Default for CatalogTranslations {
    fn default() -> Self {
        let mut catalogs = HashMap::new();
        catalogs.insert(
            "en".to_string(),
            Labels {
                external_links: "External Links".to_string(),
                useful_links: "Useful Links".to_string(),
                see_related_links: "See related links".to_string(),
            },
        );
        catalogs.insert(
            "fr".to_string(),
            Labels {
                external_links: "Liens externes".to_string(),
                useful_links: "Liens utiles".to_string(),
                see_related_links: "Voir les liens connexes".to_string(),
            },
        );
        Self { catalogs }
    }
}

impl CatalogTranslations {
    /// Built-in catalogs overlaid with the languages found in `json`
    /// (`{"<lang>": {"external_links": ..., "useful_links": ..., "see_related_links": ...}}`).
    pub fn from_json(json: &str) -> Result<Self, CommonError> {
        let extra: HashMap<String, Labels> =
            serde_json::from_str(json).map_err(|e| CommonError::InvalidCatalog(e.to_string()))?;
        let mut translations = Self::default();
        for (language, labels) in extra {
            debug!(language, "loaded label catalog");
            translations.catalogs.insert(language, labels);
        }
        Ok(translations)
    }

    pub fn from_file(path: &Path) -> Result<Self, CommonError> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            CommonError::InvalidCatalog(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_json(&json)
    }

    pub fn languages(&self) -> Vec<String> {
        let mut languages: Vec<String> = self.catalogs.keys().cloned().collect();
        languages.sort_unstable();
        languages
    }

    pub fn supports(&self, language: &str) -> bool {
        self.catalogs.contains_key(language)
    }
}

impl TranslationProvider for CatalogTranslations {
    fn translated_name(&self, language: &str, record: &dyn Localized) -> Option<String> {
        record
            .localized_name(language)
            .or_else(|| {
                if language == CANONICAL_LANGUAGE {
                    record.canonical_name()
                } else {
                    None
                }
            })
            .map(str::to_string)
    }

    fn english_name(&self, record: &dyn Localized) -> Option<String> {
        record
            .canonical_name()
            .or_else(|| record.localized_name(CANONICAL_LANGUAGE))
            .map(str::to_string)
    }

    fn labels(&self, language: &str) -> Labels {
        self.catalogs
            .get(language)
            .or_else(|| self.catalogs.get(CANONICAL_LANGUAGE))
            .cloned()
            .unwrap_or_else(|| Labels {
                external_links: String::new(),
                useful_links: String::new(),
                see_related_links: String::new(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: Option<&str>, names: &[(&str, &str)]) -> LinkRecord {
        LinkRecord {
            name: name.map(str::to_string),
            names: names
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn translated_name_prefers_localized_entry() {
        let translations = CatalogTranslations::default();
        let r = record(Some("Library"), &[("fr", "Bibliothèque")]);
        assert_eq!(translations.translated_name("fr", &r).as_deref(), Some("Bibliothèque"));
        assert_eq!(translations.translated_name("en", &r).as_deref(), Some("Library"));
    }

    #[test]
    fn missing_translation_is_none() {
        let translations = CatalogTranslations::default();
        let r = record(Some("Library"), &[]);
        assert_eq!(translations.translated_name("fr", &r), None);
        assert_eq!(translations.english_name(&record(None, &[])), None);
    }

    #[test]
    fn english_name_falls_back_to_en_entry() {
        let translations = CatalogTranslations::default();
        let r = record(None, &[("en", "Twitter"), ("fr", "Gazouillis")]);
        assert_eq!(translations.english_name(&r).as_deref(), Some("Twitter"));
    }

    #[test]
    fn catalog_overlay_and_fallback() {
        let json = r#"{"es": {"external_links": "Enlaces externos", "useful_links": "Enlaces útiles", "see_related_links": "Ver enlaces"}}"#;
        let translations = CatalogTranslations::from_json(json).expect("valid catalog");
        assert_eq!(translations.languages(), vec!["en", "es", "fr"]);
        assert_eq!(translations.labels("es").useful_links, "Enlaces útiles");
        assert_eq!(translations.labels("de").useful_links, "Useful Links");
        assert!(!translations.supports("de"));
    }

    #[test]
    fn malformed_catalog_is_rejected() {
        let err = CatalogTranslations::from_json(r#"{"es": {"external_links": 3}}"#)
            .expect_err("catalog should be rejected");
        assert!(matches!(err, CommonError::InvalidCatalog(_)));
    }
}
