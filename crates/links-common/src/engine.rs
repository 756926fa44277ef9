/// Search over the useful-links tree.
///
/// Sections are visited in queue order: root sections first, then each
/// section's subcategories appended to the back of the queue as they are
/// reached. A section whose name matches contributes itself plus every one of
/// its direct links and social entries; otherwise only links whose own name
/// matches are returned.
use std::collections::VecDeque;
use std::sync::Arc;

use tracing::{debug, info};

use crate::error::CommonError;
use crate::icon;
use crate::model::{Icon, LinkRecord, LinkSection, ResultData, SearchResult, SearchResults};
use crate::provider::ConfigurationProvider;
use crate::translation::{Labels, TranslationProvider};

pub const DEFAULT_LINKS_PATH: &str = "useful_links.json";

/// Hits of a single traversal, before they are grouped under labels.
#[derive(Debug, Default)]
pub struct Matches {
    pub links: Vec<SearchResult>,
    pub categories: Vec<SearchResult>,
}

pub struct LinkSearchEngine {
    config: Arc<dyn ConfigurationProvider>,
    translations: Arc<dyn TranslationProvider>,
    links_path: String,
}

impl LinkSearchEngine {
    pub fn new(
        config: Arc<dyn ConfigurationProvider>,
        translations: Arc<dyn TranslationProvider>,
    ) -> Self {
        Self {
            config,
            translations,
            links_path: DEFAULT_LINKS_PATH.to_string(),
        }
    }

    pub fn with_links_path(mut self, path: impl Into<String>) -> Self {
        self.links_path = path.into();
        self
    }

    /// Search the link tree for `raw_query` in `language`.
    ///
    /// An absent or empty query returns both groups empty without touching
    /// the configuration provider.
    pub async fn search(
        &self,
        language: &str,
        raw_query: Option<&str>,
    ) -> Result<SearchResults, CommonError> {
        let labels = self.translations.labels(language);

        let query = match raw_query {
            Some(q) if !q.is_empty() => q.to_uppercase(),
            _ => {
                debug!(language, "empty query, skipping configuration load");
                return Ok(group(&labels, Matches::default()));
            }
        };

        let sections = self.config.get_config(&self.links_path).await?;
        let matches = collect_matches(self.translations.as_ref(), language, &query, &sections, &labels);

        info!(
            language,
            query = %query,
            links = matches.links.len(),
            categories = matches.categories.len(),
            "link search complete"
        );
        Ok(group(&labels, matches))
    }
}

/// Walk `sections` and collect every hit for the already-uppercased `query`.
///
/// The input tree is never modified; composite ids (`parent-child`) are built
/// from the ancestor chain carried in the queue.
pub fn collect_matches(
    translations: &dyn TranslationProvider,
    language: &str,
    query: &str,
    sections: &[LinkSection],
    labels: &Labels,
) -> Matches {
    let mut matches = Matches::default();
    let mut queue: VecDeque<(String, &LinkSection)> =
        sections.iter().map(|s| (s.id.clone(), s)).collect();

    while let Some((id, section)) = queue.pop_front() {
        let section_name = translations
            .translated_name(language, section)
            .unwrap_or_default();
        let section_upper = section_name.to_uppercase();

        if section_upper.contains(query) {
            matches.categories.push(SearchResult {
                title: section_name.clone(),
                description: labels.see_related_links.clone(),
                data: ResultData::Section { id: id.clone() },
                icon: section.icon.clone().unwrap_or_else(icon::section_icon),
                matched_terms: vec![section_upper.clone()],
            });

            for link in &section.links {
                let (title, link_upper) = display_name(translations, language, link);
                matches.links.push(link_hit(
                    link,
                    title,
                    &section_name,
                    icon::open_icon(),
                    vec![section_upper.clone(), link_upper],
                ));
            }
            for social in &section.social {
                let (title, link_upper) = display_name(translations, language, social);
                matches.links.push(link_hit(
                    social,
                    title,
                    &section_name,
                    social_icon(translations, social),
                    vec![section_upper.clone(), link_upper],
                ));
            }
        } else {
            for link in &section.links {
                let (title, link_upper) = display_name(translations, language, link);
                if link_upper.contains(query) {
                    matches.links.push(link_hit(
                        link,
                        title,
                        &section_name,
                        icon::open_icon(),
                        vec![link_upper],
                    ));
                }
            }
            for social in &section.social {
                let (title, link_upper) = display_name(translations, language, social);
                if link_upper.contains(query) {
                    matches.links.push(link_hit(
                        social,
                        title,
                        &section_name,
                        social_icon(translations, social),
                        vec![link_upper],
                    ));
                }
            }
        }

        for sub in &section.categories {
            queue.push_back((format!("{id}-{}", sub.id), sub));
        }
    }

    matches
}

fn group(labels: &Labels, matches: Matches) -> SearchResults {
    let mut results = SearchResults::new();
    results.insert(labels.external_links.clone(), matches.links);
    // Identical labels collapse to one group; the category list wins.
    results.insert(labels.useful_links.clone(), matches.categories);
    results
}

fn display_name(
    translations: &dyn TranslationProvider,
    language: &str,
    link: &LinkRecord,
) -> (String, String) {
    let name = translations.translated_name(language, link).unwrap_or_default();
    let upper = name.to_uppercase();
    (name, upper)
}

fn social_icon(translations: &dyn TranslationProvider, link: &LinkRecord) -> Icon {
    let platform = translations.english_name(link).unwrap_or_default();
    icon::social_icon(&platform)
}

fn link_hit(
    link: &LinkRecord,
    title: String,
    section_name: &str,
    icon: Icon,
    matched_terms: Vec<String>,
) -> SearchResult {
    SearchResult {
        title,
        description: section_name.to_string(),
        data: ResultData::Link(link.clone()),
        icon,
        matched_terms,
    }
}
