use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A display icon: glyph name plus the icon family it belongs to.
/// Social icons also carry a brand color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Icon {
    pub name: String,
    pub class: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Icon {
    pub fn new(name: &str, class: &str) -> Self {
        Self {
            name: name.to_string(),
            class: class.to_string(),
            color: None,
        }
    }
}

/// A single link or social link inside a section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Canonical (English) name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Localized names keyed by language code.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub names: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A node of the useful-links tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkSection {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub names: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(default)]
    pub links: Vec<LinkRecord>,
    #[serde(default)]
    pub social: Vec<LinkRecord>,
    #[serde(default)]
    pub categories: Vec<LinkSection>,
}

/// Payload carried by a search hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResultData {
    Link(LinkRecord),
    /// Composite id of the matched section, e.g. `events-academic-deadlines`.
    Section { id: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub description: String,
    pub data: ResultData,
    pub icon: Icon,
    /// Uppercased names the query was found in, section name first.
    pub matched_terms: Vec<String>,
}

/// A labelled list of hits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultGroup {
    pub label: String,
    pub results: Vec<SearchResult>,
}

/// Ordered label -> results mapping returned by a search.
///
/// Inserting a label that already exists replaces its results but keeps its
/// original position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    groups: Vec<ResultGroup>,
}

impl SearchResults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: impl Into<String>, results: Vec<SearchResult>) {
        let label = label.into();
        match self.groups.iter_mut().find(|g| g.label == label) {
            Some(group) => group.results = results,
            None => self.groups.push(ResultGroup { label, results }),
        }
    }

    pub fn get(&self, label: &str) -> Option<&[SearchResult]> {
        self.groups
            .iter()
            .find(|g| g.label == label)
            .map(|g| g.results.as_slice())
    }

    pub fn groups(&self) -> &[ResultGroup] {
        &self.groups
    }

    pub fn into_groups(self) -> Vec<ResultGroup> {
        self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Total number of hits across all groups.
    pub fn hit_count(&self) -> usize {
        self.groups.iter().map(|g| g.results.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_without_collections_deserializes_empty() {
        let section: LinkSection =
            serde_json::from_str(r#"{"id":"a","name":"Housing"}"#).expect("valid section");
        assert_eq!(section.id, "a");
        assert!(section.links.is_empty());
        assert!(section.social.is_empty());
        assert!(section.categories.is_empty());
        assert!(section.names.is_empty());
    }

    #[test]
    fn nested_tree_deserializes() {
        let json = r#"[{
            "id": "events",
            "names": {"fr": "Événements"},
            "name": "Events",
            "icon": {"name": "calendar", "class": "Ionicons"},
            "categories": [{"id": "academic", "links": [{"name": "Deadlines", "url": "https://example.org"}]}]
        }]"#;
        let sections: Vec<LinkSection> = serde_json::from_str(json).expect("valid tree");
        assert_eq!(sections[0].names.get("fr").map(String::as_str), Some("Événements"));
        assert_eq!(sections[0].categories[0].links[0].url.as_deref(), Some("https://example.org"));
        assert_eq!(sections[0].icon.as_ref().map(|i| i.name.as_str()), Some("calendar"));
    }

    #[test]
    fn insert_existing_label_replaces_in_place() {
        let hit = SearchResult {
            title: "Leases".to_string(),
            description: "Housing".to_string(),
            data: ResultData::Section { id: "a".to_string() },
            icon: Icon::new("open", "Ionicons"),
            matched_terms: vec!["LEASES".to_string()],
        };

        let mut results = SearchResults::new();
        results.insert("Links", vec![hit.clone(), hit.clone()]);
        results.insert("Other", Vec::new());
        results.insert("Links", vec![hit]);

        assert_eq!(results.len(), 2);
        assert_eq!(results.groups()[0].label, "Links");
        assert_eq!(results.get("Links").map(|r| r.len()), Some(1));
        assert_eq!(results.hit_count(), 1);
    }
}
