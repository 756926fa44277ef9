use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchLinksParams {
    /// Text to look for in section and link names. Empty or omitted returns no hits.
    pub query: Option<String>,
    /// Language code such as "en" or "fr" (default: the server's default language).
    pub language: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SocialIconParams {
    /// Social platform name such as "Twitter" or "instagram".
    pub platform: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct IconInfo {
    pub name: String,
    pub class: String,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LinkHit {
    pub title: String,
    pub description: String,
    /// "link" for a link or social entry, "category" for a matched section.
    pub kind: String,
    /// Composite section id, set for category hits.
    pub section_id: Option<String>,
    /// Link target, set for link hits that declare one.
    pub url: Option<String>,
    pub icon: IconInfo,
    pub matched_terms: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LinkGroup {
    pub label: String,
    pub results: Vec<LinkHit>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SearchLinksResponse {
    pub language: String,
    pub groups: Vec<LinkGroup>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LanguagesResponse {
    pub default_language: String,
    pub languages: Vec<String>,
}
