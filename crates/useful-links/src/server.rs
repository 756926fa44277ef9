/// MCP server over the campus useful-links directory.
///
/// Exposes three tools:
/// - `search_links`: Match a query against section and link names
/// - `social_icon`: Resolve the icon and brand color of a social platform
/// - `list_languages`: Languages the label catalog knows about
use std::sync::Arc;

use rmcp::{
    Json, ServerHandler,
    handler::server::router::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::*,
    tool, tool_handler, tool_router,
};
use tracing::{info, warn};

use links_common::engine::LinkSearchEngine;
use links_common::icon::social_icon;
use links_common::mcp_api::{
    IconInfo, LanguagesResponse, LinkGroup, LinkHit, SearchLinksParams, SearchLinksResponse,
    SocialIconParams,
};
use links_common::model::{Icon, ResultData, SearchResult};
use links_common::translation::CatalogTranslations;

#[derive(Clone)]
pub struct UsefulLinksServer {
    engine: Arc<LinkSearchEngine>,
    translations: Arc<CatalogTranslations>,
    default_language: String,
    tool_router: ToolRouter<UsefulLinksServer>,
}

impl UsefulLinksServer {
    pub fn new(
        engine: Arc<LinkSearchEngine>,
        translations: Arc<CatalogTranslations>,
        default_language: String,
    ) -> Self {
        Self {
            engine,
            translations,
            default_language,
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_router]
impl UsefulLinksServer {
    #[tool(description = "Search useful links by section or link name. A matching section returns all of its links.")]
    async fn search_links(
        &self,
        Parameters(params): Parameters<SearchLinksParams>,
    ) -> Result<Json<SearchLinksResponse>, String> {
        let language = params
            .language
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| self.default_language.clone());
        if !self.translations.supports(&language) {
            warn!(language = %language, "no labels for language, using defaults");
        }

        let results = self
            .engine
            .search(&language, params.query.as_deref())
            .await
            .map_err(|e| format!("search failed: {e}"))?;

        let groups: Vec<LinkGroup> = results
            .into_groups()
            .into_iter()
            .map(|g| LinkGroup {
                label: g.label,
                results: g.results.into_iter().map(to_api_hit).collect(),
            })
            .collect();

        Ok(Json(SearchLinksResponse { language, groups }))
    }

    #[tool(description = "Resolve the icon and color for a social platform (e.g. 'Twitter', 'instagram').")]
    async fn social_icon(
        &self,
        Parameters(params): Parameters<SocialIconParams>,
    ) -> Result<Json<IconInfo>, String> {
        Ok(Json(to_api_icon(social_icon(params.platform.trim()))))
    }

    #[tool(description = "List the languages that have result labels.")]
    async fn list_languages(&self) -> Result<Json<LanguagesResponse>, String> {
        info!("list_languages tool invoked");
        Ok(Json(LanguagesResponse {
            default_language: self.default_language.clone(),
            languages: self.translations.languages(),
        }))
    }
}

fn to_api_hit(result: SearchResult) -> LinkHit {
    let (kind, section_id, url) = match result.data {
        ResultData::Link(link) => ("link", None, link.url),
        ResultData::Section { id } => ("category", Some(id), None),
    };
    LinkHit {
        title: result.title,
        description: result.description,
        kind: kind.to_string(),
        section_id,
        url,
        icon: to_api_icon(result.icon),
        matched_terms: result.matched_terms,
    }
}

fn to_api_icon(icon: Icon) -> IconInfo {
    IconInfo {
        name: icon.name,
        class: icon.class,
        color: icon.color,
    }
}

#[tool_handler]
impl ServerHandler for UsefulLinksServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_06_18,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "useful-links".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Campus useful-links MCP server. Use search_links to find links and categories by \
                 name in a given language, social_icon to resolve a social platform's icon, and \
                 list_languages to see which languages have labels."
                    .to_string(),
            ),
        }
    }
}
