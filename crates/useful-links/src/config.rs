use std::path::{Path, PathBuf};

use links_common::engine::DEFAULT_LINKS_PATH;
use links_common::translation::CatalogTranslations;

use crate::error::AppError;

/// Application configuration loaded explicitly from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the useful-links JSON documents.
    pub config_dir: String,
    /// File name of the section tree, relative to `config_dir`.
    pub links_file: String,
    /// Optional label catalog overlaying the built-in English/French labels.
    pub translations_path: Option<String>,
    pub default_language: String,
}

impl Config {
    /// Required:
    /// - `USEFUL_LINKS_CONFIG_DIR`: directory containing the section tree
    ///
    /// Optional:
    /// - `USEFUL_LINKS_FILE` (default: "useful_links.json")
    /// - `USEFUL_LINKS_TRANSLATIONS`: path to a label catalog JSON file
    /// - `USEFUL_LINKS_DEFAULT_LANGUAGE` (default: "en")
    pub fn from_env() -> Result<Self, AppError> {
        let config_dir = std::env::var("USEFUL_LINKS_CONFIG_DIR").map_err(|_| {
            AppError::Config("USEFUL_LINKS_CONFIG_DIR environment variable is required".to_string())
        })?;

        let links_file =
            std::env::var("USEFUL_LINKS_FILE").unwrap_or_else(|_| DEFAULT_LINKS_PATH.to_string());

        let config = Self {
            config_dir,
            links_file,
            translations_path: std::env::var("USEFUL_LINKS_TRANSLATIONS").ok(),
            default_language: std::env::var("USEFUL_LINKS_DEFAULT_LANGUAGE")
                .unwrap_or_else(|_| "en".to_string()),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), AppError> {
        let links = self.links_file_path();
        if !links.exists() {
            return Err(AppError::Config(format!("required file not found: {}", links.display())));
        }
        if let Some(path) = &self.translations_path {
            if !Path::new(path).exists() {
                return Err(AppError::Config(format!("translation catalog not found: {path}")));
            }
        }
        if self.default_language.is_empty() {
            return Err(AppError::Config("default language must not be empty".to_string()));
        }
        Ok(())
    }

    /// Built-in labels, overlaid with the configured catalog when one is set.
    pub fn load_translations(&self) -> Result<CatalogTranslations, AppError> {
        match &self.translations_path {
            Some(path) => Ok(CatalogTranslations::from_file(Path::new(path))?),
            None => Ok(CatalogTranslations::default()),
        }
    }

    pub fn config_dir(&self) -> PathBuf {
        Path::new(&self.config_dir).to_path_buf()
    }

    pub fn links_file_path(&self) -> PathBuf {
        Path::new(&self.config_dir).join(&self.links_file)
    }
}
