//! Configuration for the content indexer.
//!
//! Configuration sources (highest priority first):
//! 1. Command-line flags (applied by the CLI on top of the resolved config)
//! 2. Config file (.content-indexer/config.yaml)
//! 3. Defaults (`content/`, `paths/`, `Output/` under the working directory)
//!
//! Config file discovery:
//! - Searches current directory and parents for .content-indexer/config.yaml
//! - Paths in config file are relative to the project root (the directory
//!   holding .content-indexer/)

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::{supported_locales, ContentType, Locale};

/// Directory searched for in the working directory and its parents
pub const CONFIG_DIR: &str = ".content-indexer";

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub index: IndexConfig,
    #[serde(default)]
    pub events: EventsConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathsConfig {
    /// Content tree root
    pub content_root: Option<String>,
    /// Where navigation indexes are written
    pub paths_dir: Option<String>,
    /// Where event lists and CSVs are written
    pub events_dir: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IndexConfig {
    /// Content type subdirectories to index
    pub content_types: Option<Vec<String>>,
    /// Locale allow-list
    pub locales: Option<Vec<String>>,
    /// Use the list as-is or intersect it with directories on disk
    pub locale_source: Option<LocaleSource>,
    /// One file per locale or a single combined file
    pub output_mode: Option<OutputMode>,
    /// File name used in combined mode
    pub combined_file: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventsConfig {
    /// Fallback locale for the geojson and storymap extractions
    pub default_locale: Option<String>,
    /// Fallback locale for the TimelineJS extraction
    pub timelinejs_locale: Option<String>,
}

/// How the set of locales to index is determined
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocaleSource {
    /// Exactly the configured locales
    #[default]
    Fixed,

    /// Configured locales that also exist as directories under some
    /// content type
    Discover,
}

/// Shape of the navigation index output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    /// `{paths_dir}/{locale}.json` for every locale
    #[default]
    PerLocale,

    /// `{paths_dir}/{combined_file}` keyed by locale
    Combined,
}

/// Resolved configuration with concrete paths
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedConfig {
    /// Content tree root
    pub content_root: PathBuf,
    /// Navigation index output directory
    pub paths_dir: PathBuf,
    /// Event list / CSV output directory
    pub events_dir: PathBuf,
    /// Content types to index, in output order
    pub content_types: Vec<ContentType>,
    /// Locale allow-list
    pub locales: Vec<Locale>,
    pub locale_source: LocaleSource,
    pub output_mode: OutputMode,
    pub combined_file: String,
    /// Fallback locale for geojson / storymap
    pub default_locale: Locale,
    /// Fallback locale for TimelineJS
    pub timelinejs_locale: Locale,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

impl ResolvedConfig {
    /// Defaults with every path placed under `base`
    pub fn with_base(base: &Path) -> Self {
        Self {
            content_root: base.join("content"),
            paths_dir: base.join("paths"),
            events_dir: base.join("Output"),
            content_types: ContentType::ALL.to_vec(),
            locales: supported_locales(),
            locale_source: LocaleSource::Fixed,
            output_mode: OutputMode::PerLocale,
            combined_file: "index.json".to_string(),
            default_locale: Locale::from("ar"),
            timelinejs_locale: Locale::from("ur"),
            config_file: None,
        }
    }

    /// Output path of a per-locale index
    pub fn locale_index_path(&self, locale: &Locale) -> PathBuf {
        self.paths_dir.join(format!("{}.json", locale))
    }

    /// Output path of the combined index
    pub fn combined_index_path(&self) -> PathBuf {
        self.paths_dir.join(&self.combined_file)
    }

    /// Output path of an events artifact, e.g. `geojson-ar-events.json`
    pub fn events_path(&self, prefix: &str, locale: &Locale, extension: &str) -> PathBuf {
        self.events_dir
            .join(format!("{}-{}-events.{}", prefix, locale, extension))
    }
}

/// Find config file by searching current directory and parents
fn find_config_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join(CONFIG_DIR).join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to the project root
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

/// Parse configured content type names, dropping unknown ones
fn parse_content_types(names: &[String]) -> Vec<ContentType> {
    let mut types = Vec::new();
    for name in names {
        match name.parse::<ContentType>() {
            Ok(ct) if !types.contains(&ct) => types.push(ct),
            Ok(_) => {}
            Err(_) => tracing::warn!(content_type = %name, "Skipping unknown content type"),
        }
    }
    types
}

/// Locale code from the config file; invalid codes are logged and ignored
fn config_locale(code: &str) -> Option<Locale> {
    Locale::parse(code)
        .map_err(|e| tracing::warn!(locale = %code, "Skipping locale: {}", e))
        .ok()
}

/// Locale allow-list from the config file, without duplicates
fn parse_locales(codes: &[String]) -> Vec<Locale> {
    let mut locales: Vec<Locale> = Vec::with_capacity(codes.len());
    for locale in codes.iter().filter_map(|c| config_locale(c)) {
        if !locales.contains(&locale) {
            locales.push(locale);
        }
    }
    locales
}

/// Apply a parsed config file over the defaults
fn apply_config_file(config: ConfigFile, base_dir: &Path, config_path: PathBuf) -> ResolvedConfig {
    let mut resolved = ResolvedConfig::with_base(base_dir);

    if let Some(ref root) = config.paths.content_root {
        resolved.content_root = resolve_path(base_dir, root);
    }
    if let Some(ref dir) = config.paths.paths_dir {
        resolved.paths_dir = resolve_path(base_dir, dir);
    }
    if let Some(ref dir) = config.paths.events_dir {
        resolved.events_dir = resolve_path(base_dir, dir);
    }

    if let Some(ref names) = config.index.content_types {
        resolved.content_types = parse_content_types(names);
    }
    if let Some(ref codes) = config.index.locales {
        resolved.locales = parse_locales(codes);
    }
    resolved.locale_source = config.index.locale_source.unwrap_or_default();
    resolved.output_mode = config.index.output_mode.unwrap_or_default();
    if let Some(file) = config.index.combined_file {
        resolved.combined_file = file;
    }

    if let Some(locale) = config.events.default_locale.as_deref().and_then(config_locale) {
        resolved.default_locale = locale;
    }
    if let Some(locale) = config.events.timelinejs_locale.as_deref().and_then(config_locale) {
        resolved.timelinejs_locale = locale;
    }

    resolved.config_file = Some(config_path);
    resolved
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let cwd = std::env::current_dir().context("Failed to determine working directory")?;

    match find_config_file() {
        Some(config_path) => {
            let config = load_config_file(&config_path)?;

            // Base directory is the parent of .content-indexer/
            let base_dir = config_path
                .parent()
                .and_then(|p| p.parent())
                .map(Path::to_path_buf)
                .unwrap_or(cwd);

            Ok(apply_config_file(config, &base_dir, config_path))
        }
        None => Ok(ResolvedConfig::with_base(Path::new("."))),
    }
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| format!("{:#}", e)));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}
