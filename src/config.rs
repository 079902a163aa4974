// src/config.rs
//! Runtime configuration: which catalog to rank and where detail links point.
//!
//! Catalog resolution order:
//! 1) `$SPOTLIGHT_CATALOG_PATH` (must exist)
//! 2) `config/catalog.toml`
//! 3) `config/catalog.json`
//! 4) built-in framework

use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::catalog::Catalog;

pub const ENV_CATALOG_PATH: &str = "SPOTLIGHT_CATALOG_PATH";
pub const ENV_DETAIL_BASE: &str = "SPOTLIGHT_DETAIL_BASE";
pub const DEFAULT_DETAIL_BASE: &str = "/explorer";

#[derive(Debug, Clone)]
pub struct SpotlightConfig {
    pub catalog: Catalog,
    /// Deep-link base for the detail view, e.g. `/explorer`.
    pub detail_base: String,
}

impl Default for SpotlightConfig {
    fn default() -> Self {
        Self {
            catalog: Catalog::builtin(),
            detail_base: DEFAULT_DETAIL_BASE.to_string(),
        }
    }
}

impl SpotlightConfig {
    pub fn from_env() -> Result<Self> {
        let catalog = load_catalog_default()?;
        let detail_base = std::env::var(ENV_DETAIL_BASE)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_DETAIL_BASE.to_string());
        Ok(Self {
            catalog,
            detail_base,
        })
    }
}

/// Load and validate a catalog file. TOML or JSON; the extension is a hint.
pub fn load_catalog_from(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading catalog from {}", path.display()))?;
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let catalog = parse_catalog(&content, ext.as_str())
        .with_context(|| format!("parsing catalog {}", path.display()))?;
    catalog
        .validate()
        .with_context(|| format!("validating catalog {}", path.display()))?;
    info!(
        target: "spotlight",
        path = %path.display(),
        entries = catalog.len(),
        "catalog loaded"
    );
    Ok(catalog)
}

pub fn load_catalog_default() -> Result<Catalog> {
    if let Ok(p) = std::env::var(ENV_CATALOG_PATH) {
        let pb = PathBuf::from(p);
        if pb.exists() {
            return load_catalog_from(&pb);
        }
        return Err(anyhow!("{ENV_CATALOG_PATH} points to non-existent path"));
    }
    let toml_p = PathBuf::from("config/catalog.toml");
    if toml_p.exists() {
        return load_catalog_from(&toml_p);
    }
    let json_p = PathBuf::from("config/catalog.json");
    if json_p.exists() {
        return load_catalog_from(&json_p);
    }
    Ok(Catalog::builtin())
}

fn parse_catalog(s: &str, hint_ext: &str) -> Result<Catalog> {
    let try_toml = hint_ext == "toml" || s.contains("[[focuses]]");
    if try_toml {
        if let Ok(c) = toml::from_str::<Catalog>(s) {
            return Ok(c);
        }
    }
    if let Ok(c) = serde_json::from_str::<Catalog>(s) {
        return Ok(c);
    }
    if !try_toml {
        if let Ok(c) = toml::from_str::<Catalog>(s) {
            return Ok(c);
        }
    }
    Err(anyhow!("unsupported catalog format"))
}
