use std::{env, path::PathBuf};

use anyhow::{Result, bail};
use tracing::debug;

use super::super::args::CommonArgs;
use crate::config::{CONFIG_FILE_NAME, Config, ConfigLoadResult, load_config};

/// Configuration after applying command-line overrides.
pub struct CatalogSettings {
    pub config: Config,
    /// Directory catalog paths are resolved against.
    pub root: PathBuf,
}

impl CatalogSettings {
    pub fn catalog_path(&self) -> &str {
        &self.config.catalog_path
    }

    pub fn target_languages(&self) -> &[String] {
        &self.config.target_languages
    }
}

pub fn resolve_settings(common: &CommonArgs) -> Result<CatalogSettings> {
    let root = env::current_dir()?;
    let ConfigLoadResult {
        mut config,
        from_file,
    } = load_config(&root)?;
    debug!(from_file, "loaded configuration");

    apply_overrides(&mut config, common);
    config.validate()?;

    if config.target_languages.is_empty() {
        bail!(
            "No target languages configured. Set 'targetLanguages' in {} or pass --languages.",
            CONFIG_FILE_NAME
        );
    }

    Ok(CatalogSettings { config, root })
}

fn apply_overrides(config: &mut Config, common: &CommonArgs) {
    if let Some(catalog) = &common.catalog {
        config.catalog_path = catalog.to_string_lossy().to_string();
    }
    if !common.languages.is_empty() {
        config.target_languages = common
            .languages
            .iter()
            .map(|language| language.trim().to_string())
            .collect();
    }
}
