use std::{env, fs};

use anyhow::{Context, Result};

use super::super::args::SyncCommand;
use super::helper::{CatalogSettings, resolve_settings};
use super::{CommandResult, CommandSummary, SyncSummary};
use crate::{
    provider::{OpenAiConfig, OpenAiProvider},
    source::FileSource,
    sync::{sync_catalog, write_catalog},
};

pub fn sync(cmd: SyncCommand) -> Result<CommandResult> {
    let settings = resolve_settings(&cmd.common)?;
    let provider = build_provider(&settings)?;
    let source = FileSource::new(&settings.root);

    let outcome = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(sync_catalog(
            &source,
            settings.catalog_path(),
            &provider,
            settings.target_languages(),
        ))?;

    let written = match &outcome.rendered {
        Some(rendered) => {
            write_catalog(&source.resolve(settings.catalog_path()), rendered)?;
            true
        }
        None => false,
    };

    let summary_path = match &cmd.summary {
        Some(path) => {
            fs::write(path, outcome.changes.to_markdown())
                .with_context(|| format!("Failed to write summary: {}", path.display()))?;
            Some(path.display().to_string())
        }
        None => None,
    };

    let remaining_count = outcome.pending.len();
    Ok(CommandResult {
        summary: CommandSummary::Sync(SyncSummary {
            catalog_path: settings.catalog_path().to_string(),
            changes: outcome.changes,
            pending: outcome.pending,
            written,
            summary_path,
        }),
        remaining_count,
    })
}

fn build_provider(settings: &CatalogSettings) -> Result<OpenAiProvider> {
    let config = &settings.config;
    let api_key = env::var(&config.api_key_env)
        .ok()
        .filter(|key| !key.trim().is_empty())
        .with_context(|| format!("Environment variable {} is not set", config.api_key_env))?;

    let provider = OpenAiProvider::new(OpenAiConfig {
        api_base: config.api_base_url.clone(),
        api_key,
        model: config.model.clone(),
        timeout: config.timeout(),
    })?;
    Ok(provider)
}
