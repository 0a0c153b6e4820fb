//! End-to-end sync of one catalog.
//!
//! load → parse → reconcile → one provider batch → merge → serialize.
//! Nothing is written here; callers persist `rendered` with [`write_catalog`]
//! only after the whole run succeeded, so a failed run leaves the file as it was.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::{debug, info};

use crate::catalog::{Catalog, serialize};
use crate::core::{ChangeSummary, MergeOutcome, ReconcilePlan, merge, reconcile};
use crate::provider::TranslationProvider;
use crate::source::CatalogSource;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("catalog not found: {reference}")]
    CatalogNotFound { reference: String },
}

/// Result of a full sync.
#[derive(Debug)]
pub struct SyncOutcome {
    pub changes: ChangeSummary,
    /// Requested `"<key> (<language>)"` pairs still without a translation.
    pub pending: Vec<String>,
    /// Number of keys sent to the provider.
    pub requested: usize,
    /// New catalog text; `None` when the catalog did not change.
    /// Ends in a newline only if the file it replaces did.
    pub rendered: Option<String>,
}

pub fn load_catalog<S>(source: &S, reference: &str) -> Result<Catalog>
where
    S: CatalogSource + ?Sized,
{
    let text = fetch_catalog_text(source, reference)?;
    parse_catalog(&text, reference)
}

fn fetch_catalog_text<S>(source: &S, reference: &str) -> Result<String>
where
    S: CatalogSource + ?Sized,
{
    let text = source
        .get_catalog_text(reference)?
        .ok_or_else(|| SyncError::CatalogNotFound {
            reference: reference.to_string(),
        })?;
    Ok(text)
}

fn parse_catalog(text: &str, reference: &str) -> Result<Catalog> {
    let catalog = Catalog::from_json(text)
        .with_context(|| format!("Failed to parse catalog: {}", reference))?;
    Ok(catalog)
}

/// Reconcile without contacting a provider.
pub fn plan_catalog<S>(source: &S, reference: &str, target_languages: &[String]) -> Result<ReconcilePlan>
where
    S: CatalogSource + ?Sized,
{
    let catalog = load_catalog(source, reference)?;
    Ok(reconcile(&catalog, target_languages))
}

pub async fn sync_catalog<S, P>(
    source: &S,
    reference: &str,
    provider: &P,
    target_languages: &[String],
) -> Result<SyncOutcome>
where
    S: CatalogSource + ?Sized,
    P: TranslationProvider + ?Sized,
{
    let text = fetch_catalog_text(source, reference)?;
    let catalog = parse_catalog(&text, reference)?;
    let ReconcilePlan {
        working_catalog,
        requests,
        trace,
        stale_removed,
        ..
    } = reconcile(&catalog, target_languages);

    let merged = if requests.is_empty() {
        debug!("no translations needed, skipping provider");
        MergeOutcome::unchanged(working_catalog)
    } else {
        info!(keys = requests.len(), "requesting translations");
        let response = provider
            .translate_batch(&requests, &catalog.source_language)
            .await
            .context("Translation provider request failed")?;
        merge(working_catalog, &trace, &response)
    };

    let MergeOutcome {
        catalog: final_catalog,
        added,
        updated,
        pending,
        ..
    } = merged;
    let changes = ChangeSummary {
        added,
        updated,
        stale_removed,
    };

    let rendered = if changes.is_empty() {
        None
    } else {
        let mut rendered = serialize(&final_catalog).context("Failed to serialize catalog")?;
        if text.ends_with('\n') {
            rendered.push('\n');
        }
        Some(rendered)
    };

    Ok(SyncOutcome {
        changes,
        pending,
        requested: requests.len(),
        rendered,
    })
}

/// Replace `path` with `content` via a sibling temp file and a rename.
pub fn write_catalog(path: &Path, content: &str) -> Result<()> {
    let file_name = path
        .file_name()
        .with_context(|| format!("Invalid catalog path: {}", path.display()))?;
    let temp_path = path.with_file_name(format!(".{}.tmp", file_name.to_string_lossy()));

    fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write file: {}", temp_path.display()))?;
    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to replace file: {}", path.display()))?;
    Ok(())
}
