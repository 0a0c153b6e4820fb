//! Applying provider output back onto the working catalog.

use std::collections::HashSet;

use tracing::{debug, warn};

use super::types::{BatchResponse, KeyAction, Trace, change_label};
use crate::catalog::Catalog;

/// Result of merging one batch response.
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    pub catalog: Catalog,
    pub added: Vec<String>,
    pub updated: Vec<String>,
    /// Requested pairs the response did not satisfy, in request order.
    pub pending: Vec<String>,
    /// True when at least one translation was written.
    pub modified: bool,
}

impl MergeOutcome {
    /// Outcome for a pass that had nothing to send to the provider.
    pub fn unchanged(catalog: Catalog) -> Self {
        Self {
            catalog,
            added: Vec::new(),
            updated: Vec::new(),
            pending: Vec::new(),
            modified: false,
        }
    }
}

/// Write the provider's translations into `working`.
///
/// Only pairs recorded in `trace` are applied. Results for unknown keys or
/// languages that were never requested are skipped with a warning, and empty
/// values are not written, so the pair stays pending for the next run.
pub fn merge(mut working: Catalog, trace: &Trace, response: &BatchResponse) -> MergeOutcome {
    let mut added = Vec::new();
    let mut updated = Vec::new();
    let mut applied: HashSet<(String, String)> = HashSet::new();

    for result in &response.translations {
        let Some(trace_entry) = trace.get(&result.key) else {
            warn!(key = %result.key, "skipping translation for a key that was not requested");
            continue;
        };
        let Some(entry) = working.strings.get_mut(&result.key) else {
            warn!(key = %result.key, "skipping translation for a key missing from the catalog");
            continue;
        };

        for (language, value) in &result.translations {
            if !trace_entry.contains(language) {
                warn!(
                    key = %result.key,
                    language = %language,
                    "ignoring translation for a language that was not requested"
                );
                continue;
            }
            if value.is_empty() {
                debug!(key = %result.key, language = %language, "provider returned an empty translation");
                continue;
            }

            entry.set_translation(language, value);
            if !applied.insert((result.key.clone(), language.clone())) {
                continue;
            }

            let label = change_label(&result.key, language);
            match trace_entry.action(language) {
                KeyAction::Added => added.push(label),
                KeyAction::Updated => updated.push(label),
            }
        }
    }

    let mut pending = Vec::new();
    for (key, trace_entry) in trace {
        for language in &trace_entry.languages {
            if !applied.contains(&(key.clone(), language.clone())) {
                pending.push(change_label(key, language));
            }
        }
    }

    let modified = !added.is_empty() || !updated.is_empty();
    debug!(
        added = added.len(),
        updated = updated.len(),
        pending = pending.len(),
        "merged translations"
    );

    MergeOutcome {
        catalog: working,
        added,
        updated,
        pending,
        modified,
    }
}
