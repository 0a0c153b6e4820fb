use std::fmt::Write;

use serde::Serialize;

/// Change provenance for one run, as handed to the commit/PR publisher.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeSummary {
    /// `"<key> (<language>)"` pairs that had no localization before.
    pub added: Vec<String>,
    /// `"<key> (<language>)"` pairs whose empty value was filled in.
    pub updated: Vec<String>,
    pub stale_removed: Vec<String>,
}

impl ChangeSummary {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.updated.is_empty() && self.stale_removed.is_empty()
    }

    /// One-line description, e.g. `Update translations: 3 added, 1 removed`.
    pub fn commit_message(&self) -> String {
        let counts = self.counts();
        if counts.is_empty() {
            return "No translation changes".to_string();
        }
        format!("Update translations: {}", counts.join(", "))
    }

    /// Markdown body listing every change, suitable for a pull request.
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "## {}", self.commit_message());

        for (title, items) in [
            ("Added", &self.added),
            ("Updated", &self.updated),
            ("Removed stale keys", &self.stale_removed),
        ] {
            if items.is_empty() {
                continue;
            }
            let _ = writeln!(out, "\n### {} ({})\n", title, items.len());
            for item in items {
                let _ = writeln!(out, "- `{}`", item);
            }
        }
        out
    }

    fn counts(&self) -> Vec<String> {
        [
            (self.added.len(), "added"),
            (self.updated.len(), "updated"),
            (self.stale_removed.len(), "removed"),
        ]
        .into_iter()
        .filter(|(count, _)| *count > 0)
        .map(|(count, label)| format!("{} {}", count, label))
        .collect()
    }
}
