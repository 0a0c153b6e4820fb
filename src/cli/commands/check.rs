use anyhow::Result;

use super::super::args::CheckCommand;
use super::helper::resolve_settings;
use super::{CheckSummary, CommandResult, CommandSummary};
use crate::{source::FileSource, sync::plan_catalog};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let settings = resolve_settings(&cmd.common)?;
    let source = FileSource::new(&settings.root);

    let plan = plan_catalog(
        &source,
        settings.catalog_path(),
        settings.target_languages(),
    )?;

    let pending = plan.pending_labels();
    let remaining_count = pending.len() + plan.stale_removed.len();

    Ok(CommandResult {
        summary: CommandSummary::Check(CheckSummary {
            catalog_path: settings.catalog_path().to_string(),
            target_languages: settings.target_languages().to_vec(),
            pending,
            stale_keys: plan.stale_removed,
        }),
        remaining_count,
    })
}
