pub mod anniversary;
pub mod config;
pub mod countdown;
pub mod entry;
pub mod export;
pub mod import;
pub mod milestone;
pub mod together;
pub mod wish;

use anyhow::Result;
use dialoguer::Confirm;

/// Ask before deleting, unless `--yes` was passed.
fn confirm_removal(what: &str, yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }

    Ok(Confirm::new()
        .with_prompt(format!("  Remove {}?", what))
        .default(false)
        .interact()?)
}
