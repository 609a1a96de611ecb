use super::{render_table, script_fragment, write_artifact};
use crate::cli::CommonArgs;
use crate::fetch::load_daily_totals;
use anyhow::Context;
use log::info;
use std::path::Path;

pub fn exec(
    common: &CommonArgs,
    input: &Path,
    output: &Path,
    element_id: &str,
    html: bool,
) -> anyhow::Result<()> {
    let (commits, totals) = load_daily_totals(common, input)?;

    let table = render_table(&totals);
    let contents = if html {
        table
    } else {
        script_fragment(element_id, &table)
    };

    write_artifact(output, &contents)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    info!(
        "Wrote {} days x {} authors from {} commits to {}",
        totals.len(),
        totals.authors().len(),
        commits.len(),
        output.display()
    );
    Ok(())
}
