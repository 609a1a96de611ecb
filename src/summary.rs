use crate::cli::CommonArgs;
use crate::fetch::load_daily_totals;
use crate::render::{output_json, output_ndjson, output_summary};
use std::path::Path;

pub fn exec(common: &CommonArgs, input: &Path, json: bool, ndjson: bool) -> anyhow::Result<()> {
    let (commits, totals) = load_daily_totals(common, input)?;

    if json {
        output_json(&totals, commits.len(), input, common)?;
    } else if ndjson {
        output_ndjson(&totals)?;
    } else {
        output_summary(&commits, &totals)?;
    }

    Ok(())
}
