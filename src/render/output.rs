use crate::cli::CommonArgs;
use crate::error::{LogTableError, Result};
use crate::model::{CommitRecord, DailyTotals, DayEntry, TotalsOutput, SCHEMA_VERSION};
use chrono::Utc;
use console::style;
use std::path::Path;

/// Wrap the table in a statement that assigns it to `element_id`'s `innerHTML`.
pub fn script_fragment(element_id: &str, table_html: &str) -> String {
    let id = element_id.replace('\\', "\\\\").replace('\'', "\\'");
    let body = table_html
        .replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${");
    format!("document.getElementById('{id}').innerHTML = `{body}`;")
}

/// Write `contents` to `path`, creating parent directories as needed.
pub fn write_artifact(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| LogTableError::io(parent, e))?;
    }
    std::fs::write(path, contents).map_err(|e| LogTableError::io(path, e))
}

pub fn output_json(
    totals: &DailyTotals,
    commit_count: usize,
    input: &Path,
    common: &CommonArgs,
) -> anyhow::Result<()> {
    let output = TotalsOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        input_path: input.to_string_lossy().to_string(),
        since: common.since.clone(),
        until: common.until.clone(),
        commit_count,
        days: totals.clone(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn output_ndjson(totals: &DailyTotals) -> anyhow::Result<()> {
    for (date, authors) in totals.iter() {
        let entry = DayEntry {
            date: *date,
            authors: authors.clone(),
        };
        println!("{}", serde_json::to_string(&entry)?);
    }
    Ok(())
}

pub fn output_summary(commits: &[CommitRecord], totals: &DailyTotals) -> anyhow::Result<()> {
    println!("{}", style("Insertions Summary").bold());
    println!("{}", "─".repeat(50));

    if totals.is_empty() {
        println!("No commits with diffstat lines found");
        return Ok(());
    }

    println!("Commits parsed: {}", style(commits.len()).cyan());
    println!("Days covered: {}", style(totals.len()).cyan());
    println!("Total insertions: {}", style(totals.total()).green());
    if let (Some(first), Some(last)) = (totals.first_date(), totals.last_date()) {
        println!("Date range: {} to {}", style(first).dim(), style(last).dim());
    }

    let mut authors: Vec<_> = totals.author_totals().into_iter().collect();
    authors.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    println!();
    println!("{:<40} {:>12}", style("Author").bold(), style("Insertions").bold());
    for (author, count) in &authors {
        println!("{:<40} {:>12}", author, count);
    }

    println!("\nUse --json or --ndjson flags to export the daily totals.");
    Ok(())
}
