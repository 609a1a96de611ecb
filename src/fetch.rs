use crate::cli::CommonArgs;
use crate::config::AuthorAliases;
use crate::error::{LogTableError, Result};
use crate::model::{CommitRecord, DailyTotals};
use crate::parse::parse_log;
use crate::totals::build_daily_totals;
use crate::util::resolve_range;
use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use std::path::Path;

pub fn read_log(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| LogTableError::io(path, e))
}

pub fn fetch_commits(path: &Path) -> Result<Vec<CommitRecord>> {
    fetch_commits_with_progress(path, false)
}

pub fn fetch_commits_with_progress(path: &Path, show_progress: bool) -> Result<Vec<CommitRecord>> {
    let pb = if show_progress {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    pb.set_message(format!("Reading {}...", path.display()));
    let text = read_log(path)?;

    pb.set_message("Parsing commits...");
    let commits = parse_log(&text);

    pb.finish_and_clear();
    info!("Read {} commits from {}", commits.len(), path.display());
    Ok(commits)
}

/// Read, parse and aggregate `input` using the aliases and date window from `common`.
pub fn load_daily_totals(
    common: &CommonArgs,
    input: &Path,
) -> anyhow::Result<(Vec<CommitRecord>, DailyTotals)> {
    let range = resolve_range(common.since.as_deref(), common.until.as_deref())
        .context("Failed to resolve date range")?;

    let aliases = match &common.aliases {
        Some(path) => AuthorAliases::load(path).context("Failed to load author aliases")?,
        None => AuthorAliases::new(),
    };

    let show_progress = !common.quiet && console::user_attended_stderr();
    let commits = fetch_commits_with_progress(input, show_progress)
        .with_context(|| format!("Failed to read git log from {}", input.display()))?;

    let totals = build_daily_totals(&commits, &range, &aliases);
    Ok((commits, totals))
}
