pub mod aggregate;
pub mod fill;
pub mod merge;

pub use aggregate::{aggregate, aggregate_in};

use crate::config::AuthorAliases;
use crate::model::{CommitRecord, DailyTotals, DateRange};

/// Aggregate, gap-fill and alias-merge parsed commits into the table data.
pub fn build_daily_totals(
    commits: &[CommitRecord],
    range: &DateRange,
    aliases: &AuthorAliases,
) -> DailyTotals {
    let mut totals = aggregate_in(commits, range);
    totals.fill_missing_dates();
    totals.merge_authors(aliases)
}
