use crate::model::{CommitRecord, DailyTotals, DateRange};
use chrono::Utc;
use log::debug;

/// Sum insertions per author per UTC calendar day.
pub fn aggregate(commits: &[CommitRecord]) -> DailyTotals {
    aggregate_in(commits, &DateRange::default())
}

/// Like [`aggregate`], skipping commits outside `range`.
pub fn aggregate_in(commits: &[CommitRecord], range: &DateRange) -> DailyTotals {
    let mut totals = DailyTotals::new();
    let mut skipped = 0usize;

    for commit in commits {
        if !range.contains(&commit.timestamp.with_timezone(&Utc)) {
            skipped += 1;
            continue;
        }
        totals.add(commit.day(), &commit.author, commit.insertions);
    }

    if skipped > 0 {
        debug!("{skipped} commits outside the requested date range");
    }
    totals
}
