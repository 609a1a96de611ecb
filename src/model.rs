use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

pub const SCHEMA_VERSION: u32 = 1;

/// One commit recovered from the log: a header line plus its diffstat summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    pub hash: String,
    pub author: String,
    pub timestamp: DateTime<FixedOffset>,
    pub message: String,
    pub insertions: u64,
    pub deletions: u64,
}

impl CommitRecord {
    /// Calendar day of the commit in UTC.
    pub fn day(&self) -> NaiveDate {
        self.timestamp.with_timezone(&Utc).date_naive()
    }
}

pub type AuthorCounts = BTreeMap<String, u64>;

/// Insertions per author per calendar day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DailyTotals {
    pub(crate) days: BTreeMap<NaiveDate, AuthorCounts>,
}

impl DailyTotals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, date: NaiveDate, author: &str, count: u64) {
        let day = self.days.entry(date).or_default();
        *day.entry(author.to_string()).or_insert(0) += count;
    }

    pub fn get(&self, date: NaiveDate, author: &str) -> Option<u64> {
        self.days.get(&date).and_then(|day| day.get(author)).copied()
    }

    pub fn day(&self, date: NaiveDate) -> Option<&AuthorCounts> {
        self.days.get(&date)
    }

    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.days.contains_key(&date)
    }

    /// Dates in ascending order.
    pub fn dates(&self) -> impl DoubleEndedIterator<Item = NaiveDate> + '_ {
        self.days.keys().copied()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&NaiveDate, &AuthorCounts)> + '_ {
        self.days.iter()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.days.keys().next().copied()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.days.keys().next_back().copied()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Union of author names across every day, sorted ascending.
    pub fn authors(&self) -> BTreeSet<&str> {
        self.days
            .values()
            .flat_map(|day| day.keys().map(String::as_str))
            .collect()
    }

    pub fn total_for(&self, date: NaiveDate) -> u64 {
        self.days.get(&date).map(|day| day.values().sum()).unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.days.values().flat_map(|day| day.values()).sum()
    }

    /// Sum per author over the whole range.
    pub fn author_totals(&self) -> AuthorCounts {
        let mut totals = AuthorCounts::new();
        for day in self.days.values() {
            for (author, count) in day {
                *totals.entry(author.clone()).or_insert(0) += count;
            }
        }
        totals
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayEntry {
    pub date: NaiveDate,
    pub authors: AuthorCounts,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TotalsOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub input_path: String,
    pub since: Option<String>,
    pub until: Option<String>,
    pub commit_count: usize,
    pub days: DailyTotals,
}

#[derive(Debug, Clone)]
pub struct DateRange {
    pub since: Option<DateTime<Utc>>,
    pub until: Option<DateTime<Utc>>,
}

impl DateRange {
    pub fn new() -> Self {
        Self { since: None, until: None }
    }

    pub fn with_since(mut self, since: DateTime<Utc>) -> Self {
        self.since = Some(since);
        self
    }

    pub fn with_until(mut self, until: DateTime<Utc>) -> Self {
        self.until = Some(until);
        self
    }

    pub fn contains(&self, timestamp: &DateTime<Utc>) -> bool {
        if let Some(since) = self.since {
            if timestamp < &since {
                return false;
            }
        }
        if let Some(until) = self.until {
            if timestamp > &until {
                return false;
            }
        }
        true
    }
}

impl Default for DateRange {
    fn default() -> Self {
        Self::new()
    }
}
