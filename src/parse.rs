//! Line-oriented parser for the `:%h:%an:%ad:%s` + `--shortstat` log export.
//!
//! Every line is classified against two patterns. A header line opens a
//! pending commit; the next diffstat summary line closes it. Anything else
//! (diff bodies, file stat lines, blank lines) is ignored.

use crate::model::CommitRecord;
use chrono::{DateTime, FixedOffset};
use log::{debug, trace};
use regex::Regex;
use std::sync::LazyLock;

static HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r":([A-Za-z0-9_]+):([^:]+?):([A-Za-z0-9_]+ [A-Za-z0-9_]+ \s?[0-9]+ [0-9]+:[0-9]+:[0-9]+ [0-9]+ [+-][0-9]+):(.+)",
    )
    .expect("header pattern is valid")
});

static STATS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+ files? changed,").expect("stats pattern is valid"));

static INSERTIONS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+) insertions?\(\+\)").expect("insertions pattern is valid")
});

static DELETIONS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+) deletions?\(-\)").expect("deletions pattern is valid")
});

// Weekday is dropped before parsing; git always prints a consistent one.
const DATE_FORMAT: &str = "%b %d %H:%M:%S %Y %z";

/// Parse a git-style date such as `Mon Jan  1 10:00:00 2024 +0000`.
pub fn parse_log_date(text: &str) -> Option<DateTime<FixedOffset>> {
    let mut tokens = text.split_whitespace();
    tokens.next()?;
    let rest = tokens.collect::<Vec<_>>().join(" ");
    DateTime::parse_from_str(&rest, DATE_FORMAT).ok()
}

fn parse_header(line: &str) -> Option<CommitRecord> {
    let caps = HEADER.captures(line)?;
    let date_text = &caps[3];
    let Some(timestamp) = parse_log_date(date_text) else {
        debug!("Skipping header with unparseable date '{date_text}'");
        return None;
    };

    Some(CommitRecord {
        hash: caps[1].to_string(),
        author: caps[2].trim().to_string(),
        timestamp,
        message: caps[4].trim().to_string(),
        insertions: 0,
        deletions: 0,
    })
}

fn capture_count(pattern: &Regex, line: &str) -> u64 {
    pattern
        .captures(line)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(0)
}

/// Single forward pass over log lines with one pending-commit slot.
#[derive(Debug, Default)]
pub struct LogParser {
    pending: Option<CommitRecord>,
    lines_seen: usize,
    orphans: usize,
}

impl LogParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one line; returns a commit once its stats line has been seen.
    pub fn feed_line(&mut self, line: &str) -> Option<CommitRecord> {
        self.lines_seen += 1;
        let line = line.strip_suffix('\r').unwrap_or(line);

        if let Some(header) = parse_header(line) {
            if let Some(orphan) = self.pending.replace(header) {
                trace!("Dropping commit {} without stats line", orphan.hash);
                self.orphans += 1;
            }
            return None;
        }

        if !STATS.is_match(line) {
            return None;
        }

        let mut commit = self.pending.take()?;
        commit.insertions = capture_count(&INSERTIONS, line);
        commit.deletions = capture_count(&DELETIONS, line);
        Some(commit)
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Headers replaced by a later header before their stats line arrived.
    /// A header still pending is not counted.
    pub fn orphans(&self) -> usize {
        self.orphans
    }

    pub fn lines_seen(&self) -> usize {
        self.lines_seen
    }
}

/// Parse a full log export into commit records, in input order.
pub fn parse_log(text: &str) -> Vec<CommitRecord> {
    let mut parser = LogParser::new();
    let commits: Vec<CommitRecord> = text
        .split('\n')
        .filter_map(|line| parser.feed_line(line))
        .collect();

    debug!(
        "Parsed {} commits from {} lines ({} headers without stats)",
        commits.len(),
        parser.lines_seen(),
        parser.orphans() + usize::from(parser.has_pending())
    );
    commits
}
