use crate::config::AuthorAliases;
use crate::model::DailyTotals;

impl DailyTotals {
    /// Re-key every day's authors through `aliases`, summing collisions.
    pub fn merge_authors(&self, aliases: &AuthorAliases) -> DailyTotals {
        let mut merged = DailyTotals::new();
        for (date, authors) in &self.days {
            let day = merged.days.entry(*date).or_default();
            for (author, count) in authors {
                let canonical = aliases.resolve(author);
                *day.entry(canonical.to_string()).or_insert(0) += count;
            }
        }
        merged
    }
}
