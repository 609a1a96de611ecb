use crate::model::{AuthorCounts, DailyTotals};
use log::debug;

impl DailyTotals {
    /// Insert every missing day between the first and last date.
    ///
    /// New days get a zero entry for each author present on the first date
    /// only, so authors that show up later are absent from earlier gap days.
    /// Empty totals are left as they are.
    pub fn fill_missing_dates(&mut self) {
        let (Some(first), Some(last)) = (self.first_date(), self.last_date()) else {
            return;
        };

        let seed: AuthorCounts = self.days[&first]
            .keys()
            .map(|author| (author.clone(), 0))
            .collect();

        let mut inserted = 0usize;
        for date in first.iter_days().take_while(|d| *d <= last) {
            if !self.contains_date(date) {
                self.days.insert(date, seed.clone());
                inserted += 1;
            }
        }

        debug!("Filled {inserted} empty days between {first} and {last}");
    }
}
