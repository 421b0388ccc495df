use jiff::civil::{date, Date};
use jiff::ToSpan;

/// Which Mondays of a year a scraping run should cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MondayPolicy {
    /// Every Monday of the year, including the ones already gone.
    All,
    /// Only the Mondays that are not in the past.
    #[default]
    Future,
}

impl MondayPolicy {
    pub fn mondays(&self, year: i16, today: Date) -> Vec<Date> {
        match self {
            MondayPolicy::All => mondays_in_year(year),
            MondayPolicy::Future => future_mondays_in_year(year, today),
        }
    }
}

/// Return all the Mondays in a given year, in increasing order.
pub fn mondays_in_year(year: i16) -> Vec<Date> {
    let start = date(year, 1, 1);
    let offset = (7 - start.weekday().to_monday_zero_offset()) % 7;
    let first_monday = start + i64::from(offset).days();
    first_monday
        .series(1.week())
        .take_while(|d| d.year() == year)
        .collect()
}

/// Same as [mondays_in_year] but drops the Mondays before `today`.
pub fn future_mondays_in_year(year: i16, today: Date) -> Vec<Date> {
    mondays_in_year(year)
        .into_iter()
        .filter(|monday| *monday >= today)
        .collect()
}

#[cfg(test)]
mod tests {
    use jiff::civil::{date, Weekday};
    use jiff::ToSpan;

    use super::*;

    #[test]
    fn mondays_2025() {
        let mondays = mondays_in_year(2025);
        assert_eq!(mondays.len(), 52);
        assert_eq!(mondays[0], date(2025, 1, 6));
        assert_eq!(*mondays.last().unwrap(), date(2025, 12, 29));
    }

    #[test]
    fn first_day_is_a_monday() {
        // 2024-01-01 is a Monday, no offset needed
        let mondays = mondays_in_year(2024);
        assert_eq!(mondays[0], date(2024, 1, 1));
        assert_eq!(*mondays.last().unwrap(), date(2024, 12, 30));
        assert_eq!(mondays.len(), 53);
    }

    #[test]
    fn mondays_properties() {
        for year in 1900..=2100 {
            let mondays = mondays_in_year(year);
            assert!(mondays.len() == 52 || mondays.len() == 53, "year {}", year);
            assert!(mondays.iter().all(|d| d.weekday() == Weekday::Monday));
            assert!(mondays.iter().all(|d| d.year() == year));
            for pair in mondays.windows(2) {
                assert_eq!(pair[0] + 7.days(), pair[1]);
            }
        }
    }

    #[test]
    fn future_mondays() {
        let mondays = future_mondays_in_year(2025, date(2025, 12, 10));
        assert_eq!(mondays, vec![date(2025, 12, 15), date(2025, 12, 22), date(2025, 12, 29)]);

        // today is a Monday, keep it
        let mondays = future_mondays_in_year(2025, date(2025, 12, 22));
        assert_eq!(mondays[0], date(2025, 12, 22));

        assert!(future_mondays_in_year(2025, date(2026, 1, 1)).is_empty());
        assert_eq!(future_mondays_in_year(2025, date(2024, 6, 1)).len(), 52);
    }

    #[test]
    fn policy() {
        let today = date(2025, 7, 1);
        assert_eq!(MondayPolicy::All.mondays(2025, today).len(), 52);
        assert_eq!(MondayPolicy::Future.mondays(2025, today)[0], date(2025, 7, 7));
        assert_eq!(MondayPolicy::default(), MondayPolicy::Future);
    }
}
