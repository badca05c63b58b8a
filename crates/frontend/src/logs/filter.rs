use std::cmp::Reverse;

use chrono::NaiveDate;
use contracts::logs::{month_year_of, LogEntry};

/// Filter criteria as the three dashboard inputs produce them.
///
/// `date` is `YYYY-MM-DD` (native date picker) and `month` is `YYYY-MM`
/// (native month picker); empty string means "not set". The inputs keep the
/// two date criteria mutually exclusive (setting one clears the other), and
/// `apply` additionally gives `date` precedence if both ever arrive set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogFilters {
    pub name: String,
    pub date: String,
    pub month: String,
}

impl LogFilters {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.date.is_empty() && self.month.is_empty()
    }
}

/// Render a `YYYY-MM-DD` picker value as the `DD/MM/YYYY` wire format.
fn picker_date_as_br(value: &str) -> Option<String> {
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?;
    Some(date.format("%d/%m/%Y").to_string())
}

/// Month/year of a `YYYY-MM` picker value.
fn picker_month_as_parts(value: &str) -> Option<(u32, i32)> {
    let (year, month) = value.split_once('-')?;
    let year = year.parse::<i32>().ok()?;
    let month = month.parse::<u32>().ok()?;
    (1..=12).contains(&month).then_some((month, year))
}

/// Pure filter pass over the full log set.
pub fn apply(logs: &[LogEntry], filters: &LogFilters) -> Vec<LogEntry> {
    let mut result: Vec<LogEntry> = logs.to_vec();

    if !filters.name.is_empty() {
        let query = filters.name.to_lowercase();
        result.retain(|log| {
            log.name.to_lowercase().contains(&query)
                || log.company.to_lowercase().contains(&query)
        });
    }

    if let Some(wanted) = picker_date_as_br(&filters.date) {
        result.retain(|log| log.date == wanted);
    } else if let Some(wanted) = picker_month_as_parts(&filters.month) {
        result.retain(|log| month_year_of(&log.date) == Some(wanted));
    }

    result
}

/// Order the full log set most-recent-first by combined date+time.
///
/// Entries with an unparsable date or time sort after every parsable entry
/// and keep their relative order (stable sort), so repeated sorts of the
/// same data are idempotent.
pub fn sort_logs(logs: &mut [LogEntry]) {
    logs.sort_by_key(|log| {
        let ts = log.timestamp();
        (ts.is_none(), Reverse(ts))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log(name: &str, company: &str, date: &str, time: &str) -> LogEntry {
        LogEntry {
            name: name.into(),
            company: company.into(),
            date: date.into(),
            time: time.into(),
        }
    }

    fn sample() -> Vec<LogEntry> {
        vec![
            log("Ana", "X", "01/03/2024", "10:00"),
            log("Bob", "Y", "02/03/2024", "09:00"),
            log("Carla", "Xavier Ltda", "05/04/2024", "08:30"),
            log("Davi", "Z", "05/04/2024", "11:15"),
        ]
    }

    #[test]
    fn empty_filters_pass_everything() {
        let logs = sample();
        assert_eq!(apply(&logs, &LogFilters::default()), logs);
    }

    #[test]
    fn name_query_matches_name_or_company_case_insensitive() {
        let logs = sample();
        let filters = LogFilters { name: "xa".into(), ..Default::default() };
        let out = apply(&logs, &filters);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].company, "Xavier Ltda");

        let filters = LogFilters { name: "ANA".into(), ..Default::default() };
        assert_eq!(apply(&logs, &filters).len(), 1);
    }

    #[test]
    fn exact_date_selects_only_that_day() {
        // Scenario from the product requirements: only the Ana entry remains.
        let logs = vec![
            log("Ana", "X", "01/03/2024", "10:00"),
            log("Bob", "Y", "02/03/2024", "09:00"),
        ];
        let filters = LogFilters { date: "2024-03-01".into(), ..Default::default() };
        let out = apply(&logs, &filters);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Ana");
    }

    #[test]
    fn exact_date_wins_over_month() {
        let logs = sample();
        let both = LogFilters {
            date: "2024-03-01".into(),
            month: "2024-04".into(),
            ..Default::default()
        };
        let date_only = LogFilters { date: "2024-03-01".into(), ..Default::default() };
        assert_eq!(apply(&logs, &both), apply(&logs, &date_only));
    }

    #[test]
    fn exact_date_result_is_a_subset_regardless_of_other_criteria() {
        let logs = sample();
        let filters = LogFilters {
            name: "a".into(),
            date: "2024-04-05".into(),
            month: "1999-01".into(),
        };
        for entry in apply(&logs, &filters) {
            assert_eq!(entry.date, "05/04/2024");
            assert!(logs.contains(&entry));
        }
    }

    #[test]
    fn month_filter_keeps_whole_month() {
        let logs = sample();
        let filters = LogFilters { month: "2024-03".into(), ..Default::default() };
        let out = apply(&logs, &filters);
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|l| l.date.ends_with("03/2024")));
    }

    #[test]
    fn malformed_picker_values_filter_nothing_out() {
        let logs = sample();
        let filters = LogFilters { date: "01/03/2024".into(), ..Default::default() };
        // Not a YYYY-MM-DD value; treated as unset rather than erroring.
        assert_eq!(apply(&logs, &filters), logs);
    }

    #[test]
    fn sort_is_descending_by_date_and_time() {
        let mut logs = sample();
        sort_logs(&mut logs);
        let names: Vec<&str> = logs.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["Davi", "Carla", "Bob", "Ana"]);
    }

    #[test]
    fn sort_puts_unparsable_entries_last_without_panicking() {
        let mut logs = vec![
            log("Eva", "W", "sem-data", "10:00"),
            log("Ana", "X", "01/03/2024", "10:00"),
            log("Fabio", "V", "01/03/2024", "??"),
            log("Bob", "Y", "02/03/2024", "09:00"),
        ];
        sort_logs(&mut logs);
        let names: Vec<&str> = logs.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["Bob", "Ana", "Eva", "Fabio"]);
    }

    #[test]
    fn sort_is_idempotent() {
        let mut once = sample();
        once.reverse();
        sort_logs(&mut once);
        let mut twice = once.clone();
        sort_logs(&mut twice);
        assert_eq!(once, twice);
    }
}
