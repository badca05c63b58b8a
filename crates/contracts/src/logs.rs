use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// One recorded access event as the logs webhook delivers it.
///
/// Wire fields are Portuguese (`nome`, `empresa`, `data`, `horario`);
/// `data` is `DD/MM/YYYY` and `horario` is `HH:MM` or `HH:MM:SS`.
/// Entries have no unique key; identity is positional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "empresa")]
    pub company: String,
    #[serde(rename = "data")]
    pub date: String,
    #[serde(rename = "horario")]
    pub time: String,
}

impl LogEntry {
    /// Calendar date of the entry, `None` if `data` is malformed.
    pub fn date_key(&self) -> Option<NaiveDate> {
        parse_br_date(&self.date)
    }

    /// Combined date+time, `None` if either component is malformed.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        let date = self.date_key()?;
        let time = NaiveTime::parse_from_str(&self.time, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(&self.time, "%H:%M"))
            .ok()?;
        Some(date.and_time(time))
    }
}

/// Parse a `DD/MM/YYYY` string into a calendar date.
pub fn parse_br_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%d/%m/%Y").ok()
}

/// Month/year component of a `DD/MM/YYYY` string, for month filtering.
pub fn month_year_of(date: &str) -> Option<(u32, i32)> {
    let d = parse_br_date(date)?;
    Some((d.month(), d.year()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(date: &str, time: &str) -> LogEntry {
        LogEntry {
            name: "Ana".into(),
            company: "X".into(),
            date: date.into(),
            time: time.into(),
        }
    }

    #[test]
    fn decodes_wire_field_names() {
        let log: LogEntry = serde_json::from_str(
            r#"{"nome":"Ana","empresa":"X","data":"01/03/2024","horario":"10:00"}"#,
        )
        .unwrap();
        assert_eq!(log.name, "Ana");
        assert_eq!(log.company, "X");
        assert_eq!(log.date, "01/03/2024");
        assert_eq!(log.time, "10:00");
    }

    #[test]
    fn timestamp_accepts_both_time_shapes() {
        assert_eq!(
            entry("01/03/2024", "10:00").timestamp(),
            NaiveDate::from_ymd_opt(2024, 3, 1)
                .and_then(|d| d.and_hms_opt(10, 0, 0))
        );
        assert_eq!(
            entry("01/03/2024", "10:00:37").timestamp(),
            NaiveDate::from_ymd_opt(2024, 3, 1)
                .and_then(|d| d.and_hms_opt(10, 0, 37))
        );
    }

    #[test]
    fn malformed_values_parse_to_none() {
        assert!(entry("2024-03-01", "10:00").date_key().is_none());
        assert!(entry("31/02/2024", "10:00").date_key().is_none());
        assert!(entry("01/03/2024", "meio-dia").timestamp().is_none());
        assert!(month_year_of("nada").is_none());
    }

    #[test]
    fn month_year_extraction() {
        assert_eq!(month_year_of("05/04/2024"), Some((4, 2024)));
        assert_eq!(month_year_of("31/12/1999"), Some((12, 1999)));
    }
}
