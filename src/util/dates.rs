use chrono::NaiveDate;

use crate::Status;

/// Parses a fixture release date of the form `YYYY-MM-DD`, `YYYY-MM` or
/// `YYYY`. Dates that do not carry a 4-digit year are rejected at ingestion
/// instead of propagating into the timeline.
pub fn parse_release_date(date: &str) -> Result<NaiveDate, Status> {
    let bytes = date.as_bytes();
    let year_ok = bytes.len() >= 4
        && bytes[..4].iter().all(|b| b.is_ascii_digit())
        && (bytes.len() == 4 || bytes[4] == b'-');
    if !year_ok {
        return Err(Status::invalid_argument(format!(
            "Cannot parse release date '{date}'"
        )));
    }

    let expanded = match date.len() {
        4 => format!("{date}-01-01"),
        7 => format!("{date}-01"),
        _ => date.to_owned(),
    };
    NaiveDate::parse_from_str(&expanded, "%Y-%m-%d").map_err(|_| {
        Status::invalid_argument(format!("Cannot parse release date '{date}'"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_day_month_and_year_precision() {
        assert_eq!(
            parse_release_date("1996-11-23").unwrap(),
            NaiveDate::from_ymd_opt(1996, 11, 23).unwrap()
        );
        assert_eq!(
            parse_release_date("1996-11").unwrap(),
            NaiveDate::from_ymd_opt(1996, 11, 1).unwrap()
        );
        assert_eq!(
            parse_release_date("1996").unwrap(),
            NaiveDate::from_ymd_opt(1996, 1, 1).unwrap()
        );
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(parse_release_date("soon").is_err());
        assert!(parse_release_date("96-11-23").is_err());
        assert!(parse_release_date("1996-13").is_err());
        assert!(parse_release_date("").is_err());
    }
}
