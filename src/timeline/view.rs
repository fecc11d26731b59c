use super::builder::year_month;
use crate::{
    documents::{EventRow, Region},
    util::dates,
    Status,
};

pub fn is_same_month(date: &str, prev_date: Option<&str>) -> bool {
    match prev_date {
        Some(prev) => year_month(date) == year_month(prev),
        None => false,
    }
}

/// A month header shows when a row opens its year or when its month differs
/// from the previous row's slot on the same side.
pub fn show_month(rows: &[EventRow], index: usize, region: Region) -> bool {
    let Some(event) = rows[index].slot(region) else {
        return false;
    };
    if index == 0 {
        return true;
    }
    let prev = rows[index - 1]
        .slot(region)
        .map(|event| event.release_date.as_str());
    !is_same_month(&event.release_date, prev)
}

/// English month name for a row's month header.
pub fn month_label(date: &str) -> Result<String, Status> {
    Ok(dates::parse_release_date(date)?.format("%B").to_string())
}

/// Years without releases between two populated years, rendered by the view
/// as empty year markers.
pub fn gap_years(years: &[i32]) -> Vec<i32> {
    let mut gaps = vec![];
    for pair in years.windows(2) {
        for year in pair[0] + 1..pair[1] {
            gaps.push(year);
        }
    }
    gaps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::documents::ReleaseEvent;

    fn row(asia_date: Option<&str>, international_date: Option<&str>) -> EventRow {
        let event = |date: &str, region| ReleaseEvent {
            id: 1,
            region,
            name: "Device".to_owned(),
            release_date: date.to_owned(),
            ..Default::default()
        };
        EventRow {
            year: 1997,
            asia: asia_date.map(|date| event(date, Region::Asia)),
            international: international_date.map(|date| event(date, Region::International)),
        }
    }

    #[test]
    fn first_row_always_shows_its_month() {
        let rows = vec![row(Some("1997-03"), None)];
        assert!(show_month(&rows, 0, Region::Asia));
    }

    #[test]
    fn repeated_month_is_not_shown_again() {
        let rows = vec![row(Some("1997-03"), None), row(Some("1997-03"), None)];
        assert!(!show_month(&rows, 1, Region::Asia));
    }

    #[test]
    fn month_change_shows_a_header() {
        let rows = vec![row(Some("1997-03"), None), row(Some("1997-04"), None)];
        assert!(show_month(&rows, 1, Region::Asia));
    }

    #[test]
    fn empty_slot_shows_nothing() {
        let rows = vec![row(Some("1997-03"), None)];
        assert!(!show_month(&rows, 0, Region::International));
    }

    #[test]
    fn missing_previous_slot_counts_as_a_new_month() {
        let rows = vec![row(Some("1997-03"), None), row(Some("1997-03"), Some("1997-03"))];
        assert!(show_month(&rows, 1, Region::International));
        assert!(!show_month(&rows, 1, Region::Asia));
    }

    #[test]
    fn month_labels_are_english_month_names() {
        assert_eq!(month_label("1997-03").unwrap(), "March");
        assert_eq!(month_label("1996-11-23").unwrap(), "November");
        assert!(month_label("soon").is_err());
    }

    #[test]
    fn gap_years_fill_holes_between_populated_years() {
        assert_eq!(gap_years(&[1997, 2000, 2001]), vec![1998, 1999]);
        assert!(gap_years(&[1997, 1998]).is_empty());
        assert!(gap_years(&[1997]).is_empty());
    }
}
