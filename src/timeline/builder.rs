use std::collections::BTreeMap;

use chrono::Datelike;
use itertools::Itertools;

use crate::{
    documents::{EventRow, Region, ReleaseEvent},
    util::dates,
    Status,
};

/// Truncates a release date to its `YYYY-MM` merge key. Dates without a day
/// component already are the key.
pub fn year_month(date: &str) -> &str {
    match date.len() > 7 {
        true => &date[..7],
        false => date,
    }
}

/// Turns a flat release list into timeline rows. Releases from different
/// regions that share a year-month are merged into one row; stored dates are
/// truncated to the merge key, dropping day precision.
pub fn build_event_rows(events: Vec<ReleaseEvent>) -> Result<Vec<EventRow>, Status> {
    let events = events
        .into_iter()
        .map(|event| dates::parse_release_date(&event.release_date).map(|date| (date, event)))
        .collect::<Result<Vec<_>, Status>>()?
        .into_iter()
        .sorted_by_key(|(date, _)| *date);

    let mut rows: Vec<EventRow> = vec![];
    for (date, event) in events {
        let key = year_month(&event.release_date).to_owned();
        match find_open_row(&rows, event.region, &key) {
            Some(index) => merge_into_row(&mut rows[index], event, &key),
            None => rows.push(new_row(event, &key, date.year())),
        }
    }
    Ok(rows)
}

/// Buckets rows by year, keeping intra-year append order. String keys give
/// consumers the lexicographic year ordering the view iterates in, which is
/// chronological for 4-digit years.
pub fn group_events_by_year(rows: Vec<EventRow>) -> BTreeMap<String, Vec<EventRow>> {
    let mut years = BTreeMap::<String, Vec<EventRow>>::new();
    for row in rows {
        years.entry(row.year.to_string()).or_default().push(row);
    }
    years
}

/// Scans rows newest-first for a same-key row with a free slot for the
/// event's region. The earliest such row wins. Rows are append-ordered by
/// non-decreasing key, so the scan stops at the first strictly smaller key.
fn find_open_row(rows: &[EventRow], region: Region, key: &str) -> Option<usize> {
    let mut target = None;
    for (index, row) in rows.iter().enumerate().rev() {
        let Some(date) = row.release_date() else {
            continue;
        };
        let row_key = year_month(date);
        if row_key == key {
            if row.slot(region).is_none() {
                target = Some(index);
            }
        } else if row_key < key {
            break;
        }
    }
    target
}

fn merge_into_row(row: &mut EventRow, mut event: ReleaseEvent, key: &str) {
    event.release_date = key.to_owned();
    let region = event.region;
    *row.slot_mut(region) = Some(event);
}

fn new_row(mut event: ReleaseEvent, key: &str, year: i32) -> EventRow {
    event.release_date = key.to_owned();
    let mut row = EventRow {
        year,
        asia: None,
        international: None,
    };
    let region = event.region;
    *row.slot_mut(region) = Some(event);
    row
}
