#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use spanset::{BoundaryKind, Span};

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2018, 1, 30, 0, 0, 0).unwrap()
}

/// `minutes` after [`now`].
pub fn at(minutes: i64) -> DateTime<Utc> {
    now() + Duration::minutes(minutes)
}

/// A closed-open span tagged with properties.
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    pub properties: Vec<String>,
}

impl Event {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>, properties: &[&str]) -> Event {
        Event {
            start,
            end,
            properties: properties.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl Span for Event {
    type Time = DateTime<Utc>;

    fn start(&self) -> &DateTime<Utc> {
        &self.start
    }

    fn end(&self) -> &DateTime<Utc> {
        &self.end
    }

    fn start_kind(&self) -> BoundaryKind {
        BoundaryKind::Closed
    }

    fn end_kind(&self) -> BoundaryKind {
        BoundaryKind::Open
    }
}

/// Sorted union of both property lists.
pub fn merge_properties(a: &[String], b: &[String]) -> Vec<String> {
    let mut merged = a.to_vec();
    for property in b {
        if !merged.contains(property) {
            merged.push(property.clone());
        }
    }
    merged.sort();
    merged
}
