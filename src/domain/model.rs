use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Canonical ticket record field names, as they appear in the CSV header.
pub mod field {
    pub const DATE: &str = "date";
    pub const SHOW_ID: &str = "showId";
    pub const TIME: &str = "time";
    pub const AREA: &str = "area";
    pub const SEATS: &str = "seats";
    pub const PRICE: &str = "price";
}

/// Booking dates are sent to the site in this compact form.
pub const COMPACT_DATE_FORMAT: &str = "%Y%m%d";

pub const DEFAULT_QUANTITY: u32 = 2;
pub const DEFAULT_WINDOW_DAYS: u64 = 90;

/// One row of extracted availability data. Field sets vary between pages and
/// site revisions, so this is an ordered mapping rather than a fixed struct;
/// the export step takes the sorted union of keys across all records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRecord {
    pub fields: BTreeMap<String, String>,
}

impl TicketRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.fields.insert(name.to_string(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// A show as advertised on the site's listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowEntry {
    pub name: String,
    pub id: String,
}

/// Half-open range of calendar dates: `start` inclusive, `end` exclusive.
/// An inverted window is simply empty, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Fills in CLI defaults: `start` falls back to `today`, `end` to
    /// `start + 90 days`. The 90-day default is anchored to the resolved
    /// start, so a custom `--from` still yields a 90-day window.
    pub fn resolve(start: Option<NaiveDate>, end: Option<NaiveDate>, today: NaiveDate) -> Self {
        let start = start.unwrap_or(today);
        let end = end.unwrap_or_else(|| {
            start
                .checked_add_days(Days::new(DEFAULT_WINDOW_DAYS))
                .unwrap_or(NaiveDate::MAX)
        });
        Self { start, end }
    }

    pub fn days(&self) -> DateRange {
        DateRange {
            next: self.start,
            end: self.end,
        }
    }

    pub fn len(&self) -> usize {
        (self.end - self.start).num_days().max(0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Lazy iterator over the dates of a [`DateWindow`], one calendar day per
/// step. `Clone` restarts it from the beginning.
#[derive(Debug, Clone)]
pub struct DateRange {
    next: NaiveDate,
    end: NaiveDate,
}

impl Iterator for DateRange {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        if self.next >= self.end {
            return None;
        }
        let date = self.next;
        self.next = date.succ_opt()?;
        Some(date)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.next).num_days().max(0) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DateRange {}

/// Parameters for one scrape run, built once from validated CLI input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeRequest {
    pub show_id: String,
    pub quantity: u32,
    pub window: DateWindow,
}

impl ScrapeRequest {
    pub fn new(show_id: impl Into<String>, quantity: u32, window: DateWindow) -> Self {
        Self {
            show_id: show_id.into(),
            quantity,
            window,
        }
    }
}

/// Output of the transform stage: the inferred column set and the rendered
/// CSV, with the source records kept around for reporting.
#[derive(Debug, Clone)]
pub struct TableData {
    pub columns: Vec<String>,
    pub csv: String,
    pub records: Vec<TicketRecord>,
}
