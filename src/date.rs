//! Date parsing module
//!
//! Resolves loosely formatted date/time strings into concrete instants by
//! walking the layout table. Year-less layouts get the reference year spliced
//! into the text between the date and any time; input that still fails is
//! retried once more with the year added at either end.

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{Error, Result};
use crate::layout::{self, LayoutCandidate};

/// The "now" that missing year/date components default to
///
/// Captured once at startup and passed in explicitly so parsing stays
/// deterministic under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference {
    now: NaiveDateTime,
}

impl Reference {
    pub fn new(now: NaiveDateTime) -> Self {
        Self { now }
    }

    /// Capture the local wall clock
    pub fn now() -> Self {
        Self::new(Local::now().naive_local())
    }

    pub fn year(&self) -> i32 {
        self.now.year()
    }

    pub fn today(&self) -> NaiveDate {
        self.now.date()
    }

    pub fn datetime(&self) -> NaiveDateTime {
        self.now
    }
}

/// A resolved point in local civil time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instant {
    datetime: NaiveDateTime,
    has_time: bool,
}

impl Instant {
    /// A calendar date with no time-of-day (midnight)
    pub fn date_only(date: NaiveDate) -> Self {
        Self {
            datetime: date.and_time(NaiveTime::MIN),
            has_time: false,
        }
    }

    pub fn with_time(datetime: NaiveDateTime) -> Self {
        Self { datetime, has_time: true }
    }

    pub fn datetime(&self) -> NaiveDateTime {
        self.datetime
    }

    pub fn date(&self) -> NaiveDate {
        self.datetime.date()
    }

    /// Whether the input carried a time-of-day
    pub fn has_time(&self) -> bool {
        self.has_time
    }

    /// Render through a layout's pattern
    pub fn format(&self, layout: &LayoutCandidate) -> String {
        self.datetime.format(layout.pattern()).to_string()
    }
}

/// Ways of splicing the reference year into a year-less input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum YearInjection {
    SlashPrefix,
    DashPrefix,
    SpaceSuffix,
}

impl YearInjection {
    const ALL: [YearInjection; 3] = [
        YearInjection::SlashPrefix,
        YearInjection::DashPrefix,
        YearInjection::SpaceSuffix,
    ];

    fn apply(self, input: &str, year: i32) -> String {
        match self {
            YearInjection::SlashPrefix => format!("{}/{}", year, input),
            YearInjection::DashPrefix => format!("{}-{}", year, input),
            YearInjection::SpaceSuffix => format!("{} {}", input, year),
        }
    }
}

/// Parse a date/time string using the shared layout table
pub fn parse_time(raw: &str, reference: &Reference) -> Result<Instant> {
    parse(raw, reference, layout::candidates())
}

/// Parse a date/time string against an ordered list of layouts
///
/// Supported inputs include:
/// - `"2024-03-15"`, `"2024/03/15 10:30"` → year-first
/// - `"3/15/2024"`, `"3/15/24 10:30:15"` → US order
/// - `"Mar 15 2024"`, `"15 March, 2024"` → spelled months
/// - `"10:30"` → time on the reference date
/// - `"3/15"`, `"Mar 15 10:00"`, `"25/12"` → date in the reference year
/// - `"today"`, `"now"` → the reference date / datetime
///
/// The first layout that matches wins; ambiguous input is not an error.
pub fn parse(raw: &str, reference: &Reference, candidates: &[LayoutCandidate]) -> Result<Instant> {
    let input = layout::normalize(raw);

    if input.is_empty() {
        return Err(Error::EmptyTime { input: raw.to_string() });
    }

    if input.eq_ignore_ascii_case("now") {
        return Ok(Instant::with_time(reference.datetime()));
    }
    if input.eq_ignore_ascii_case("today") {
        return Ok(Instant::date_only(reference.today()));
    }

    if let Some(instant) = parse_with(&input, reference, candidates) {
        return Ok(instant);
    }

    let year = reference.year();
    for injection in YearInjection::ALL {
        let with_year = injection.apply(&input, year);
        if let Some(instant) = parse_with(&with_year, reference, candidates) {
            tracing::debug!(input = %input, rewritten = %with_year, "defaulted to reference year");
            return Ok(instant);
        }
    }

    Err(Error::UnrecognizedTime {
        input: raw.to_string(),
        tried_layouts: candidates.len() * (1 + YearInjection::ALL.len()),
    })
}

/// Try each layout in order, returning the first match
fn parse_with(input: &str, reference: &Reference, candidates: &[LayoutCandidate]) -> Option<Instant> {
    candidates.iter().find_map(|layout| {
        let instant = parse_layout(input, layout, reference)?;
        tracing::debug!(input, layout = %layout, "matched layout");
        Some(instant)
    })
}

fn parse_layout(input: &str, layout: &LayoutCandidate, reference: &Reference) -> Option<Instant> {
    let spliced;
    let (text, pattern) = match layout.year_pattern() {
        Some(pattern) => {
            spliced = splice_year(input, reference.year(), layout.has_time())?;
            (spliced.as_str(), pattern)
        }
        None => (input, layout.pattern()),
    };

    match (layout.has_date(), layout.has_time()) {
        (true, true) => NaiveDateTime::parse_from_str(text, pattern)
            .ok()
            .map(Instant::with_time),
        (true, false) => NaiveDate::parse_from_str(text, pattern)
            .ok()
            .map(Instant::date_only),
        (false, _) => NaiveTime::parse_from_str(text, pattern)
            .ok()
            .map(|time| Instant::with_time(reference.today().and_time(time))),
    }
}

/// Slot the year in after the date, ahead of the time if there is one
///
/// "Mar 15 10:00" → "Mar 15 2024 10:00", "25/12" → "25/12 2024"
fn splice_year(input: &str, year: i32, has_time: bool) -> Option<String> {
    if !has_time {
        return Some(format!("{} {}", input, year));
    }
    let (date, time) = input.rsplit_once(' ')?;
    Some(format!("{} {} {}", date, year, time))
}
