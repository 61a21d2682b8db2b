//! Layout candidate table
//!
//! Every textual format daydiff accepts is one row in this table. The rows are
//! the product of a handful of small axes (field order, month style, separator,
//! year width, time-of-day precision), rendered to chrono strftime patterns.
//! Parsing walks the table in order and takes the first row that matches, so
//! the order below is the tie-breaker for ambiguous input.

use std::fmt;
use std::sync::OnceLock;

/// Order of the day, month and year fields in a date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentOrder {
    /// 03/15/2024
    MonthDayYear,
    /// 2024/03/15
    YearMonthDay,
    /// 15/03/2024
    DayMonthYear,
}

impl ComponentOrder {
    /// US order wins for all-numeric input like "01/02/03".
    pub const ALL: [ComponentOrder; 3] = [
        ComponentOrder::MonthDayYear,
        ComponentOrder::YearMonthDay,
        ComponentOrder::DayMonthYear,
    ];
}

/// How the month is written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthStyle {
    /// 3 or 03
    Numeric,
    /// Mar
    Abbreviated,
    /// March
    Full,
}

impl MonthStyle {
    pub const ALL: [MonthStyle; 3] = [MonthStyle::Numeric, MonthStyle::Abbreviated, MonthStyle::Full];

    fn pattern(self) -> &'static str {
        match self {
            MonthStyle::Numeric => "%m",
            MonthStyle::Abbreviated => "%b",
            MonthStyle::Full => "%B",
        }
    }
}

/// Separator between date fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    Dash,
    Slash,
    Space,
}

impl Separator {
    pub const ALL: [Separator; 3] = [Separator::Dash, Separator::Slash, Separator::Space];

    fn as_str(self) -> &'static str {
        match self {
            Separator::Dash => "-",
            Separator::Slash => "/",
            Separator::Space => " ",
        }
    }
}

/// Whether (and how wide) the year is written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearField {
    Absent,
    TwoDigit,
    FourDigit,
}

impl YearField {
    /// Two-digit comes before four-digit: chrono's `%Y` happily reads "24" as
    /// year 24, while `%y` rejects "2024" as too long.
    pub const ALL: [YearField; 3] = [YearField::Absent, YearField::TwoDigit, YearField::FourDigit];

    fn pattern(self) -> Option<&'static str> {
        match self {
            YearField::Absent => None,
            YearField::TwoDigit => Some("%y"),
            YearField::FourDigit => Some("%Y"),
        }
    }
}

/// Time-of-day precision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    Absent,
    HourMinute,
    HourMinuteSecond,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 3] = [TimeOfDay::Absent, TimeOfDay::HourMinute, TimeOfDay::HourMinuteSecond];

    fn pattern(self) -> Option<&'static str> {
        match self {
            TimeOfDay::Absent => None,
            TimeOfDay::HourMinute => Some("%H:%M"),
            TimeOfDay::HourMinuteSecond => Some("%H:%M:%S"),
        }
    }
}

/// The date half of a layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFields {
    pub order: ComponentOrder,
    pub month: MonthStyle,
    pub separator: Separator,
    pub year: YearField,
}

impl DateFields {
    /// Pattern for the date as written, or `None` if the row would repeat
    /// another one
    fn pattern(&self) -> Option<String> {
        let month = self.month.pattern();
        let fields: Vec<&str> = match (self.order, self.year.pattern()) {
            (ComponentOrder::YearMonthDay, Some(year)) => vec![year, month, "%d"],
            // Without the year this reads the same as month-day-year
            (ComponentOrder::YearMonthDay, None) => return None,
            (ComponentOrder::MonthDayYear, year) => [month, "%d"].into_iter().chain(year).collect(),
            (ComponentOrder::DayMonthYear, year) => ["%d", month].into_iter().chain(year).collect(),
        };
        Some(fields.join(self.separator.as_str()))
    }
}

fn join_date_time(date: Option<&str>, time: Option<&str>) -> Option<String> {
    match (date, time) {
        (Some(date), None) => Some(date.to_string()),
        (Some(date), Some(time)) => Some(format!("{} {}", date, time)),
        (None, Some(time)) => Some(time.to_string()),
        (None, None) => None,
    }
}

/// One acceptable textual format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutCandidate {
    /// `None` for bare time layouts, which resolve onto the reference date
    pub date: Option<DateFields>,
    pub time: TimeOfDay,
    pattern: String,
    year_pattern: Option<String>,
}

impl LayoutCandidate {
    /// Build a candidate, or `None` for an empty layout (neither date nor
    /// time) or one that duplicates another row
    pub fn new(date: Option<DateFields>, time: TimeOfDay) -> Option<Self> {
        let date_pattern = match &date {
            Some(fields) => Some(fields.pattern()?),
            None => None,
        };
        let pattern = join_date_time(date_pattern.as_deref(), time.pattern())?;

        // Year-less dates are parsed with the year slotted in after the date
        let year_pattern = match date {
            Some(fields) if fields.year == YearField::Absent => {
                let with_year = date_pattern.map(|p| format!("{} %Y", p));
                join_date_time(with_year.as_deref(), time.pattern())
            }
            _ => None,
        };

        Some(Self { date, time, pattern, year_pattern })
    }

    /// chrono strftime pattern for this layout, as the user writes it
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Pattern to parse with once the year has been spliced in after the
    /// date: "%b %d %H:%M" → "%b %d %Y %H:%M". `None` unless the row omits
    /// the year.
    pub fn year_pattern(&self) -> Option<&str> {
        self.year_pattern.as_deref()
    }

    pub fn needs_year(&self) -> bool {
        self.year_pattern.is_some()
    }

    pub fn has_date(&self) -> bool {
        self.date.is_some()
    }

    pub fn has_time(&self) -> bool {
        self.time != TimeOfDay::Absent
    }
}

impl fmt::Display for LayoutCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

/// Generate the full candidate table in priority order
///
/// Dated layouts come first (order, month style, separator, year, time nested
/// in that order), followed by the bare time layouts. Within each group the
/// year-less rows come first; they take the reference year when parsed.
pub fn generate() -> Vec<LayoutCandidate> {
    let mut table = Vec::new();

    for order in ComponentOrder::ALL {
        for month in MonthStyle::ALL {
            for separator in Separator::ALL {
                for year in YearField::ALL {
                    for time in TimeOfDay::ALL {
                        let fields = DateFields { order, month, separator, year };
                        table.extend(LayoutCandidate::new(Some(fields), time));
                    }
                }
            }
        }
    }

    for time in TimeOfDay::ALL {
        table.extend(LayoutCandidate::new(None, time));
    }

    tracing::trace!(count = table.len(), "generated layout table");
    table
}

/// The shared candidate table, built on first use
pub fn candidates() -> &'static [LayoutCandidate] {
    static TABLE: OnceLock<Vec<LayoutCandidate>> = OnceLock::new();
    TABLE.get_or_init(generate)
}

/// Collapse runs of blanks (whitespace and commas) into single spaces
///
/// "March 15,  2024" → "March 15 2024"
pub fn normalize(raw: &str) -> String {
    raw.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
