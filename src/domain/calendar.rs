use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, Local, NaiveDate};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Year-month identifier used to bucket calendar data.
///
/// Serialized as `"YYYY-MM"` so it can key JSON maps, and ordered
/// chronologically so month buckets iterate oldest-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The month the local clock currently falls in.
    pub fn current() -> Self {
        Self::containing(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .expect("month keys always describe a valid month")
    }

    /// Number of days in this month, leap years included.
    pub fn day_count(&self) -> u32 {
        let first_next = self.next().first_day();
        (first_next - Duration::days(1)).day()
    }

    pub fn contains_day(&self, day: u32) -> bool {
        (1..=self.day_count()).contains(&day)
    }

    /// Human-facing label, e.g. "May 2024".
    pub fn label(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (year, month) = raw
            .split_once('-')
            .ok_or_else(|| format!("`{raw}` is not a YYYY-MM month key"))?;
        let year: i32 = year
            .parse()
            .map_err(|_| format!("`{raw}` has a non-numeric year"))?;
        let month: u32 = month
            .parse()
            .map_err(|_| format!("`{raw}` has a non-numeric month"))?;
        MonthKey::new(year, month).ok_or_else(|| format!("`{raw}` is out of month range"))
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// One calendar-variant per-day record.
///
/// A stored record implies the user wrote at least one field for that day;
/// untouched days are represented by [`DayLookup::Absent`] instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayEntry {
    pub morning_qty: f64,
    pub evening_qty: f64,
    pub rate: f64,
    pub paid: bool,
}

impl DayEntry {
    /// Field defaults used when a day record is lazily created.
    pub fn with_rate(rate: f64) -> Self {
        Self {
            morning_qty: 0.0,
            evening_qty: 0.0,
            rate,
            paid: false,
        }
    }

    pub fn total_qty(&self) -> f64 {
        self.morning_qty + self.evening_qty
    }

    pub fn daily_total(&self) -> f64 {
        self.total_qty() * self.rate
    }
}

/// Numeric day fields editable through permissive coercion.
///
/// `paid` is set through a dedicated boolean path and has no raw-text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayField {
    MorningQty,
    EveningQty,
    Rate,
}

impl FromStr for DayField {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_ascii_lowercase().as_str() {
            "morning" | "morning_qty" => Ok(DayField::MorningQty),
            "evening" | "evening_qty" => Ok(DayField::EveningQty),
            "rate" => Ok(DayField::Rate),
            other => Err(format!("unknown day field `{other}`")),
        }
    }
}

/// Explicit outcome of a day lookup, so call sites never guess at
/// missing-key behavior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DayLookup<'a> {
    Recorded(&'a DayEntry),
    Absent,
}

impl<'a> DayLookup<'a> {
    pub fn is_recorded(&self) -> bool {
        matches!(self, DayLookup::Recorded(_))
    }

    /// The values a renderer should show: the stored record, or the implicit
    /// `{0, 0, defaultRate, false}` view for a day never written.
    pub fn effective(&self, default_rate: f64) -> DayEntry {
        match self {
            DayLookup::Recorded(entry) => (*entry).clone(),
            DayLookup::Absent => DayEntry::with_rate(default_rate),
        }
    }
}
