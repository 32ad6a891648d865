use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{DayEntry, DayField, DayLookup, MonthKey};
use crate::ledger::numeric::parse_non_negative_or;

/// Calendar record store: a sparse month -> day -> entry map.
///
/// A month with no user input has no key at all. Day records are created
/// lazily on the first field write and never deleted afterwards, so an
/// explicitly-set rate survives later default-rate changes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarBook {
    months: BTreeMap<MonthKey, BTreeMap<u32, DayEntry>>,
}

impl CalendarBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Recorded days of one month, oldest-first. Absent months yield nothing.
    pub fn recorded_days(&self, month: MonthKey) -> impl Iterator<Item = (u32, &DayEntry)> {
        self.months
            .get(&month)
            .into_iter()
            .flat_map(|days| days.iter().map(|(day, entry)| (*day, entry)))
    }

    pub fn lookup(&self, month: MonthKey, day: u32) -> DayLookup<'_> {
        match self.months.get(&month).and_then(|days| days.get(&day)) {
            Some(entry) => DayLookup::Recorded(entry),
            None => DayLookup::Absent,
        }
    }

    /// The effective values for a day: its record, or the implicit default
    /// view when nothing was ever written.
    pub fn effective(&self, month: MonthKey, day: u32, default_rate: f64) -> DayEntry {
        self.lookup(month, day).effective(default_rate)
    }

    /// Writes one numeric field, creating the day record with field defaults
    /// `{0, 0, default_rate, false}` when absent.
    ///
    /// Quantity fields coerce permissively to a non-negative decimal (0 on
    /// failure). A blank rate resets to the default rate current *now*, not
    /// the rate captured when the day was first written; any other rate text
    /// coerces with fallback 0. Out-of-range days are ignored.
    pub fn edit_field(
        &mut self,
        month: MonthKey,
        day: u32,
        field: DayField,
        raw: &str,
        default_rate: f64,
    ) {
        if !month.contains_day(day) {
            tracing::debug!(%month, day, "ignoring edit for out-of-range day");
            return;
        }
        let entry = self.day_record(month, day, default_rate);
        match field {
            DayField::MorningQty => entry.morning_qty = parse_non_negative_or(raw, 0.0),
            DayField::EveningQty => entry.evening_qty = parse_non_negative_or(raw, 0.0),
            DayField::Rate => {
                entry.rate = if raw.trim().is_empty() {
                    default_rate
                } else {
                    parse_non_negative_or(raw, 0.0)
                };
            }
        }
    }

    /// Stores the paid flag verbatim, lazily creating the day record.
    pub fn set_paid(&mut self, month: MonthKey, day: u32, paid: bool, default_rate: f64) {
        if !month.contains_day(day) {
            return;
        }
        self.day_record(month, day, default_rate).paid = paid;
    }

    /// Flips the paid flag of an existing record. Absent days are a no-op.
    pub fn toggle_paid(&mut self, month: MonthKey, day: u32) -> bool {
        match self
            .months
            .get_mut(&month)
            .and_then(|days| days.get_mut(&day))
        {
            Some(entry) => {
                entry.paid = !entry.paid;
                true
            }
            None => false,
        }
    }

    fn day_record(&mut self, month: MonthKey, day: u32, default_rate: f64) -> &mut DayEntry {
        self.months
            .entry(month)
            .or_default()
            .entry(day)
            .or_insert_with(|| DayEntry::with_rate(default_rate))
    }
}
