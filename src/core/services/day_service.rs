//! Business logic helpers for the calendar ledger.

use crate::domain::{DayEntry, DayField, MonthKey};
use crate::ledger::CalendarBook;

/// Effective view of one calendar day, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct DayRow {
    pub day: u32,
    pub entry: DayEntry,
    /// Whether an explicit record backs this row (vs. the implicit default).
    pub recorded: bool,
}

/// Per-day edit helpers. All edits are permissive and silent by design;
/// validation lives on the add-entry path, not here.
pub struct DayService;

impl DayService {
    pub fn edit_field(
        book: &mut CalendarBook,
        month: MonthKey,
        day: u32,
        field: DayField,
        raw: &str,
        default_rate: f64,
    ) {
        book.edit_field(month, day, field, raw, default_rate);
    }

    pub fn set_paid(
        book: &mut CalendarBook,
        month: MonthKey,
        day: u32,
        paid: bool,
        default_rate: f64,
    ) {
        book.set_paid(month, day, paid, default_rate);
    }

    pub fn toggle_paid(book: &mut CalendarBook, month: MonthKey, day: u32) -> bool {
        book.toggle_paid(month, day)
    }

    /// Effective rows for every day of the month, in day order.
    pub fn month_rows(book: &CalendarBook, month: MonthKey, default_rate: f64) -> Vec<DayRow> {
        (1..=month.day_count())
            .map(|day| {
                let lookup = book.lookup(month, day);
                DayRow {
                    day,
                    recorded: lookup.is_recorded(),
                    entry: lookup.effective(default_rate),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_rows_cover_every_day() {
        let may = MonthKey::new(2024, 5).unwrap();
        let mut book = CalendarBook::new();
        DayService::edit_field(&mut book, may, 2, DayField::MorningQty, "3", 50.0);

        let rows = DayService::month_rows(&book, may, 50.0);
        assert_eq!(rows.len(), 31);
        assert!(rows[1].recorded);
        assert_eq!(rows[1].entry.morning_qty, 3.0);
        assert!(!rows[0].recorded);
        assert_eq!(rows[0].entry.rate, 50.0);
    }

    #[test]
    fn untouched_rows_follow_the_default_rate() {
        let may = MonthKey::new(2024, 5).unwrap();
        let book = CalendarBook::new();
        let rows = DayService::month_rows(&book, may, 62.0);
        assert!(rows.iter().all(|row| row.entry.rate == 62.0));
    }
}
