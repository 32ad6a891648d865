//! Pure aggregation over store contents.
//!
//! Re-run on every render and never mutates a store. Accumulation keeps full
//! precision; rounding to two decimals happens only when values are shown.

use crate::domain::{Entry, MonthKey};
use crate::ledger::{CalendarBook, EntryBook};

/// Rounds for presentation. Internal totals stay full-precision to avoid
/// compounding rounding error.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Running totals over the flat-list store.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EntryTotals {
    pub quantity: f64,
    pub amount: f64,
    pub due: f64,
}

impl EntryTotals {
    pub fn compute<'a>(entries: impl IntoIterator<Item = &'a Entry>) -> Self {
        let mut totals = Self::default();
        for entry in entries {
            let amount = entry.amount();
            totals.quantity += entry.quantity;
            totals.amount += amount;
            if !entry.paid {
                totals.due += amount;
            }
        }
        totals
    }

    pub fn of(book: &EntryBook) -> Self {
        Self::compute(book.iter())
    }
}

/// Aggregate totals for one displayed month. Absent days contribute zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MonthTotals {
    pub morning_qty: f64,
    pub evening_qty: f64,
    pub quantity: f64,
    pub amount: f64,
    pub paid: f64,
    pub due: f64,
}

impl MonthTotals {
    pub fn of(book: &CalendarBook, month: MonthKey) -> Self {
        let mut totals = Self::default();
        for (_, entry) in book.recorded_days(month) {
            let daily = entry.daily_total();
            totals.morning_qty += entry.morning_qty;
            totals.evening_qty += entry.evening_qty;
            totals.amount += daily;
            if entry.paid {
                totals.paid += daily;
            }
        }
        totals.quantity = totals.morning_qty + totals.evening_qty;
        totals.due = totals.amount - totals.paid;
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DayField;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn entry_totals_track_quantity_amount_and_due() {
        let mut book = EntryBook::new();
        book.add(Entry::new(date(2024, 5, 1), 2.0, 50.0, false));
        book.add(Entry::new(date(2024, 5, 2), 1.5, 52.0, true));

        let totals = EntryTotals::of(&book);
        assert!((totals.quantity - 3.5).abs() < 0.01);
        assert!((totals.amount - 178.0).abs() < 0.01);
        assert!((totals.due - 100.0).abs() < 0.01);
    }

    #[test]
    fn empty_book_sums_to_zero() {
        assert_eq!(EntryTotals::of(&EntryBook::new()), EntryTotals::default());
    }

    #[test]
    fn month_totals_cover_only_the_requested_month() {
        let may = MonthKey::new(2024, 5).unwrap();
        let june = MonthKey::new(2024, 6).unwrap();
        let mut book = CalendarBook::new();
        book.edit_field(may, 1, DayField::MorningQty, "2", 50.0);
        book.edit_field(may, 1, DayField::EveningQty, "1", 50.0);
        book.edit_field(may, 1, DayField::Rate, "55", 50.0);
        book.edit_field(may, 2, DayField::MorningQty, "3", 50.0);
        book.edit_field(june, 9, DayField::MorningQty, "8", 50.0);

        let totals = MonthTotals::of(&book, may);
        assert!((totals.quantity - 6.0).abs() < 0.01);
        assert!((totals.amount - 315.0).abs() < 0.01);
        assert!((totals.due - 315.0).abs() < 0.01);
        assert_eq!(totals.paid, 0.0);
    }

    #[test]
    fn month_due_is_amount_minus_paid() {
        let may = MonthKey::new(2024, 5).unwrap();
        let mut book = CalendarBook::new();
        book.edit_field(may, 1, DayField::MorningQty, "2", 50.0);
        book.set_paid(may, 1, true, 50.0);
        book.edit_field(may, 2, DayField::MorningQty, "1", 50.0);

        let totals = MonthTotals::of(&book, may);
        assert!((totals.amount - 150.0).abs() < 0.01);
        assert!((totals.paid - 100.0).abs() < 0.01);
        assert!((totals.due - 50.0).abs() < 0.01);
    }

    #[test]
    fn round2_is_presentation_only() {
        assert_eq!(round2(1.005), 1.0); // binary representation rounds down
        assert_eq!(round2(178.004), 178.0);
        assert_eq!(round2(2.675000001), 2.68);
    }
}
