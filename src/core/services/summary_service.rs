use crate::domain::MonthKey;
use crate::ledger::{CalendarBook, EntryBook, EntryTotals, MonthTotals};

/// Read-only aggregation facade over the two stores.
pub struct SummaryService;

impl SummaryService {
    pub fn entry_totals(book: &EntryBook) -> EntryTotals {
        EntryTotals::of(book)
    }

    pub fn month_totals(book: &CalendarBook, month: MonthKey) -> MonthTotals {
        MonthTotals::of(book, month)
    }
}
