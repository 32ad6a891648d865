//! Business logic helpers for the flat-list ledger.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::core::services::{ServiceError, ServiceResult};
use crate::domain::{Entry, EntryForm};
use crate::ledger::numeric::parse_decimal;
use crate::ledger::EntryBook;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validated CRUD helpers for flat-list entries.
pub struct EntryService;

impl EntryService {
    /// Validates the submitted form and appends a new entry.
    ///
    /// Rejections leave the book untouched: missing or unparsable date,
    /// non-positive or non-numeric quantity, negative or non-numeric rate.
    pub fn add(book: &mut EntryBook, form: &EntryForm) -> ServiceResult<Uuid> {
        let date = parse_date(&form.date)?;
        let quantity = parse_decimal(&form.quantity)
            .ok_or_else(|| ServiceError::Invalid("quantity must be a number".into()))?;
        if quantity <= 0.0 {
            return Err(ServiceError::Invalid("quantity must be positive".into()));
        }
        let rate = parse_decimal(&form.rate)
            .ok_or_else(|| ServiceError::Invalid("rate must be a number".into()))?;
        if rate < 0.0 {
            return Err(ServiceError::Invalid("rate cannot be negative".into()));
        }
        Ok(book.add(Entry::new(date, quantity, rate, form.paid)))
    }

    /// Removes an entry; absent ids are a silent no-op.
    pub fn remove(book: &mut EntryBook, id: Uuid) -> Option<Entry> {
        book.remove(id)
    }

    /// Flips an entry's paid flag; absent ids are a silent no-op.
    pub fn toggle_paid(book: &mut EntryBook, id: Uuid) -> bool {
        book.toggle_paid(id)
    }

    pub fn clear(book: &mut EntryBook) {
        book.clear();
    }

    /// Snapshot in display order: newest first, insertion order on ties.
    pub fn list_desc(book: &EntryBook) -> Vec<&Entry> {
        book.sorted_desc()
    }
}

fn parse_date(raw: &str) -> ServiceResult<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::Invalid("date is required".into()));
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| ServiceError::Invalid(format!("`{trimmed}` is not a valid date (YYYY-MM-DD)")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(date: &str, quantity: &str, rate: &str) -> EntryForm {
        EntryForm {
            date: date.into(),
            quantity: quantity.into(),
            rate: rate.into(),
            paid: false,
        }
    }

    #[test]
    fn add_accepts_a_valid_form() {
        let mut book = EntryBook::new();
        let id = EntryService::add(&mut book, &form("2024-05-01", "2", "50")).unwrap();
        let entry = book.get(id).unwrap();
        assert_eq!(entry.quantity, 2.0);
        assert_eq!(entry.rate, 50.0);
        assert!(!entry.paid);
    }

    #[test]
    fn add_rejects_missing_date() {
        let mut book = EntryBook::new();
        let err = EntryService::add(&mut book, &form("  ", "2", "50")).unwrap_err();
        assert!(matches!(err, ServiceError::Invalid(ref m) if m.contains("date")));
        assert!(book.is_empty());
    }

    #[test]
    fn add_rejects_non_positive_quantity() {
        let mut book = EntryBook::new();
        assert!(EntryService::add(&mut book, &form("2024-05-01", "0", "50")).is_err());
        assert!(EntryService::add(&mut book, &form("2024-05-01", "-2", "50")).is_err());
        assert!(EntryService::add(&mut book, &form("2024-05-01", "two", "50")).is_err());
        assert!(book.is_empty());
    }

    #[test]
    fn add_rejects_bad_rate() {
        let mut book = EntryBook::new();
        assert!(EntryService::add(&mut book, &form("2024-05-01", "2", "-1")).is_err());
        assert!(EntryService::add(&mut book, &form("2024-05-01", "2", "free")).is_err());
        assert!(book.is_empty());
    }

    #[test]
    fn zero_rate_is_allowed() {
        let mut book = EntryBook::new();
        assert!(EntryService::add(&mut book, &form("2024-05-01", "2", "0")).is_ok());
        assert_eq!(book.len(), 1);
    }
}
