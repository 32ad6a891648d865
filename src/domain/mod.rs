//! Persisted data model shared by both ledger variants.

pub mod calendar;
pub mod entry;
pub mod preferences;

pub use calendar::{DayEntry, DayField, DayLookup, MonthKey};
pub use entry::{Entry, EntryForm};
pub use preferences::{Language, Preferences, Theme, DEFAULT_RATE};
