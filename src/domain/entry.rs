use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One flat-list ledger record: a dated delivery with its agreed rate.
///
/// The amount owed for an entry is always derived from `quantity * rate`;
/// it is never stored alongside the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub id: Uuid,
    pub date: NaiveDate,
    pub quantity: f64,
    pub rate: f64,
    pub paid: bool,
}

impl Entry {
    pub fn new(date: NaiveDate, quantity: f64, rate: f64, paid: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            quantity,
            rate,
            paid,
        }
    }

    pub fn amount(&self) -> f64 {
        self.quantity * self.rate
    }
}

/// Raw form values as the presentation layer collects them.
///
/// Validation happens in the service layer so a rejected submission leaves
/// the store untouched.
#[derive(Debug, Clone, Default)]
pub struct EntryForm {
    pub date: String,
    pub quantity: String,
    pub rate: String,
    pub paid: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_is_derived_from_quantity_and_rate() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let entry = Entry::new(date, 2.5, 52.0, false);
        assert!((entry.amount() - 130.0).abs() < 1e-9);
    }
}
