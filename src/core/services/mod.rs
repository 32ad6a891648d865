pub mod day_service;
pub mod entry_service;
pub mod preferences_service;
pub mod summary_service;

pub use day_service::{DayRow, DayService};
pub use entry_service::EntryService;
pub use preferences_service::PreferencesService;
pub use summary_service::SummaryService;

use crate::errors::LedgerError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("{0}")]
    Invalid(String),
}
