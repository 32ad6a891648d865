pub mod json_backend;
pub mod memory;

use crate::errors::LedgerError;

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Logical key names shared by every gateway implementation. Values are
/// opaque serialized snapshots; the gateway never interprets them.
pub mod keys {
    pub const ENTRIES: &str = "entries";
    pub const MONTHLY_DATA: &str = "monthlyData";
    pub const DEFAULT_RATE: &str = "defaultRate";
    pub const LANGUAGE: &str = "language";
    pub const THEME: &str = "theme";
}

/// Abstraction over durable key-value persistence.
///
/// The core performs full-value overwrite writes and treats the gateway as
/// synchronous; injecting it keeps the controller testable.
pub trait StorageGateway: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<String>>;
    fn save(&self, key: &str, value: &str) -> Result<()>;
}

pub use json_backend::JsonStorage;
pub use memory::MemoryGateway;
