use uuid::Uuid;

use crate::core::services::{
    DayRow, DayService, EntryService, PreferencesService, ServiceResult, SummaryService,
};
use crate::domain::{
    DayField, Entry, EntryForm, Language, MonthKey, Preferences, Theme, DEFAULT_RATE,
};
use crate::errors::LedgerError;
use crate::ledger::{CalendarBook, EntryBook, EntryTotals, MonthTotals};
use crate::storage::{keys, StorageGateway};

/// Everything the presentation layer needs to render one calendar month.
#[derive(Debug, Clone)]
pub struct MonthView {
    pub month: MonthKey,
    pub label: String,
    pub day_count: u32,
    pub rows: Vec<DayRow>,
    pub totals: MonthTotals,
}

/// Controller owning the application state: both record stores, the
/// preferences, and the month currently on display.
///
/// Every intent applies a single change to the in-memory state and then
/// persists synchronously through the injected gateway, so a crash loses at
/// most the latest change. The gateway is the only collaborator; there are
/// no ambient module-level mutables.
pub struct LedgerManager {
    entries: EntryBook,
    calendar: CalendarBook,
    preferences: Preferences,
    displayed_month: MonthKey,
    storage: Box<dyn StorageGateway>,
}

impl LedgerManager {
    /// Loads persisted state and starts on the current month.
    pub fn new(storage: Box<dyn StorageGateway>) -> Result<Self, LedgerError> {
        Self::with_displayed_month(storage, MonthKey::current())
    }

    /// Loads persisted state and starts on the given month. Test seam, and
    /// used anywhere the caller wants a deterministic starting view.
    pub fn with_displayed_month(
        storage: Box<dyn StorageGateway>,
        month: MonthKey,
    ) -> Result<Self, LedgerError> {
        let entries = match storage.load(keys::ENTRIES)? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => EntryBook::new(),
        };
        let calendar = match storage.load(keys::MONTHLY_DATA)? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => CalendarBook::new(),
        };
        let preferences = load_preferences(storage.as_ref())?;
        tracing::info!(
            entries = entries.len(),
            month = %month,
            "ledger state loaded"
        );
        Ok(Self {
            entries,
            calendar,
            preferences,
            displayed_month: month,
            storage,
        })
    }

    // --- flat-list intents ---

    /// Validates and appends a new entry, then persists.
    pub fn submit_new_entry(&mut self, form: &EntryForm) -> ServiceResult<Uuid> {
        let id = EntryService::add(&mut self.entries, form)?;
        self.persist_entries()?;
        tracing::debug!(%id, "entry added");
        Ok(id)
    }

    /// Deletes an entry. Absent ids are a no-op and nothing is persisted.
    pub fn request_delete(&mut self, id: Uuid) -> ServiceResult<bool> {
        let removed = EntryService::remove(&mut self.entries, id).is_some();
        if removed {
            self.persist_entries()?;
            tracing::debug!(%id, "entry deleted");
        }
        Ok(removed)
    }

    /// Toggles an entry's paid flag. Absent ids are a no-op.
    pub fn request_toggle_paid(&mut self, id: Uuid) -> ServiceResult<bool> {
        let toggled = EntryService::toggle_paid(&mut self.entries, id);
        if toggled {
            self.persist_entries()?;
        }
        Ok(toggled)
    }

    pub fn request_clear_all(&mut self) -> ServiceResult<()> {
        EntryService::clear(&mut self.entries);
        self.persist_entries()?;
        tracing::debug!("all entries cleared");
        Ok(())
    }

    // --- calendar intents ---

    /// Applies a permissive per-field edit to a day of the displayed month.
    pub fn edit_day_field(&mut self, day: u32, field: DayField, raw: &str) -> ServiceResult<()> {
        DayService::edit_field(
            &mut self.calendar,
            self.displayed_month,
            day,
            field,
            raw,
            self.preferences.default_rate,
        );
        self.persist_calendar()?;
        Ok(())
    }

    pub fn set_day_paid(&mut self, day: u32, paid: bool) -> ServiceResult<()> {
        DayService::set_paid(
            &mut self.calendar,
            self.displayed_month,
            day,
            paid,
            self.preferences.default_rate,
        );
        self.persist_calendar()?;
        Ok(())
    }

    /// Flips the paid flag of a recorded day; absent days are a no-op.
    pub fn toggle_day_paid(&mut self, day: u32) -> ServiceResult<bool> {
        let toggled = DayService::toggle_paid(&mut self.calendar, self.displayed_month, day);
        if toggled {
            self.persist_calendar()?;
        }
        Ok(toggled)
    }

    /// Moves the displayed month. Display state only; nothing to persist.
    pub fn navigate_month(&mut self, delta: i32) -> MonthKey {
        for _ in 0..delta.unsigned_abs() {
            self.displayed_month = if delta > 0 {
                self.displayed_month.next()
            } else {
                self.displayed_month.previous()
            };
        }
        self.displayed_month
    }

    // --- preference intents ---

    /// Replaces the process-wide default rate. Rejected input keeps the
    /// previous value; accepted input influences only future lazy
    /// initializations and rate resets, never existing explicit rates.
    pub fn change_default_rate(&mut self, raw: &str) -> ServiceResult<f64> {
        let value = PreferencesService::set_default_rate(&mut self.preferences, raw)?;
        self.persist_preferences()?;
        tracing::debug!(value, "default rate changed");
        Ok(value)
    }

    pub fn change_language(&mut self, code: &str) -> ServiceResult<Language> {
        let language = PreferencesService::set_language(&mut self.preferences, code)?;
        self.persist_preferences()?;
        Ok(language)
    }

    pub fn change_theme(&mut self) -> ServiceResult<Theme> {
        let theme = PreferencesService::toggle_theme(&mut self.preferences);
        self.persist_preferences()?;
        Ok(theme)
    }

    // --- views ---

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn displayed_month(&self) -> MonthKey {
        self.displayed_month
    }

    /// Entry snapshot in display order: newest first, stable on ties.
    pub fn entry_rows(&self) -> Vec<&Entry> {
        EntryService::list_desc(&self.entries)
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn entry_totals(&self) -> EntryTotals {
        SummaryService::entry_totals(&self.entries)
    }

    /// Full render model for the displayed month.
    pub fn month_view(&self) -> MonthView {
        let month = self.displayed_month;
        MonthView {
            month,
            label: month.label(),
            day_count: month.day_count(),
            rows: DayService::month_rows(&self.calendar, month, self.preferences.default_rate),
            totals: SummaryService::month_totals(&self.calendar, month),
        }
    }

    // --- persistence ---

    fn persist_entries(&self) -> Result<(), LedgerError> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        self.storage.save(keys::ENTRIES, &json)
    }

    fn persist_calendar(&self) -> Result<(), LedgerError> {
        let json = serde_json::to_string_pretty(&self.calendar)?;
        self.storage.save(keys::MONTHLY_DATA, &json)
    }

    fn persist_preferences(&self) -> Result<(), LedgerError> {
        self.storage.save(
            keys::DEFAULT_RATE,
            &self.preferences.default_rate.to_string(),
        )?;
        self.storage
            .save(keys::LANGUAGE, self.preferences.language.code())?;
        self.storage.save(keys::THEME, self.preferences.theme.code())
    }
}

/// Preference values parse leniently: a malformed or unknown stored value
/// falls back to its default instead of failing the whole load.
fn load_preferences(storage: &dyn StorageGateway) -> Result<Preferences, LedgerError> {
    let mut preferences = Preferences::default();
    if let Some(raw) = storage.load(keys::DEFAULT_RATE)? {
        preferences.default_rate = crate::ledger::numeric::parse_non_negative_or(&raw, DEFAULT_RATE);
    }
    if let Some(raw) = storage.load(keys::LANGUAGE)? {
        if let Some(language) = Language::from_code(&raw) {
            preferences.language = language;
        }
    }
    if let Some(raw) = storage.load(keys::THEME)? {
        if let Some(theme) = Theme::from_code(&raw) {
            preferences.theme = theme;
        }
    }
    Ok(preferences)
}
