//! Shell context, command dispatch, and rendering helpers.

use std::{env, path::PathBuf};

use chrono::Local;
use dialoguer::{theme::ColorfulTheme, Confirm};
use strsim::levenshtein;
use uuid::Uuid;

use crate::core::services::ServiceError;
use crate::core::{LedgerManager, MonthView};
use crate::domain::{DayField, EntryForm, Language};
use crate::errors::LedgerError;
use crate::i18n::tr;
use crate::ledger::round2;
use crate::storage::JsonStorage;

use super::help::{self, COMMANDS};
use super::output;

/// Overrides the storage location; used by script-mode tests.
const DATA_DIR_ENV: &str = "MILK_LEDGER_DATA_DIR";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum CommandError {
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error("dialog error: {0}")]
    Dialog(#[from] dialoguer::Error),
}

pub(crate) struct ShellContext {
    manager: LedgerManager,
    mode: CliMode,
    pub(crate) running: bool,
}

impl ShellContext {
    pub(crate) fn new(mode: CliMode) -> Result<Self, CliError> {
        let root = env::var_os(DATA_DIR_ENV).map(PathBuf::from);
        let storage = JsonStorage::new(root)?;
        let manager = LedgerManager::new(Box::new(storage))?;
        output::set_theme(manager.preferences().theme);
        Ok(Self {
            manager,
            mode,
            running: true,
        })
    }

    pub(crate) fn command_names() -> Vec<&'static str> {
        COMMANDS.iter().map(|spec| spec.name).collect()
    }

    pub(crate) fn prompt(&self) -> String {
        format!("{} {}> ", self.tr("title"), self.manager.displayed_month())
    }

    fn tr<'a>(&self, key: &'a str) -> &'a str {
        tr(self.manager.preferences().language, key)
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        output::error(err.to_string());
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        match command {
            "add" => self.cmd_add(args)?,
            "list" => self.cmd_list(),
            "paid" => self.cmd_paid(args)?,
            "delete" => self.cmd_delete(args)?,
            "clear" => self.cmd_clear()?,
            "month" => self.cmd_month(),
            "next" => self.cmd_navigate(1),
            "prev" => self.cmd_navigate(-1),
            "day" => self.cmd_day(args)?,
            "rate" => self.cmd_rate(args)?,
            "summary" => self.cmd_summary(),
            "lang" => self.cmd_lang(args)?,
            "theme" => self.cmd_theme()?,
            "help" => help::print_help(),
            "exit" | "quit" => return Ok(LoopControl::Exit),
            other => self.suggest_command(other),
        }
        Ok(LoopControl::Continue)
    }

    fn suggest_command(&self, input: &str) {
        let mut suggestions: Vec<(usize, &str)> = COMMANDS
            .iter()
            .map(|spec| (levenshtein(input, spec.name), spec.name))
            .collect();
        suggestions.sort_by_key(|(distance, _)| *distance);
        match suggestions.first() {
            Some((distance, best)) if *distance <= 2 => {
                output::warning(format!("Unknown command `{input}`. Did you mean `{best}`?"));
            }
            _ => output::warning(format!(
                "Unknown command `{input}`. Type `help` for the command list."
            )),
        }
    }

    fn confirm(&self, prompt: &str) -> Result<bool, CommandError> {
        // Script mode has no terminal to prompt on; destructive commands in
        // scripts are taken as already confirmed.
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt.to_string())
            .default(false)
            .interact()?)
    }

    fn resolve_entry_id(&self, needle: &str) -> Option<Uuid> {
        let needle = needle.to_ascii_lowercase();
        let matches: Vec<Uuid> = self
            .manager
            .entry_rows()
            .iter()
            .map(|entry| entry.id)
            .filter(|id| id.to_string().starts_with(&needle))
            .collect();
        match matches.as_slice() {
            [only] => Some(*only),
            [] => {
                output::warning(format!("No entry matches `{needle}`."));
                None
            }
            _ => {
                output::warning(format!("`{needle}` matches more than one entry."));
                None
            }
        }
    }

    // --- flat-list commands ---

    fn cmd_add(&mut self, args: &[&str]) -> Result<(), CommandError> {
        if args.len() < 3 {
            return Err(CommandError::Usage("add <date|today> <quantity> <rate> [paid]"));
        }
        let date = if args[0].eq_ignore_ascii_case("today") {
            Local::now().date_naive().format("%Y-%m-%d").to_string()
        } else {
            args[0].to_string()
        };
        let paid = matches!(args.get(3), Some(&flag) if flag.eq_ignore_ascii_case("paid"));
        let form = EntryForm {
            date,
            quantity: args[1].to_string(),
            rate: args[2].to_string(),
            paid,
        };
        let id = self.manager.submit_new_entry(&form)?;
        output::success(format!("Entry added ({}).", short_id(id)));
        Ok(())
    }

    fn cmd_list(&self) {
        let rows = self.manager.entry_rows();
        output::section(self.tr("entries"));
        if rows.is_empty() {
            output::info(self.tr("no_entries_yet"));
            return;
        }
        output::info(format!(
            "{:<10}  {:>8}  {:>8}  {:>10}  {:<10}  {}",
            self.tr("date"),
            self.tr("quantity_short"),
            self.tr("rate_short"),
            self.tr("amount"),
            self.tr("status"),
            "Id"
        ));
        for entry in &rows {
            let status = if entry.paid {
                self.tr("paid")
            } else {
                self.tr("unpaid")
            };
            output::info(format!(
                "{:<10}  {:>8.2}  {:>8.2}  {:>10.2}  {:<10}  {}",
                entry.date.to_string(),
                entry.quantity,
                entry.rate,
                round2(entry.amount()),
                status,
                short_id(entry.id)
            ));
        }
        self.print_entry_totals();
    }

    fn print_entry_totals(&self) {
        let totals = self.manager.entry_totals();
        output::info(format!(
            "{}: {:.2} | {}: {:.2} | {}: {:.2}",
            self.tr("total_quantity"),
            round2(totals.quantity),
            self.tr("total_amount"),
            round2(totals.amount),
            self.tr("total_due"),
            round2(totals.due)
        ));
    }

    fn cmd_paid(&mut self, args: &[&str]) -> Result<(), CommandError> {
        let needle = args.first().ok_or(CommandError::Usage("paid <id>"))?;
        if let Some(id) = self.resolve_entry_id(needle) {
            if self.manager.request_toggle_paid(id)? {
                self.print_entry_totals();
            }
        }
        Ok(())
    }

    fn cmd_delete(&mut self, args: &[&str]) -> Result<(), CommandError> {
        let needle = args.first().ok_or(CommandError::Usage("delete <id>"))?;
        let Some(id) = self.resolve_entry_id(needle) else {
            return Ok(());
        };
        if !self.confirm(self.tr("confirm_delete_entry"))? {
            return Ok(());
        }
        if self.manager.request_delete(id)? {
            output::success("Entry deleted.");
        }
        Ok(())
    }

    fn cmd_clear(&mut self) -> Result<(), CommandError> {
        if !self.confirm(self.tr("confirm_clear"))? {
            return Ok(());
        }
        self.manager.request_clear_all()?;
        output::success("All entries cleared.");
        Ok(())
    }

    // --- calendar commands ---

    fn cmd_month(&self) {
        self.render_month(&self.manager.month_view());
    }

    fn cmd_navigate(&mut self, delta: i32) {
        self.manager.navigate_month(delta);
        self.render_month(&self.manager.month_view());
    }

    fn render_month(&self, view: &MonthView) {
        output::section(&view.label);
        output::info(format!(
            "{:<4}  {:>8}  {:>8}  {:>8}  {:>10}  {}",
            self.tr("day"),
            self.tr("morning"),
            self.tr("evening"),
            self.tr("rate_short"),
            self.tr("amount"),
            self.tr("status")
        ));
        for row in &view.rows {
            // Untouched days render as the implicit default view; skip them
            // to keep the table focused on recorded activity.
            if !row.recorded {
                continue;
            }
            let status = if row.entry.paid {
                self.tr("paid")
            } else {
                self.tr("unpaid")
            };
            output::info(format!(
                "{:<4}  {:>8.2}  {:>8.2}  {:>8.2}  {:>10.2}  {}",
                row.day,
                row.entry.morning_qty,
                row.entry.evening_qty,
                row.entry.rate,
                round2(row.entry.daily_total()),
                status
            ));
        }
        self.print_month_totals(view);
    }

    fn print_month_totals(&self, view: &MonthView) {
        let totals = view.totals;
        output::info(format!(
            "{}: {:.2} ({} {:.2} / {} {:.2}) | {}: {:.2} | {}: {:.2} | {}: {:.2}",
            self.tr("total_quantity"),
            round2(totals.quantity),
            self.tr("morning"),
            round2(totals.morning_qty),
            self.tr("evening"),
            round2(totals.evening_qty),
            self.tr("total_amount"),
            round2(totals.amount),
            self.tr("total_paid"),
            round2(totals.paid),
            self.tr("total_due"),
            round2(totals.due)
        ));
    }

    fn cmd_day(&mut self, args: &[&str]) -> Result<(), CommandError> {
        const USAGE: &str = "day <day> <morning|evening|rate|paid|toggle> [value]";
        let (&day, rest) = match args.split_first() {
            Some(split) => split,
            None => return Err(CommandError::Usage(USAGE)),
        };
        let day: u32 = day.parse().map_err(|_| CommandError::Usage(USAGE))?;
        let (&field, value) = match rest.split_first() {
            Some(split) => split,
            None => return Err(CommandError::Usage(USAGE)),
        };
        let raw = value.join(" ");
        match field.to_ascii_lowercase().as_str() {
            "paid" => {
                let flag = matches!(
                    raw.to_ascii_lowercase().as_str(),
                    "yes" | "true" | "on" | "1"
                );
                self.manager.set_day_paid(day, flag)?;
            }
            "toggle" => {
                self.manager.toggle_day_paid(day)?;
            }
            other => {
                let field: DayField = other.parse().map_err(|_| CommandError::Usage(USAGE))?;
                self.manager.edit_day_field(day, field, &raw)?;
            }
        }
        self.print_month_totals(&self.manager.month_view());
        Ok(())
    }

    fn cmd_rate(&mut self, args: &[&str]) -> Result<(), CommandError> {
        match args.first() {
            None => {
                let rate = self.manager.preferences().default_rate;
                output::info(format!("{}: {:.2}", self.tr("default_rate"), round2(rate)));
            }
            Some(raw) => {
                let rate = self.manager.change_default_rate(raw)?;
                output::success(format!("{}: {:.2}", self.tr("default_rate"), round2(rate)));
            }
        }
        Ok(())
    }

    fn cmd_summary(&self) {
        output::section(self.tr("summary"));
        self.print_entry_totals();
        let view = self.manager.month_view();
        output::info(format!("{}:", view.label));
        self.print_month_totals(&view);
    }

    // --- preference commands ---

    fn cmd_lang(&mut self, args: &[&str]) -> Result<(), CommandError> {
        let code = args.first().ok_or(CommandError::Usage("lang <en|hi>"))?;
        let language = self.manager.change_language(code)?;
        let name = match language {
            Language::En => "English",
            Language::Hi => "हिन्दी",
        };
        output::success(format!("Language set to {name}."));
        Ok(())
    }

    fn cmd_theme(&mut self) -> Result<(), CommandError> {
        let theme = self.manager.change_theme()?;
        output::set_theme(theme);
        output::success(format!("Theme set to {}.", theme.code()));
        Ok(())
    }
}

fn short_id(id: Uuid) -> String {
    id.to_string()[..8].to_string()
}
