use std::fmt;
use std::sync::{OnceLock, RwLock};

use colored::Colorize;

use crate::domain::Theme;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Section,
}

static ACTIVE_THEME: OnceLock<RwLock<Theme>> = OnceLock::new();

fn theme_lock() -> &'static RwLock<Theme> {
    ACTIVE_THEME.get_or_init(|| RwLock::new(Theme::Light))
}

/// Switches the accent palette. Called on startup and on theme toggles.
pub fn set_theme(theme: Theme) {
    if let Ok(mut guard) = theme_lock().write() {
        *guard = theme;
    }
}

fn active_theme() -> Theme {
    theme_lock().read().map(|guard| *guard).unwrap_or(Theme::Light)
}

fn apply_style(kind: MessageKind, message: impl fmt::Display) -> String {
    let text = message.to_string();
    if kind == MessageKind::Section {
        return format!("=== {} ===", text.trim()).bold().to_string();
    }
    let dark = active_theme() == Theme::Dark;
    match (kind, dark) {
        (MessageKind::Success, true) => text.bright_green().to_string(),
        (MessageKind::Success, false) => text.green().to_string(),
        (MessageKind::Warning, true) => text.bright_yellow().to_string(),
        (MessageKind::Warning, false) => text.yellow().to_string(),
        (MessageKind::Error, true) => text.bright_red().to_string(),
        (MessageKind::Error, false) => text.red().to_string(),
        (MessageKind::Info, _) | (MessageKind::Section, _) => text,
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    match kind {
        MessageKind::Section => println!("\n{}", apply_style(kind, message)),
        _ => println!("{}", apply_style(kind, message)),
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}
