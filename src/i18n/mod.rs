//! Static translation tables for the CLI surface.
//!
//! Lookup falls back to English, then to the key itself, so a missing
//! translation never breaks rendering.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::domain::Language;

static EN: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("title", "Milk Ledger"),
        ("entries", "Entries"),
        ("date", "Date"),
        ("quantity_short", "Qty (L)"),
        ("rate_short", "Rate (/L)"),
        ("amount", "Amount"),
        ("status", "Status"),
        ("paid", "Paid"),
        ("unpaid", "Unpaid"),
        ("summary", "Summary"),
        ("total_quantity", "Total Quantity"),
        ("total_amount", "Total Amount"),
        ("total_paid", "Total Paid"),
        ("total_due", "Total Due (Unpaid)"),
        ("no_entries_yet", "No entries yet. Add one with `add`."),
        ("day", "Day"),
        ("morning", "Morning"),
        ("evening", "Evening"),
        ("default_rate", "Default Rate"),
        (
            "confirm_clear",
            "Are you sure you want to delete all entries? This cannot be undone.",
        ),
        (
            "confirm_delete_entry",
            "Are you sure you want to delete this entry?",
        ),
    ])
});

static HI: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("title", "दूध हिसाब"),
        ("entries", "एंट्रीज़"),
        ("date", "तारीख"),
        ("quantity_short", "मात्रा (L)"),
        ("rate_short", "दर (/L)"),
        ("amount", "राशि"),
        ("status", "स्थिति"),
        ("paid", "भुगतान किया"),
        ("unpaid", "अदत्त"),
        ("summary", "सारांश"),
        ("total_quantity", "कुल मात्रा"),
        ("total_amount", "कुल राशि"),
        ("total_paid", "कुल भुगतान"),
        ("total_due", "कुल बकाया (अदत्त)"),
        ("no_entries_yet", "अभी तक कोई एंट्री नहीं है। `add` से एक जोड़ें।"),
        ("day", "दिन"),
        ("morning", "सुबह"),
        ("evening", "शाम"),
        ("default_rate", "डिफ़ॉल्ट दर"),
        (
            "confirm_clear",
            "क्या आप वाकई सभी प्रविष्टियाँ हटाना चाहते हैं? इसे पूर्ववत नहीं किया जा सकता।",
        ),
        (
            "confirm_delete_entry",
            "क्या आप वाकई इस प्रविष्टि को हटाना चाहते हैं?",
        ),
    ])
});

/// Resolves a display string for the given language.
pub fn tr<'a>(language: Language, key: &'a str) -> &'a str {
    let table = match language {
        Language::En => &EN,
        Language::Hi => &HI,
    };
    table
        .get(key)
        .or_else(|| EN.get(key))
        .copied()
        .unwrap_or(key)
}
