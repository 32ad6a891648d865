use super::output;

pub(crate) struct CommandSpec {
    pub name: &'static str,
    pub usage: &'static str,
    pub summary: &'static str,
}

pub(crate) const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "add",
        usage: "add <date|today> <quantity> <rate> [paid]",
        summary: "Add a new delivery entry",
    },
    CommandSpec {
        name: "list",
        usage: "list",
        summary: "Show all entries, newest first, with running totals",
    },
    CommandSpec {
        name: "paid",
        usage: "paid <id>",
        summary: "Toggle an entry's paid status",
    },
    CommandSpec {
        name: "delete",
        usage: "delete <id>",
        summary: "Delete one entry (asks for confirmation)",
    },
    CommandSpec {
        name: "clear",
        usage: "clear",
        summary: "Delete every entry (asks for confirmation)",
    },
    CommandSpec {
        name: "month",
        usage: "month",
        summary: "Show the displayed calendar month",
    },
    CommandSpec {
        name: "next",
        usage: "next",
        summary: "Move the displayed month forward",
    },
    CommandSpec {
        name: "prev",
        usage: "prev",
        summary: "Move the displayed month back",
    },
    CommandSpec {
        name: "day",
        usage: "day <day> <morning|evening|rate|paid|toggle> [value]",
        summary: "Edit one field of a calendar day",
    },
    CommandSpec {
        name: "rate",
        usage: "rate [value]",
        summary: "Show or change the default rate",
    },
    CommandSpec {
        name: "summary",
        usage: "summary",
        summary: "Show totals for the list and the displayed month",
    },
    CommandSpec {
        name: "lang",
        usage: "lang <en|hi>",
        summary: "Change the display language",
    },
    CommandSpec {
        name: "theme",
        usage: "theme",
        summary: "Toggle between light and dark output",
    },
    CommandSpec {
        name: "help",
        usage: "help",
        summary: "Show this command list",
    },
    CommandSpec {
        name: "exit",
        usage: "exit",
        summary: "Leave the shell",
    },
];

pub(crate) fn print_help() {
    output::section("Commands");
    for spec in COMMANDS {
        output::info(format!("  {:<55} {}", spec.usage, spec.summary));
    }
}
