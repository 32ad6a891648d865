use assert_cmd::Command;
use predicates::str::contains;
use tempfile::tempdir;

fn script_command(data_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("milk_ledger_cli").unwrap();
    cmd.env("MILK_LEDGER_CLI_SCRIPT", "1")
        .env("MILK_LEDGER_DATA_DIR", data_dir);
    cmd
}

#[test]
fn script_mode_runs_the_flat_list_flow() {
    let temp = tempdir().unwrap();
    let input = "add 2024-05-01 2 50\nadd 2024-05-02 1.5 52 paid\nlist\nexit\n";

    script_command(temp.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Entry added"))
        .stdout(contains("178.00"))
        .stdout(contains("100.00"));

    let entries = std::fs::read_to_string(temp.path().join("entries.json")).unwrap();
    assert!(entries.contains("2024-05-01"));
}

#[test]
fn script_mode_rejects_invalid_adds() {
    let temp = tempdir().unwrap();
    let input = "add 2024-05-01 0 50\nexit\n";

    script_command(temp.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("quantity must be positive"));
    assert!(!temp.path().join("entries.json").exists());
}

#[test]
fn script_mode_clear_is_auto_confirmed() {
    let temp = tempdir().unwrap();
    let input = "add 2024-05-01 2 50\nclear\nlist\nexit\n";

    script_command(temp.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("All entries cleared."))
        .stdout(contains("No entries yet"));
}

#[test]
fn script_mode_edits_the_calendar() {
    let temp = tempdir().unwrap();
    let input = "rate 50\nday 1 morning 2\nday 1 evening 1\nday 1 rate 55\nday 2 morning 3\nmonth\nexit\n";

    script_command(temp.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("315.00"));

    let monthly = std::fs::read_to_string(temp.path().join("monthlyData.json")).unwrap();
    assert!(monthly.contains("morningQty"));
}

#[test]
fn unknown_commands_get_a_suggestion() {
    let temp = tempdir().unwrap();
    script_command(temp.path())
        .write_stdin("lst\nexit\n")
        .assert()
        .success()
        .stdout(contains("Did you mean `list`?"));
}
