use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn budget(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("budget").unwrap();
    cmd.env("BUDGET_DATA_DIR", dir.path()).env_remove("BUDGET_LOG");
    cmd
}

#[test]
fn add_then_today_lists_expense() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["add", "12,5", "Bread"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 12,5 zł for 'Bread'"));

    budget(&dir)
        .arg("today")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bread"))
        .stdout(predicate::str::contains("12,5 zł"));

    assert!(dir.path().join("data").join("budget_expenses.json").exists());
}

#[test]
fn no_command_shows_today() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Daily limit:  Not set"))
        .stdout(predicate::str::contains("No expenses yet."));
}

#[test]
fn invalid_amount_is_rejected() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["add", "0", "Nothing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));

    budget(&dir)
        .args(["add", "5", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("description must not be empty"));

    assert!(!dir.path().join("data").join("budget_expenses.json").exists());
}

#[test]
fn limit_set_show_and_clear() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["limit", "set", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Daily limit set to 100 zł"));

    budget(&dir)
        .arg("limit")
        .assert()
        .success()
        .stdout(predicate::str::contains("Daily limit: 100 zł"));

    let persisted =
        std::fs::read_to_string(dir.path().join("data").join("budget_limit.json")).unwrap();
    assert_eq!(persisted, "100");

    budget(&dir).args(["limit", "clear"]).assert().success();
    budget(&dir)
        .args(["limit", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not set"));
}

#[test]
fn non_positive_limit_is_rejected() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["limit", "set", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("daily limit must be greater than zero"));
}

#[test]
fn oversized_limit_is_rejected() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["limit", "set", "10000000000000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid amount"));

    budget(&dir)
        .args(["calendar", "--month", "2025-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly limit:  Not set"));
}

#[test]
fn calendar_shows_requested_month_with_debt() {
    let dir = TempDir::new().unwrap();

    budget(&dir).args(["limit", "set", "100"]).assert().success();
    budget(&dir)
        .args(["add", "3500", "Laptop", "--date", "2025-04-10"])
        .assert()
        .success();

    budget(&dir)
        .args(["calendar", "--month", "2025-04"])
        .assert()
        .success()
        .stdout(predicate::str::contains("April 2025"))
        .stdout(predicate::str::contains("10!"));

    budget(&dir)
        .args(["cal", "--month", "2025-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("May 2025"))
        .stdout(predicate::str::contains("Carried debt"))
        .stdout(predicate::str::contains("2600 zł"));
}

#[test]
fn day_view_and_remove_by_id() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["add", "20", "Cinema", "--date", "2025-03-14"])
        .assert()
        .success();

    let output = budget(&dir)
        .args(["day", "2025-03-14"])
        .assert()
        .success()
        .stdout(predicate::str::contains("14 March 2025"))
        .stdout(predicate::str::contains("Cinema"))
        .get_output()
        .stdout
        .clone();
    assert!(!output.is_empty());

    let json =
        std::fs::read_to_string(dir.path().join("data").join("budget_expenses.json")).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&json).unwrap();
    let id = doc["2025-03-14"][0]["id"].as_u64().unwrap();
    assert_eq!(doc["2025-03-14"][0]["desc"], "Cinema");

    budget(&dir)
        .args(["rm", &id.to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 'Cinema'"));

    budget(&dir)
        .args(["day", "2025-03-14"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses on 2025-03-14."));
}

#[test]
fn removing_unknown_id_fails() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["remove", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn corrupt_expense_file_loads_as_empty() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");
    std::fs::create_dir_all(&data).unwrap();
    std::fs::write(data.join("budget_expenses.json"), "{not json").unwrap();

    budget(&dir)
        .arg("today")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses yet."));
}

#[test]
fn corrupt_expense_file_is_reported_on_stderr() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");
    std::fs::create_dir_all(&data).unwrap();
    std::fs::write(data.join("budget_expenses.json"), "{broken").unwrap();

    budget(&dir)
        .env("BUDGET_LOG", "warn")
        .arg("today")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "persisted expenses are malformed, starting empty",
        ));
}

#[test]
fn log_level_setting_applies_without_env_override() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), r#"{"log_level": "debug"}"#).unwrap();

    budget(&dir)
        .arg("today")
        .assert()
        .success()
        .stderr(predicate::str::contains("state loaded"));
}

#[test]
fn config_prints_paths() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget Configuration"))
        .stdout(predicate::str::contains("SingleMonth"));
}
