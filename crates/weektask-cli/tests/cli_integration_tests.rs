use predicates::prelude::*;

mod helpers;
use helpers::CliTestHarness;

#[test]
fn test_help_lists_subcommands() {
    let harness = CliTestHarness::new();
    harness
        .run_success(&["--help"])
        .stdout(predicate::str::contains("week"))
        .stdout(predicate::str::contains("day"))
        .stdout(predicate::str::contains("done"));
}

#[test]
fn test_add_persists_task() {
    let harness = CliTestHarness::new();
    harness
        .run_success(&["add", "Buy milk", "--date", "2024-01-03"])
        .stdout(predicate::str::contains("Created task"));

    assert!(harness.tasks_file().exists());
    let tasks = harness.stored_tasks();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["title"], "Buy milk");
    assert_eq!(tasks[0]["date"], "2024-01-03");
    assert_eq!(tasks[0]["occurrence"], "once");
    assert_eq!(tasks[0]["completed"], false);
}

#[test]
fn test_add_rejects_blank_title() {
    let harness = CliTestHarness::new();
    harness
        .run_failure(&["add", "   ", "--date", "2024-01-03"])
        .stderr(predicate::str::contains("Please enter a task title."));
    assert!(harness.stored_tasks().is_empty());
}

#[test]
fn test_add_rejects_unknown_occurrence() {
    let harness = CliTestHarness::new();
    harness.run_failure(&["add", "Stretch", "--every", "hourly"]);
    assert!(harness.stored_tasks().is_empty());
}

#[test]
fn test_list_empty() {
    let harness = CliTestHarness::new();
    harness
        .run_success(&["list"])
        .stdout(predicate::str::contains("No tasks found."));
}

#[test]
fn test_week_shows_only_visible_tasks() {
    let harness = CliTestHarness::new();
    harness.run_success(&["add", "Dentist", "--date", "2024-01-03"]);
    harness.run_success(&["add", "Take vitamins", "--date", "2024-01-01", "--every", "daily"]);
    harness.run_success(&["add", "Pay rent", "--date", "2024-02-15", "--every", "monthly"]);

    harness
        .run_success(&["week", "--date", "2024-01-03"])
        .stdout(predicate::str::contains("Week of 2023-12-31 to 2024-01-06"))
        .stdout(predicate::str::contains("Dentist"))
        .stdout(predicate::str::contains("Take vitamins"))
        .stdout(predicate::str::contains("Pay rent").not());

    harness
        .run_success(&["week", "--date", "2024-01-03", "--offset", "1"])
        .stdout(predicate::str::contains("Week of 2024-01-07 to 2024-01-13"))
        .stdout(predicate::str::contains("Dentist").not())
        .stdout(predicate::str::contains("Take vitamins"));
}

#[test]
fn test_week_table_lists_midweek_recurrences() {
    let harness = CliTestHarness::new();
    harness.run_success(&["add", "Team sync", "--date", "2024-01-03", "--every", "weekly"]);
    harness.run_success(&["add", "Pay rent", "--date", "2024-01-12", "--every", "monthly"]);
    harness.run_success(&["add", "Dentist", "--date", "2024-03-01"]);

    // Week of Sunday 2024-02-11: sync on Wednesday the 14th, rent on Monday the 12th.
    harness
        .run_success(&["week", "--date", "2024-02-14"])
        .stdout(predicate::str::contains("Week of 2024-02-11 to 2024-02-17"))
        .stdout(predicate::str::contains("Team sync"))
        .stdout(predicate::str::contains("Pay rent"))
        .stdout(predicate::str::contains("Dentist").not())
        .stdout(predicate::str::contains("No tasks found.").not());
}

#[test]
fn test_week_offset_out_of_range() {
    let harness = CliTestHarness::new();
    harness
        .run_failure(&["week", "--offset", "2147483647"])
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_day_splits_todo_and_done() {
    let harness = CliTestHarness::new();
    harness.run_success(&["add", "Water plants", "--date", "2024-01-03", "--every", "daily"]);
    harness.run_success(&["add", "Call mom", "--date", "2024-01-05"]);

    let id = harness.task_id("Call mom");
    harness
        .run_success(&["done", &id[..8]])
        .stdout(predicate::str::contains("Completed task"));

    harness
        .run_success(&["day", "--date", "2024-01-05"])
        .stdout(predicate::str::contains("To do:"))
        .stdout(predicate::str::contains("[ ]").and(predicate::str::contains("Water plants")))
        .stdout(predicate::str::contains("[x]").and(predicate::str::contains("Call mom")));
}

#[test]
fn test_day_without_tasks() {
    let harness = CliTestHarness::new();
    harness.run_success(&["add", "Call mom", "--date", "2024-01-05"]);

    harness
        .run_success(&["day", "--date", "2024-01-02"])
        .stdout(predicate::str::contains("No tasks for this day."));
}

#[test]
fn test_done_toggles_back() {
    let harness = CliTestHarness::new();
    harness.run_success(&["add", "Laundry", "--date", "2024-01-03"]);
    let id = harness.task_id("Laundry");

    harness.run_success(&["done", &id]);
    assert_eq!(harness.stored_tasks()[0]["completed"], true);

    harness
        .run_success(&["done", &id])
        .stdout(predicate::str::contains("Reopened task"));
    assert_eq!(harness.stored_tasks()[0]["completed"], false);
}

#[test]
fn test_done_unknown_id() {
    let harness = CliTestHarness::new();
    harness
        .run_failure(&["done", "zz"])
        .stderr(predicate::str::contains("No task found with ID prefix 'zz'"));
}

#[test]
fn test_short_prefix_rejected() {
    let harness = CliTestHarness::new();
    harness
        .run_failure(&["done", "a"])
        .stderr(predicate::str::contains("at least 2 characters"));
}

#[test]
fn test_edit_changes_only_given_fields() {
    let harness = CliTestHarness::new();
    harness.run_success(&["add", "Gym", "--date", "2024-01-03", "-d", "legs"]);
    let id = harness.task_id("Gym");

    harness
        .run_success(&["edit", &id, "--every", "weekly", "--date", "2024-01-07"])
        .stdout(predicate::str::contains("Task updated"));

    let tasks = harness.stored_tasks();
    assert_eq!(tasks[0]["id"], id.as_str());
    assert_eq!(tasks[0]["title"], "Gym");
    assert_eq!(tasks[0]["description"], "legs");
    assert_eq!(tasks[0]["occurrence"], "weekly");
    assert_eq!(tasks[0]["date"], "2024-01-07");
}

#[test]
fn test_edit_without_changes_fails() {
    let harness = CliTestHarness::new();
    harness.run_success(&["add", "Gym", "--date", "2024-01-03"]);
    let id = harness.task_id("Gym");

    harness
        .run_failure(&["edit", &id])
        .stderr(predicate::str::contains("Nothing to change"));
}

#[test]
fn test_delete_with_force() {
    let harness = CliTestHarness::new();
    harness.run_success(&["add", "Old chore", "--date", "2024-01-03"]);
    harness.run_success(&["add", "Keep me", "--date", "2024-01-03"]);
    let id = harness.task_id("Old chore");

    harness
        .run_success(&["delete", &id, "--force"])
        .stdout(predicate::str::contains("Task deleted successfully."));

    let tasks = harness.stored_tasks();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["title"], "Keep me");
}

#[test]
fn test_custom_storage_key() {
    let harness = CliTestHarness::new();
    harness
        .command()
        .env("WEEKTASK_STORAGE_KEY", "work")
        .args(["add", "Standup", "--date", "2024-01-03", "--every", "weekdays"])
        .assert()
        .success();

    assert!(harness.data_dir().join("work.json").exists());
    assert!(!harness.tasks_file().exists());
    assert!(harness.stored_tasks().is_empty());
}

#[test]
fn test_corrupt_file_starts_empty() {
    let harness = CliTestHarness::new();
    std::fs::create_dir_all(harness.data_dir()).unwrap();
    std::fs::write(harness.tasks_file(), "{not json").unwrap();

    harness
        .run_success(&["list"])
        .stdout(predicate::str::contains("No tasks found."));
}

#[test]
fn test_malformed_config_warns_and_uses_defaults() {
    let harness = CliTestHarness::new();
    std::fs::write(harness.work_dir().join("weektask.toml"), "data_dir = [").unwrap();

    harness
        .run_success(&["list"])
        .stderr(predicate::str::contains("invalid configuration, using defaults"));
}
