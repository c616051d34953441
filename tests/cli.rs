//! CLI integration tests.

mod support;
use support::Test;

use predicates::prelude::*;

// --- diff ---

#[test]
fn test_diff_categorizes_and_summarizes() {
    let t = Test::new();
    t.store("source.json", &[("A", "1"), ("B", "2"), ("C", "x")]);
    t.store("target.json", &[("B", "2"), ("C", "y"), ("D", "4")]);

    let output = t.diff("source.json", "target.json");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("+ A (source only)"));
    assert!(stdout.contains("- D (target only)"));
    assert!(stdout.contains("~ C (value differs)"));
    assert!(!stdout.contains("B (")); // identical names hidden by default
}

#[test]
fn test_diff_show_identical() {
    let t = Test::new();
    t.store("source.json", &[("B", "2")]);
    t.store("target.json", &[("B", "2")]);

    let output = t
        .cmd()
        .args(["diff", "source.json", "target.json", "--show-identical"])
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("✓ B"));
    assert!(stdout.contains("in sync"));
}

#[test]
fn test_diff_json_output() {
    let t = Test::new();
    t.store("source.json", &[("A", "1")]);
    t.store("target.json", &[("A", "2")]);

    let output = t
        .cmd()
        .args(["diff", "source.json", "target.json", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["value_differs"][0], "A");
}

#[test]
fn test_diff_missing_store_fails() {
    let t = Test::new();
    t.store("source.json", &[("A", "1")]);

    t.cmd()
        .args(["diff", "source.json", "missing.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("store unreachable"));
}

// --- sync ---

#[test]
fn test_sync_writes_out_of_sync_names() {
    let t = Test::new();
    t.store("source.json", &[("A", "1"), ("B", "2"), ("C", "x")]);
    t.store("target.json", &[("B", "2"), ("C", "y")]);

    let output = t.sync("source.json", "target.json", &[]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "{}", stdout);
    assert!(stdout.contains("synced A"));
    assert!(stdout.contains("synced C"));
    assert!(!stdout.contains("synced B"));

    let target = t.read_store("target.json");
    assert_eq!(target.get("A").unwrap().value(), "1");
    assert_eq!(target.get("C").unwrap().value(), "x");
    assert_eq!(target.get("B").unwrap().value(), "2");
}

#[test]
fn test_sync_dry_run_changes_nothing() {
    let t = Test::new();
    t.store("source.json", &[("A", "1")]);
    t.store("target.json", &[]);

    let output = t.sync("source.json", "target.json", &["--dry-run"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("would sync A"));
    assert!(stdout.contains("would sync 1 secrets"));
    assert!(t.read_store("target.json").is_empty());
}

#[test]
fn test_sync_already_in_sync() {
    let t = Test::new();
    t.store("source.json", &[("A", "1")]);
    t.store("target.json", &[("A", "1")]);

    let output = t.sync("source.json", "target.json", &[]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("already in sync"));
}

#[test]
fn test_sync_unknown_name_warns_and_syncs_rest() {
    let t = Test::new();
    t.store("source.json", &[("A", "1")]);
    t.store("target.json", &[]);

    let output = t.sync(
        "source.json",
        "target.json",
        &["--name", "A", "--name", "GHOST"],
    );
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("GHOST not found in source, skipped"));
    assert!(stdout.contains("synced A"));
}

#[test]
fn test_sync_all_copies_identical_names_too() {
    let t = Test::new();
    t.store("source.json", &[("A", "1"), ("B", "2")]);
    t.store("target.json", &[("A", "1")]);

    let output = t.sync("source.json", "target.json", &["--all"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("synced A"));
    assert!(stdout.contains("synced B"));
    assert!(stdout.contains("2 synced"));
}

#[test]
fn test_sync_category_flag_filters_selection() {
    let t = Test::new();
    t.store("source.json", &[("A", "1"), ("B", "x")]);
    t.store("target.json", &[("A", "1"), ("B", "y")]);

    let output = t.sync(
        "source.json",
        "target.json",
        &["--category", "value-differs"],
    );
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("synced B"));
    assert!(!stdout.contains("synced A"));
}

#[test]
fn test_sync_rejects_zero_concurrency_as_usage_error() {
    let t = Test::new();
    t.store("source.json", &[("A", "1")]);
    t.store("target.json", &[]);

    let output = t.sync("source.json", "target.json", &["--concurrency", "0"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("must be at least 1"), "{}", stderr);
    assert!(!stderr.contains("panicked"), "{}", stderr);
}

#[test]
fn test_sync_into_new_target_file() {
    let t = Test::new();
    t.store("source.json", &[("A", "1")]);

    let output = t.sync("source.json", "fresh.json", &["--all"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "{}", stdout);
    assert_eq!(t.read_store("fresh.json").get("A").unwrap().value(), "1");
}

// --- list / get / put ---

#[test]
fn test_list_shows_names_not_values() {
    let t = Test::new();
    t.store("store.json", &[("API_KEY", "sk-secret-value")]);

    let output = t.cmd().args(["list", "store.json"]).output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("API_KEY"));
    assert!(!stdout.contains("sk-secret-value"));
}

#[test]
fn test_list_json_has_metadata_only() {
    let t = Test::new();
    t.store("store.json", &[("API_KEY", "sk-secret-value")]);

    let output = t
        .cmd()
        .args(["list", "store.json", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(parsed.get("API_KEY").is_some());
    assert!(!String::from_utf8_lossy(&output.stdout).contains("sk-secret-value"));
}

#[test]
fn test_get_prints_bare_value() {
    let t = Test::new();
    t.store("store.json", &[("KEY", "plain-value")]);

    t.cmd()
        .args(["get", "store.json", "KEY"])
        .assert()
        .success()
        .stdout("plain-value\n");
}

#[test]
fn test_get_missing_secret_fails() {
    let t = Test::new();
    t.store("store.json", &[]);

    t.cmd()
        .args(["get", "store.json", "NOPE"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("secret not found: NOPE"));
}

#[test]
fn test_put_then_get_round_trips() {
    let t = Test::new();
    t.store("store.json", &[]);

    t.cmd()
        .args(["put", "store.json", "KEY", "value-1"])
        .assert()
        .success();
    t.cmd()
        .args(["get", "store.json", "KEY"])
        .assert()
        .success()
        .stdout("value-1\n");
}

// --- store aliases ---

#[test]
fn test_store_aliases_resolve() {
    let t = Test::new();
    t.store("snapshots-prod.json", &[("A", "1")]);
    t.store("snapshots-staging.json", &[]);
    t.config(
        "[stores]\nprod = \"snapshots-prod.json\"\nstaging = \"snapshots-staging.json\"\n",
    );

    let output = t.sync("prod", "staging", &[]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "{}", stdout);
    assert_eq!(
        t.read_store("snapshots-staging.json")
            .get("A")
            .unwrap()
            .value(),
        "1"
    );
}

#[test]
fn test_unknown_alias_fails_with_hint() {
    let t = Test::new();
    t.store("source.json", &[]);

    t.cmd()
        .args(["diff", "source.json", "nosuchstore"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown store: nosuchstore"))
        .stdout(predicate::str::contains(".vaultdiff.toml"));
}

// --- completions ---

#[test]
fn test_completions_generate() {
    let t = Test::new();

    t.cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vaultdiff"));
}
