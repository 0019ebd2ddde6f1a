//! End-to-end tests for the tally CLI.
//!
//! Tests invoke the `tally` binary as a subprocess against a temporary data
//! directory and verify JSON output.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn tally_in(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tally"));
    cmd.current_dir(dir)
        .arg("--data-dir")
        .arg(dir.join("data"))
        .env_remove("TALLY_DATA_DIR")
        .env_remove("TALLY_STORAGE_KEY")
        .env_remove("TALLY_EXPORT_PREFIX")
        .env_remove("TALLY_LOG")
        .env_remove("RUST_LOG");
    cmd
}

fn run(dir: &Path, args: &[&str]) -> Output {
    tally_in(dir).args(args).output().unwrap()
}

fn run_ok(dir: &Path, args: &[&str]) -> String {
    let output = run(dir, args);
    assert!(
        output.status.success(),
        "tally {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

fn run_json(dir: &Path, args: &[&str]) -> serde_json::Value {
    serde_json::from_str(&run_ok(dir, args)).unwrap()
}

fn list(dir: &Path) -> Vec<serde_json::Value> {
    let listing = run_json(dir, &["list", "--format", "json"]);
    listing["counters"].as_array().unwrap().clone()
}

// === Init ===

#[test]
fn e2e_init_writes_config() {
    let dir = TempDir::new().unwrap();
    let stdout = run_ok(dir.path(), &["init"]);
    assert!(stdout.contains("Initialized tally"));

    let config = std::fs::read_to_string(dir.path().join("data").join("config.toml")).unwrap();
    assert!(config.contains("storage_key = \"mineral_counters\""));

    let again = run_ok(dir.path(), &["init"]);
    assert!(again.contains("Already initialized"));
}

#[test]
fn e2e_no_command_prints_banner() {
    let dir = TempDir::new().unwrap();
    let stdout = run_ok(dir.path(), &[]);
    assert!(stdout.contains("tally v"));
}

// === Add / list ===

#[test]
fn e2e_add_assigns_palette_colors_in_order() {
    let dir = TempDir::new().unwrap();
    let first = run_json(dir.path(), &["add", "Cuarzo"]);
    let second = run_json(dir.path(), &["add", "Biotita"]);

    assert_eq!(first["mineralName"], "Cuarzo");
    assert_eq!(first["value"], 0);
    assert_eq!(first["increment"], 1);
    assert_eq!(first["color"], "#3b82f6");
    assert_eq!(second["color"], "#ef4444");
    assert!(first.get("maxValue").is_none() || first["maxValue"].is_null());
}

#[test]
fn e2e_add_resolves_descriptors_from_catalog() {
    let dir = TempDir::new().unwrap();
    let counter = run_json(
        dir.path(),
        &[
            "add",
            "Cuarzo",
            "--grain-size",
            "arena media",
            "--roundness",
            "Subredondeado",
            "--sorting",
            "Bien seleccionado",
        ],
    );

    assert_eq!(counter["grainSize"]["category"], "sedimentarias");
    assert_eq!(counter["grainSize"]["term"], "Arena media");
    assert_eq!(counter["grainSize"]["description"], "0.25 - 0.5 mm");
    assert_eq!(counter["roundness"]["term"], "Subredondeado");
    assert_eq!(counter["sorting"]["description"], "σ 0.35 - 0.50 φ");
}

#[test]
fn e2e_add_warns_on_uncatalogued_label() {
    let dir = TempDir::new().unwrap();
    let unknown = run(dir.path(), &["add", "Kryptonita"]);
    assert!(unknown.status.success());
    let stderr = String::from_utf8_lossy(&unknown.stderr);
    assert!(stderr.contains("not in the mineral or texture catalog"));

    for label in ["cuarzo", "Vesicular"] {
        let known = run(dir.path(), &["add", label]);
        assert!(known.status.success());
        assert!(!String::from_utf8_lossy(&known.stderr).contains("catalog"));
    }
    assert_eq!(list(dir.path()).len(), 3);
}

#[test]
fn e2e_add_rejects_unknown_descriptor() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["add", "Cuarzo", "--roundness", "Cuadrado"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown roundness"));
    assert!(list(dir.path()).is_empty());
}

#[test]
fn e2e_list_formats() {
    let dir = TempDir::new().unwrap();
    assert!(run_ok(dir.path(), &["list"]).contains("(no counters)"));

    run_ok(dir.path(), &["add", "Olivino"]);
    run_ok(dir.path(), &["inc", "1"]);

    let table = run_ok(dir.path(), &["list"]);
    assert!(table.contains("Olivino"));
    assert!(table.contains("total: 1"));

    let markdown = run_ok(dir.path(), &["ls", "--format", "markdown"]);
    assert!(markdown.contains("| 1 | Olivino | 1 | 1 | - |"));
}

// === Tally ===

#[test]
fn e2e_counting_session() {
    let dir = TempDir::new().unwrap();
    run_ok(dir.path(), &["add", "Cuarzo"]);
    run_ok(dir.path(), &["add", "Feldespato"]);

    run_ok(dir.path(), &["set", "1", "--increment", "2"]);
    run_ok(dir.path(), &["inc", "1"]);
    run_ok(dir.path(), &["inc", "1"]);
    run_ok(dir.path(), &["inc", "2"]);
    run_ok(dir.path(), &["inc", "2"]);
    run_ok(dir.path(), &["inc", "2"]);
    let after_dec = run_json(dir.path(), &["dec", "2"]);
    assert_eq!(after_dec["value"], 2);

    let total = run_json(dir.path(), &["total"]);
    assert_eq!(total["counters"], 2);
    assert_eq!(total["total"], 6);
}

#[test]
fn e2e_max_value_caps_increment() {
    let dir = TempDir::new().unwrap();
    run_ok(dir.path(), &["add", "Granate"]);
    run_ok(dir.path(), &["set", "1", "--increment", "3", "--max", "5"]);

    assert_eq!(run_json(dir.path(), &["inc", "1"])["value"], 3);
    // 3 + 3 would pass the bound, so the value stays
    assert_eq!(run_json(dir.path(), &["inc", "1"])["value"], 3);

    let cleared = run_json(dir.path(), &["set", "1", "--max", ""]);
    assert!(cleared.get("maxValue").is_none() || cleared["maxValue"].is_null());
    assert_eq!(run_json(dir.path(), &["inc", "1"])["value"], 6);
}

#[test]
fn e2e_decrement_stops_at_zero() {
    let dir = TempDir::new().unwrap();
    run_ok(dir.path(), &["add", "Calcita"]);
    assert_eq!(run_json(dir.path(), &["dec", "1"])["value"], 0);
}

#[test]
fn e2e_set_increment_text_is_lenient() {
    let dir = TempDir::new().unwrap();
    run_ok(dir.path(), &["add", "Calcita"]);
    assert_eq!(
        run_json(dir.path(), &["set", "1", "--increment", "abc"])["increment"],
        1
    );
    assert_eq!(
        run_json(dir.path(), &["set", "1", "--increment", "0"])["increment"],
        1
    );
}

#[test]
fn e2e_set_and_clear_descriptor() {
    let dir = TempDir::new().unwrap();
    run_ok(dir.path(), &["add", "Cuarzo"]);

    let set = run_json(dir.path(), &["set", "1", "--packing", "cerrado"]);
    assert_eq!(set["packing"]["term"], "Cerrado");

    let cleared = run_json(dir.path(), &["set", "1", "--clear-packing"]);
    assert!(cleared.get("packing").is_none() || cleared["packing"].is_null());
}

#[test]
fn e2e_set_without_changes_fails() {
    let dir = TempDir::new().unwrap();
    run_ok(dir.path(), &["add", "Cuarzo"]);
    let output = run(dir.path(), &["set", "1"]);
    assert!(!output.status.success());
}

#[test]
fn e2e_target_by_id() {
    let dir = TempDir::new().unwrap();
    run_ok(dir.path(), &["add", "Cuarzo"]);
    let added = run_json(dir.path(), &["add", "Biotita"]);
    let id = added["id"].as_str().unwrap();

    let counter = run_json(dir.path(), &["inc", id]);
    assert_eq!(counter["mineralName"], "Biotita");
    assert_eq!(counter["value"], 1);
}

#[test]
fn e2e_unknown_target_fails() {
    let dir = TempDir::new().unwrap();
    run_ok(dir.path(), &["add", "Cuarzo"]);

    for target in ["0", "2", "not-an-id", "3f1c0a1e-1111-4222-8333-944444444444"] {
        let output = run(dir.path(), &["inc", target]);
        assert!(!output.status.success(), "target {target} should fail");
    }
}

#[test]
fn e2e_reset_and_reset_all() {
    let dir = TempDir::new().unwrap();
    run_ok(dir.path(), &["add", "Cuarzo"]);
    run_ok(dir.path(), &["add", "Biotita"]);
    run_ok(dir.path(), &["inc", "1"]);
    run_ok(dir.path(), &["inc", "2"]);
    run_ok(dir.path(), &["inc", "2"]);

    assert_eq!(run_json(dir.path(), &["reset", "2"])["value"], 0);
    assert_eq!(run_json(dir.path(), &["total"])["total"], 1);

    run_ok(dir.path(), &["reset-all"]);
    assert_eq!(run_json(dir.path(), &["total"])["total"], 0);
    assert_eq!(list(dir.path()).len(), 2);
}

// === Remove / reorder ===

#[test]
fn e2e_rm_and_clear() {
    let dir = TempDir::new().unwrap();
    let first = run_json(dir.path(), &["add", "Cuarzo"]);
    run_ok(dir.path(), &["add", "Biotita"]);

    let deleted = run_json(dir.path(), &["rm", "1"]);
    assert_eq!(deleted["deleted"], first["id"]);

    let remaining = list(dir.path());
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0]["mineralName"], "Biotita");

    assert!(run_ok(dir.path(), &["clear"]).contains("Deleted 1 counters"));
    assert!(list(dir.path()).is_empty());
}

#[test]
fn e2e_mv_reorders() {
    let dir = TempDir::new().unwrap();
    for label in ["A", "B", "C"] {
        run_ok(dir.path(), &["add", label]);
    }
    run_ok(dir.path(), &["mv", "1", "3"]);

    let labels: Vec<String> = list(dir.path())
        .iter()
        .map(|c| c["mineralName"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(labels, ["B", "C", "A"]);

    assert!(!run(dir.path(), &["mv", "1", "4"]).status.success());
}

// === Export / import ===

#[test]
fn e2e_export_to_default_file() {
    let dir = TempDir::new().unwrap();
    run_ok(dir.path(), &["add", "Cuarzo"]);
    run_ok(dir.path(), &["inc", "1"]);

    let result = run_json(dir.path(), &["export"]);
    assert_eq!(result["exported"], 1);
    let path = result["path"].as_str().unwrap();
    assert!(path.starts_with("mineral-counters-"));
    assert!(path.ends_with(".json"));

    let exported: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join(path)).unwrap()).unwrap();
    assert!(exported["exportDate"].is_string());
    assert_eq!(exported["counters"][0]["mineralName"], "Cuarzo");
    assert_eq!(exported["counters"][0]["value"], 1);
    assert!(exported["counters"][0].get("id").is_none());
}

#[test]
fn e2e_export_then_import_appends() {
    let dir = TempDir::new().unwrap();
    run_ok(dir.path(), &["add", "Cuarzo", "--contacts", "suturado"]);
    run_ok(dir.path(), &["inc", "1"]);
    run_ok(dir.path(), &["export", "--output", "sample.json"]);

    let result = run_json(dir.path(), &["import", "sample.json"]);
    assert_eq!(result["imported"], 1);
    assert_eq!(result["counters"], 2);

    let counters = list(dir.path());
    assert_eq!(counters[1]["mineralName"], "Cuarzo");
    assert_eq!(counters[1]["value"], 1);
    assert_eq!(counters[1]["contacts"]["term"], "Suturado");
    assert_ne!(counters[0]["id"], counters[1]["id"]);
}

#[test]
fn e2e_import_from_stdin() {
    let dir = TempDir::new().unwrap();
    let mut child = tally_in(dir.path())
        .args(["import", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(br##"{"counters":[{"mineralName":"Pirita","value":3,"color":"#eab308"}]}"##)
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let counters = list(dir.path());
    assert_eq!(counters.len(), 1);
    assert_eq!(counters[0]["mineralName"], "Pirita");
    assert_eq!(counters[0]["value"], 3);
    assert_eq!(counters[0]["increment"], 1);
}

#[test]
fn e2e_import_rejects_malformed_file() {
    let dir = TempDir::new().unwrap();
    run_ok(dir.path(), &["add", "Cuarzo"]);
    std::fs::write(dir.path().join("bad.json"), "not json").unwrap();
    std::fs::write(dir.path().join("empty.json"), r#"{"exportDate":"x"}"#).unwrap();

    for file in ["bad.json", "empty.json", "missing.json"] {
        let output = run(dir.path(), &["import", file]);
        assert!(!output.status.success(), "{file} should fail");
    }
    assert_eq!(list(dir.path()).len(), 1);
}

// === Catalog ===

#[test]
fn e2e_catalog_minerals_filters_by_query() {
    let dir = TempDir::new().unwrap();
    let groups = run_json(dir.path(), &["catalog", "minerals", "cuarzo"]);
    let groups = groups.as_array().unwrap();
    assert!(!groups.is_empty());
    assert!(groups.iter().any(|g| g["minerals"]
        .as_array()
        .unwrap()
        .iter()
        .any(|m| m["name"] == "Cuarzo")));
}

#[test]
fn e2e_catalog_descriptor_scale() {
    let dir = TempDir::new().unwrap();
    let roundness = run_json(dir.path(), &["catalog", "roundness"]);
    assert_eq!(roundness.as_array().unwrap().len(), 6);

    let grain = run_json(dir.path(), &["catalog", "grain-size", "arena"]);
    assert_eq!(grain[0]["category"], "sedimentarias");
    assert_eq!(grain[0]["entries"].as_array().unwrap().len(), 5);
}

#[test]
fn e2e_catalog_does_not_create_data_dir() {
    let dir = TempDir::new().unwrap();
    run_ok(dir.path(), &["catalog", "packing"]);
    assert!(!dir.path().join("data").exists());
}

// === Config ===

#[test]
fn e2e_storage_key_from_env() {
    let dir = TempDir::new().unwrap();
    tally_in(dir.path())
        .env("TALLY_STORAGE_KEY", "thin_section_2")
        .args(["add", "Cuarzo"])
        .output()
        .unwrap();

    assert!(dir.path().join("data").join("thin_section_2.json").exists());
    assert!(list(dir.path()).is_empty());
}

#[test]
fn e2e_completions() {
    let dir = TempDir::new().unwrap();
    let script = run_ok(dir.path(), &["completions", "bash"]);
    assert!(script.contains("tally"));
}
