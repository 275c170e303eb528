//! End-to-end runs of the econlab binary.

use std::path::PathBuf;
use std::process::{Command, Output};

use serde_json::Value;

struct Workspace {
    dir: PathBuf,
}

impl Workspace {
    fn new(name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("econlab-cli-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        Self { dir }
    }

    fn write(&self, file: &str, contents: &str) -> &Self {
        std::fs::write(self.dir.join(file), contents).unwrap();
        self
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_econlab"))
            .args(args)
            .current_dir(&self.dir)
            .env_remove("RUST_LOG")
            .output()
            .unwrap()
    }

    fn json(&self, args: &[&str]) -> Value {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "econlab {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).unwrap()
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.dir);
    }
}

#[test]
fn test_appraise() {
    let ws = Workspace::new("appraise");
    ws.write("flows.json", r#"{"cashFlows": [-10000, 3000, 4000, 5000, 2000]}"#);
    let out = ws.json(&["appraise", "--input", "flows.json"]);
    assert_eq!(out["npv"], 1155.66);
    assert_eq!(out["score"], 60);
    assert_eq!(out["feasible"], true);
}

#[test]
fn test_auction_compact_output() {
    let ws = Workspace::new("auction");
    ws.write(
        "book.json",
        r#"{
            "sellers": [{"id": "s1", "price": 10, "quantity": 5}],
            "buyers": [{"id": "b1", "price": 20, "quantity": 5}]
        }"#,
    );
    let output = ws.run(&["--compact", "auction", "-i", "book.json"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim_end().lines().count(), 1);

    let out: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(out["clearingPrice"], 15.0);
    assert_eq!(out["clearingQuantity"], 5.0);
}

#[test]
fn test_function_points() {
    let ws = Workspace::new("function-points");
    ws.write(
        "counts.json",
        r#"{
            "counts": {
                "ilf": {"low": 1, "medium": 1},
                "eif": {"low": 1},
                "ei": {"low": 2, "medium": 1},
                "eo": {"low": 1, "medium": 1},
                "eq": {"low": 1}
            },
            "gscTotal": 70
        }"#,
    );
    let out = ws.json(&["function-points", "-i", "counts.json"]);
    assert_eq!(out["ufp"], 44.0);
    assert_eq!(out["fp"], 59.4);
    assert_eq!(out["details"].as_array().unwrap().len(), 5);

    let aliased = ws.json(&["ifpug", "-i", "counts.json"]);
    assert_eq!(aliased, out);
}

#[test]
fn test_config_file_supplies_defaults() {
    let ws = Workspace::new("config");
    ws.write("econlab.toml", "discount_rate = 0.0\n")
        .write("flows.json", r#"{"cashFlows": [-100, 60, 60]}"#);
    let out = ws.json(&["appraise", "--input", "flows.json"]);
    assert_eq!(out["rate"], 0.0);
    assert_eq!(out["npv"], 20.0);

    let check = ws.json(&["check"]);
    assert_eq!(check["config"]["discount_rate"], 0.0);
    assert_eq!(check["configFile"], "econlab.toml");
}

#[test]
fn test_invalid_config_is_rejected() {
    let ws = Workspace::new("badconfig");
    ws.write("econlab.toml", "hurwicz_alpha = 2.0\n");
    let output = ws.run(&["check"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("hurwicz_alpha"));
}

#[test]
fn test_missing_input_fails() {
    let ws = Workspace::new("missing");
    let output = ws.run(&["breakeven", "--input", "absent.json"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_seeded_simulation() {
    let ws = Workspace::new("simulate");
    ws.write(
        "sim.json",
        r#"{
            "model": "project-npv",
            "variables": [
                {"name": "income", "kind": "triangular", "params": {"min": 400, "mode": 500, "max": 700}}
            ],
            "constants": {"investment": 1000, "cost": 100, "years": 5, "rate_pct": 10},
            "iterations": 500,
            "seed": 42
        }"#,
    );
    let first = ws.json(&["simulate", "-i", "sim.json"]);
    let again = ws.json(&["simulate", "-i", "sim.json"]);
    assert_eq!(first, again);
    assert_eq!(first["seed"], 42);
    assert_eq!(first["summary"]["count"], 500);
    assert_eq!(first["summary"]["probabilityPositive"], 100.0);
}
