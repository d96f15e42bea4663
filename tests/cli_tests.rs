//! Integration tests for the neokruskal CLI
//!
//! These tests run the neokruskal binary against graph documents written to
//! temporary directories.

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

const TRIANGLE: &str = r#"{
    "vertices": [[0, 0], [3, 0], [3, 4]],
    "edges": [
        { "first": 0, "second": 1 },
        { "first": 1, "second": 2 },
        { "first": 0, "second": 2 }
    ]
}"#;

/// Get a Command for neokruskal isolated from any user configuration
fn neokruskal(config_dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("neokruskal");
    cmd.env("NEOGRAPH_CONFIG_DIR", config_dir)
        .env_remove("NEOGRAPH_CONFIG")
        .env_remove("NEOGRAPH_LOG");
    cmd
}

fn write_graph(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn stdout_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    let dir = tempdir().unwrap();
    neokruskal(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: neokruskal"))
        .stdout(predicate::str::contains("solve"))
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("bench"));
}

#[test]
fn test_version_flag() {
    let dir = tempdir().unwrap();
    neokruskal(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("neokruskal"));
}

#[test]
fn test_no_command_prints_banner() {
    let dir = tempdir().unwrap();
    neokruskal(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("neokruskal --help"));
}

// ============================================================================
// solve
// ============================================================================

#[test]
fn test_solve_triangle_human() {
    let dir = tempdir().unwrap();
    let graph = write_graph(&dir, "triangle.json", TRIANGLE);

    neokruskal(dir.path())
        .arg("solve")
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("Strategy: kruskal"))
        .stdout(predicate::str::contains("0,0 - 3,0  3.000"))
        .stdout(predicate::str::contains("Total weight: 7.000"));
}

#[test]
fn test_solve_every_strategy_json() {
    let dir = tempdir().unwrap();
    let graph = write_graph(&dir, "triangle.json", TRIANGLE);

    for strategy in [
        "prim",
        "prim-matrix",
        "kruskal",
        "bucketed",
        "bucketed-weighted",
        "euclidean-kruskal",
        "euclidean-bucketed",
        "euclidean-bucketed-weighted",
    ] {
        let json = stdout_json(
            neokruskal(dir.path())
                .args(["--format", "json", "solve", "--strategy", strategy, "--bucket", "3"])
                .arg(&graph),
        );
        assert_eq!(json["strategy"], strategy);
        assert_eq!(json["total_weight"], 7.0);
        assert_eq!(json["solution"].as_array().unwrap().len(), 2);
        assert_eq!(json["vertices"], 3);
    }
}

#[test]
fn test_solve_json_edge_shape() {
    let dir = tempdir().unwrap();
    let graph = write_graph(&dir, "triangle.json", TRIANGLE);

    let json = stdout_json(
        neokruskal(dir.path())
            .args(["--format", "json", "solve"])
            .arg(&graph),
    );
    let first = &json["solution"][0];
    assert_eq!(first["first"], serde_json::json!([0, 0]));
    assert_eq!(first["second"], serde_json::json!([3, 0]));
    assert_eq!(first["weight"], 3.0);
    assert!(json.get("bucket").is_none());
}

#[test]
fn test_solve_records() {
    let dir = tempdir().unwrap();
    let graph = write_graph(&dir, "triangle.json", TRIANGLE);

    neokruskal(dir.path())
        .args(["--format", "records", "solve", "-s", "bucketed", "-b", "2"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H neokruskal=1 records=1 mode=solve strategy=bucketed bucket=2",
        ))
        .stdout(predicate::str::contains("weight=7.000000"))
        .stdout(predicate::str::contains("E 3,0 3,4 4.000000"));
}

#[test]
fn test_solve_quiet_prints_only_total() {
    let dir = tempdir().unwrap();
    let graph = write_graph(&dir, "triangle.json", TRIANGLE);

    neokruskal(dir.path())
        .args(["--quiet", "solve"])
        .arg(&graph)
        .assert()
        .success()
        .stdout("Total weight: 7.000\n");
}

#[test]
fn test_solve_toml_document() {
    let dir = tempdir().unwrap();
    let graph = write_graph(
        &dir,
        "line.toml",
        "vertices = [[0, 0], [10, 0], [20, 0]]\n\n[[edges]]\nfirst = 0\nsecond = 1\nweight = 2.5\n\n[[edges]]\nfirst = 1\nsecond = 2\n",
    );

    let json = stdout_json(
        neokruskal(dir.path())
            .args(["--format", "json", "solve"])
            .arg(&graph),
    );
    assert_eq!(json["total_weight"], 12.5);
}

#[test]
fn test_solve_missing_file_fails() {
    let dir = tempdir().unwrap();
    neokruskal(dir.path())
        .args(["solve", "does-not-exist.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_solve_bad_edge_index_is_data_error() {
    let dir = tempdir().unwrap();
    let graph = write_graph(
        &dir,
        "bad.json",
        r#"{"vertices": [[0, 0]], "edges": [{"first": 0, "second": 5}]}"#,
    );

    let output = neokruskal(dir.path())
        .args(["--format", "json", "solve"])
        .arg(&graph)
        .assert()
        .code(3)
        .get_output()
        .stderr
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["error"]["type"], "invalid_document");
    assert_eq!(json["error"]["code"], 3);
}

#[test]
fn test_solve_malformed_json_is_data_error() {
    let dir = tempdir().unwrap();
    let graph = write_graph(&dir, "broken.json", "{ not json");
    neokruskal(dir.path())
        .arg("solve")
        .arg(&graph)
        .assert()
        .code(3);
}

#[test]
fn test_unknown_strategy_is_usage_error() {
    let dir = tempdir().unwrap();
    let graph = write_graph(&dir, "triangle.json", TRIANGLE);
    neokruskal(dir.path())
        .args(["solve", "--strategy", "boruvka"])
        .arg(&graph)
        .assert()
        .code(2);
}

#[test]
fn test_zero_bucket_json_envelope() {
    let dir = tempdir().unwrap();
    let graph = write_graph(&dir, "triangle.json", TRIANGLE);
    let output = neokruskal(dir.path())
        .args(["--format", "json", "solve", "--bucket", "0"])
        .arg(&graph)
        .assert()
        .code(2)
        .get_output()
        .stderr
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
}

#[test]
fn test_inline_format_json_envelope_on_bad_argument() {
    let dir = tempdir().unwrap();
    let graph = write_graph(&dir, "triangle.json", TRIANGLE);
    let output = neokruskal(dir.path())
        .args(["--format=JSON", "solve", "--strategy", "boruvka"])
        .arg(&graph)
        .assert()
        .code(2)
        .get_output()
        .stderr
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
    assert_eq!(json["error"]["code"], 2);
}

#[test]
fn test_huge_bucket_count_solves() {
    let dir = tempdir().unwrap();
    let graph = write_graph(&dir, "triangle.json", TRIANGLE);
    for strategy in ["bucketed", "euclidean-bucketed-weighted"] {
        let json = stdout_json(
            neokruskal(dir.path())
                .args(["--format", "json", "solve", "--strategy", strategy])
                .args(["--bucket", "18446744073709551615"])
                .arg(&graph),
        );
        assert_eq!(json["total_weight"], 7.0);
    }
}

#[test]
fn test_single_vertex_total_is_positive_zero() {
    let dir = tempdir().unwrap();
    let graph = write_graph(&dir, "one.json", r#"{"vertices": [[5, 5]]}"#);

    let output = neokruskal(dir.path())
        .args(["--format", "json", "solve"])
        .arg(&graph)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output).unwrap();
    assert!(!text.contains("-0.0"), "{}", text);

    neokruskal(dir.path())
        .arg("solve")
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total weight: 0.000"))
        .stdout(predicate::str::contains("-0.000").not());
}

#[test]
fn test_repeated_format_json_envelope() {
    let dir = tempdir().unwrap();
    let graph = write_graph(&dir, "triangle.json", TRIANGLE);
    let output = neokruskal(dir.path())
        .args(["--format", "json", "--format", "json", "solve"])
        .arg(&graph)
        .assert()
        .code(2)
        .get_output()
        .stderr
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
}

// ============================================================================
// configuration
// ============================================================================

#[test]
fn test_config_dir_supplies_default_strategy() {
    let dir = tempdir().unwrap();
    let graph = write_graph(&dir, "triangle.json", TRIANGLE);
    fs::write(
        dir.path().join("config.toml"),
        "strategy = \"euclidean-bucketed\"\nbucket = 4\n",
    )
    .unwrap();

    let json = stdout_json(
        neokruskal(dir.path())
            .args(["--format", "json", "solve"])
            .arg(&graph),
    );
    assert_eq!(json["strategy"], "euclidean-bucketed");
    assert_eq!(json["bucket"], 4);

    // flags override the configured values
    let json = stdout_json(
        neokruskal(dir.path())
            .args(["--format", "json", "solve", "--strategy", "prim"])
            .arg(&graph),
    );
    assert_eq!(json["strategy"], "prim");
}

#[test]
fn test_explicit_config_flag() {
    let dir = tempdir().unwrap();
    let graph = write_graph(&dir, "triangle.json", TRIANGLE);
    let config = dir.path().join("custom.toml");
    let content = toml::to_string(&toml::Table::from_iter([(
        "strategy".to_string(),
        toml::Value::String("bucketed-weighted".to_string()),
    )]))
    .unwrap();
    fs::write(&config, content).unwrap();

    let json = stdout_json(
        neokruskal(dir.path())
            .arg("--config")
            .arg(&config)
            .args(["--format", "json", "solve"])
            .arg(&graph),
    );
    assert_eq!(json["strategy"], "bucketed-weighted");
}

#[test]
fn test_invalid_config_is_reported() {
    let dir = tempdir().unwrap();
    let graph = write_graph(&dir, "triangle.json", TRIANGLE);
    fs::write(dir.path().join("config.toml"), "bucket = 0\n").unwrap();

    neokruskal(dir.path())
        .arg("solve")
        .arg(&graph)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("bucket count must be at least 1"));
}

// ============================================================================
// generate
// ============================================================================

#[test]
fn test_generate_is_reproducible() {
    let dir = tempdir().unwrap();
    let run = || {
        neokruskal(dir.path())
            .args(["generate", "--count", "12", "--seed", "5", "--width", "50"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };
    let first = run();
    assert_eq!(first, run());

    let json: serde_json::Value = serde_json::from_slice(&first).unwrap();
    let vertices = json["vertices"].as_array().unwrap();
    assert_eq!(vertices.len(), 12);
    assert!(vertices
        .iter()
        .all(|v| (0..50).contains(&v[0].as_i64().unwrap())));
    assert!(json.get("edges").is_none());
}

#[test]
fn test_generate_then_solve() {
    let dir = tempdir().unwrap();
    let output = neokruskal(dir.path())
        .args(["generate", "-n", "20", "--seed", "3", "--complete"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let document: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(document["edges"].as_array().unwrap().len(), 190);

    let graph = dir.path().join("random.json");
    fs::write(&graph, &output).unwrap();

    let kruskal = stdout_json(
        neokruskal(dir.path())
            .args(["--format", "json", "solve", "-s", "kruskal"])
            .arg(&graph),
    );
    let prim = stdout_json(
        neokruskal(dir.path())
            .args(["--format", "json", "solve", "-s", "prim-matrix"])
            .arg(&graph),
    );
    let a = kruskal["total_weight"].as_f64().unwrap();
    let b = prim["total_weight"].as_f64().unwrap();
    assert!((a - b).abs() < 1e-6);
}

#[test]
fn test_generate_rejects_zero_width() {
    let dir = tempdir().unwrap();
    neokruskal(dir.path())
        .args(["generate", "--count", "3", "--width", "0"])
        .assert()
        .code(2);
}

// ============================================================================
// bench
// ============================================================================

#[test]
fn test_bench_json() {
    let dir = tempdir().unwrap();
    let graph = write_graph(&dir, "triangle.json", TRIANGLE);

    let json = stdout_json(
        neokruskal(dir.path())
            .args(["--format", "json", "bench", "--iterations", "4", "-s", "euclidean-bucketed-weighted"])
            .arg(&graph),
    );
    assert_eq!(json["iterations"], 4);
    assert_eq!(json["strategy"], "euclidean-bucketed-weighted");
    assert_eq!(json["solution_weight"], 7.0);
    assert!(json["mean_micros"].as_f64().unwrap() >= 0.0);
}

#[test]
fn test_bench_human_and_records() {
    let dir = tempdir().unwrap();
    let graph = write_graph(&dir, "triangle.json", TRIANGLE);

    neokruskal(dir.path())
        .args(["bench", "-i", "2"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("kruskal: mean"))
        .stdout(predicate::str::contains("over 2 runs"));

    neokruskal(dir.path())
        .args(["--format", "records", "bench", "-i", "2"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=bench strategy=kruskal iterations=2"));
}

#[test]
fn test_bench_zero_iterations_rejected() {
    let dir = tempdir().unwrap();
    let graph = write_graph(&dir, "triangle.json", TRIANGLE);
    neokruskal(dir.path())
        .args(["bench", "--iterations", "0"])
        .arg(&graph)
        .assert()
        .code(2);
}

// ============================================================================
// logging
// ============================================================================

#[test]
fn test_verbose_logs_to_stderr() {
    let dir = tempdir().unwrap();
    let graph = write_graph(&dir, "triangle.json", TRIANGLE);
    neokruskal(dir.path())
        .args(["--verbose", "solve"])
        .arg(&graph)
        .assert()
        .success()
        .stderr(predicate::str::contains("solved"));
}

#[test]
fn test_log_json_emits_json_lines() {
    let dir = tempdir().unwrap();
    let graph = write_graph(&dir, "triangle.json", TRIANGLE);
    let output = neokruskal(dir.path())
        .args(["--log-json", "--log-level", "debug", "solve"])
        .arg(&graph)
        .assert()
        .success()
        .get_output()
        .stderr
        .clone();
    let stderr = String::from_utf8_lossy(&output);
    let first = stderr.lines().next().unwrap();
    let line: serde_json::Value = serde_json::from_str(first).unwrap();
    assert!(line.get("level").is_some());
}
