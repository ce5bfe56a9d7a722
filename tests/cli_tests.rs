//! Integration tests for the lexis CLI
//!
//! These tests run the lexis binary from a scratch directory so that no
//! `lexis.toml` or `LEXIS_*` variable from the host leaks in.

use std::fs;
use std::path::Path;

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

/// Get a Command for lexis running in `dir`
fn lexis(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("lexis");
    cmd.current_dir(dir)
        .env_remove("LEXIS_CONFIG")
        .env_remove("LEXIS_LANGUAGE")
        .env_remove("LEXIS_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Three small Hungarian documents; the first two share their stems
fn corpus() -> TempDir {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "A házak és a kertek").unwrap();
    fs::write(dir.path().join("b.txt"), "házakban").unwrap();
    fs::write(dir.path().join("c.txt"), "autó").unwrap();
    dir
}

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    let dir = tempdir().unwrap();
    lexis(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: lexis"))
        .stdout(predicate::str::contains("stem"))
        .stdout(predicate::str::contains("vectorize"))
        .stdout(predicate::str::contains("similar"));
}

#[test]
fn test_version_flag() {
    let dir = tempdir().unwrap();
    lexis(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("lexis"));
}

#[test]
fn test_no_command_prints_banner() {
    let dir = tempdir().unwrap();
    lexis(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("lexis --help"));
}

// ============================================================================
// stem
// ============================================================================

#[test]
fn test_stem_hungarian_by_default() {
    let dir = tempdir().unwrap();
    lexis(dir.path())
        .args(["stem", "házak", "kézzel", "szépség"])
        .assert()
        .success()
        .stdout(predicate::str::contains("házak -> ház"))
        .stdout(predicate::str::contains("kézzel -> kéz"))
        .stdout(predicate::str::contains("szépség -> szépség"));
}

#[test]
fn test_stem_reads_stdin() {
    let dir = tempdir().unwrap();
    lexis(dir.path())
        .arg("stem")
        .write_stdin("házak  kertek\nvárosokban\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("házak -> ház"))
        .stdout(predicate::str::contains("kertek -> kert"))
        .stdout(predicate::str::contains("városokban -> város"));
}

#[test]
fn test_stem_json_output() {
    let dir = tempdir().unwrap();
    let output = lexis(dir.path())
        .args(["--format", "json", "stem", "házak", "szépség"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["language"], "hungarian");
    let stems = json["stems"].as_array().unwrap();
    assert_eq!(stems.len(), 2);
    assert_eq!(stems[0]["word"], "házak");
    assert_eq!(stems[0]["stem"], "ház");
    assert_eq!(stems[0]["changed"], true);
    assert_eq!(stems[1]["stem"], "szépség");
    assert_eq!(stems[1]["changed"], false);
}

#[test]
fn test_stem_library_language() {
    let dir = tempdir().unwrap();
    lexis(dir.path())
        .args(["--language", "english", "stem", "--lowercase", "Running"])
        .assert()
        .success()
        .stdout(predicate::str::contains("running -> run"));
}

#[test]
fn test_language_from_env() {
    let dir = tempdir().unwrap();
    lexis(dir.path())
        .env("LEXIS_LANGUAGE", "english")
        .args(["stem", "cats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cats -> cat"));
}

#[test]
fn test_identity_language_leaves_words() {
    let dir = tempdir().unwrap();
    lexis(dir.path())
        .args(["-l", "estonian", "stem", "raamatud"])
        .assert()
        .success()
        .stdout(predicate::str::contains("raamatud -> raamatud"));
}

// ============================================================================
// Exit codes
// ============================================================================

#[test]
fn test_unknown_language_exit_code_2() {
    let dir = tempdir().unwrap();
    lexis(dir.path())
        .args(["--language", "klingon", "stem", "word"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown language: klingon"));
}

#[test]
fn test_unknown_language_json_error() {
    let dir = tempdir().unwrap();
    lexis(dir.path())
        .args(["--format", "json", "--language", "klingon", "stem", "word"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"unknown_language\""));
}

#[test]
fn test_unknown_format_exit_code_2() {
    let dir = tempdir().unwrap();
    lexis(dir.path())
        .args(["--format", "xml", "languages"])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_argument_json_usage_error() {
    let dir = tempdir().unwrap();
    lexis(dir.path())
        .args(["--format", "json", "stem", "--bogus-flag"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

#[test]
fn test_missing_input_file_exit_code_1() {
    let dir = tempdir().unwrap();
    lexis(dir.path())
        .args(["vectorize", "missing.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read missing.txt"));
}

#[test]
fn test_quiet_suppresses_error_message() {
    let dir = tempdir().unwrap();
    lexis(dir.path())
        .args(["--quiet", "vectorize", "missing.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::is_empty());
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_discovered_in_working_directory() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("lexis.toml"), "language = \"english\"\n").unwrap();
    lexis(dir.path())
        .args(["stem", "cats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cats -> cat"));
}

#[test]
fn test_language_flag_overrides_config() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("lexis.toml"), "language = \"english\"\n").unwrap();
    lexis(dir.path())
        .args(["--language", "hungarian", "stem", "házak"])
        .assert()
        .success()
        .stdout(predicate::str::contains("házak -> ház"));
}

#[test]
fn test_explicit_config_path() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("custom.toml");
    fs::write(&config, "language = \"english\"\n").unwrap();
    lexis(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["stem", "cats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cats -> cat"));
}

#[test]
fn test_invalid_config_exit_code_3() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("lexis.toml"), "min_token_len = 0\n").unwrap();
    lexis(dir.path())
        .args(["stem", "házak"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("min_token_len"));
}

#[test]
fn test_malformed_config_exit_code_3() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("lexis.toml"), "language = [\n").unwrap();
    lexis(dir.path()).args(["languages"]).assert().code(3);
}

// ============================================================================
// languages
// ============================================================================

#[test]
fn test_languages_lists_engines() {
    let dir = tempdir().unwrap();
    lexis(dir.path())
        .arg("languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("hungarian"))
        .stdout(predicate::str::contains("snowball *"))
        .stdout(predicate::str::contains("estonian"))
        .stdout(predicate::str::contains("identity"))
        .stdout(predicate::str::contains("library"));
}

#[test]
fn test_languages_json() {
    let dir = tempdir().unwrap();
    let output = lexis(dir.path())
        .args(["--format", "json", "languages"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let languages = json.as_array().unwrap();
    assert_eq!(languages.len(), 16);
    let hungarian = languages
        .iter()
        .find(|l| l["name"] == "hungarian")
        .unwrap();
    assert_eq!(hungarian["engine"], "snowball");
    assert_eq!(hungarian["default"], true);
}

// ============================================================================
// vectorize
// ============================================================================

#[test]
fn test_vectorize_human() {
    let dir = corpus();
    lexis(dir.path())
        .args(["vectorize", "a.txt", "b.txt", "c.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Vocabulary (3 terms, tf weighting)"))
        .stdout(predicate::str::contains("0  ház"))
        .stdout(predicate::str::contains("a.txt: (0,1.0)(1,1.0)"))
        .stdout(predicate::str::contains("b.txt: (0,1.0)"))
        .stdout(predicate::str::contains("c.txt: (2,1.0)"));
}

#[test]
fn test_vectorize_json() {
    let dir = corpus();
    let output = lexis(dir.path())
        .args(["--format", "json", "vectorize", "a.txt", "b.txt"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["weighting"], "tf");
    assert_eq!(json["vocabulary"], serde_json::json!(["ház", "kert"]));
    assert_eq!(json["documents"][0]["path"], "a.txt");
    assert_eq!(
        json["documents"][0]["vector"],
        serde_json::json!([[0, 1.0], [1, 1.0]])
    );
}

#[test]
fn test_vectorize_no_stem_keeps_surface_forms() {
    let dir = corpus();
    let output = lexis(dir.path())
        .args(["--format", "json", "vectorize", "--no-stem", "a.txt"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["vocabulary"], serde_json::json!(["házak", "kertek"]));
}

#[test]
fn test_vectorize_normalized_tfidf() {
    let dir = corpus();
    let output = lexis(dir.path())
        .args([
            "--format",
            "json",
            "vectorize",
            "--weighting",
            "tf-idf",
            "--normalize",
            "a.txt",
            "b.txt",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["weighting"], "tfidf");
    for document in json["documents"].as_array().unwrap() {
        let norm: f64 = document["vector"]
            .as_array()
            .unwrap()
            .iter()
            .map(|pair| pair[1].as_f64().unwrap().powi(2))
            .sum();
        assert!((norm - 1.0).abs() < 1e-9);
    }
}

#[test]
fn test_vectorize_bad_weighting_exit_code_2() {
    let dir = corpus();
    lexis(dir.path())
        .args(["vectorize", "--weighting", "bm25", "a.txt"])
        .assert()
        .code(2);
}

// ============================================================================
// similar
// ============================================================================

#[test]
fn test_similar_ranks_shared_stems_first() {
    let dir = corpus();
    lexis(dir.path())
        .args(["similar", "a.txt", "b.txt", "c.txt"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("0.7071  a.txt  b.txt"));
}

#[test]
fn test_similar_min_score_and_limit() {
    let dir = corpus();
    let output = lexis(dir.path())
        .args([
            "--format",
            "json",
            "similar",
            "--min-score",
            "0.5",
            "a.txt",
            "b.txt",
            "c.txt",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let pairs = stdout_json(&output);
    assert_eq!(pairs.as_array().unwrap().len(), 1);
    assert_eq!(pairs[0]["left"], "a.txt");
    assert_eq!(pairs[0]["right"], "b.txt");

    let output = lexis(dir.path())
        .args(["--format", "json", "similar", "--limit", "2", "a.txt", "b.txt", "c.txt"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output).as_array().unwrap().len(), 2);
}

#[test]
fn test_similar_needs_two_files() {
    let dir = corpus();
    lexis(dir.path())
        .args(["similar", "a.txt"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("at least two files"));
}

#[test]
fn test_similar_reports_no_pairs() {
    let dir = corpus();
    lexis(dir.path())
        .args(["similar", "--min-score", "0.9", "a.txt", "c.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No similar pairs found"));
}
