//! End-to-End CLI Tests for the portfolio renderer

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn portfolio() -> Command {
    cargo_bin_cmd!("portfolio")
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        portfolio()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("render"))
            .stdout(predicate::str::contains("check"))
            .stdout(predicate::str::contains("content"));
    }

    #[test]
    fn shows_version() {
        portfolio()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn requires_subcommand() {
        portfolio().assert().failure();
    }
}

// ============================================
// Render
// ============================================

mod render {
    use super::*;

    #[test]
    fn writes_verified_document() {
        let temp = TempDir::new().expect("temp dir");
        let out = temp.path().join("site/index.html");

        portfolio()
            .current_dir(temp.path())
            .args(["render", "--out"])
            .arg(&out)
            .assert()
            .success();

        let html = std::fs::read_to_string(&out).expect("output written");
        assert!(html.starts_with("<!DOCTYPE html>"));
        for id in ["home", "projects", "about", "contact"] {
            assert!(html.contains(&format!("id=\"{id}\"")), "{id}");
        }
    }

    #[test]
    fn default_output_is_dist_index() {
        let temp = TempDir::new().expect("temp dir");

        portfolio().current_dir(temp.path()).arg("render").assert().success();

        assert!(temp.path().join("dist/index.html").is_file());
    }

    #[test]
    fn prints_to_stdout() {
        let temp = TempDir::new().expect("temp dir");
        portfolio()
            .current_dir(temp.path())
            .args(["render", "--stdout"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
            .stdout(predicate::str::contains("Molecular Bonds"));
    }

    #[test]
    fn picks_up_implicit_config() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(temp.path().join("portfolio.toml"), "[site]\ntitle = \"Implicit title\"\n")
            .expect("write config");

        portfolio()
            .current_dir(temp.path())
            .args(["render", "--stdout"])
            .assert()
            .success()
            .stdout(predicate::str::contains("<title>Implicit title</title>"));
    }

    #[test]
    fn broken_implicit_config_falls_back() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(temp.path().join("portfolio.toml"), "[site\n").expect("write config");

        portfolio()
            .current_dir(temp.path())
            .args(["render", "--stdout"])
            .assert()
            .success()
            .stdout(predicate::str::contains("<title>Thanh Huy | Portfolio</title>"));
    }

    #[test]
    fn explicit_missing_config_fails() {
        let temp = TempDir::new().expect("temp dir");
        portfolio()
            .current_dir(temp.path())
            .args(["render", "--stdout", "--config", "absent.toml"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("absent.toml"));
    }
}

// ============================================
// Check & Content
// ============================================

mod inspect {
    use super::*;

    #[test]
    fn check_reports_contract() {
        let temp = TempDir::new().expect("temp dir");
        portfolio()
            .current_dir(temp.path())
            .arg("check")
            .assert()
            .success()
            .stdout(predicate::str::contains("4 anchors resolved"))
            .stdout(predicate::str::contains("6 sections in order"));
    }

    #[test]
    fn content_prints_all_projects() {
        let output = portfolio().args(["content", "--pretty"]).output().expect("run content");
        assert!(output.status.success());

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
        let titles: Vec<&str> = json["projects"]
            .as_array()
            .expect("projects array")
            .iter()
            .filter_map(|p| p["title"].as_str())
            .collect();
        assert_eq!(
            titles,
            vec!["Exploring with Curiosity", "Molecular Bonds", "Nebula Cartography"]
        );
    }
}
