//! End-to-end CLI tests for nla-site

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn nla_site() -> Command {
    cargo_bin_cmd!("nla-site")
}

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        nla_site()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("build"))
            .stdout(predicate::str::contains("outline"));
    }

    #[test]
    fn shows_version() {
        nla_site()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

mod build {
    use super::*;

    #[test]
    fn writes_default_output_under_dist() {
        let temp = TempDir::new().expect("temp dir");

        nla_site()
            .current_dir(temp.path())
            .arg("build")
            .assert()
            .success()
            .stderr(predicate::str::contains("Wrote"));

        let html = std::fs::read_to_string(temp.path().join("dist/index.html")).expect("output");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Key Features"));
        assert!(!html.contains("data-section=\"demo\""));
    }

    #[test]
    fn honours_out_flag_and_demo_toggle() {
        let temp = TempDir::new().expect("temp dir");
        let out = temp.path().join("public/site/index.html");

        nla_site()
            .current_dir(temp.path())
            .args(["build", "--with-demo", "--out"])
            .arg(&out)
            .assert()
            .success();

        let html = std::fs::read_to_string(&out).expect("output");
        assert!(html.contains("data-section=\"demo\""));
        assert!(html.contains("Usage Examples"));
    }

    #[test]
    fn reads_config_from_working_directory() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(
            temp.path().join("nla-site.toml"),
            "output = \"www/index.html\"\n\n[sections]\nexpected_solution = true\n",
        )
        .expect("write config");

        nla_site()
            .current_dir(temp.path())
            .arg("build")
            .assert()
            .success();

        let html = std::fs::read_to_string(temp.path().join("www/index.html")).expect("output");
        assert!(html.contains("Expected Solution"));
    }

    #[test]
    fn fails_on_missing_explicit_config() {
        let temp = TempDir::new().expect("temp dir");

        nla_site()
            .current_dir(temp.path())
            .args(["build", "--config", "missing.toml"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to read config"));
    }

    #[test]
    fn fails_when_output_is_a_directory() {
        let temp = TempDir::new().expect("temp dir");
        let out = temp.path().join("taken");
        std::fs::create_dir(&out).expect("create dir");

        nla_site()
            .current_dir(temp.path())
            .args(["build", "--out"])
            .arg(&out)
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to write"));
    }

    #[test]
    fn fails_on_invalid_config() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(temp.path().join("nla-site.toml"), "[sections\n").expect("write config");

        nla_site()
            .current_dir(temp.path())
            .arg("build")
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to parse config"));
    }
}

mod render {
    use super::*;

    #[test]
    fn prints_page_with_current_year() {
        let temp = TempDir::new().expect("temp dir");
        let year = nla_site::current_year();

        nla_site()
            .current_dir(temp.path())
            .arg("render")
            .assert()
            .success()
            .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
            .stdout(predicate::str::contains(format!(
                "© {} Network Log Analyser Project",
                year
            )));
    }

    #[test]
    fn includes_expected_solution_when_toggled() {
        let temp = TempDir::new().expect("temp dir");

        nla_site()
            .current_dir(temp.path())
            .args(["render", "--with-expected-solution"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Expected Solution"))
            .stdout(predicate::str::contains("No internet dependency required"));
    }
}

mod logging {
    use super::*;

    #[test]
    fn rejects_unknown_log_level() {
        let temp = TempDir::new().expect("temp dir");

        nla_site()
            .current_dir(temp.path())
            .args(["outline", "--log-level", "bogus"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("bogus"));
    }
}

mod outline {
    use super::*;

    #[test]
    fn lists_default_order() {
        let temp = TempDir::new().expect("temp dir");

        nla_site()
            .current_dir(temp.path())
            .arg("outline")
            .assert()
            .success()
            .stdout(
                "1. Navbar\n2. Hero\n3. Problem Statement\n4. Features\n5. Team\n6. Footer\n",
            );
    }

    #[test]
    fn emits_json_with_demo() {
        let temp = TempDir::new().expect("temp dir");

        let output = nla_site()
            .current_dir(temp.path())
            .args(["outline", "--json", "--with-demo"])
            .output()
            .expect("run");
        assert!(output.status.success());

        let ids: Vec<String> = serde_json::from_slice(&output.stdout).expect("json");
        assert_eq!(
            ids,
            vec![
                "navbar",
                "hero",
                "problem_statement",
                "features",
                "demo",
                "team",
                "footer"
            ]
        );
    }
}
