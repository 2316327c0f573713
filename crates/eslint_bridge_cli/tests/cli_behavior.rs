//! Integration tests for CLI behavior
//!
//! These tests verify the external behavior of the CLI tool against a
//! stand-in ESLint script.

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to create a command for the eslint-bridge CLI
fn bridge_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_eslint-bridge"))
}

mod help_command {
    use super::*;

    #[test]
    fn shows_help_with_flag() {
        bridge_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage:"));
    }

    #[test]
    fn shows_version_with_flag() {
        bridge_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn lint_requires_files() {
        bridge_cmd().arg("lint").assert().failure();
    }
}

mod locate_command {
    use super::*;
    use std::fs;

    #[test]
    fn prints_nearest_config() {
        let temp = tempfile::tempdir().unwrap();
        let repo = temp.path().join("repo");
        fs::create_dir_all(repo.join("src/nested")).unwrap();
        fs::write(repo.join(".eslintrc.json"), "{}").unwrap();

        bridge_cmd()
            .arg("locate")
            .arg(repo.join("src/nested/a.js"))
            .assert()
            .success()
            .stdout(predicate::str::contains(".eslintrc.json"));
    }

    #[test]
    fn honours_extra_config_names() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("eslint.config.js"), "").unwrap();
        fs::write(temp.path().join("team.eslint.js"), "").unwrap();

        bridge_cmd()
            .args(["--config-name", "team.eslint.js", "locate"])
            .arg(temp.path().join("a.js"))
            .assert()
            .success()
            .stdout(predicate::str::contains("team.eslint.js"));
    }

    #[test]
    fn fails_without_config() {
        let temp = tempfile::tempdir().unwrap();

        bridge_cmd()
            .args(["--max-depth", "0", "locate"])
            .arg(temp.path().join("a.js"))
            .assert()
            .code(1)
            .stdout(predicate::str::is_empty());
    }
}

#[cfg(unix)]
mod lint_command {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};

    const SEMI_ESLINT: &str = r#"#!/bin/sh
body=$(cat)
for a in "$@"; do
  if [ "$a" = "--fix-dry-run" ]; then
    printf '[{"messages":[],"output":"%s;"}]' "$body"
    exit 0
  fi
done
echo '[{"messages":[{"ruleId":"semi","severity":2,"message":"Missing semicolon.","line":1,"column":12,"endLine":1,"endColumn":13}]}]'
"#;

    const CLEAN_ESLINT: &str = "#!/bin/sh\ncat >/dev/null\necho '[{\"messages\":[]}]'\n";

    const BROKEN_ESLINT: &str =
        "#!/bin/sh\necho 'Oops! Something went wrong!' >&2\nexit 2\n";

    struct Fixture {
        _temp: tempfile::TempDir,
        eslint: PathBuf,
        source: PathBuf,
    }

    fn fixture(script: &str) -> Fixture {
        let temp = tempfile::tempdir().unwrap();
        let repo = temp.path().join("repo");
        fs::create_dir_all(repo.join("src")).unwrap();
        fs::write(repo.join("eslint.config.js"), "export default [];\n").unwrap();
        let source = repo.join("src/a.js");
        fs::write(&source, "const x = 1").unwrap();

        let eslint = temp.path().join("eslint");
        fs::write(&eslint, script).unwrap();
        fs::set_permissions(&eslint, fs::Permissions::from_mode(0o755)).unwrap();

        Fixture {
            _temp: temp,
            eslint,
            source,
        }
    }

    fn lint(eslint: &Path) -> Command {
        let mut cmd = bridge_cmd();
        cmd.arg("--eslint-path").arg(eslint).arg("lint");
        cmd
    }

    #[test]
    fn reports_errors_with_exit_code_one() {
        let fx = fixture(SEMI_ESLINT);

        lint(&fx.eslint)
            .arg(&fx.source)
            .assert()
            .code(1)
            .stdout(predicate::str::contains("1:12 error [semi]: Missing semicolon."));
    }

    #[test]
    fn clean_file_exits_zero() {
        let fx = fixture(CLEAN_ESLINT);

        lint(&fx.eslint)
            .arg(&fx.source)
            .assert()
            .success()
            .stdout(predicate::str::contains("found 0 issues"));
    }

    #[test]
    fn json_output_lists_diagnostics() {
        let fx = fixture(SEMI_ESLINT);

        let output = lint(&fx.eslint)
            .args(["--format", "json"])
            .arg(&fx.source)
            .output()
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        let diag = &value[0]["diagnostics"][0];
        assert_eq!(diag["ruleId"], "semi");
        assert_eq!(diag["severity"], 2);
        assert_eq!(diag["line"], 1);
        assert_eq!(diag["column"], 12);
    }

    #[test]
    fn fix_rewrites_file() {
        let fx = fixture(SEMI_ESLINT);

        lint(&fx.eslint)
            .arg("--fix")
            .arg(&fx.source)
            .assert()
            .success()
            .stdout(predicate::str::contains("Fixed"));

        assert_eq!(fs::read_to_string(&fx.source).unwrap(), "const x = 1;");
    }

    #[test]
    fn tool_failure_exits_two() {
        let fx = fixture(BROKEN_ESLINT);

        lint(&fx.eslint)
            .arg(&fx.source)
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Oops! Something went wrong!"));
    }

    #[test]
    fn failure_does_not_stop_remaining_files() {
        let fx = fixture(SEMI_ESLINT);
        let broken = fx._temp.path().join("broken-eslint");
        fs::write(&broken, BROKEN_ESLINT).unwrap();
        fs::set_permissions(&broken, fs::Permissions::from_mode(0o755)).unwrap();

        let other = fx.source.with_file_name("b.js");
        fs::write(&other, "const y = 2").unwrap();

        // Only a.js gets the broken tool; b.js is linted normally.
        let dispatch = fx._temp.path().join("dispatch-eslint");
        fs::write(
            &dispatch,
            format!(
                "#!/bin/sh\nfor a in \"$@\"; do last=\"$a\"; done\ncase \"$last\" in\n  */a.js) exec \"{}\" \"$@\" ;;\n  *) exec \"{}\" \"$@\" ;;\nesac\n",
                broken.display(),
                fx.eslint.display()
            ),
        )
        .unwrap();
        fs::set_permissions(&dispatch, fs::Permissions::from_mode(0o755)).unwrap();

        lint(&dispatch)
            .arg(&fx.source)
            .arg(&other)
            .assert()
            .code(2)
            .stdout(predicate::str::contains("b.js"))
            .stdout(predicate::str::contains("1:12 error [semi]: Missing semicolon."))
            .stderr(predicate::str::contains("Oops! Something went wrong!"));
    }

    #[test]
    fn file_without_config_is_skipped() {
        let fx = fixture(SEMI_ESLINT);
        let outside = fx._temp.path().join("outside.js");
        fs::write(&outside, "const y = 2").unwrap();

        let mut cmd = bridge_cmd();
        cmd.args(["--max-depth", "0", "--eslint-path"])
            .arg(&fx.eslint)
            .arg("lint")
            .arg(&outside)
            .assert()
            .success()
            .stdout(predicate::str::contains("Checked 0 files"));
    }
}
