use std::{fs, path::PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Temporary directory holding an empty configuration file, so tests never
/// read the user's own settings.
struct TestEnvironment {
    dir: TempDir,
    config: PathBuf,
}

impl TestEnvironment {
    fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temporary directory");
        let config = dir.path().join("config.json");
        fs::write(&config, "{}").expect("Failed to write config");
        Self { dir, config }
    }

    fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("Failed to write file");
        path
    }

    /// A plain-text, muted `brew` command using this environment's config.
    fn brew_cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("brew").expect("Failed to find brew binary");
        cmd.arg("--no-color")
            .arg("--mute")
            .arg("--config")
            .arg(&self.config);
        cmd
    }
}

#[test]
fn test_cli_show_default_recipe() {
    let env = TestEnvironment::new();

    env.brew_cmd()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("- Coffee: 15 g"))
        .stdout(predicate::str::contains("- Target water: 240 ml"))
        .stdout(predicate::str::contains("- Total time: 1:45"))
        .stdout(predicate::str::contains("**Bloom** (bloom): 30 ml, 30 s (to 30 ml by 0:30)"))
        .stdout(predicate::str::contains("(to 240 ml by 1:45)"));
}

#[test]
fn test_cli_show_recipe_file() {
    let env = TestEnvironment::new();
    let recipe = env.write(
        "recipe.json",
        r#"{"coffee_grams": 20, "ratio": 15, "steps": [
            {"kind": "bloom", "name": "Bloom", "water": 60, "time": 45},
            {"name": "Main", "water": 280, "time": 90, "description": "One pour"}
        ]}"#,
    );

    env.brew_cmd()
        .arg("--recipe")
        .arg(&recipe)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("- Target water: 300 ml"))
        .stdout(predicate::str::contains("**over by 40 ml**"))
        .stdout(predicate::str::contains("*One pour*"))
        .stdout(predicate::str::contains("- Total time: 2:15"));
}

#[test]
fn test_cli_rejects_volume_out_of_range() {
    let env = TestEnvironment::new();

    env.brew_cmd()
        .args(["--volume", "2", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("volume"));
}

#[test]
fn test_cli_missing_recipe_file() {
    let env = TestEnvironment::new();

    env.brew_cmd()
        .args(["--recipe", "/nonexistent/recipe.json", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to initialize session"));
}

#[test]
fn test_cli_invalid_config_file() {
    let env = TestEnvironment::new();
    fs::write(&env.config, r#"{"volume": 5}"#).unwrap();

    env.brew_cmd()
        .arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_cli_build_is_default_command() {
    let env = TestEnvironment::new();

    env.brew_cmd()
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Recipe"))
        .stdout(predicate::str::contains("brew>"));
}

#[test]
fn test_cli_builder_add_step() {
    let env = TestEnvironment::new();

    env.brew_cmd()
        .arg("build")
        .write_stdin("add\nadd -n \"Last drop\" -w 20 -t 15\nlist\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added step with ID: 4"))
        .stdout(predicate::str::contains("### 4. Pour 3 (pour)"))
        .stdout(predicate::str::contains("Added step with ID: 5"))
        .stdout(predicate::str::contains("**Last drop** (pour): 20 ml, 15 s"))
        .stdout(predicate::str::contains("**over by 70 ml**"));
}

#[test]
fn test_cli_builder_edit_and_remove() {
    let env = TestEnvironment::new();

    env.brew_cmd()
        .write_stdin("edit 2 -w 100 -d \"\"\nedit 2\nremove 1\nremove 1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated step with ID: 2"))
        .stdout(predicate::str::contains("- Water set to 100 ml"))
        .stdout(predicate::str::contains("- Cleared description"))
        .stdout(predicate::str::contains("Error: Nothing to change"))
        .stdout(predicate::str::contains("Removed step 'Bloom' (ID: 1)"))
        .stdout(predicate::str::contains("Error: No step with ID 1"))
        .stdout(predicate::str::contains("- Scheduled: 220 ml"));
}

#[test]
fn test_cli_builder_settings() {
    let env = TestEnvironment::new();

    env.brew_cmd()
        .write_stdin("grams 18\nratio 15\ngrams abc\ndefault\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Coffee set to 18 g, target 288 ml"))
        .stdout(predicate::str::contains("Success: Ratio set to 1:15, target 270 ml"))
        .stdout(predicate::str::contains("not a number: abc"))
        .stdout(predicate::str::contains("- Target water: 240 ml"));
}

#[test]
fn test_cli_builder_rejects_bad_input() {
    let env = TestEnvironment::new();

    env.brew_cmd()
        .write_stdin("add -w lots\nfrobnicate\nadd -n \"open\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("not a number: lots"))
        .stdout(predicate::str::contains("frobnicate"))
        .stdout(predicate::str::contains("Error: unterminated \" quote"));
}

#[test]
fn test_cli_timer_skip_and_leave() {
    let env = TestEnvironment::new();

    env.brew_cmd()
        .arg("timer")
        .write_stdin("s\nq\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Timer keys"))
        .stdout(predicate::str::contains("[idle]"))
        .stdout(predicate::str::contains(
            "[running] [----------] Step 1/3 Bloom: 30 s left, pour to 30 ml (30 ml) | Total 0:00 | muted",
        ))
        .stdout(predicate::str::contains("brew>"));
}

#[test]
fn test_cli_timer_from_builder_uses_edited_recipe() {
    let env = TestEnvironment::new();

    env.brew_cmd()
        .write_stdin("remove 1\ntimer\n\nv 0.5\nq\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[preparing] [----------] Get ready: 10 s"))
        .stdout(predicate::str::contains("Step 1/2 Pour 1"))
        .stdout(predicate::str::contains("| vol 50%"));
}

#[test]
fn test_cli_timer_rejects_unknown_key() {
    let env = TestEnvironment::new();

    env.brew_cmd()
        .arg("timer")
        .write_stdin("x\nv 3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown timer key 'x'"))
        .stdout(predicate::str::contains("must be between 0 and 1"));
}

#[test]
fn test_cli_mute_key_restores_configured_volume() {
    let env = TestEnvironment::new();
    fs::write(&env.config, r#"{"volume": 0.4}"#).unwrap();

    env.brew_cmd()
        .arg("timer")
        .write_stdin("m\nq\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("| muted"))
        .stdout(predicate::str::contains("| vol 40%"));
}
