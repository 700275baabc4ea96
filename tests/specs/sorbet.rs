//! Behavioral specs for the checker commands.
//!
//! Commands that run the checker use a stand-in script passed through
//! `--sorbet-bin` or the settings file.

use crate::prelude::*;

fn ruby_project() -> Project {
    Project::with_files(&[
        ("sorbet/config", ".\n--ignore=vendor/\n"),
        ("lib/a.rb", "# typed: strict\nclass A; end\n"),
        ("lib/b.rbi", "# typed: true\n"),
        ("lib/c.rb", "class C; end\n"),
        ("vendor/d.rb", "# typed: false\n"),
        ("README.md", "# readme\n"),
    ])
}

#[cfg(unix)]
fn bin_path(project: &Project, name: &str) -> String {
    project.path().join(name).display().to_string()
}

// =============================================================================
// FILES / CONFIG / STRICTNESS
// =============================================================================

#[test]
fn files_lists_checked_files_sorted() {
    let project = ruby_project();
    project
        .run(&["files"])
        .exits(0)
        .stdout_eq("lib/a.rb\nlib/b.rbi\nlib/c.rb\n");
}

#[test]
fn files_honours_allowed_extensions() {
    let project = ruby_project();
    project.file(
        "sorbet/config",
        ".\n--allowed-extension=.rake\n--ignore\nvendor/\n",
    );
    project.file("lib/tasks/db.rake", "task :db\n");
    project
        .run(&["files"])
        .exits(0)
        .stdout_eq("lib/tasks/db.rake\n");
}

#[test]
fn config_prints_options() {
    let project = Project::with_files(&[(
        "sorbet/config",
        ".\n--ignore=vendor/\n--allowed-extension\n.rb\n--no-stdlib\n--dir=lib\n",
    )]);
    project
        .run(&["config"])
        .exits(0)
        .stdout_eq("'.' 'lib' --ignore 'vendor/' --allowed-extension '.rb' --no-stdlib\n");
}

#[test]
fn strictness_prints_sigil() {
    let project = ruby_project();
    project
        .run(&["strictness", "lib/a.rb"])
        .exits(0)
        .stdout_eq("lib/a.rb: strict\n");
}

#[test]
fn strictness_without_sigil_exits_1() {
    let project = ruby_project();
    project
        .run(&["strictness", "lib/c.rb"])
        .exits(1)
        .stdout_eq("lib/c.rb: none\n");
}

#[test]
fn strictness_of_missing_file_exits_1() {
    let project = ruby_project();
    project
        .run(&["strictness", "lib/missing.rb"])
        .exits(1)
        .stdout_eq("lib/missing.rb: none\n");
}

// =============================================================================
// TC
// =============================================================================

#[cfg(unix)]
#[test]
fn tc_passes_checker_output_through() {
    let project = ruby_project();
    project.script("fake-srb", "echo \"No errors! Great job.\"");
    let bin = bin_path(&project, "fake-srb");
    project
        .run(&["tc", "--sorbet-bin", &bin])
        .exits(0)
        .stdout_eq("No errors! Great job.\n");
}

#[cfg(unix)]
#[test]
fn tc_failure_exits_1_and_forwards_stderr() {
    let project = ruby_project();
    project.script(
        "fake-srb",
        "echo \"lib/a.rb:2: Method foo does not exist\" >&2\nexit 1",
    );
    let bin = bin_path(&project, "fake-srb");
    project
        .run(&["tc", "--sorbet-bin", &bin])
        .exits(1)
        .stderr_has("Method foo does not exist");
}

#[cfg(unix)]
#[test]
fn tc_passes_extra_arguments() {
    let project = ruby_project();
    project.script("fake-srb", "echo \"$@\"");
    let bin = bin_path(&project, "fake-srb");
    project
        .run(&["tc", "--sorbet-bin", &bin, "--", "--typed", "true"])
        .exits(0)
        .stdout_eq("--typed true\n");
}

#[cfg(unix)]
#[test]
fn tc_killed_checker_exits_4() {
    let project = ruby_project();
    project.script("fake-srb", "echo partial\nkill -9 $$");
    let bin = bin_path(&project, "fake-srb");
    project
        .run(&["tc", "--sorbet-bin", &bin])
        .exits(4)
        .stdout_has("partial")
        .stderr_has("Sorbet was killed.");
}

#[cfg(unix)]
#[test]
fn tc_checker_exiting_139_exits_4() {
    let project = ruby_project();
    project.script("fake-srb", "exit 139");
    let bin = bin_path(&project, "fake-srb");
    project
        .run(&["tc", "--sorbet-bin", &bin])
        .exits(4)
        .stderr_has("Sorbet segfaulted.");
}

#[cfg(unix)]
#[test]
fn tc_uses_checker_from_settings() {
    let project = ruby_project();
    project.script("fake-srb", "echo from-settings");
    let bin = bin_path(&project, "fake-srb");
    project.file(
        "srbkit.toml",
        &format!("version = 1\n\n[sorbet]\nbin = \"{bin}\"\n"),
    );
    project
        .run(&["tc"])
        .exits(0)
        .stdout_eq("from-settings\n");
}

// =============================================================================
// VERSION
// =============================================================================

#[cfg(unix)]
#[test]
fn version_prints_checker_version() {
    let project = ruby_project();
    project.script("fake-srb", "echo \"Sorbet typechecker 0.5.10000 git abc1234\"");
    let bin = bin_path(&project, "fake-srb");
    project
        .run(&["version", "--sorbet-bin", &bin])
        .exits(0)
        .stdout_eq("0.5.10000\n");
}

#[cfg(unix)]
#[test]
fn version_of_failing_checker_exits_1() {
    let project = ruby_project();
    project.script("fake-srb", "exit 2");
    let bin = bin_path(&project, "fake-srb");
    project
        .run(&["version", "--sorbet-bin", &bin])
        .exits(1)
        .stdout_eq("sorbet: not found\n");
}

// =============================================================================
// METRICS
// =============================================================================

#[cfg(unix)]
const METRICS_SCRIPT: &str = r#"while [ $# -gt 0 ]; do
  if [ "$1" = "--metrics-file" ]; then
    shift
    printf '%s' '{"metrics":[{"name":"ruby_typer.unknown.types.input.files","value":3},{"name":"ruby_typer.unknown.types.sig.count"}]}' > "$1"
  fi
  shift
done"#;

#[cfg(unix)]
#[test]
fn metrics_prints_parsed_metrics_and_cleans_up() {
    let project = ruby_project();
    project.script("fake-srb", METRICS_SCRIPT);
    let bin = bin_path(&project, "fake-srb");
    project
        .run(&["metrics", "--sorbet-bin", &bin])
        .exits(0)
        .stdout_eq("types.input.files: 3\ntypes.sig.count: 0\n");
    assert!(!project.path().join("metrics.tmp").exists());
}

#[cfg(unix)]
#[test]
fn metrics_json_output() {
    let project = ruby_project();
    project.script("fake-srb", METRICS_SCRIPT);
    let bin = bin_path(&project, "fake-srb");
    let run = project
        .run(&["-o", "json", "metrics", "--sorbet-bin", &bin])
        .exits(0);
    let json = run.json();
    assert_eq!(json["kind"], "metrics");
    assert_eq!(json["metrics"]["types.input.files"], 3);
}

#[cfg(unix)]
#[test]
fn metrics_stderr_is_inherited_by_default() {
    let project = ruby_project();
    project.script("fake-srb", &format!("echo checker-noise >&2\n{METRICS_SCRIPT}"));
    let bin = bin_path(&project, "fake-srb");
    project
        .run(&["metrics", "--sorbet-bin", &bin])
        .exits(0)
        .stderr_has("checker-noise");
}

#[cfg(unix)]
#[test]
fn metrics_captures_stderr_when_settings_ask() {
    let project = ruby_project();
    project.script("fake-srb", &format!("echo checker-noise >&2\n{METRICS_SCRIPT}"));
    let bin = bin_path(&project, "fake-srb");
    project.file(
        "srbkit.toml",
        &format!("version = 1\n\n[sorbet]\nbin = \"{bin}\"\ncapture_err = true\n"),
    );
    let run = project.run(&["metrics"]).exits(0);
    assert!(!run.stderr().contains("checker-noise"), "{}", run.stderr());
}

#[cfg(unix)]
#[test]
fn metrics_without_metrics_file_exits_1() {
    let project = ruby_project();
    project.script("fake-srb", "true");
    let bin = bin_path(&project, "fake-srb");
    project
        .run(&["metrics", "--sorbet-bin", &bin])
        .exits(1)
        .stdout_eq("no metrics\n");
}

// =============================================================================
// COMMITS
// =============================================================================

#[test]
fn commits_outside_history_are_none() {
    // The `.git` marker directory is not a real repository, so git fails.
    let project = ruby_project();
    project
        .run(&["commits"])
        .exits(0)
        .stdout_eq("intro: none\nremoval: none\n");
}
