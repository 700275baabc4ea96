//! Behavioral specs for the Bundler commands.

use crate::prelude::*;

const LOCK: &str = "\
GEM
  remote: https://rubygems.org/
  specs:
    rake (13.1.0)
    sorbet (0.5.11144)
      sorbet-static (= 0.5.11144)
    sorbet-static (0.5.11144-x86_64-linux)

PLATFORMS
  x86_64-linux
";

// =============================================================================
// GEMFILE
// =============================================================================

#[test]
fn gemfile_prints_contents() {
    let project = Project::with_files(&[("Gemfile", "source 'https://rubygems.org'\ngem 'rake'\n")]);
    project
        .run(&["gemfile"])
        .exits(0)
        .stdout_eq("source 'https://rubygems.org'\ngem 'rake'\n");
}

#[test]
fn gemfile_absent_exits_1() {
    let project = Project::empty();
    project.run(&["gemfile"]).exits(1).stdout_eq("no Gemfile\n");
}

// =============================================================================
// GEM-VERSION
// =============================================================================

#[test]
fn gem_version_reads_lock_file() {
    let project = Project::with_files(&[("Gemfile.lock", LOCK)]);
    project
        .run(&["gem-version", "sorbet"])
        .exits(0)
        .stdout_eq("0.5.11144\n");
}

#[test]
fn gem_version_ignores_platform_suffix() {
    let project = Project::with_files(&[("Gemfile.lock", LOCK)]);
    project
        .run(&["gem-version", "sorbet-static"])
        .exits(0)
        .stdout_eq("0.5.11144\n");
}

#[test]
fn gem_version_for_unlisted_gem_exits_1() {
    let project = Project::with_files(&[("Gemfile.lock", LOCK)]);
    project
        .run(&["gem-version", "rails"])
        .exits(1)
        .stdout_eq("rails: not found\n");
}

#[test]
fn gem_version_without_lock_file_exits_1() {
    let project = Project::empty();
    project.run(&["gem-version", "rake"]).exits(1);
}

#[test]
fn gem_version_json_reports_null_when_absent() {
    let project = Project::empty();
    let run = project.run(&["-o", "json", "gem-version", "rake"]).exits(1);
    let json = run.json();
    assert_eq!(json["kind"], "value");
    assert_eq!(json["name"], "rake");
    assert!(json["value"].is_null());
}

// =============================================================================
// BUNDLE
// =============================================================================

#[test]
fn bundle_requires_a_command() {
    let project = Project::empty();
    project.cmd().arg("bundle").assert().code(2);
}
