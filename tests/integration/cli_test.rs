//! Command-line tests, parsing and running the `kitscan` binary

use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::tempdir;
use kitscan::{
    cli::args::{Args, OutputFormat},
    error::Result,
    models::config::ProjectSpec,
};

/// Run the binary inside `cwd`, with home and config directories pointing
/// there too so no user config file leaks in.
fn run_kitscan(cwd: &Path, args: &[&str]) -> Output {
    run_kitscan_with_env(cwd, args, &[])
}

fn run_kitscan_with_env(cwd: &Path, args: &[&str], vars: &[(&str, &str)]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_kitscan"));
    command
        .args(args)
        .current_dir(cwd)
        .env("HOME", cwd)
        .env("XDG_CONFIG_HOME", cwd.join(".config"))
        .env_remove("KITSCAN_KIT_ALIASES")
        .env_remove("KITSCAN_OUTPUT_FORMAT")
        .env_remove("KITSCAN_PARALLEL")
        .env_remove("KITSCAN_EXCLUDE")
        .env_remove("KITSCAN_LOG")
        .env_remove("RUST_LOG")
        .envs(vars.iter().copied());
    command.output().expect("failed to run kitscan")
}

fn create_project(root: &Path) -> Result<()> {
    fs::create_dir_all(root.join("src/components"))?;
    fs::write(
        root.join("src/A.vue"),
        "<template><Foo/></template>\n<script>\nimport { Foo } from \"@kit/x\";\nexport default {};\n</script>\n",
    )?;
    fs::write(
        root.join("src/components/B.vue"),
        "<script>\nexport default { name: \"B\" };\n</script>\n",
    )?;
    fs::write(
        root.join("src/registry.js"),
        "export default { components: { bar: () => import(\"@kit/y/Bar\") } };\n",
    )?;
    Ok(())
}

#[test]
fn test_cli_args_parsing() {
    let args = Args::parse_from(["kitscan"]);
    assert!(args.project.is_empty());
    assert!(args.alias.is_empty());
    assert!(args.exclude.is_empty());
    assert_eq!(args.output, None);
    assert_eq!(args.output_file, None);
    assert!(!args.quiet);
    assert!(!args.verbose);

    let args = Args::parse_from([
        "kitscan",
        "--project", "FOO=../foo-frontend",
        "--alias", "@kit",
        "--exclude", "__mocks__",
        "--output", "json",
        "--output-file", "results.json",
        "--config", "custom.toml",
        "--verbose",
    ]);

    assert_eq!(args.project, vec![ProjectSpec::new("FOO", "../foo-frontend")]);
    assert_eq!(args.alias, vec!["@kit".to_string()]);
    assert_eq!(args.exclude, vec!["__mocks__".to_string()]);
    assert_eq!(args.output, Some(OutputFormat::Json));
    assert_eq!(args.output_file, Some(PathBuf::from("results.json")));
    assert_eq!(args.config, Some(PathBuf::from("custom.toml")));
    assert!(args.verbose);
}

#[test]
fn test_cli_text_report() -> Result<()> {
    let dir = tempdir()?;
    create_project(&dir.path().join("foo"))?;

    let output = run_kitscan(
        dir.path(),
        &["--project", "FOO=foo", "--alias", "@kit", "--no-colors"],
    );

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "FOO kit-2\njs-1 vue-2\n  Foo\n  Bar\n"
    );
    Ok(())
}

#[test]
fn test_cli_json_report_to_file() -> Result<()> {
    let dir = tempdir()?;
    create_project(&dir.path().join("foo"))?;

    let output = run_kitscan(
        dir.path(),
        &[
            "-p", "FOO=foo",
            "-a", "@kit",
            "--output", "json",
            "--output-file", "report.json",
            "--quiet",
        ],
    );
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(output.stdout.is_empty());

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("report.json"))?)?;
    assert_eq!(report["projects"][0]["name"], "FOO");
    assert_eq!(report["projects"][0]["kitFiles"], serde_json::json!(["Foo", "Bar"]));
    assert_eq!(report["projects"][0]["vueFilesCount"], 2);
    assert_eq!(report["projects"][0]["jsFilesCount"], 1);
    Ok(())
}

#[test]
fn test_cli_reads_config_file_in_current_directory() -> Result<()> {
    let dir = tempdir()?;
    create_project(&dir.path().join("foo"))?;
    fs::write(
        dir.path().join(".kitscan.toml"),
        "output_format = \"csv\"\n\n[[projects]]\nname = \"FOO\"\npath = \"foo\"\n\n[kit_aliases]\n\"@kit\" = true\n",
    )?;

    let output = run_kitscan(dir.path(), &[]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "project,kit_count,vue_files,js_files,kit_files\nFOO,2,2,1,Foo;Bar\n"
    );
    Ok(())
}

#[test]
fn test_cli_without_projects_is_critical() -> Result<()> {
    let dir = tempdir()?;

    let output = run_kitscan(dir.path(), &["--alias", "@kit"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No projects configured"));
    Ok(())
}

#[test]
fn test_cli_scan_failure_prints_no_partial_report() -> Result<()> {
    let dir = tempdir()?;
    create_project(&dir.path().join("good"))?;
    let bad = dir.path().join("bad");
    fs::create_dir_all(bad.join("src"))?;
    fs::write(bad.join("src/Empty.vue"), "<template><p/></template>\n<script>\n</script>\n")?;

    let output = run_kitscan(
        dir.path(),
        &["-p", "GOOD=good", "-p", "BAD=bad", "-a", "@kit", "--no-colors"],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("empty <script> block"));
    Ok(())
}

#[test]
fn test_cli_warns_when_no_aliases_are_configured() -> Result<()> {
    let dir = tempdir()?;
    create_project(&dir.path().join("foo"))?;

    let output = run_kitscan(dir.path(), &["-p", "FOO=foo", "--no-colors"]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "FOO kit-0\njs-1 vue-2\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("no kit aliases configured"));
    Ok(())
}

#[test]
fn test_cli_warns_about_ignored_environment() -> Result<()> {
    let dir = tempdir()?;
    create_project(&dir.path().join("foo"))?;

    let output = run_kitscan_with_env(
        dir.path(),
        &["-p", "FOO=foo", "-a", "@kit", "--no-colors"],
        &[("KITSCAN_OUTPUT_FORMAT", "yaml")],
    );

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "FOO kit-2\njs-1 vue-2\n  Foo\n  Bar\n"
    );
    assert!(String::from_utf8_lossy(&output.stderr).contains("ignoring configuration source"));
    Ok(())
}

#[test]
fn test_cli_init_creates_config() -> Result<()> {
    let dir = tempdir()?;

    let output = run_kitscan(dir.path(), &["--init"]);

    assert!(output.status.success());
    let config = fs::read_to_string(dir.path().join(".kitscan.toml"))?;
    assert!(config.contains("[[projects]]"));
    Ok(())
}
