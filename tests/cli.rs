use serde_json::Value;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

struct TempDirGuard {
    path: PathBuf,
}

impl TempDirGuard {
    fn new(prefix: &str) -> Self {
        let unique = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let path = std::env::temp_dir().join(format!(
            "hasse-lattice-{prefix}-{}-{unique}",
            std::process::id()
        ));
        fs::create_dir_all(&path).expect("temp dir should be created");
        Self { path }
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDirGuard {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

fn run_cli<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    run_cli_logging(Some("warn"), args)
}

/// Run with `RUST_LOG` set to `log`, or unset when `None`.
fn run_cli_logging<I, S>(log: Option<&str>, args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_hasse_lattice"));
    cmd.args(args);
    match log {
        Some(filter) => cmd.env("RUST_LOG", filter),
        None => cmd.env_remove("RUST_LOG"),
    };
    cmd.output().expect("hasse_lattice should execute")
}

fn out_dir_args(dir: &Path) -> [String; 2] {
    ["--out-dir".to_string(), dir.display().to_string()]
}

#[test]
fn writes_grid_listing() {
    let tmp = TempDirGuard::new("grid");
    let mut args = out_dir_args(tmp.path()).to_vec();
    args.extend(["grid", "1", "1"].map(String::from));
    let out = run_cli(&args);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let text = fs::read_to_string(tmp.path().join("grid_11")).expect("grid_11 should exist");
    assert_eq!(
        text,
        "0: 00: {1, 2}, {}\n1: 01: {3}, {0}\n1: 10: {3}, {0}\n2: 11: {}, {1, 2}\n"
    );
}

#[test]
fn repeated_runs_are_byte_identical() {
    let tmp = TempDirGuard::new("repeat");
    let mut args = out_dir_args(tmp.path()).to_vec();
    args.extend(["associahedron", "6"].map(String::from));

    assert!(run_cli(&args).status.success());
    let first = fs::read(tmp.path().join("normal_associahedron_6")).unwrap();
    assert!(run_cli(&args).status.success());
    let second = fs::read(tmp.path().join("normal_associahedron_6")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn stdout_and_json_summary() {
    let out = run_cli(["--stdout", "claws", "1", "1"]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout).lines().count(), 4);

    let tmp = TempDirGuard::new("json");
    let mut args = out_dir_args(tmp.path()).to_vec();
    args.extend(["--json", "fence", "4"].map(String::from));
    let out = run_cli(&args);
    assert!(out.status.success());
    let summary: Value = serde_json::from_slice(&out.stdout).expect("summary should be JSON");
    assert_eq!(summary["family"], "fence_distributed_4");
    assert_eq!(summary["faces"], 8);
    assert_eq!(summary["covering_pairs"], 10);
    assert!(tmp.path().join("fence_distributed_4").exists());
}

#[test]
fn invalid_sizes_fail_without_output() {
    let tmp = TempDirGuard::new("invalid");
    let mut args = out_dir_args(tmp.path()).to_vec();
    args.extend(["associahedron", "3"].map(String::from));
    let out = run_cli(&args);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("invalid argument"));
    assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);

    assert!(!run_cli(["permutahedron", "0"]).status.success());
    assert!(!run_cli(["fence", "four"]).status.success());
    assert!(!run_cli(["grid"]).status.success());
}

#[test]
fn exhausted_step_budget_fails() {
    let tmp = TempDirGuard::new("budget");
    let mut args = out_dir_args(tmp.path()).to_vec();
    args.extend(["--step-budget", "2", "permutahedron", "4"].map(String::from));
    let out = run_cli(&args);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("gave up"));
    assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
}

#[test]
fn rust_log_sets_the_log_level() {
    let out = run_cli_logging(Some("warn"), ["--stdout", "grid", "1", "1"]);
    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(!stderr.contains("INFO"), "stderr: {stderr}");

    let out = run_cli_logging(Some("debug"), ["--stdout", "associahedron", "5"]);
    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("found Hamiltonian path"), "stderr: {stderr}");
}

#[test]
fn logging_defaults_to_info_and_quiet_lowers_it() {
    let out = run_cli_logging(None, ["--stdout", "grid", "1", "1"]);
    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("INFO") && stderr.contains("enumerated"), "stderr: {stderr}");

    let out = run_cli_logging(Some("debug"), ["--quiet", "--stdout", "grid", "1", "1"]);
    assert!(out.status.success());
    assert!(!String::from_utf8_lossy(&out.stderr).contains("INFO"));
}
