//! Shared test utilities for CLI integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use ctf2json_core::ctf::CtfBuilder;
use expect_test::Expect;
use std::io::Write;

/// Create a new command for the ctf2json binary.
pub fn ctf2json() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ctf2json"));
    cmd.env("SOURCE_DATE_EPOCH", "1300000000");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Create a temporary directory holding `name` with the given content.
///
/// Commands run inside the directory can name the file by a relative path,
/// which keeps `derived_from` stable in expected output.
pub fn temp_dir_with(name: &str, content: &[u8]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let mut file = std::fs::File::create(dir.path().join(name)).unwrap();
    file.write_all(content).unwrap();
    dir
}

/// A container describing a small process table:
///
/// ```text
/// 1 int            5 struct proc { pid_t pid; uid_t uid; int flags; }
/// 2 unsigned int   6 int [16]
/// 3 pid_t -> int   7 struct cred { uid_t uid; int groups[16]; }
/// 4 uid_t -> uint  8 union sigval   9 enum state   10 struct opaque (fwd)
/// ```
pub fn fixture() -> CtfBuilder {
    let mut b = CtfBuilder::new();
    let int = b.integer("int", 32, true);
    let uint = b.integer("unsigned int", 32, false);
    let pid = b.typedef("pid_t", int);
    let uid = b.typedef("uid_t", uint);
    b.structure("proc", 12, &[("pid", pid, 0), ("uid", uid, 32), ("flags", int, 64)]);
    let groups = b.array(int, 16);
    b.structure("cred", 68, &[("uid", uid, 0), ("groups", groups, 32)]);
    b.union("sigval", 4, &[("sival_int", int, 0)]);
    b.enumeration("state", 4, &[("RUNNING", 0), ("STOPPED", 1)]);
    b.forward("opaque");
    b
}

/// Run ctf2json on the fixture, saved as `proc.ctf`, and check stdout.
pub fn check_stdout(types: &[&str], extra: &[&str], expected: Expect) {
    let dir = temp_dir_with("proc.ctf", &fixture().build());
    let mut cmd = ctf2json();
    cmd.current_dir(dir.path());
    cmd.args(["--no-color", "-f", "proc.ctf"]);
    for ty in types {
        cmd.args(["-t", ty]);
    }
    cmd.args(extra);
    let output = cmd.output().expect("failed to execute command");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "ctf2json failed: {stderr}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    expected.assert_eq(&stdout);
}
