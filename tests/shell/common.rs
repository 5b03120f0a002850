//! Common test utilities for shell tests.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

/// Run flowdb with the given arguments and stdin, isolated from any user config.
pub fn run_flowdb(args: &[&str], stdin: impl AsRef<[u8]>) -> (i32, String, String) {
    let config_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = config_dir.path().join("config.toml");
    run_with_config(&config, args, stdin)
}

/// Run flowdb against a specific config file.
pub fn run_with_config(
    config: &Path,
    args: &[&str],
    stdin: impl AsRef<[u8]>,
) -> (i32, String, String) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_flowdb"))
        .arg("--config")
        .arg(config)
        .args(args)
        .env_remove("FLOWDB_ADDR")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute command");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_ref())
        .expect("Failed to write stdin");

    let output = child.wait_with_output().expect("Failed to wait for flowdb");

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}
