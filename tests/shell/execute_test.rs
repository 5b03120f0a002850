//! Tests for running command lines with `-e`.

use super::common::run_flowdb;

#[test]
fn test_execute_single_line() {
    let (code, stdout, _) = run_flowdb(&["-e", "table name=orders"], "");
    assert_eq!(code, 0);
    assert_eq!(stdout, "table info: orders\n");
}

#[test]
fn test_execute_runs_lines_in_order() {
    let (code, stdout, _) = run_flowdb(
        &[
            "-e",
            "config set addr=10.0.0.1:7777",
            "-e",
            "config show",
        ],
        "",
    );
    assert_eq!(code, 0);
    assert_eq!(
        stdout,
        "server address updated to 10.0.0.1:7777\nCurrent config:\n  server address: 10.0.0.1:7777\n"
    );
}

#[test]
fn test_execute_longest_prefix() {
    let (code, stdout, _) = run_flowdb(&["-e", "s3 add name=prod", "-e", "s3"], "");
    assert_eq!(code, 0);
    assert!(stdout.starts_with("added S3 profile 'prod'\nS3 profiles commands:"));
}

#[test]
fn test_execute_unknown_command_keeps_going() {
    let (code, stdout, _) = run_flowdb(&["-e", "frobnicate", "-e", "tables"], "");
    assert_eq!(code, 0);
    assert_eq!(stdout, "error: unknown command: frobnicate\nlist tables\n");
}

#[test]
fn test_execute_quoted_arguments() {
    let (code, stdout, _) = run_flowdb(
        &["-e", r#"s3 add name="prod backups" bucket='b 1'"#, "-e", "s3 list"],
        "",
    );
    assert_eq!(code, 0);
    assert!(stdout.contains("1  prod backups  b 1"));
}

#[test]
fn test_execute_bind_error() {
    let (code, stdout, _) = run_flowdb(&["-e", "head table=t limit=abc"], "");
    assert_eq!(code, 0);
    assert_eq!(stdout, "error: invalid int for limit: \"abc\"\n");
}
