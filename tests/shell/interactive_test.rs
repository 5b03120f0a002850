//! Tests for the interactive loop over stdin.

use super::common::run_flowdb;

#[test]
fn test_prompt_until_eof() {
    let (code, stdout, _) = run_flowdb(&[], "tables\n");
    assert_eq!(code, 0);
    assert_eq!(stdout, "flowdb> list tables\nflowdb> \n");
}

#[test]
fn test_quit_ends_session() {
    let (code, stdout, _) = run_flowdb(&[], "quit\ntables\n");
    assert_eq!(code, 0);
    assert_eq!(stdout, "flowdb> ");
}

#[test]
fn test_help_builtin() {
    let (code, stdout, _) = run_flowdb(&[], "help\nexit\n");
    assert_eq!(code, 0);
    assert!(stdout.contains("General:"));
    assert!(stdout.contains("config reset"));
}

#[test]
fn test_addr_flag_overrides_default() {
    let (code, stdout, _) = run_flowdb(&["--addr", "db.internal:7000"], "config show\n");
    assert_eq!(code, 0);
    assert!(stdout.contains("server address: db.internal:7000"));
}

#[test]
fn test_invalid_utf8_line_does_not_end_session() {
    let (code, stdout, _) = run_flowdb(&[], b"table name=\xff\ntables\n");
    assert_eq!(code, 0);
    assert_eq!(
        stdout,
        "flowdb> table info: \u{FFFD}\nflowdb> list tables\nflowdb> \n"
    );
}

#[test]
fn test_parse_errors_keep_stderr_quiet() {
    let (code, stdout, stderr) = run_flowdb(&[], "frobnicate\nquery limit=x\n");
    assert_eq!(code, 0);
    assert_eq!(
        stdout,
        "flowdb> error: unknown command: frobnicate\n\
         flowdb> error: invalid int for limit: \"x\"\n\
         flowdb> \n"
    );
    assert_eq!(stderr, "");
}
