use pkgup_util::errors::PkgupError;
use pkgup_util::process::CommandBuilder;

#[cfg(unix)]
#[test]
fn test_builder_simple_command() {
    let output = CommandBuilder::new("echo").arg("hello").exec().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "hello");
}

#[cfg(unix)]
#[test]
fn test_builder_conditional_arg() {
    let output = CommandBuilder::new("echo")
        .arg("ls")
        .arg_if(true, "--prod")
        .arg_if(false, "--dev")
        .exec()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "ls --prod");
}

#[cfg(unix)]
#[test]
fn test_builder_with_cwd() {
    let tmp = tempfile::TempDir::new().unwrap();
    std::fs::write(tmp.path().join("pkgup_cwd_test.marker"), "ok").unwrap();

    let output = CommandBuilder::new("ls")
        .arg("pkgup_cwd_test.marker")
        .cwd(tmp.path())
        .exec()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("pkgup_cwd_test.marker"));
}

#[cfg(unix)]
#[test]
fn test_exec_ignores_exit_status() {
    let output = CommandBuilder::new("sh")
        .args(["-c", "echo partial; exit 1"])
        .exec()
        .unwrap();
    assert!(!output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "partial");
}

#[cfg(unix)]
#[test]
fn test_exec_checked_reports_stderr() {
    let err = CommandBuilder::new("sh")
        .args(["-c", "echo boom >&2; exit 3"])
        .exec_checked()
        .unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("exited with 3"), "got: {msg}");
    assert!(msg.contains("boom"), "got: {msg}");
}

#[cfg(unix)]
#[test]
fn test_output_limit() {
    let err = CommandBuilder::new("echo")
        .arg("more than eight bytes")
        .max_output(8)
        .exec()
        .unwrap_err();
    assert!(matches!(err, PkgupError::Process { .. }));
}

#[test]
fn test_builder_nonexistent_program() {
    let result = CommandBuilder::new("nonexistent_program_xyz_123").exec();
    assert!(result.is_err());
}

#[test]
fn test_display_joins_program_and_args() {
    let cmd = CommandBuilder::new("npm").args(["ls", "--json"]);
    assert_eq!(cmd.display(), "npm ls --json");
}
