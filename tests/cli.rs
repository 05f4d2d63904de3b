//! Tests for the binary: argument parsing, input errors and exit codes.
//!
//! None of these reach the network; each run ends before any query is sent.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use clap::Parser;
use mail_posture::{ColorChoice, Config, LogFormat, LogLevel, OutputFormat};

fn run_binary(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_mail_posture"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start binary");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().expect("Failed to wait for binary")
}

#[test]
fn test_defaults() {
    let config = Config::try_parse_from(["mail_posture"]).unwrap();
    assert_eq!(config.domain, None);
    assert_eq!(config.dns_timeout_seconds, 5);
    assert_eq!(config.http_timeout_seconds, 5);
    assert_eq!(config.max_redirects, 0);
    assert_eq!(config.dkim_selectors, vec!["default", "selector1", "selector2"]);
    assert_eq!(config.format, OutputFormat::Text);
    assert_eq!(config.color, ColorChoice::Auto);
    assert!(matches!(config.log_level, LogLevel::Warn));
    assert!(matches!(config.log_format, LogFormat::Plain));
}

#[test]
fn test_all_flags() {
    let config = Config::try_parse_from([
        "mail_posture",
        "example.org",
        "--dns-timeout-seconds",
        "2",
        "--http-timeout-seconds",
        "9",
        "--user-agent",
        "probe/1.0",
        "--max-redirects",
        "3",
        "--dkim-selector",
        "google",
        "--dkim-selector",
        "k1",
        "--format",
        "json",
        "--color",
        "never",
        "--log-level",
        "debug",
        "--log-format",
        "json",
    ])
    .unwrap();
    assert_eq!(config.domain.as_deref(), Some("example.org"));
    assert_eq!(config.dns_timeout_seconds, 2);
    assert_eq!(config.http_timeout_seconds, 9);
    assert_eq!(config.user_agent, "probe/1.0");
    assert_eq!(config.max_redirects, 3);
    assert_eq!(config.dkim_selectors, vec!["google", "k1"]);
    assert_eq!(config.format, OutputFormat::Json);
    assert_eq!(config.color, ColorChoice::Never);
    assert!(matches!(config.log_level, LogLevel::Debug));
    assert!(matches!(config.log_format, LogFormat::Json));
}

#[test]
fn test_zero_timeout_rejected() {
    assert!(Config::try_parse_from(["mail_posture", "--dns-timeout-seconds", "0"]).is_err());
    assert!(Config::try_parse_from(["mail_posture", "--http-timeout-seconds", "0"]).is_err());
}

#[test]
fn test_invalid_domain_argument_exits_1() {
    let output = run_binary(&["not a domain"], "");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("mail_posture error: Invalid domain 'not a domain'"),
        "stderr was: {stderr}"
    );
    assert!(output.stdout.is_empty());
}

#[test]
fn test_ip_address_argument_exits_1() {
    let output = run_binary(&["192.0.2.1"], "");
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("IP addresses are not domains"));
}

#[test]
fn test_closed_stdin_exits_1() {
    let output = run_binary(&[], "");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Enter domain to check: "
    );
    assert!(String::from_utf8_lossy(&output.stderr)
        .contains("No domain entered before end of input"));
}

#[test]
fn test_repeated_bad_input_exits_1() {
    let output = run_binary(&["--log-level", "error"], "\nbad domain\n-x-.com\n");
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("Enter domain to check: ").count(), 3);
    assert!(String::from_utf8_lossy(&output.stderr).contains("No valid domain after 3 attempts"));
}

#[test]
fn test_usage_error_exits_2() {
    let output = run_binary(&["--format", "xml"], "");
    assert_eq!(output.status.code(), Some(2));
}
