//! End-to-end tests of the `namecheap-cli` binary (no network).

use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

const JSON_INPUT: &str = r#"{
  "Status": "OK",
  "CommandResponse": {
    "DomainDNSGetHostsResult": {
      "Domain": "example.com",
      "host": [
        { "HostId": "4", "Name": "www", "Type": "A", "Address": "192.0.2.4", "TTL": "1799", "IsActive": "true" }
      ]
    }
  }
}
"#;

fn cli() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_namecheap-cli"));
    // Keep the caller's environment from leaking options in.
    for (key, _) in std::env::vars() {
        if key.starts_with("NAMECHEAP_") {
            command.env_remove(key);
        }
    }
    command
}

fn run_with_stdin(command: &mut Command, stdin: &str) -> Output {
    let mut child = command
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn version_prints_package_version() {
    let output = cli().arg("version").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim(), format!("namecheap-cli {}", env!("CARGO_PKG_VERSION")));
}

#[test]
fn convert_file_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("hosts.json");
    let output = dir.path().join("hosts.yaml");
    fs::write(&input, JSON_INPUT).unwrap();

    let status = cli()
        .args(["-q", "convert", "--input-format", "json", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .status()
        .unwrap();

    assert!(status.success());
    let yaml = fs::read_to_string(&output).unwrap();
    assert!(yaml.contains("Domain: example.com"), "{yaml}");
    assert!(yaml.contains("TTL: '1799'"), "{yaml}");
}

#[test]
fn convert_stdin_to_stdout() {
    let output = run_with_stdin(
        cli().args(["c", "--input-format", "json", "--output-format", "xml", "-s", "example", "-t", "org"]),
        &format!("{JSON_INPUT}\n\n{{ ignored"),
    );

    assert!(output.status.success(), "{output:?}");
    let xml = String::from_utf8(output.stdout).unwrap();
    assert!(xml.contains("Domain=\"example.org\""), "{xml}");
    assert!(xml.contains("HostId=\"4\""), "{xml}");
}

#[test]
fn convert_same_format_fails_before_reading() {
    let output = cli()
        .args(["convert", "--input-format", "yaml", "--output-format", "YAML"])
        .stdin(Stdio::null())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Input format is the same as output format"), "{stderr}");
}

#[test]
fn existing_output_needs_force() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("hosts.json");
    let output = dir.path().join("hosts.yaml");
    fs::write(&input, JSON_INPUT).unwrap();
    fs::write(&output, "keep").unwrap();

    let refused = cli()
        .args(["convert", "--input-format", "json", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .output()
        .unwrap();
    assert_eq!(refused.status.code(), Some(1));
    assert_eq!(fs::read_to_string(&output).unwrap(), "keep");

    let forced = cli()
        .args(["convert", "--force", "--input-format", "json", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .status()
        .unwrap();
    assert!(forced.success());
    assert_ne!(fs::read_to_string(&output).unwrap(), "keep");
}

#[test]
fn get_without_credentials_fails() {
    let output = cli().args(["-q", "get", "-s", "example"]).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(
        stderr.contains("Missing required option(s): --key, --username, --tld"),
        "{stderr}"
    );
}

#[test]
fn options_from_environment() {
    let output = cli()
        .args(["-q", "get"])
        .env("NAMECHEAP_SLD", "example")
        .env("NAMECHEAP_TLD", "com")
        .env("NAMECHEAP_USERNAME", "alice")
        .output()
        .unwrap();

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Missing required option(s): --key"), "{stderr}");
    assert!(!stderr.contains("--username"), "{stderr}");
}
