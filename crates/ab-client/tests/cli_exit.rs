//! Integration tests for the `ab-client` binary's exit status.
//!
//! These run the compiled binary as a child process, so they see exactly what
//! a shell would: the exit code and what was printed to stderr.

use std::path::PathBuf;
use std::process::Command;

use ab_core::encode_packet;
use ab_core::protocol::messages::{PlayerLeavePacket, PlayerNewPacket, ServerPacket};

fn scratch(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("ab-client-cli-{}-{name}", std::process::id()))
}

fn client() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ab-client"));
    cmd.env_remove("RUST_LOG")
        .env_remove("AB_LOG_LEVEL")
        .arg("--config")
        .arg(scratch("absent-config.toml"));
    cmd
}

#[test]
fn test_missing_capture_exits_with_error() {
    // Arrange
    let capture = scratch("missing-capture.bin");
    let _ = std::fs::remove_file(&capture);

    // Act
    let output = client().arg(&capture).output().expect("binary must launch");

    // Assert
    assert!(!output.status.success(), "a missing capture must not exit 0");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("reading capture"), "{stderr}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("replay finished"), "{stdout}");
}

#[test]
fn test_readable_capture_exits_successfully() {
    // Arrange
    let capture = scratch("session.bin");
    let mut bytes = encode_packet(&ServerPacket::PlayerNew(PlayerNewPacket {
        id: 1,
        name: "solo".to_string(),
        pos_x: 0.0,
        pos_y: 0.0,
        rot: 0.0,
    }))
    .unwrap();
    bytes.extend(encode_packet(&ServerPacket::PlayerLeave(PlayerLeavePacket { id: 1 })).unwrap());
    std::fs::write(&capture, bytes).unwrap();

    // Act
    let output = client().arg(&capture).output().expect("binary must launch");
    let _ = std::fs::remove_file(&capture);

    // Assert
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
}
