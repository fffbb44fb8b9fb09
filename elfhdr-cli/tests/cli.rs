use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::{Command, Output};

fn fixture(name: &str, contents: &[u8]) -> PathBuf {
    let path = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(format!("cli-{name}"));
    std::fs::write(&path, contents).unwrap();
    path
}

fn elf_header(args: &[&OsStr]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_elf_header"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

/// x86_64 executable with entry point 0x401040.
fn elf64_exec() -> Vec<u8> {
    let mut bytes = vec![0u8; 64];
    bytes[..8].copy_from_slice(&[0x7f, b'E', b'L', b'F', 2, 1, 1, 0]);
    bytes[16..18].copy_from_slice(&2u16.to_le_bytes());
    bytes[18..20].copy_from_slice(&62u16.to_le_bytes());
    bytes[20..24].copy_from_slice(&1u32.to_le_bytes());
    bytes[24..32].copy_from_slice(&0x401040u64.to_le_bytes());
    bytes.extend_from_slice(&[0x90; 32]);
    bytes
}

#[test]
fn prints_header_of_elf64_executable() {
    let path = fixture("exec", &elf64_exec());
    let out = elf_header(&[path.as_os_str()]);

    assert!(out.status.success());
    assert!(out.stderr.is_empty());
    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        [
            "  Magic:   7f 45 4c 46 02 01 01 00 00 00 00 00 00 00 00 00",
            "  Class:                             ELF64",
            "  Data:                              2's complement, little endian",
            "  Version:                           1 (current)",
            "  OS/ABI:                            UNIX - System V",
            "  Type:                              EXEC (Executable file)",
            "  Entry point address:               0x401040",
        ]
    );
}

#[test]
fn big_endian_elf32_entry() {
    let mut bytes = vec![0u8; 52];
    bytes[..8].copy_from_slice(&[0x7f, b'E', b'L', b'F', 1, 2, 1, 0]);
    bytes[16..18].copy_from_slice(&3u16.to_be_bytes());
    bytes[24..28].copy_from_slice(&0x0001_0c00u32.to_be_bytes());
    let path = fixture("be32", &bytes);

    let out = elf_header(&[path.as_os_str()]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Class:                             ELF32\n"));
    assert!(stdout.contains("Data:                              2's complement, big endian\n"));
    assert!(stdout.contains("Type:                              DYN (Shared object file)\n"));
    assert!(stdout.contains("Entry point address:               0x10c00\n"));
}

#[test]
fn no_arguments_is_usage_error() {
    let out = elf_header(&[]);

    assert_eq!(out.status.code(), Some(98));
    assert!(out.stdout.is_empty());
    assert_eq!(String::from_utf8_lossy(&out.stderr), "Usage: elf_header filename\n");
}

#[test]
fn two_arguments_is_usage_error() {
    let path = fixture("two-args", &elf64_exec());
    let out = elf_header(&[path.as_os_str(), path.as_os_str()]);

    assert_eq!(out.status.code(), Some(98));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).starts_with("Usage: elf_header"));
}

#[test]
fn missing_file_exits_98() {
    let path = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("cli-does-not-exist");
    let out = elf_header(&[path.as_os_str()]);

    assert_eq!(out.status.code(), Some(98));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Can't read file"), "stderr: {stderr}");
}

#[test]
fn non_elf_input_is_decoded_anyway() {
    // Without --strict the magic number is not enforced and garbage is printed.
    let path = fixture("text", b"#!/bin/sh\necho this is not an ELF object at all\n");
    let out = elf_header(&[path.as_os_str()]);

    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.starts_with("  Magic:   23 21 2f 62 69 6e 2f 73 68 0a"));
    assert_eq!(stdout.lines().count(), 7);
}

#[test]
fn strict_rejects_non_elf_input() {
    let path = fixture("strict", b"MZ\x90\x00 not an ELF object, a PE stub instead ....");
    let out = elf_header(&[OsStr::new("--strict"), path.as_os_str()]);

    assert_eq!(out.status.code(), Some(98));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Not an ELF file"));
}

#[test]
fn strict_accepts_elf_input() {
    let path = fixture("strict-ok", &elf64_exec());
    let out = elf_header(&[OsStr::new("--strict"), path.as_os_str()]);

    assert!(out.status.success());
}

#[test]
fn json_output() {
    let path = fixture("json", &elf64_exec());
    let out = elf_header(&[OsStr::new("--json"), path.as_os_str()]);

    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["e_entry"], 0x401040);
    assert_eq!(value["e_machine"], 62);
    assert_eq!(value["class"], "Elf64");
    assert_eq!(value["e_type"], "Executable");
}

#[test]
fn hyphen_leading_path_is_a_filename() {
    let dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("cli-hyphen");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("-x"), elf64_exec()).unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_elf_header"))
        .arg("-x")
        .current_dir(&dir)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Entry point address:               0x401040\n"));
}
