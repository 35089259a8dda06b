#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn pa() -> Command {
    cargo_bin_cmd!("pointadmin")
}

/// A config path inside the system temp dir that does not exist yet
/// (so the built-in defaults are used).
pub fn missing_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_pointadmin.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `yaml` to a fresh config file and return its path.
pub fn write_config(name: &str, yaml: &str) -> String {
    let p = missing_config(name);
    fs::write(&p, yaml).expect("write config");
    p
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_pointadmin_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub const TWO_WORKERS: &str = r#"
admin_id: "a1"
admin_name: "Hanako Sato"
separator_char: "."
workers:
  - id: "1"
    name: "山田 太郎"
    email: worker@example.com
    joined_at: 2024-01-15
  - id: "2"
    name: "Jiro Suzuki"
    email: jiro@example.com
    points: 500
    total_earned: 800
    joined_at: 2024-02-01
    status: inactive
"#;
