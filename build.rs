use std::fs;
use std::path::Path;
use std::process::Command;

fn read_trimmed(path: &str, fallback: &str) -> String {
    let path = Path::new(path);
    if !path.exists() {
        return fallback.to_string();
    }
    fs::read_to_string(path)
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|_| fallback.to_string())
}

fn git_short_hash() -> String {
    Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

fn main() {
    // Monotonic build number, persisted next to the sources
    let build_number: u64 = read_trimmed("BUILD_NUMBER", "0").parse().unwrap_or(0) + 1;
    fs::write("BUILD_NUMBER", build_number.to_string()).expect("Failed to write build number");

    let version = read_trimmed("VERSION", "0.1.0");
    let profile = match std::env::var("PROFILE").as_deref() {
        Ok("release") => "release",
        _ => "development",
    };

    println!("cargo:rustc-env=BITVEIL_VERSION={}", version);
    println!("cargo:rustc-env=BITVEIL_BUILD={}", build_number);
    println!("cargo:rustc-env=BITVEIL_PROFILE={}", profile);
    println!("cargo:rustc-env=BITVEIL_GIT_HASH={}", git_short_hash());

    println!("cargo:rerun-if-changed=BUILD_NUMBER");
    println!("cargo:rerun-if-changed=VERSION");
    println!("cargo:rerun-if-env-changed=PROFILE");
}
