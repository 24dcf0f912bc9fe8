use bitveil::Bitmap;
use std::error::Error;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

fn bitveil_command() -> Command {
    Command::new(env!("CARGO_BIN_EXE_bitveil"))
}

fn run(args: &[&str]) -> Result<Output, Box<dyn Error>> {
    Ok(bitveil_command().args(args).output()?)
}

fn write_carrier(path: &Path, width: u32, height: u32) {
    let len = (width * height * 3) as usize;
    let pixels: Vec<u8> = (0..len).map(|i| (i * 29 % 256) as u8).collect();
    Bitmap::new(width, height, pixels)
        .unwrap()
        .write_to_file(path)
        .expect("failed to write carrier fixture");
}

#[test]
fn cli_end_to_end_flow() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("secret.txt");
    let carrier = dir.path().join("carrier.bmp");
    let stego = dir.path().join("stego.bmp");
    let recovered = dir.path().join("recovered");

    fs::write(&input, b"Pixels make excellent couriers.")?;
    write_carrier(&carrier, 32, 32);

    // Embed
    let embed = run(&[
        "embed",
        "--method",
        "lsb2",
        input.to_str().unwrap(),
        carrier.to_str().unwrap(),
        stego.to_str().unwrap(),
    ])?;
    assert!(
        embed.status.success(),
        "embed command failed: {}",
        String::from_utf8_lossy(&embed.stderr)
    );
    assert!(
        String::from_utf8(embed.stdout.clone())?.contains("Embedded"),
        "embed output missing confirmation"
    );
    assert!(stego.exists(), "stego file should exist after embed");

    // Info should report geometry and capacity
    let info = run(&["info", stego.to_str().unwrap()])?;
    let info_stdout = String::from_utf8(info.stdout)?;
    assert!(info_stdout.contains("Dimensions: 32x32 pixels"));
    assert!(info_stdout.contains("lsb2:"));

    // Extract
    let extract = run(&[
        "extract",
        "--method",
        "lsb2",
        stego.to_str().unwrap(),
        recovered.to_str().unwrap(),
    ])?;
    assert!(
        extract.status.success(),
        "extract command failed: {}",
        String::from_utf8_lossy(&extract.stderr)
    );

    let recovered_file = dir.path().join("recovered.txt");
    assert!(
        recovered_file.exists(),
        "recovered file should carry the original extension"
    );
    assert_eq!(fs::read(&recovered_file)?, b"Pixels make excellent couriers.");

    Ok(())
}

#[test]
fn cli_sealed_flow_requires_the_passphrase() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("secret.md");
    let carrier = dir.path().join("carrier.bmp");
    let stego = dir.path().join("stego.bmp");

    fs::write(&input, b"# sealed notes")?;
    write_carrier(&carrier, 48, 48);

    let embed = run(&[
        "embed",
        "--method",
        "lsbi",
        "--passphrase",
        "hunter2",
        input.to_str().unwrap(),
        carrier.to_str().unwrap(),
        stego.to_str().unwrap(),
    ])?;
    assert!(
        embed.status.success(),
        "sealed embed failed: {}",
        String::from_utf8_lossy(&embed.stderr)
    );

    // Wrong passphrase must fail and write nothing
    let wrong = run(&[
        "extract",
        "--method",
        "lsbi",
        "--passphrase",
        "hunter3",
        stego.to_str().unwrap(),
        dir.path().join("nope").to_str().unwrap(),
    ])?;
    assert!(!wrong.status.success());
    assert!(String::from_utf8_lossy(&wrong.stderr).contains("Error"));
    assert!(!dir.path().join("nope.md").exists());

    // Right passphrase round-trips
    let extract = run(&[
        "extract",
        "--method",
        "lsbi",
        "--passphrase",
        "hunter2",
        stego.to_str().unwrap(),
        dir.path().join("recovered").to_str().unwrap(),
    ])?;
    assert!(
        extract.status.success(),
        "sealed extract failed: {}",
        String::from_utf8_lossy(&extract.stderr)
    );
    assert_eq!(fs::read(dir.path().join("recovered.md"))?, b"# sealed notes");

    Ok(())
}

#[test]
fn cli_rejects_oversized_payload() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("big.bin");
    let carrier = dir.path().join("carrier.bmp");
    let stego = dir.path().join("stego.bmp");

    fs::write(&input, vec![0x55u8; 10_000])?;
    write_carrier(&carrier, 8, 8);

    let embed = run(&[
        "embed",
        input.to_str().unwrap(),
        carrier.to_str().unwrap(),
        stego.to_str().unwrap(),
    ])?;
    assert!(!embed.status.success());
    assert!(String::from_utf8_lossy(&embed.stderr).contains("Carrier too small"));
    assert!(!stego.exists());

    Ok(())
}

#[test]
fn cli_rejects_unknown_method() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let embed = run(&[
        "embed",
        "--method",
        "lsb9",
        "in.txt",
        "carrier.bmp",
        dir.path().join("out.bmp").to_str().unwrap(),
    ])?;
    assert!(!embed.status.success());
    assert!(String::from_utf8_lossy(&embed.stderr).contains("lsb1..lsb8"));

    Ok(())
}

#[test]
fn version_flag_prints_build_information() -> Result<(), Box<dyn Error>> {
    let output = run(&["--version"])?;
    assert!(
        output.status.success(),
        "version command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.starts_with("bitveil "),
        "unexpected version line: {}",
        stdout
    );
    assert!(
        stdout.contains("build"),
        "version output should include build value: {}",
        stdout
    );

    Ok(())
}

#[test]
fn running_without_subcommand_displays_help() -> Result<(), Box<dyn Error>> {
    let output = bitveil_command().output()?;
    assert!(
        output.status.success(),
        "help output failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage"), "help should print usage: {}", stdout);
    assert!(stdout.contains("embed"), "help should list subcommands");

    Ok(())
}
