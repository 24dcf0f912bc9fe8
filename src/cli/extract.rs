use crate::bmp::Bitmap;
use crate::crypto;
use crate::error::Result;
use crate::steg::{parse_payload, StegMethod};
use std::path::{Path, PathBuf};

/// Options for the extract command
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    pub method: StegMethod,
    /// Must match the passphrase used at embed time, if any.
    pub passphrase: Option<String>,
}

/// Recover the hidden file from a carrier bitmap.
///
/// The recovered extension is appended to `output_path`; the path
/// actually written is returned.
pub fn extract_message(
    carrier_path: &Path,
    output_path: &Path,
    options: &ExtractOptions,
) -> Result<PathBuf> {
    let bitmap = Bitmap::read_from_file(carrier_path)?;

    let (message, extension) = match &options.passphrase {
        Some(passphrase) => {
            let extracted = options.method.extract(bitmap.data(), false)?;
            let opened = crypto::open(&extracted.message, passphrase)?;
            parse_payload(&opened)?
        }
        None => {
            let extracted = options.method.extract(bitmap.data(), true)?;
            (extracted.message, extracted.extension.unwrap_or_default())
        }
    };

    let target = append_extension(output_path, &extension);
    std::fs::write(&target, &message)?;
    Ok(target)
}

fn append_extension(path: &Path, extension: &str) -> PathBuf {
    let mut target = path.as_os_str().to_os_string();
    target.push(extension);
    PathBuf::from(target)
}
