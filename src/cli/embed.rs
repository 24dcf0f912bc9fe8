use crate::bmp::Bitmap;
use crate::crypto;
use crate::error::{BitveilError, Result};
use crate::steg::{frame_payload, StegMethod};
use std::path::Path;

/// Options for the embed command
#[derive(Debug, Clone)]
pub struct EmbedOptions {
    pub method: StegMethod,
    /// When set, the framed payload is sealed before embedding and no
    /// plaintext extension framing is written to the carrier.
    pub passphrase: Option<String>,
}

impl Default for EmbedOptions {
    fn default() -> Self {
        Self {
            method: StegMethod::Lsbx(1),
            passphrase: None,
        }
    }
}

/// Hide `input_path` inside the carrier bitmap and write the result.
/// Returns the number of bytes handed to the embedding engine.
pub fn embed_message(
    input_path: &Path,
    carrier_path: &Path,
    output_path: &Path,
    options: &EmbedOptions,
) -> Result<usize> {
    let message = std::fs::read(input_path)?;
    let extension = file_extension(input_path)?;
    let mut bitmap = Bitmap::read_from_file(carrier_path)?;

    let embedded = match &options.passphrase {
        Some(passphrase) => {
            let sealed = crypto::seal(&frame_payload(&message, &extension), passphrase)?;
            options.method.embed(bitmap.data_mut(), &sealed, None)?;
            sealed.len()
        }
        None => {
            options
                .method
                .embed(bitmap.data_mut(), &message, Some(&extension))?;
            message.len()
        }
    };

    bitmap.write_to_file(output_path)?;
    Ok(embedded)
}

/// The input file's extension, leading dot included. The extension is
/// embedded alongside the message so extraction can restore it.
fn file_extension(path: &Path) -> Result<String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if !ext.is_empty() => Ok(format!(".{}", ext)),
        _ => Err(BitveilError::InvalidFormat(format!(
            "input file {} has no extension",
            path.display()
        ))),
    }
}
