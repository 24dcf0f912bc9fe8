use crate::bmp::Bitmap;
use crate::error::Result;
use crate::steg::StegMethod;
use std::path::Path;

/// Display information about a BMP carrier
pub fn show_info(path: &Path) -> Result<String> {
    let bitmap = Bitmap::read_from_file(path)?;
    let carrier_len = bitmap.data().len();

    let mut output = String::new();

    output.push_str("Bitveil Carrier Information\n");
    output.push_str("===========================\n\n");

    output.push_str(&format!("File: {}\n", path.display()));
    output.push_str(&format!(
        "Dimensions: {}x{} pixels\n",
        bitmap.width(),
        bitmap.height()
    ));
    output.push_str(&format!("Pixel bytes: {}\n", carrier_len));
    output.push('\n');

    output.push_str("Payload capacity (plain embedding, no extension):\n");
    for bit_count in 1..=8u8 {
        let method = StegMethod::Lsbx(bit_count);
        output.push_str(&format!(
            "  lsb{}: {}\n",
            bit_count,
            format_size(method.max_payload(carrier_len, None) as u64)
        ));
    }
    output.push_str(&format!(
        "  lsbi: {}\n",
        format_size(StegMethod::Lsbi.max_payload(carrier_len, None) as u64)
    ));

    Ok(output)
}

fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else if bytes < 1024 * 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else {
        format!("{:.1} GB", bytes as f64 / (1024.0 * 1024.0 * 1024.0))
    }
}
