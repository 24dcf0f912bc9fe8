//! Bitveil - LSB steganography for uncompressed 24-bit BMP carriers
//!
//! Hides an arbitrary binary payload inside the pixel array of a bitmap
//! and recovers it losslessly. Two engines are provided behind one
//! dispatch surface:
//!
//! - **LSBX** (`lsb1`..`lsb8`): a fixed number of low bits per carrier
//!   byte holds hidden data.
//! - **LSBI** (`lsbi`): one bit per green/blue channel byte, with
//!   per-pattern inversion flags that keep the number of changed pixel
//!   bits, and with it the statistical footprint, at a minimum.
//!
//! ## Payload pipeline
//!
//! ```text
//! Input → Frame (length ++ data ++ extension ++ NUL) → [Seal] → Engine → Pixel array → BMP
//! ```
//!
//! - **Frame**: a 4-byte big-endian length prefix, the message bytes, and
//!   an optional NUL-terminated file extension, streamed bit by bit
//! - **Seal**: optional AES-256-GCM under a passphrase-derived key; the
//!   engines treat it as an opaque byte transform
//! - **Engine**: LSBX or LSBI, mutating the carrier in place
//! - **BMP**: padding-normalized pixel array I/O with round-trip faithful
//!   headers
//!
//! ## Example
//!
//! ```no_run
//! use bitveil::cli::{embed_message, extract_message, EmbedOptions, ExtractOptions};
//! use bitveil::StegMethod;
//! use std::path::Path;
//!
//! // Hide a file
//! let options = EmbedOptions {
//!     method: StegMethod::Lsbi,
//!     ..Default::default()
//! };
//! embed_message(
//!     Path::new("secret.pdf"),
//!     Path::new("holiday.bmp"),
//!     Path::new("holiday_out.bmp"),
//!     &options,
//! ).unwrap();
//!
//! // Recover it
//! let options = ExtractOptions {
//!     method: StegMethod::Lsbi,
//!     passphrase: None,
//! };
//! extract_message(
//!     Path::new("holiday_out.bmp"),
//!     Path::new("recovered"),
//!     &options,
//! ).unwrap();
//! ```

pub mod bits;
pub mod bmp;
pub mod cli;
pub mod crypto;
pub mod error;
pub mod steg;

pub use bmp::{Bitmap, BmpFileHeader, BmpInfoHeader};
pub use error::{BitveilError, Result};
pub use steg::{Extracted, StegMethod};
