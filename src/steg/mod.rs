//! Steganography engines and method dispatch.
//!
//! Both engines share the same wire format for the hidden payload:
//!
//! ```text
//! [u32 BE length][length message bytes][extension bytes][0x00]
//! ```
//!
//! The extension piece and its terminator are present only when
//! extension-carrying framing is requested. The engines stream this frame
//! bit by bit (see [`crate::bits`]); the materialized form produced by
//! [`frame_payload`] exists for the encrypted path, where the frame is
//! sealed as one buffer before embedding.

pub mod lsbi;
pub mod lsbx;

use crate::bits::BitSource;
use crate::error::{BitveilError, Result};

/// The number of bytes used for the embedded length prefix.
pub(crate) const LENGTH_PREFIX_BYTES: usize = 4;

/// A steganography method selection.
///
/// A tagged variant instead of trait objects: call sites stay uniform and
/// the embedding loops dispatch once, not per bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StegMethod {
    /// Fixed-width embedding in the N lowest bits of every carrier byte,
    /// N in 1..=8.
    Lsbx(u8),
    /// Single-bit embedding in the G and B channel bytes only, with
    /// per-pattern inversion to balance the hidden-bit distribution.
    Lsbi,
}

impl StegMethod {
    /// Minimum carrier size, in bytes, able to hold `payload_len` message
    /// bytes (plus framing).
    pub fn capacity(self, payload_len: usize, extension: Option<&str>) -> usize {
        match self {
            Self::Lsbx(bit_count) => lsbx::capacity(bit_count, payload_len, extension),
            Self::Lsbi => lsbi::capacity(payload_len, extension),
        }
    }

    /// Largest message, in bytes, a carrier of `carrier_len` bytes can
    /// hold after framing overhead.
    pub fn max_payload(self, carrier_len: usize, extension: Option<&str>) -> usize {
        match self {
            Self::Lsbx(bit_count) => lsbx::max_payload(bit_count, carrier_len, extension),
            Self::Lsbi => lsbi::max_payload(carrier_len, extension),
        }
    }

    /// Hide `message` (and optionally `extension`) in `carrier`, mutating
    /// it in place.
    ///
    /// Fails with [`BitveilError::CarrierTooSmall`] before any mutation if
    /// the carrier cannot hold the framed payload.
    pub fn embed(self, carrier: &mut [u8], message: &[u8], extension: Option<&str>) -> Result<()> {
        match self {
            Self::Lsbx(bit_count) => lsbx::embed(bit_count, carrier, message, extension),
            Self::Lsbi => lsbi::embed(carrier, message, extension),
        }
    }

    /// Recover a hidden message from `carrier`; when `with_extension` is
    /// set, the NUL-terminated extension suffix is read as well.
    pub fn extract(self, carrier: &[u8], with_extension: bool) -> Result<Extracted> {
        match self {
            Self::Lsbx(bit_count) => lsbx::extract(bit_count, carrier, with_extension),
            Self::Lsbi => lsbi::extract(carrier, with_extension),
        }
    }
}

impl std::str::FromStr for StegMethod {
    type Err = BitveilError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.to_lowercase();
        match normalized.trim() {
            "lsbi" => Ok(Self::Lsbi),
            other => match other.strip_prefix("lsb").and_then(|n| n.parse::<u8>().ok()) {
                Some(bit_count) if (1..=8).contains(&bit_count) => Ok(Self::Lsbx(bit_count)),
                _ => Err(BitveilError::UnsupportedMethod(s.to_string())),
            },
        }
    }
}

impl std::fmt::Display for StegMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lsbx(bit_count) => write!(f, "lsb{}", bit_count),
            Self::Lsbi => write!(f, "lsbi"),
        }
    }
}

/// The result of a successful extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    pub message: Vec<u8>,
    /// Present when extension-carrying framing was requested.
    pub extension: Option<String>,
}

/// Framing overhead in bytes for an optional extension suffix (the bytes
/// of the extension plus its NUL terminator).
pub(crate) fn extension_overhead(extension: Option<&str>) -> usize {
    extension.map_or(0, |ext| ext.len() + 1)
}

const NUL: [u8; 1] = [0];

/// The framed payload as a lazy bit stream:
/// length prefix, message, then the optional extension and terminator.
pub(crate) fn payload_bits<'a>(message: &'a [u8], extension: Option<&'a str>) -> BitSource<'a> {
    let framed = BitSource::from_u32(message.len() as u32).chain(BitSource::from_bytes(message));
    match extension {
        Some(ext) => framed
            .chain(BitSource::from_bytes(ext.as_bytes()))
            .chain(BitSource::from_bytes(&NUL)),
        None => framed,
    }
}

/// Materialize the payload frame `[u32 BE length][data][extension][0x00]`.
///
/// Used on the encrypted path, where the frame is sealed as a whole before
/// the engine adds its own length prefix for the ciphertext.
pub fn frame_payload(data: &[u8], extension: &str) -> Vec<u8> {
    let mut framed =
        Vec::with_capacity(LENGTH_PREFIX_BYTES + data.len() + extension.len() + NUL.len());
    framed.extend_from_slice(&(data.len() as u32).to_be_bytes());
    framed.extend_from_slice(data);
    framed.extend_from_slice(extension.as_bytes());
    framed.push(0);
    framed
}

/// Parse a payload frame back into its data and extension.
pub fn parse_payload(bytes: &[u8]) -> Result<(Vec<u8>, String)> {
    if bytes.len() < LENGTH_PREFIX_BYTES {
        return Err(BitveilError::InvalidFormat(
            "payload frame shorter than its length prefix".to_string(),
        ));
    }

    let length = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as usize;
    let rest = &bytes[LENGTH_PREFIX_BYTES..];
    if length > rest.len() {
        return Err(BitveilError::InvalidFormat(format!(
            "frame length {} exceeds the {} bytes present",
            length,
            rest.len()
        )));
    }

    let (data, suffix) = rest.split_at(length);
    let terminator = suffix
        .iter()
        .position(|&b| b == 0)
        .ok_or_else(|| BitveilError::InvalidFormat("extension terminator missing".to_string()))?;
    let extension = std::str::from_utf8(&suffix[..terminator])
        .map_err(|_| BitveilError::InvalidFormat("extension is not valid UTF-8".to_string()))?;
    if !extension.is_empty() && !extension.starts_with('.') {
        return Err(BitveilError::InvalidFormat(format!(
            "extension {:?} does not start with '.'",
            extension
        )));
    }

    Ok((data.to_vec(), extension.to_string()))
}
