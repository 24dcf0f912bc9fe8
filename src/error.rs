use thiserror::Error;

#[derive(Error, Debug)]
pub enum BitveilError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid BMP header: {0}")]
    InvalidHeader(String),

    #[error("Invalid payload format: {0}")]
    InvalidFormat(String),

    #[error("Carrier too small: {required} bytes required, {available} available")]
    CarrierTooSmall { required: usize, available: usize },

    #[error("Unknown steganography method: {0}. Expected lsb1..lsb8 or lsbi")]
    UnsupportedMethod(String),

    #[error("Encryption error: {0}")]
    Crypto(String),
}

pub type Result<T> = std::result::Result<T, BitveilError>;
