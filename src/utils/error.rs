use thiserror::Error;

#[derive(Error, Debug)]
pub enum QrError {
    #[error("QR encoding failed: {0}")]
    Encoding(#[from] qrcode::types::QrError),

    #[error("Unsupported or corrupt logo image: {0}")]
    ImageDecode(#[from] image::ImageError),

    #[error("Invalid frame parameter {field}: '{value}' ({reason})")]
    InvalidFrameSpec {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid request field {field}: {reason}")]
    InvalidRequest { field: String, reason: String },

    #[error("Failed to write output artifact: {0}")]
    Write(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },
}

pub type Result<T> = std::result::Result<T, QrError>;
