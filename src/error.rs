//! Error types for DPX header I/O

use thiserror::Error;

use crate::types::SectionId;

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, DpxError>;

/// Errors raised while reading or writing a DPX header.
#[derive(Debug, Error)]
pub enum DpxError {
    /// The file signature does not match `SDPX` (case-insensitive)
    #[error("not a DPX file: signature {0:?} does not match \"SDPX\"")]
    InvalidMagic(String),

    /// No field with this name exists in the section
    #[error("unknown header field: {section}/{field}")]
    DescriptorNotFound {
        section: SectionId,
        field: String,
    },

    /// Malformed timecode string, unmatched enum code/name, or a value
    /// whose type or range does not fit the declared field width
    #[error("format error: {0}")]
    Format(String),

    /// A string value longer than the field's fixed byte length
    #[error("string value is {len} bytes, exceeds fixed field length {max}")]
    LengthExceeded { len: usize, max: usize },

    /// Operation issued after `close()`
    #[error("session is closed")]
    SessionClosed,

    /// Error propagated from the underlying resource
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
