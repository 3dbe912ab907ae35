//! Error types for DDS decoding.

use thiserror::Error;

/// Errors that can occur when decoding DDS files.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error, including a stream that ends inside the pixel data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Common library error.
    #[error("{0}")]
    Common(#[from] texdec_common::Error),

    /// Invalid DDS magic.
    #[error("invalid DDS magic: expected 'DDS ', got {0:?}")]
    InvalidMagic([u8; 4]),

    /// The stream ended inside the fixed headers.
    #[error("truncated DDS header")]
    TruncatedHeader,

    /// Invalid DDS header.
    #[error("invalid DDS header: {0}")]
    InvalidHeader(String),

    /// A compressed block could not be decoded.
    #[error("block {index}: {source}")]
    Block {
        index: usize,
        #[source]
        source: texdec_bcn::Error,
    },

    /// The pixel format is recognized but has no decoder.
    #[error("unsupported pixel format: {0}")]
    UnsupportedFormat(String),

    /// No stored surface matches the requested slice and size.
    #[error("no surface for depth slice {depth_slice} at {}", describe_size(.dimensions))]
    SliceNotFound {
        depth_slice: u32,
        dimensions: Option<(u32, u32)>,
    },
}

/// Coarse classification of [`Error`] used by the lenient entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad magic, truncated header or malformed block data.
    Structural,
    /// Recognized format without a decoder.
    UnsupportedFormat,
    /// Requested slice or size is not stored in the file.
    NotFound,
    /// Underlying stream failure.
    Io,
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Io(_) => ErrorKind::Io,
            Error::Common(e) if e.is_truncation() => ErrorKind::Structural,
            Error::Common(texdec_common::Error::Io(_)) => ErrorKind::Io,
            Error::Common(_)
            | Error::InvalidMagic(_)
            | Error::TruncatedHeader
            | Error::InvalidHeader(_)
            | Error::Block { .. } => ErrorKind::Structural,
            Error::UnsupportedFormat(_) => ErrorKind::UnsupportedFormat,
            Error::SliceNotFound { .. } => ErrorKind::NotFound,
        }
    }
}

fn describe_size(dimensions: &Option<(u32, u32)>) -> String {
    match dimensions {
        Some((w, h)) => format!("{w}x{h}"),
        None => "base level".to_string(),
    }
}

/// Result type for DDS operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(Error::TruncatedHeader.kind(), ErrorKind::Structural);
        assert_eq!(Error::InvalidMagic(*b"PNG ").kind(), ErrorKind::Structural);
        assert_eq!(
            Error::UnsupportedFormat("BC6H".into()).kind(),
            ErrorKind::UnsupportedFormat
        );
        assert_eq!(
            Error::SliceNotFound { depth_slice: 2, dimensions: None }.kind(),
            ErrorKind::NotFound
        );

        let eof = std::io::Error::from(std::io::ErrorKind::UnexpectedEof);
        assert_eq!(Error::Io(eof).kind(), ErrorKind::Io);

        let truncated = texdec_common::Error::UnexpectedEof { needed: 4, available: 1 };
        assert_eq!(Error::Common(truncated).kind(), ErrorKind::Structural);
    }

    #[test]
    fn test_not_found_message() {
        let err = Error::SliceNotFound { depth_slice: 1, dimensions: Some((8, 4)) };
        assert_eq!(err.to_string(), "no surface for depth slice 1 at 8x4");
    }
}
