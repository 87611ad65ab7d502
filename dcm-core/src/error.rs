use thiserror::Error;

/// Main error type for DICOM stream operations
#[derive(Error, Debug)]
pub enum DicomError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unexpected end of data: need {needed} bytes, {remaining} remaining")]
    EndOfData { needed: u64, remaining: u64 },

    #[error("limit of {requested} bytes exceeds the {remaining} bytes remaining")]
    LimitOverrun { requested: u64, remaining: u64 },

    #[error("tag {0} not found in dictionary")]
    TagNotFound(crate::tag::Tag),

    #[error("no tag named {0:?} in dictionary")]
    TagNameNotFound(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl DicomError {
    /// Whether this error marks running out of data under the current bound.
    pub fn is_end_of_data(&self) -> bool {
        matches!(self, DicomError::EndOfData { .. })
    }
}

/// Result type alias for DICOM stream operations
pub type DicomResult<T> = Result<T, DicomError>;
