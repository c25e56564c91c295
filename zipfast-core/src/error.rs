use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZipfastError {
    #[error("failed to read {name}: {source}")]
    Read {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {name}: declared {declared} bytes, got {actual}")]
    SizeMismatch {
        name: String,
        declared: u64,
        actual: u64,
    },

    #[error("archive entry name must not be empty")]
    InvalidEntryName,

    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Format error: {0}")]
    Format(String),

    #[error("failed to save {filename}: {source}")]
    Save {
        filename: String,
        #[source]
        source: std::io::Error,
    },

    #[error("job cancelled")]
    Cancelled,

    #[error("Config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification for callers that only care which stage failed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Read,
    Encoding,
    /// An existing archive could not be read back.
    Format,
    Save,
    Cancelled,
    Config,
    Io,
}

impl ZipfastError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Read { .. } | Self::SizeMismatch { .. } => ErrorKind::Read,
            Self::InvalidEntryName | Self::Encoding(_) | Self::Zip(_) => ErrorKind::Encoding,
            Self::Format(_) => ErrorKind::Format,
            Self::Save { .. } => ErrorKind::Save,
            Self::Cancelled => ErrorKind::Cancelled,
            Self::Config(_) => ErrorKind::Config,
            Self::Io(_) => ErrorKind::Io,
        }
    }

    pub fn is_read_error(&self) -> bool {
        self.kind() == ErrorKind::Read
    }

    pub fn is_encoding_error(&self) -> bool {
        self.kind() == ErrorKind::Encoding
    }

    /// Name of the input file the error refers to, when there is one.
    pub fn file_name(&self) -> Option<&str> {
        match self {
            Self::Read { name, .. } | Self::SizeMismatch { name, .. } => Some(name),
            Self::Save { filename, .. } => Some(filename),
            _ => None,
        }
    }
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, ZipfastError>;
