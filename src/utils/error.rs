use thiserror::Error;

#[derive(Error, Debug)]
pub enum MotifError {
    #[error("Malformed partition at offset {offset}: {message} in '{text}'")]
    MalformedPartition {
        offset: usize,
        message: String,
        text: String,
    },

    #[error("No prior found for model '{0}'")]
    PriorNotFound(String),

    #[error("Site column ({sequence}, {position}) is out of range ({available} columns available)")]
    IndexOutOfRange {
        sequence: usize,
        position: usize,
        available: usize,
    },

    #[error("Domain error: {0}")]
    Domain(String),

    #[error("Invalid slice {start}..{end} of a motif of length {length}")]
    InvalidSlice {
        start: usize,
        end: usize,
        length: usize,
    },

    #[error("{0}")]
    Input(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MotifError {
    pub fn malformed(offset: usize, message: impl Into<String>, text: &str) -> Self {
        MotifError::MalformedPartition {
            offset,
            message: message.into(),
            text: text.to_string(),
        }
    }

    /// Prefixes input errors with the 1-based line they were found on.
    pub fn at_line(self, line_number: usize) -> Self {
        match self {
            MotifError::MalformedPartition {
                offset,
                message,
                text,
            } => MotifError::MalformedPartition {
                offset,
                message: format!("line {}: {}", line_number, message),
                text,
            },
            MotifError::Input(message) => {
                MotifError::Input(format!("Error at line {}: {}", line_number, message))
            }
            other => other,
        }
    }
}

impl From<String> for MotifError {
    fn from(message: String) -> Self {
        MotifError::Input(message)
    }
}
