use std::path::PathBuf;

/// Failure while turning the embedded payload into a file on disk.
#[derive(Debug)]
pub enum ProduceError {
    /// The payload text is not valid base64.
    Decode(base64::DecodeError),
    /// The output file could not be created or written.
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ProduceError {
    pub fn is_decode(&self) -> bool {
        matches!(self, ProduceError::Decode(_))
    }

    pub fn is_write(&self) -> bool {
        matches!(self, ProduceError::Write { .. })
    }
}

impl std::fmt::Display for ProduceError {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            ProduceError::Decode(_) => write!(f, "embedded favicon is not valid base64"),
            ProduceError::Write { path, .. } => {
                write!(f, "failed to write {}", path.display())
            }
        }
    }
}

impl std::error::Error for ProduceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProduceError::Decode(e) => Some(e),
            ProduceError::Write { source, .. } => Some(source),
        }
    }
}

impl From<base64::DecodeError> for ProduceError {
    fn from(e: base64::DecodeError) -> Self {
        ProduceError::Decode(e)
    }
}
