use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    MissingPath = 1,
    InvalidDocument = 2,
    InvalidMetadata = 3,
    Io = 4,
}

impl ExitCode {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Success),
            1 => Some(Self::MissingPath),
            2 => Some(Self::InvalidDocument),
            3 => Some(Self::InvalidMetadata),
            4 => Some(Self::Io),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum PaperError {
    #[error("{what} does not exist: {}", path.display())]
    MissingPath { what: &'static str, path: PathBuf },

    #[error("no front matter block delimited by '---' in {}", path.display())]
    MissingFrontMatter { path: PathBuf },

    #[error("invalid front matter: {0}")]
    FrontMatter(#[source] serde_yaml::Error),

    #[error("invalid contributor directory {}: {source}", path.display())]
    Contributors {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to render paper front matter: {0}")]
    RenderMetadata(#[source] serde_yaml::Error),

    #[error("unrecognized time_estimation '{0}' (expected an h, H, m or M unit)")]
    UnrecognizedDuration(String),

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

impl PaperError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::MissingPath { .. } => ExitCode::MissingPath,
            Self::MissingFrontMatter { .. } | Self::FrontMatter(_) | Self::Contributors { .. } => {
                ExitCode::InvalidDocument
            }
            Self::UnrecognizedDuration(_) | Self::RenderMetadata(_) => ExitCode::InvalidMetadata,
            Self::Io(_) => ExitCode::Io,
        }
    }
}

pub type PaperResult<T> = Result<T, PaperError>;
