use std::fmt;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    FileReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    FileWriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    TomlParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    PlaceholderNotFound {
        path: PathBuf,
        placeholder: String,
    },
    ChangelogVersionMissing {
        path: PathBuf,
        version: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FileReadError { path, source } => {
                write!(f, "failed to read file: {} ({})", path.display(), source)
            }
            Error::FileWriteError { path, source } => {
                write!(f, "failed to write file: {} ({})", path.display(), source)
            }
            Error::TomlParseError { path, source } => {
                write!(
                    f,
                    "failed to parse toml file: {} ({})",
                    path.display(),
                    source
                )
            }
            Error::PlaceholderNotFound { path, placeholder } => {
                write!(
                    f,
                    "placeholder '{}' not found in template: {}",
                    placeholder,
                    path.display()
                )
            }
            Error::ChangelogVersionMissing { path, version } => {
                write!(
                    f,
                    "Update {} to mention version {}",
                    path.display(),
                    version
                )
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::FileReadError { source, .. } => Some(source),
            Error::FileWriteError { source, .. } => Some(source),
            Error::TomlParseError { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl Error {
    /// wrap a read failure with the path that caused it
    pub fn read<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Error::FileReadError {
            path: path.into(),
            source,
        }
    }
}
