use std::fmt;

/// Result type for folio-providers operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the provider layer
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// TOML parsing failed (site.toml or frontmatter)
    Toml(toml::de::Error),

    /// Content parsing failed (missing fence, bad date, unusable file name)
    Parse(String),

    /// Site root is missing or not a directory
    Site(String),

    /// Slug derivation produced an invalid slug
    Slug(folio_types::Error),

    /// Walkdir error
    WalkDir(walkdir::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Toml(err) => write!(f, "TOML error: {}", err),
            Error::Parse(msg) => write!(f, "Parse error: {}", msg),
            Error::Site(msg) => write!(f, "Site error: {}", msg),
            Error::Slug(err) => write!(f, "Slug error: {}", err),
            Error::WalkDir(err) => write!(f, "Directory traversal error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Toml(err) => Some(err),
            Error::Slug(err) => Some(err),
            Error::WalkDir(err) => Some(err),
            Error::Parse(_) | Error::Site(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Toml(err)
    }
}

impl From<folio_types::Error> for Error {
    fn from(err: folio_types::Error) -> Self {
        Error::Slug(err)
    }
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::WalkDir(err)
    }
}
