use serde::{Deserialize, Serialize};

/// One `<source>` candidate of the avatar `<picture>` element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSourceViewModel {
    pub mime: String,
    pub srcset: String,
}

/// Resolved avatar image at fixed dimensions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarViewModel {
    /// Fallback URL (source encoding)
    pub src: String,
    /// Alternative encodings, best first
    pub sources: Vec<ImageSourceViewModel>,
    pub width: u32,
    pub height: u32,
    pub quality: u8,
    pub alt: String,
}

/// Biographical paragraph content; only present when the author has a name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorBioViewModel {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BioViewModel {
    pub avatar: AvatarViewModel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorBioViewModel>,
}
