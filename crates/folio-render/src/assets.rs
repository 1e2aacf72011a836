use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

use crate::view_models::{AvatarViewModel, ImageSourceViewModel};

/// Fixed avatar dimensions in logical units
pub const AVATAR_WIDTH: u32 = 50;
pub const AVATAR_HEIGHT: u32 = 50;

/// Fixed encoding quality factor for generated variants
pub const AVATAR_QUALITY: u8 = 95;

/// Site-relative path of the source asset
pub const AVATAR_ASSET_PATH: &str = "images/profile-pic.jpg";

pub const AVATAR_ALT: &str = "Profile picture";

/// Encoding format candidates, best first. `Auto` is the source encoding
/// and becomes the `<img>` fallback rather than a `<source>` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Avif,
    Webp,
    Auto,
}

pub const FORMAT_CANDIDATES: [ImageFormat; 3] =
    [ImageFormat::Avif, ImageFormat::Webp, ImageFormat::Auto];

impl ImageFormat {
    pub fn mime(&self) -> Option<&'static str> {
        match self {
            ImageFormat::Avif => Some("image/avif"),
            ImageFormat::Webp => Some("image/webp"),
            ImageFormat::Auto => None,
        }
    }

    fn extension(&self) -> Option<&'static str> {
        match self {
            ImageFormat::Avif => Some("avif"),
            ImageFormat::Webp => Some("webp"),
            ImageFormat::Auto => None,
        }
    }
}

/// Resolves the fixed local avatar asset into display variants.
///
/// The site generator this replaces produced actual re-encoded images at
/// build time; here resolution only derives the variant URLs and a
/// content fingerprint for cache busting when the source file is
/// readable. Missing files degrade to unversioned URLs, never an error.
pub struct AvatarAsset {
    site_root: PathBuf,
}

impl AvatarAsset {
    pub fn new(site_root: impl Into<PathBuf>) -> Self {
        Self {
            site_root: site_root.into(),
        }
    }

    pub fn resolve(&self) -> AvatarViewModel {
        let version = fingerprint(&self.site_root.join(AVATAR_ASSET_PATH));

        let url = |relative: &str| match &version {
            Some(v) => format!("/{}?v={}", relative, v),
            None => format!("/{}", relative),
        };

        let sources = FORMAT_CANDIDATES
            .iter()
            .filter_map(|format| {
                let mime = format.mime()?;
                let ext = format.extension()?;
                Some(ImageSourceViewModel {
                    mime: mime.to_string(),
                    srcset: url(&variant_path(AVATAR_ASSET_PATH, ext)),
                })
            })
            .collect();

        AvatarViewModel {
            src: url(AVATAR_ASSET_PATH),
            sources,
            width: AVATAR_WIDTH,
            height: AVATAR_HEIGHT,
            quality: AVATAR_QUALITY,
            alt: AVATAR_ALT.to_string(),
        }
    }
}

fn variant_path(relative: &str, extension: &str) -> String {
    Path::new(relative)
        .with_extension(extension)
        .to_string_lossy()
        .to_string()
}

/// Short content hash of the asset, if it can be read.
fn fingerprint(path: &Path) -> Option<String> {
    let bytes = std::fs::read(path).ok()?;
    let digest = format!("{:x}", Sha256::digest(&bytes));
    Some(digest[..8].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_path() {
        assert_eq!(
            variant_path("images/profile-pic.jpg", "webp"),
            "images/profile-pic.webp"
        );
    }

    #[test]
    fn test_resolve_without_asset_file() {
        let avatar = AvatarAsset::new("/nonexistent-site-root").resolve();
        assert_eq!(avatar.src, "/images/profile-pic.jpg");
        assert_eq!(avatar.width, 50);
        assert_eq!(avatar.height, 50);
        assert_eq!(avatar.sources.len(), 2);
        assert_eq!(avatar.sources[0].mime, "image/avif");
        assert_eq!(avatar.sources[0].srcset, "/images/profile-pic.avif");
        assert_eq!(avatar.sources[1].mime, "image/webp");
    }

    #[test]
    fn test_resolve_with_asset_file_adds_fingerprint() {
        let dir = tempfile::tempdir().unwrap();
        let images = dir.path().join("images");
        std::fs::create_dir_all(&images).unwrap();
        std::fs::write(images.join("profile-pic.jpg"), b"fake image bytes").unwrap();

        let avatar = AvatarAsset::new(dir.path()).resolve();
        assert!(avatar.src.starts_with("/images/profile-pic.jpg?v="));
        let version = avatar.src.rsplit("?v=").next().unwrap();
        assert_eq!(version.len(), 8);
        assert!(avatar.sources[0].srcset.ends_with(version));

        // Same bytes, same fingerprint
        let again = AvatarAsset::new(dir.path()).resolve();
        assert_eq!(avatar.src, again.src);
    }
}
