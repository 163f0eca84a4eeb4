//! Image variants stored by the remote service

use serde::{Deserialize, Serialize};

/// Paths of the stored renditions of an uploaded image
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageVariants {
    pub original: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small: Option<String>,
}

impl ImageVariants {
    /// Smallest available rendition, for list thumbnails
    pub fn thumbnail(&self) -> &str {
        self.small.as_deref().unwrap_or(&self.original)
    }
}

/// Resolve an image reference to something a view can load.
///
/// Absolute http(s) and data URLs pass through; anything else is treated
/// as a path on the asset host.
pub fn resolve_asset_url(asset_base_url: &str, reference: &str) -> String {
    if reference.starts_with("http://")
        || reference.starts_with("https://")
        || reference.starts_with("data:")
    {
        return reference.to_string();
    }

    format!(
        "{}/{}",
        asset_base_url.trim_end_matches('/'),
        reference.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_path() {
        assert_eq!(
            resolve_asset_url("https://cdn.example.com/", "/uploads/cat.png"),
            "https://cdn.example.com/uploads/cat.png"
        );
    }

    #[test]
    fn test_resolve_passes_absolute_urls_through() {
        let data_url = "data:image/png;base64,iVBORw0KGgo=";
        assert_eq!(resolve_asset_url("https://cdn", data_url), data_url);
        assert_eq!(
            resolve_asset_url("https://cdn", "http://other/img.jpg"),
            "http://other/img.jpg"
        );
    }

    #[test]
    fn test_thumbnail_falls_back_to_original() {
        let image = ImageVariants {
            original: "uploads/a.png".to_string(),
            small: None,
        };
        assert_eq!(image.thumbnail(), "uploads/a.png");
    }
}
