//! Storage URL resolution for blog images.

/// Fallback image served when a post has no stored image path.
pub const DEFAULT_IMAGE: &str = "/blog/default-image.webp";

/// Fallback avatar for authors without a stored avatar path.
pub const DEFAULT_AUTHOR_AVATAR: &str = "/blog/authors/default.webp";

/// Paths under this prefix are static site files, not object-storage keys.
const STATIC_PREFIX: &str = "/blog/";

/// Resolve a stored image path to a servable URL.
///
/// Absolute URLs and static `/blog/` paths pass through unchanged; anything
/// else is treated as an object-storage key and prefixed with the storage
/// base URL, with a leading `/` guaranteed on the key.
pub fn resolve_asset_url(path: Option<&str>, storage_base: &str) -> String {
    let Some(path) = path.filter(|p| !p.is_empty()) else {
        return DEFAULT_IMAGE.to_string();
    };

    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }

    if path.starts_with(STATIC_PREFIX) {
        return path.to_string();
    }

    if path.starts_with('/') {
        format!("{}{}", storage_base, path)
    } else {
        format!("{}/{}", storage_base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://storage.example.com/object/public/blog-images";

    #[test]
    fn test_absolute_url_passthrough() {
        assert_eq!(
            resolve_asset_url(Some("https://cdn.example.com/a.webp"), BASE),
            "https://cdn.example.com/a.webp"
        );
        assert_eq!(
            resolve_asset_url(Some("http://cdn.example.com/a.webp"), BASE),
            "http://cdn.example.com/a.webp"
        );
    }

    #[test]
    fn test_static_prefix_passthrough() {
        assert_eq!(
            resolve_asset_url(Some("/blog/cover.webp"), BASE),
            "/blog/cover.webp"
        );
    }

    #[test]
    fn test_relative_path_gets_base_and_leading_slash() {
        assert_eq!(
            resolve_asset_url(Some("covers/a.webp"), BASE),
            format!("{}/covers/a.webp", BASE)
        );
        assert_eq!(
            resolve_asset_url(Some("/covers/a.webp"), BASE),
            format!("{}/covers/a.webp", BASE)
        );
    }

    #[test]
    fn test_missing_path_uses_default() {
        assert_eq!(resolve_asset_url(None, BASE), DEFAULT_IMAGE);
        assert_eq!(resolve_asset_url(Some(""), BASE), DEFAULT_IMAGE);
    }
}
