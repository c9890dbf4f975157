//! Feed locations.

use std::fmt;
use std::path::PathBuf;

use crate::FetchError;

/// Where a feed is read from: a remote URL or a local file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Http(String),
}

impl Source {
    /// Parse an `http(s)://` URL, a `file://` URL, or a plain path.
    pub fn parse(location: &str) -> Result<Self, FetchError> {
        let location = location.trim();
        if location.is_empty() {
            return Err(FetchError::InvalidUrl("empty location".to_string()));
        }

        if location.starts_with("http://") || location.starts_with("https://") {
            Ok(Source::Http(location.to_string()))
        } else if let Some(path) = location.strip_prefix("file://") {
            Ok(Source::File(PathBuf::from(path)))
        } else if location.contains("://") {
            Err(FetchError::InvalidUrl(location.to_string()))
        } else {
            Ok(Source::File(PathBuf::from(location)))
        }
    }

    /// A location under this one, e.g. `i18n/` joined with `ar.json`.
    pub fn join(&self, name: &str) -> Source {
        match self {
            Source::File(dir) => Source::File(dir.join(name)),
            Source::Http(base) => Source::Http(format!("{}/{}", base.trim_end_matches('/'), name)),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Http(url) => f.write_str(url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_locations() {
        assert_eq!(
            Source::parse("https://shop.example.com/products.json").unwrap(),
            Source::Http("https://shop.example.com/products.json".to_string())
        );
        assert_eq!(
            Source::parse("file:///srv/shop/config.json").unwrap(),
            Source::File(PathBuf::from("/srv/shop/config.json"))
        );
        assert_eq!(
            Source::parse("data/products.json").unwrap(),
            Source::File(PathBuf::from("data/products.json"))
        );
    }

    #[test]
    fn test_parse_rejects_unknown_scheme() {
        assert!(matches!(
            Source::parse("ftp://example.com/products.json"),
            Err(FetchError::InvalidUrl(_))
        ));
        assert!(Source::parse("  ").is_err());
    }

    #[test]
    fn test_join() {
        let remote = Source::parse("https://shop.example.com/i18n/").unwrap();
        assert_eq!(
            remote.join("ar.json"),
            Source::Http("https://shop.example.com/i18n/ar.json".to_string())
        );

        let local = Source::parse("site/i18n").unwrap();
        assert_eq!(local.join("en.json"), Source::File(PathBuf::from("site/i18n/en.json")));
    }
}
