// src/links/resolve.rs
// =============================================================================
// Resolves a (possibly relative) href against the URL of the page it was
// found on, the same way a browser does.
//
// Examples:
//   base = "https://example.com/page/"
//   href = "/docs"              -> "https://example.com/docs"
//   href = "../other"           -> "https://example.com/other"
//   href = "https://other.com"  -> "https://other.com/"
//   href = "#section"           -> Err (same page)
//   href = "mailto:a@b.c"       -> Err (not http/https)
//
// No other normalization happens here: query strings, fragments on real
// paths and trailing slashes are kept as the url crate serializes them.
// =============================================================================

use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("invalid base URL '{base}': {source}")]
    InvalidBase {
        base: String,
        #[source]
        source: url::ParseError,
    },

    #[error("cannot join '{href}': {source}")]
    InvalidHref {
        href: String,
        #[source]
        source: url::ParseError,
    },

    #[error("'{0}' only points within the current page")]
    FragmentOnly(String),

    #[error("unsupported scheme '{scheme}' in '{href}'")]
    UnsupportedScheme { href: String, scheme: String },
}

pub fn resolve(base: &str, href: &str) -> Result<String, ResolveError> {
    if href.starts_with('#') {
        return Err(ResolveError::FragmentOnly(href.to_string()));
    }

    let base_url = Url::parse(base).map_err(|source| ResolveError::InvalidBase {
        base: base.to_string(),
        source,
    })?;

    // join() handles absolute hrefs too: they simply replace the base
    let joined = base_url
        .join(href)
        .map_err(|source| ResolveError::InvalidHref {
            href: href.to_string(),
            source,
        })?;

    match joined.scheme() {
        "http" | "https" => Ok(joined.to_string()),
        scheme => Err(ResolveError::UnsupportedScheme {
            href: href.to_string(),
            scheme: scheme.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_absolute_link() {
        let result = resolve("https://example.com/page", "https://other.com").unwrap();
        assert_eq!(result, "https://other.com/");
    }

    #[test]
    fn test_resolve_relative_link() {
        let result = resolve("https://example.com/page", "/docs").unwrap();
        assert_eq!(result, "https://example.com/docs");
    }

    #[test]
    fn test_resolve_parent_link() {
        let result = resolve("https://example.com/page/sub/", "../about").unwrap();
        assert_eq!(result, "https://example.com/page/about");
    }

    #[test]
    fn test_query_and_fragment_kept() {
        let result = resolve("https://example.com/", "a?x=1#frag").unwrap();
        assert_eq!(result, "https://example.com/a?x=1#frag");
    }

    #[test]
    fn test_skip_anchor() {
        let err = resolve("https://example.com/page", "#section").unwrap_err();
        assert!(matches!(err, ResolveError::FragmentOnly(_)));
    }

    #[test]
    fn test_skip_mailto() {
        let err = resolve("https://example.com/page", "mailto:test@example.com").unwrap_err();
        assert!(matches!(err, ResolveError::UnsupportedScheme { ref scheme, .. } if scheme == "mailto"));
    }

    #[test]
    fn test_malformed_href() {
        let err = resolve("https://example.com/", "http://[broken").unwrap_err();
        assert!(matches!(err, ResolveError::InvalidHref { .. }));
    }

    #[test]
    fn test_invalid_base() {
        let err = resolve("not a url", "/docs").unwrap_err();
        assert!(matches!(err, ResolveError::InvalidBase { .. }));
    }
}
