// src/crawl/scope.rs
// =============================================================================
// Decides which discovered URLs the crawler may follow.
//
// The rule is a literal string-prefix test against the seed URL. It is not a
// host or path-segment comparison: with seed "https://x.com/a" both
// "https://x.com/a/b" and "https://x.com/ab" are in scope, while
// "http://x.com/a" (different scheme) is not.
// =============================================================================

#[derive(Debug, Clone)]
pub struct Scope {
    prefix: String,
}

impl Scope {
    pub fn new(seed: &str) -> Self {
        Self {
            prefix: seed.to_string(),
        }
    }

    pub fn contains(&self, url: &str) -> bool {
        url.starts_with(&self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_prefix_in_scope() {
        let scope = Scope::new("https://ex.com/");
        assert!(scope.contains("https://ex.com/"));
        assert!(scope.contains("https://ex.com/a/b?c=d"));
    }

    #[test]
    fn test_other_origin_out_of_scope() {
        let scope = Scope::new("https://ex.com/");
        assert!(!scope.contains("https://other.com/x"));
        assert!(!scope.contains("http://ex.com/"));
    }

    #[test]
    fn test_prefix_is_literal() {
        let scope = Scope::new("https://x.com/a");
        assert!(scope.contains("https://x.com/a/b"));
        assert!(scope.contains("https://x.com/ab"));
        assert!(!scope.contains("https://x.com/"));
    }
}
