// src/crawl/report.rs
// =============================================================================
// The summary of a finished crawl.
//
// #[derive(Serialize)] lets main print it with --json, the same way results
// are printed as JSON elsewhere in the CLI.
// =============================================================================

use serde::Serialize;

/// A page that was visited but could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedPage {
    pub url: String,
    pub error: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CrawlReport {
    pub seed: String,
    /// Every visited URL, in visit order (failed fetches included)
    pub visited: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failed: Vec<FailedPage>,
    pub limit_reached: bool,
    pub cancelled: bool,
}

impl CrawlReport {
    pub fn succeeded(&self) -> usize {
        self.visited.len() - self.failed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let report = CrawlReport {
            seed: "https://ex.com/".to_string(),
            visited: vec!["https://ex.com/".to_string()],
            failed: vec![],
            limit_reached: true,
            cancelled: false,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["seed"], "https://ex.com/");
        assert_eq!(json["visited"][0], "https://ex.com/");
        assert_eq!(json["limit_reached"], true);
        // empty failure list is omitted
        assert!(json.get("failed").is_none());
        assert_eq!(report.succeeded(), 1);
    }
}
