// src/report.rs
// =============================================================================
// Turns a finished CrawlResult into something a person (or a script) can read.
//
// Two formats:
// - text: the broken-link list, the candidate list and a one-line summary
// - json: the CrawlResult serialized with serde_json
//
// The functions return Strings instead of printing, so main decides where
// the output goes and tests can look at it.
// =============================================================================

use crate::crawl::CrawlResult;

// Renders the report as pretty-printed JSON
pub fn render_json(result: &CrawlResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}

// Renders the report as plain text sections
pub fn render_text(result: &CrawlResult) -> String {
    let mut out = String::new();

    out.push_str("Broken Links\n");
    out.push_str(&"=".repeat(60));
    out.push('\n');
    if result.broken.is_empty() {
        out.push_str("No broken links found!\n");
    }
    for link in &result.broken {
        out.push_str(&format!("[{}] {}\n", link.status, link.url));
    }

    out.push('\n');
    out.push_str("Access Control Candidates\n");
    out.push_str(&"=".repeat(60));
    out.push('\n');
    if result.sensitive.is_empty() {
        out.push_str("No obvious BAC candidates found.\n");
    }
    for url in &result.sensitive {
        out.push_str(url);
        out.push('\n');
    }

    out.push('\n');
    if result.cancelled {
        out.push_str(&format!(
            "Scan cancelled. Checked {} URLs before stopping.\n",
            result.total_visited
        ));
    } else {
        out.push_str(&format!(
            "Scan finished! Checked {} URLs.\n",
            result.total_visited
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawl::BrokenLink;

    fn sample() -> CrawlResult {
        CrawlResult {
            total_visited: 3,
            broken: vec![BrokenLink {
                status: 404,
                url: "http://example.com/404page".to_string(),
            }],
            sensitive: vec!["http://example.com/admin/users?id=5".to_string()],
            cancelled: false,
        }
    }

    #[test]
    fn test_text_lists_findings() {
        let text = render_text(&sample());
        assert!(text.contains("[404] http://example.com/404page\n"));
        assert!(text.contains("http://example.com/admin/users?id=5\n"));
        assert!(text.ends_with("Scan finished! Checked 3 URLs.\n"));
    }

    #[test]
    fn test_text_empty_report() {
        let text = render_text(&CrawlResult {
            total_visited: 1,
            ..CrawlResult::default()
        });
        assert!(text.contains("No broken links found!"));
        assert!(text.contains("No obvious BAC candidates found."));
        assert!(text.contains("Checked 1 URLs."));
    }

    #[test]
    fn test_text_cancelled() {
        let text = render_text(&CrawlResult {
            cancelled: true,
            ..sample()
        });
        assert!(text.contains("Scan cancelled. Checked 3 URLs before stopping."));
    }

    #[test]
    fn test_json_round_trips() {
        let json = render_json(&sample()).unwrap();
        let back: CrawlResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }
}
