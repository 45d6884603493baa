// src/sitemap/render.rs
// =============================================================================
// Renders visited URLs as a sitemap:
//
//   <?xml version="1.0" encoding="UTF-8"?>
//   <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//     <url>
//       <loc>https://example.com/</loc>
//     </url>
//   </urlset>
//
// One <url> per visited URL, in visit order, with only a <loc> inside.
// URLs may contain '&' (query strings), so every <loc> is XML-escaped.
// =============================================================================

use quick_xml::escape::escape;

const XML_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";
const URLSET_OPEN: &str = "<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n";
const URLSET_CLOSE: &str = "</urlset>";

/// A rendered sitemap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapDocument {
    xml: String,
    url_count: usize,
}

impl SitemapDocument {
    pub fn as_str(&self) -> &str {
        &self.xml
    }

    pub fn url_count(&self) -> usize {
        self.url_count
    }
}

pub fn render<S: AsRef<str>>(urls: &[S]) -> SitemapDocument {
    let mut xml = String::with_capacity(XML_HEADER.len() + URLSET_OPEN.len() + urls.len() * 64);
    xml.push_str(XML_HEADER);
    xml.push_str(URLSET_OPEN);

    for url in urls {
        xml.push_str("  <url>\n    <loc>");
        xml.push_str(&escape(url.as_ref()));
        xml.push_str("</loc>\n  </url>\n");
    }

    xml.push_str(URLSET_CLOSE);

    SitemapDocument {
        xml,
        url_count: urls.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locs(doc: &SitemapDocument) -> Vec<&str> {
        doc.as_str()
            .split("<loc>")
            .skip(1)
            .filter_map(|rest| rest.split("</loc>").next())
            .collect()
    }

    #[test]
    fn test_render_exact_output() {
        let doc = render(&["https://ex.com/", "https://ex.com/a"]);
        let expected = concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
            "<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
            "  <url>\n    <loc>https://ex.com/</loc>\n  </url>\n",
            "  <url>\n    <loc>https://ex.com/a</loc>\n  </url>\n",
            "</urlset>",
        );
        assert_eq!(doc.as_str(), expected);
        assert_eq!(doc.url_count(), 2);
    }

    #[test]
    fn test_one_loc_per_url_in_order() {
        let urls = vec![
            "https://ex.com/".to_string(),
            "https://ex.com/z".to_string(),
            "https://ex.com/b".to_string(),
        ];
        let doc = render(&urls);
        assert_eq!(locs(&doc), vec!["https://ex.com/", "https://ex.com/z", "https://ex.com/b"]);
        assert_eq!(doc.as_str().matches("<url>").count(), 3);
    }

    #[test]
    fn test_reserved_characters_escaped() {
        let doc = render(&["https://ex.com/?a=1&b=<2>"]);
        assert_eq!(locs(&doc), vec!["https://ex.com/?a=1&amp;b=&lt;2&gt;"]);
    }

    #[test]
    fn test_empty_sitemap() {
        let doc = render::<&str>(&[]);
        assert!(doc.as_str().ends_with(
            "<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n</urlset>"
        ));
        assert_eq!(doc.url_count(), 0);
    }
}
