//! Open Graph metadata extraction from fetched HTML.
//!
//! Link-type news articles preview their target page by reading Open Graph
//! meta tags. Extraction is regex-based and tolerant: tags may put
//! `property` before `content` or the other way around, use single or
//! double quotes, and use `name=` instead of `property=`. Missing tags
//! simply yield `None`; the page `<title>` is the fallback for the title.

use regex::RegexBuilder;
use serde::Serialize;

/// Open Graph metadata extracted from a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OgData {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub site_name: Option<String>,
    /// Canonical URL from `og:url`, falling back to the requested URL.
    pub url: String,
}

/// Extract Open Graph metadata from `html`.
///
/// `requested_url` is the URL the caller fetched; it is used when the page
/// declares no `og:url`.
pub fn extract_og_data(html: &str, requested_url: &str) -> OgData {
    let title = meta_content(html, "og:title").or_else(|| page_title(html));
    let description =
        meta_content(html, "og:description").or_else(|| meta_content(html, "description"));
    let image = meta_content(html, "og:image");
    let site_name = meta_content(html, "og:site_name");
    let url = meta_content(html, "og:url").unwrap_or_else(|| requested_url.to_string());

    OgData {
        title,
        description,
        image,
        site_name,
        url,
    }
}

/// Find the content of a `<meta>` tag by its `property` or `name` attribute.
///
/// Tries attribute order `property ... content` first, then the reverse.
fn meta_content(html: &str, property: &str) -> Option<String> {
    let prop = regex::escape(property);
    let patterns = [
        format!(
            r#"<meta[^>]*(?:property|name)\s*=\s*["']{prop}["'][^>]*content\s*=\s*["']([^"']*)["']"#
        ),
        format!(
            r#"<meta[^>]*content\s*=\s*["']([^"']*)["'][^>]*(?:property|name)\s*=\s*["']{prop}["']"#
        ),
    ];

    for pattern in &patterns {
        let re = match RegexBuilder::new(pattern).case_insensitive(true).build() {
            Ok(re) => re,
            Err(_) => continue,
        };
        if let Some(caps) = re.captures(html) {
            let value = decode_entities(&caps[1]);
            let value = value.trim();
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }
    None
}

/// Extract the `<title>` element text, if any.
fn page_title(html: &str) -> Option<String> {
    let re = RegexBuilder::new(r"<title[^>]*>([^<]*)</title>")
        .case_insensitive(true)
        .build()
        .ok()?;
    let caps = re.captures(html)?;
    let value = decode_entities(&caps[1]);
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Decode the handful of HTML entities that commonly appear in meta content.
fn decode_entities(value: &str) -> String {
    value
        .replace("&amp;", "&")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>Fallback Title</title>
  <meta property="og:title" content="Aniversario de la escuela" />
  <meta property="og:description" content="Acto por los 75 anios &amp; festejos" />
  <meta property="og:image" content="https://example.com/banner.jpg" />
  <meta property="og:site_name" content="Diario Local" />
  <meta property="og:url" content="https://example.com/nota/75-anios" />
</head>
<body></body>
</html>"#;

    #[test]
    fn test_extracts_all_og_tags() {
        let data = extract_og_data(SAMPLE, "https://example.com/nota/75-anios?ref=x");
        assert_eq!(data.title.as_deref(), Some("Aniversario de la escuela"));
        assert_eq!(
            data.description.as_deref(),
            Some("Acto por los 75 anios & festejos")
        );
        assert_eq!(data.image.as_deref(), Some("https://example.com/banner.jpg"));
        assert_eq!(data.site_name.as_deref(), Some("Diario Local"));
        assert_eq!(data.url, "https://example.com/nota/75-anios");
    }

    #[test]
    fn test_title_falls_back_to_title_element() {
        let html = "<html><head><title> Solo titulo </title></head></html>";
        let data = extract_og_data(html, "https://example.com/");
        assert_eq!(data.title.as_deref(), Some("Solo titulo"));
        assert!(data.description.is_none());
        assert_eq!(data.url, "https://example.com/");
    }

    #[test]
    fn test_content_before_property_order() {
        let html = r#"<meta content="Reversed" property="og:title">"#;
        let data = extract_og_data(html, "https://example.com/");
        assert_eq!(data.title.as_deref(), Some("Reversed"));
    }

    #[test]
    fn test_name_attribute_and_single_quotes() {
        let html = "<meta name='description' content='Descripcion plana'>";
        let data = extract_og_data(html, "https://example.com/");
        assert_eq!(data.description.as_deref(), Some("Descripcion plana"));
    }

    #[test]
    fn test_empty_page_yields_requested_url_only() {
        let data = extract_og_data("", "https://example.com/vacia");
        assert!(data.title.is_none());
        assert!(data.description.is_none());
        assert!(data.image.is_none());
        assert!(data.site_name.is_none());
        assert_eq!(data.url, "https://example.com/vacia");
    }
}
