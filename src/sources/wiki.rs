//! Package records from the rendered package wiki page.
//!
//! Only list items that start with a link to a `owner/name` repository are
//! recognised:
//!
//! ```html
//! <li><a href="https://github.com/clibs/buffer">clibs/buffer</a> - tiny c buffer</li>
//! ```
//!
//! Anything else on the page (headings, prose, links to other pages) is ignored.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::core::package::{Package, PackageList};

/// Cache key under which the wiki page is stored.
pub const CACHE_KEY: &str = "clib-search.cache";

static ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<li>\s*<a\s[^>]*?href="(?P<href>[^"]+)"[^>]*>.*?</a>(?P<rest>.*?)</li>"#)
        .expect("list item pattern is valid")
});

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));

/// Extract package records in page order.
pub fn parse_packages(html: &str) -> PackageList {
    ITEM.captures_iter(html)
        .filter_map(|caps| {
            let href = decode_entities(&caps["href"]);
            let repo = repo_from_url(&href)?;
            let desc = description(&caps["rest"]);
            Some(Package::new(repo, href, desc))
        })
        .collect()
}

/// `owner/name` from a repository URL, if the URL has exactly two path segments.
fn repo_from_url(href: &str) -> Option<String> {
    let url = Url::parse(href).ok()?;
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }

    let segments: Vec<&str> = url.path_segments()?.filter(|s| !s.is_empty()).collect();
    match segments.as_slice() {
        [owner, name] => Some(format!("{}/{}", owner, name)),
        _ => None,
    }
}

/// Plain-text description following the link, without the leading dash.
fn description(rest: &str) -> String {
    let text = decode_entities(&TAG.replace_all(rest, ""));
    let text = text.trim_start();
    let text = text
        .strip_prefix('-')
        .or_else(|| text.strip_prefix('\u{2013}'))
        .or_else(|| text.strip_prefix('\u{2014}'))
        .unwrap_or(text);

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn decode_entities(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&ndash;", "\u{2013}")
        .replace("&mdash;", "\u{2014}")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
<h2>String manipulation</h2>
<ul>
<li><a href="https://github.com/clibs/buffer">clibs/buffer</a> - tiny c buffer</li>
<li><a href="https://github.com/jwerle/occurrences.c" rel="nofollow">jwerle/occurrences.c</a> &ndash; counts <code>needle</code> &amp; haystack</li>
</ul>
<p>See <a href="https://github.com/clibs/clib/wiki/Explanation">the explanation</a>.</p>
<ul>
<li><a href="https://github.com/clibs/clib/wiki/Explanation">not a package</a> - skipped</li>
<li><a href="https://github.com/stephenmathieson/trim.c/">stephenmathieson/trim.c</a> -
    trim a string</li>
</ul>
"#;

    #[test]
    fn test_parse_packages() {
        let packages = parse_packages(PAGE);
        assert_eq!(
            packages,
            vec![
                Package::new(
                    "clibs/buffer",
                    "https://github.com/clibs/buffer",
                    "tiny c buffer"
                ),
                Package::new(
                    "jwerle/occurrences.c",
                    "https://github.com/jwerle/occurrences.c",
                    "counts needle & haystack"
                ),
                Package::new(
                    "stephenmathieson/trim.c",
                    "https://github.com/stephenmathieson/trim.c/",
                    "trim a string"
                ),
            ]
        );
    }

    #[test]
    fn test_parse_empty_page() {
        assert!(parse_packages("").is_empty());
        assert!(parse_packages("<html><body>nothing here</body></html>").is_empty());
    }

    #[test]
    fn test_repo_from_url() {
        assert_eq!(
            repo_from_url("https://github.com/clibs/list"),
            Some("clibs/list".to_string())
        );
        assert_eq!(repo_from_url("https://github.com/clibs"), None);
        assert_eq!(repo_from_url("mailto:someone@example.com"), None);
        assert_eq!(repo_from_url("/relative/path"), None);
    }
}
