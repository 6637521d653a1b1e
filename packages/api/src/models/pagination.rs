//! Laravel length-aware paginator envelope.
//!
//! `GET /projects?page=N` answers with the page's rows in `data` plus the
//! navigation metadata below. The client never computes page numbers
//! itself: it follows the URL tokens the backend hands out in `links`.

use reqwest::Url;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub current_page: u32,
    pub data: Vec<T>,
    #[serde(default)]
    pub first_page_url: Option<String>,
    #[serde(default)]
    pub from: Option<u64>,
    pub last_page: u32,
    #[serde(default)]
    pub last_page_url: Option<String>,
    #[serde(default)]
    pub links: Vec<PaginationLink>,
    #[serde(default)]
    pub next_page_url: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    pub per_page: u32,
    #[serde(default)]
    pub prev_page_url: Option<String>,
    #[serde(default)]
    pub to: Option<u64>,
    pub total: u64,
}

/// One button of the paginator (`« Previous`, `1`, `2`, …, `Next »`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationLink {
    /// Target URL, `None` when the button leads nowhere (first/last page).
    pub url: Option<String>,
    pub label: String,
    #[serde(default)]
    pub active: bool,
}

impl PaginationLink {
    /// Page number carried by the link's URL, if it has one.
    pub fn page(&self) -> Option<u32> {
        self.url.as_deref().and_then(page_from_url)
    }
}

/// Extract the `page` query parameter from an absolute paginator URL.
///
/// A URL without a `page` parameter points at the first page.
pub fn page_from_url(url: &str) -> Option<u32> {
    let url = Url::parse(url).ok()?;
    let page = url
        .query_pairs()
        .find(|(key, _)| key == "page")
        .map(|(_, value)| value.parse().ok())
        .unwrap_or(Some(1))?;
    Some(page)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENVELOPE: &str = r#"{
        "current_page": 2,
        "data": [1, 2],
        "first_page_url": "http://localhost/api/projects?page=1",
        "from": 16,
        "last_page": 3,
        "last_page_url": "http://localhost/api/projects?page=3",
        "links": [
            {"url": "http://localhost/api/projects?page=1", "label": "&laquo; Previous", "active": false},
            {"url": "http://localhost/api/projects?page=1", "label": "1", "active": false},
            {"url": "http://localhost/api/projects?page=2", "label": "2", "active": true},
            {"url": "http://localhost/api/projects?page=3", "label": "3", "active": false},
            {"url": null, "label": "Next &raquo;", "active": false}
        ],
        "next_page_url": null,
        "path": "http://localhost/api/projects",
        "per_page": 15,
        "prev_page_url": "http://localhost/api/projects?page=1",
        "to": 30,
        "total": 32
    }"#;

    #[test]
    fn test_envelope() {
        let page: Paginated<u32> = serde_json::from_str(ENVELOPE).unwrap();
        assert_eq!(page.current_page, 2);
        assert_eq!(page.data, vec![1, 2]);
        assert_eq!(page.links.len(), 5);
        assert_eq!(page.links[3].page(), Some(3));
        assert_eq!(page.links[4].page(), None);
        assert!(page.links[2].active);
    }

    #[test]
    fn test_page_from_url() {
        assert_eq!(page_from_url("http://localhost/api/projects?page=7"), Some(7));
        assert_eq!(page_from_url("http://localhost/api/projects?sort=name&page=2"), Some(2));
        assert_eq!(page_from_url("http://localhost/api/projects"), Some(1));
        assert_eq!(page_from_url("http://localhost/api/projects?page=abc"), None);
        assert_eq!(page_from_url("not a url"), None);
    }
}
