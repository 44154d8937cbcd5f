//! Page requests and page envelopes shared by every listing endpoint.
//!
//! A page is addressed by a 1-based `page_number` and a `page_size`; the
//! envelope carries links to the neighbouring pages, built from the URL
//! the request arrived on.

use crate::error::ServiceError;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use url::{Position, Url};

/// Largest page a client may ask for
pub const MAX_PAGE_SIZE: u64 = 100;

pub const DEFAULT_PAGE_SIZE: u64 = 10;

static RELATIVE_ROOT: LazyLock<Url> =
    LazyLock::new(|| Url::parse("http://relative.invalid/").expect("static URL is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PagedRequest {
    #[serde(rename = "PageNumber", alias = "pageNumber", default = "first_page")]
    pub page_number: u64,
    #[serde(rename = "PageSize", alias = "pageSize", default = "default_page_size")]
    pub page_size: u64,
    /// The URL page links are derived from; filled in by the transport layer
    #[serde(skip)]
    pub base_url: String,
}

fn first_page() -> u64 {
    1
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl Default for PagedRequest {
    fn default() -> Self {
        Self::new(first_page(), DEFAULT_PAGE_SIZE)
    }
}

impl PagedRequest {
    pub fn new(page_number: u64, page_size: u64) -> Self {
        Self {
            page_number,
            page_size,
            base_url: String::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.page_number == 0 {
            return Err(ServiceError::validation("PageNumber must be at least 1"));
        }
        if self.page_size == 0 {
            return Err(ServiceError::validation("PageSize must be at least 1"));
        }
        if self.page_size > MAX_PAGE_SIZE {
            return Err(ServiceError::validation(format!(
                "PageSize must not exceed {MAX_PAGE_SIZE}"
            )));
        }
        Ok(())
    }

    /// Number of rows preceding this page
    pub fn offset(&self) -> u64 {
        self.page_number.saturating_sub(1).saturating_mul(self.page_size)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page_number: u64,
    pub page_size: u64,
    pub next_page_url: Option<String>,
    pub previous_page_url: Option<String>,
}

impl<T> PagedResult<T> {
    pub fn new(items: Vec<T>, total_count: u64, request: &PagedRequest) -> Self {
        let PagedRequest {
            page_number,
            page_size,
            ref base_url,
        } = *request;
        let next_page_url = (page_number.saturating_mul(page_size) < total_count)
            .then(|| page_url(base_url, page_number + 1, page_size));
        let previous_page_url =
            (page_number > 1).then(|| page_url(base_url, page_number - 1, page_size));
        Self {
            items,
            total_count,
            page_number,
            page_size,
            next_page_url,
            previous_page_url,
        }
    }

    pub fn map<U, F>(self, f: F) -> PagedResult<U>
    where
        F: FnMut(T) -> U,
    {
        PagedResult {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            page_number: self.page_number,
            page_size: self.page_size,
            next_page_url: self.next_page_url,
            previous_page_url: self.previous_page_url,
        }
    }
}

fn is_paging_key(key: &str) -> bool {
    key.eq_ignore_ascii_case("pagenumber") || key.eq_ignore_ascii_case("pagesize")
}

/// `base_url` with its paging parameters replaced. Relative URLs stay relative.
fn page_url(base_url: &str, page_number: u64, page_size: u64) -> String {
    let (mut url, relative) = match Url::parse(base_url) {
        Ok(url) => (url, false),
        Err(_) => match RELATIVE_ROOT.join(base_url) {
            Ok(url) => (url, true),
            Err(_) => return format!("?pageNumber={page_number}&pageSize={page_size}"),
        },
    };
    let retained: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| !is_paging_key(key))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();
    url.query_pairs_mut()
        .clear()
        .extend_pairs(retained)
        .append_pair("pageNumber", &page_number.to_string())
        .append_pair("pageSize", &page_size.to_string());
    if relative {
        url[Position::BeforePath..].to_owned()
    } else {
        url.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn request(page_number: u64, page_size: u64) -> PagedRequest {
        PagedRequest::new(page_number, page_size)
            .with_base_url("http://localhost:8000/api/Section/GetPaged?PageNumber=2&PageSize=5")
    }

    #[test]
    fn middle_page_links_both_ways() {
        let page = PagedResult::new(vec![6, 7, 8, 9, 10], 12, &request(2, 5));
        assert_eq!(
            page.next_page_url.as_deref(),
            Some("http://localhost:8000/api/Section/GetPaged?pageNumber=3&pageSize=5")
        );
        assert_eq!(
            page.previous_page_url.as_deref(),
            Some("http://localhost:8000/api/Section/GetPaged?pageNumber=1&pageSize=5")
        );
    }

    #[test]
    fn first_and_last_pages() {
        let first = PagedResult::new(vec![1, 2, 3, 4, 5], 12, &request(1, 5));
        assert!(first.previous_page_url.is_none());
        assert!(first.next_page_url.is_some());

        let last = PagedResult::new(vec![11, 12], 12, &request(3, 5));
        assert!(last.next_page_url.is_none());
        assert!(last.previous_page_url.is_some());

        let exact = PagedResult::new(vec![6, 7, 8, 9, 10], 10, &request(2, 5));
        assert!(exact.next_page_url.is_none());
    }

    #[test]
    fn other_query_parameters_are_kept() {
        let request = PagedRequest::new(1, 2)
            .with_base_url("http://host/api/Equipment/section?sectionId=4&pageSize=2");
        let page = PagedResult::new(vec![1, 2], 3, &request);
        assert_eq!(
            page.next_page_url.as_deref(),
            Some("http://host/api/Equipment/section?sectionId=4&pageNumber=2&pageSize=2")
        );
    }

    #[test]
    fn relative_base_url_stays_relative() {
        let request = PagedRequest::new(2, 10).with_base_url("/api/Department/GetPaged");
        let page: PagedResult<u8> = PagedResult::new(vec![], 15, &request);
        assert_eq!(
            page.previous_page_url.as_deref(),
            Some("/api/Department/GetPaged?pageNumber=1&pageSize=10")
        );
        assert!(page.next_page_url.is_none());
    }

    #[test]
    fn validation_rejects_empty_and_oversized_pages() {
        assert!(PagedRequest::new(0, 10).validate().is_err());
        assert!(PagedRequest::new(1, 0).validate().is_err());
        assert!(PagedRequest::new(1, MAX_PAGE_SIZE + 1).validate().is_err());
        assert!(PagedRequest::new(1, MAX_PAGE_SIZE).validate().is_ok());
        assert_eq!(PagedRequest::new(3, 20).offset(), 40);
        assert_eq!(PagedRequest::new(u64::MAX, 10).offset(), u64::MAX);
    }

    #[test]
    fn accepts_both_key_spellings() {
        let upper: PagedRequest =
            serde_json::from_str(r#"{"PageNumber": 2, "PageSize": 4}"#).unwrap();
        let lower: PagedRequest =
            serde_json::from_str(r#"{"pageNumber": 2, "pageSize": 4}"#).unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper, PagedRequest::new(2, 4));

        let defaulted: PagedRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(defaulted, PagedRequest::default());
    }

    #[test]
    fn envelope_is_camel_case() {
        let page = PagedResult::new(vec!["a"], 1, &PagedRequest::new(1, 10));
        assert_eq!(
            serde_json::to_value(&page).unwrap(),
            serde_json::json!({
                "items": ["a"],
                "totalCount": 1,
                "pageNumber": 1,
                "pageSize": 10,
                "nextPageUrl": null,
                "previousPageUrl": null,
            })
        );
    }
}
