//! List query parameters shared by every paginated endpoint.

use url::Url;

/// Query parameters for a paginated list request: `?page=<n>&search=<s>`.
///
/// Every list endpoint on the backend takes the same pair, so a single
/// builder covers all resources.
#[derive(Clone, Debug)]
pub struct ListQuery {
    /// Page number (1-indexed). Defaults to 1.
    pub page: i64,
    /// Search text. `None` omits the parameter entirely.
    pub search: Option<String>,
    /// Results per page. `None` uses the backend default.
    pub per_page: Option<i64>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            search: None,
            per_page: None,
        }
    }
}

impl ListQuery {
    pub fn with_page(mut self, page: i64) -> Self {
        self.page = page;
        self
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.search = Some(search.to_string());
        self
    }

    pub fn with_per_page(mut self, per_page: i64) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Appends the query parameters to the given URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("page", &self.page.to_string());
        if let Some(search) = &self.search {
            url.query_pairs_mut().append_pair("search", search.as_str());
        }
        if let Some(per_page) = self.per_page {
            url.query_pairs_mut()
                .append_pair("per_page", &per_page.to_string());
        }
        url
    }
}
