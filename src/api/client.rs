//! HTTP client for the events catalog API.
//!
//! [`CatalogClient`] builds the one supported request shape (a keyword, date,
//! and category filtered event search, plus a per-id detail lookup) and
//! normalizes every failure mode to the uniform [`Error::Fetch`] outcome.
//! There is no retry, backoff, or response caching; each call is a single
//! request/response cycle executed on the worker thread.

use crate::api::wire::{EventDoc, ListResponse};
use crate::domain::{Error, EventDetail, EventSummary, Result};
use chrono::NaiveDate;
use reqwest::blocking::Client;
use reqwest::Url;
use std::time::Duration;

/// Request timeout for catalog calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Category filter value meaning "no restriction".
const CATEGORY_ALL: &str = "all";

/// Filter parameters for a catalog event search.
///
/// `keyword` and `category` are normalized before the query string is built:
/// a blank keyword and an `"all"` (or empty) category are treated as absent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchParams {
    pub keyword: Option<String>,
    pub date: Option<NaiveDate>,
    pub category: Option<String>,
}

impl SearchParams {
    /// Returns the keyword if it is non-blank after trimming.
    #[must_use]
    pub fn effective_keyword(&self) -> Option<&str> {
        self.keyword
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    /// Returns the category unless it is empty or the `"all"` sentinel
    /// (case-insensitive), which both mean "no restriction".
    #[must_use]
    pub fn effective_category(&self) -> Option<&str> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case(CATEGORY_ALL))
    }
}

/// Blocking HTTP client for the events catalog.
///
/// Owned by the worker thread; the UI thread never performs I/O directly.
pub struct CatalogClient {
    http: Client,
    base_url: String,
    api_key: String,
    country_code: String,
    page_size: u32,
}

impl CatalogClient {
    /// Creates a client for the given catalog endpoint and credentials.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Fetch`] if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        country_code: impl Into<String>,
        page_size: u32,
    ) -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("eventfinder/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Fetch(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            country_code: country_code.into(),
            page_size,
        })
    }

    /// Fetches the event list matching `params`.
    ///
    /// A response without an embedded events collection yields an empty
    /// sequence; that is a valid "no results" outcome, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Fetch`] for transport failures, non-success HTTP
    /// statuses, and malformed JSON alike.
    pub fn fetch_list(&self, params: &SearchParams) -> Result<Vec<EventSummary>> {
        let url = self.list_url(params)?;
        tracing::debug!(
            keyword = ?params.effective_keyword(),
            date = ?params.date,
            category = ?params.effective_category(),
            "fetching event list"
        );

        let response: ListResponse = self.get_json(url)?;
        let summaries = response.into_summaries();

        tracing::debug!(event_count = summaries.len(), "event list fetched");
        Ok(summaries)
    }

    /// Fetches the full detail for one event id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Fetch`] on any request failure, and also when the
    /// returned document is missing its required fields.
    pub fn fetch_detail(&self, id: &str) -> Result<EventDetail> {
        let url = self.detail_url(id)?;
        tracing::debug!(event_id = %id, "fetching event detail");

        let doc: EventDoc = self.get_json(url)?;
        doc.into_detail()
            .ok_or_else(|| Error::Fetch(format!("incomplete event document for id {id}")))
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, url: Url) -> Result<T> {
        let response = self
            .http
            .get(url)
            .send()
            .map_err(|e| Error::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Fetch(format!("status {status}")));
        }

        response.json::<T>().map_err(|e| Error::Fetch(e.to_string()))
    }

    /// Builds the list-endpoint URL for the given filters.
    ///
    /// Required parameters (`apikey`, `size`, `countryCode`) are always
    /// appended; optional filters only when effectively present. A date
    /// filter expands to the inclusive UTC window covering that calendar day.
    fn list_url(&self, params: &SearchParams) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/events.json", self.base_url))
            .map_err(|e| Error::Fetch(e.to_string()))?;

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("apikey", &self.api_key);
            query.append_pair("size", &self.page_size.to_string());
            query.append_pair("countryCode", &self.country_code);

            if let Some(keyword) = params.effective_keyword() {
                query.append_pair("keyword", keyword);
            }
            if let Some(date) = params.date {
                let (start, end) = day_window(date);
                query.append_pair("startDateTime", &start);
                query.append_pair("endDateTime", &end);
            }
            if let Some(category) = params.effective_category() {
                query.append_pair("segmentName", category);
            }
        }

        Ok(url)
    }

    fn detail_url(&self, id: &str) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/events/{id}", self.base_url))
            .map_err(|e| Error::Fetch(e.to_string()))?;
        url.query_pairs_mut().append_pair("apikey", &self.api_key);
        Ok(url)
    }
}

/// Expands a calendar date to the catalog's `[start, end]` timestamp pair:
/// `T00:00:00Z` through `T23:59:59Z` of that day, both inclusive.
#[must_use]
pub fn day_window(date: NaiveDate) -> (String, String) {
    let day = date.format("%Y-%m-%d");
    (format!("{day}T00:00:00Z"), format!("{day}T23:59:59Z"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> CatalogClient {
        CatalogClient::new("https://catalog.example/discovery/v2/", "test-key", "US", 20).unwrap()
    }

    fn query_pairs(url: &Url) -> Vec<(String, String)> {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn list_url_always_carries_required_params() {
        let url = client().list_url(&SearchParams::default()).unwrap();
        let pairs = query_pairs(&url);

        assert!(url.as_str().starts_with("https://catalog.example/discovery/v2/events.json?"));
        assert!(pairs.contains(&("apikey".to_string(), "test-key".to_string())));
        assert!(pairs.contains(&("size".to_string(), "20".to_string())));
        assert!(pairs.contains(&("countryCode".to_string(), "US".to_string())));
        assert_eq!(pairs.len(), 3);
    }

    #[test]
    fn blank_keyword_is_omitted() {
        let params = SearchParams { keyword: Some("   ".to_string()), ..Default::default() };
        let url = client().list_url(&params).unwrap();
        assert!(!url.as_str().contains("keyword"));
    }

    #[test]
    fn keyword_is_url_encoded() {
        let params = SearchParams { keyword: Some("jazz & blues".to_string()), ..Default::default() };
        let url = client().list_url(&params).unwrap();
        assert!(url.as_str().contains("keyword=jazz+%26+blues"));
    }

    #[test]
    fn all_category_is_omitted() {
        for sentinel in ["all", "All", "ALL", ""] {
            let params = SearchParams { category: Some(sentinel.to_string()), ..Default::default() };
            let url = client().list_url(&params).unwrap();
            assert!(!url.as_str().contains("segmentName"), "category {sentinel:?} should be absent");
        }
    }

    #[test]
    fn concrete_category_becomes_segment_name() {
        let params = SearchParams { category: Some("Music".to_string()), ..Default::default() };
        let url = client().list_url(&params).unwrap();
        assert!(url.as_str().contains("segmentName=Music"));
    }

    #[test]
    fn date_filter_expands_to_inclusive_day_window() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
        let (start, end) = day_window(date);
        assert_eq!(start, "2026-08-24T00:00:00Z");
        assert_eq!(end, "2026-08-24T23:59:59Z");

        let params = SearchParams { date: Some(date), ..Default::default() };
        let url = client().list_url(&params).unwrap();
        let pairs = query_pairs(&url);
        assert!(pairs.contains(&("startDateTime".to_string(), start)));
        assert!(pairs.contains(&("endDateTime".to_string(), end)));
    }

    #[test]
    fn detail_url_targets_event_path() {
        let url = client().detail_url("G5vYZ9281Ue7f").unwrap();
        assert!(url
            .as_str()
            .starts_with("https://catalog.example/discovery/v2/events/G5vYZ9281Ue7f?"));
        assert!(url.as_str().contains("apikey=test-key"));
    }
}
