//! Listing request construction
//!
//! Turns the current filter snapshot and page into a request descriptor. The descriptor
//! names an endpoint and carries raw parameter values; the provider turns it into a URL
//! and does the encoding.

use crate::models::FilterState;

/// Which listing call a request targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Plain popularity listing, used when nothing is filtered
    Popular,
    /// Filtered browse
    Discover,
    /// Free-text search
    Search,
}

impl Endpoint {
    /// Path relative to the provider base URL
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Popular => "movie/popular",
            Endpoint::Discover => "discover/movie",
            Endpoint::Search => "search/movie",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// Opaque listing request: endpoint plus ordered parameter mapping
#[derive(Debug, Clone, PartialEq)]
pub struct ListingRequest {
    pub endpoint: Endpoint,
    pub page: u32,
    pub params: Vec<(&'static str, String)>,
}

impl ListingRequest {
    /// Looks up a parameter value by name
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Builds the listing request for `filters` at `page`.
///
/// A non-blank query always selects search mode. Otherwise any set filter selects
/// discover, and no filters at all selects the popular listing. Genre, year and rating
/// are passed through in search mode as well.
pub fn build_request(filters: &FilterState, page: u32) -> ListingRequest {
    let page = page.max(1);
    let mut params: Vec<(&'static str, String)> = Vec::new();

    let endpoint = match filters.query() {
        Some(query) => {
            params.push(("query", query.to_string()));
            Endpoint::Search
        }
        None if filters.has_filters() => Endpoint::Discover,
        None => Endpoint::Popular,
    };

    params.push(("language", filters.language().to_string()));
    params.push(("page", page.to_string()));

    if let Some(genre_id) = filters.genre_id() {
        params.push(("with_genres", genre_id.to_string()));
    }
    if let Some(year) = filters.year() {
        params.push(("primary_release_year", year.to_string()));
    }
    if let Some(rating) = filters.min_rating() {
        params.push(("vote_average.gte", rating.to_string()));
    }

    ListingRequest {
        endpoint,
        page,
        params,
    }
}
