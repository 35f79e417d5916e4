//! Metadata provider abstraction
//!
//! The orchestrator only talks to the movie database through this trait, so the
//! TMDB client can be swapped for a fake in tests or for another provider.

use crate::{
    error::ProviderResult,
    models::{Genre, Listing, TitleDetail, TitleId, Video},
    services::query_builder::ListingRequest,
};

pub mod tmdb;

/// Request/response access to a movie metadata service
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MetadataProvider: Send + Sync {
    /// List the genres available for filtering
    async fn list_genres(&self, language: &str) -> ProviderResult<Vec<Genre>>;

    /// Execute a listing request built by the query builder
    ///
    /// Covers the popular, discover and search calls; the request's endpoint decides
    /// which one is made.
    async fn fetch_listing(&self, request: &ListingRequest) -> ProviderResult<Listing>;

    /// Fetch the detail record of one title. The cast is left unset.
    async fn get_detail(&self, title_id: TitleId, language: &str) -> ProviderResult<TitleDetail>;

    /// Fetch cast names for one title, in billing order
    async fn get_credits(&self, title_id: TitleId) -> ProviderResult<Vec<String>>;

    /// Fetch the videos attached to one title
    async fn get_videos(&self, title_id: TitleId) -> ProviderResult<Vec<Video>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
