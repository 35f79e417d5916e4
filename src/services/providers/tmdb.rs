/// TMDB (The Movie Database) API v3 provider
///
/// Every call is a GET authenticated with the `api_key` query parameter.
///
/// API Flow:
/// 1. Genres: /genre/movie/list
/// 2. Listings: /movie/popular, /discover/movie, /search/movie
/// 3. Card actions: /movie/{id}, /movie/{id}/credits, /movie/{id}/videos
use crate::{
    config::Config,
    error::{ProviderError, ProviderResult},
    models::{
        Genre, Listing, TitleDetail, TitleId, TmdbCredits, TmdbGenreList, TmdbMovieDetails,
        TmdbPage, TmdbVideos, Video,
    },
    services::{providers::MetadataProvider, query_builder::ListingRequest},
};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use std::time::Duration;

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl TmdbProvider {
    /// Creates a provider with a request timeout applied to every call
    pub fn new(api_key: String, api_url: String, timeout: Duration) -> ProviderResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> ProviderResult<Self> {
        Self::new(
            config.tmdb_api_key.clone(),
            config.tmdb_api_url.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// Builds a GET request for `path`, encoding `params` after the API key
    fn build_get(&self, path: &str, params: &[(&str, String)]) -> ProviderResult<reqwest::Request> {
        let url = format!("{}/{}", self.api_url, path.trim_start_matches('/'));

        let mut query: Vec<(&str, &str)> = Vec::with_capacity(params.len() + 1);
        query.push(("api_key", self.api_key.as_str()));
        query.extend(params.iter().map(|(k, v)| (*k, v.as_str())));

        Ok(self.http_client.get(&url).query(&query).build()?)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> ProviderResult<T> {
        let request = self.build_get(path, params)?;
        tracing::debug!(path = %path, "TMDB request");

        let response = self.http_client.execute(request).await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let response_text = response.text().await?;

        serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(
                error = %e,
                path = %path,
                "Failed to deserialize TMDB response"
            );
            ProviderError::Malformed(format!("Failed to parse TMDB response: {}", e))
        })
    }
}

#[async_trait::async_trait]
impl MetadataProvider for TmdbProvider {
    async fn list_genres(&self, language: &str) -> ProviderResult<Vec<Genre>> {
        let list: TmdbGenreList = self
            .get_json("genre/movie/list", &[("language", language.to_string())])
            .await?;

        tracing::info!(genres = list.genres.len(), provider = "tmdb", "Genres loaded");

        Ok(list.genres)
    }

    async fn fetch_listing(&self, request: &ListingRequest) -> ProviderResult<Listing> {
        let page: TmdbPage = self
            .get_json(request.endpoint.path(), &request.params)
            .await?;
        let listing = Listing::from(page);

        tracing::info!(
            endpoint = %request.endpoint,
            page = request.page,
            results = listing.results.len(),
            total_pages = listing.total_pages,
            provider = "tmdb",
            "Listing fetched"
        );

        Ok(listing)
    }

    async fn get_detail(&self, title_id: TitleId, language: &str) -> ProviderResult<TitleDetail> {
        let details: TmdbMovieDetails = self
            .get_json(
                &format!("movie/{}", title_id),
                &[("language", language.to_string())],
            )
            .await?;

        Ok(TitleDetail::from(details))
    }

    async fn get_credits(&self, title_id: TitleId) -> ProviderResult<Vec<String>> {
        let credits: TmdbCredits = self
            .get_json(&format!("movie/{}/credits", title_id), &[])
            .await?;

        Ok(credits.cast.into_iter().map(|member| member.name).collect())
    }

    async fn get_videos(&self, title_id: TitleId) -> ProviderResult<Vec<Video>> {
        let videos: TmdbVideos = self
            .get_json(&format!("movie/{}/videos", title_id), &[])
            .await?;

        Ok(videos.results)
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}
