use serde::{Deserialize, Serialize};
use std::fmt::Display;

mod filter;

pub use filter::{FilterChange, FilterState, DEFAULT_LANGUAGE};

/// Maximum number of cast names carried on a title detail
pub const MAX_CAST_NAMES: usize = 5;

/// Provider identifier for a single title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TitleId(pub u64);

impl Display for TitleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A genre as offered by the genre filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// One entry of a listing page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleSummary {
    pub id: TitleId,
    pub title: String,
    pub poster_path: Option<String>,
    pub vote_average: f64,
}

/// A page of title summaries from either the popular or search/discover call
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Listing {
    pub results: Vec<TitleSummary>,
    pub total_pages: u32,
}

/// Everything the detail view shows for one title
#[derive(Debug, Clone, PartialEq)]
pub struct TitleDetail {
    pub id: TitleId,
    pub title: String,
    pub poster_path: Option<String>,
    pub release_date: String,
    pub vote_average: f64,
    pub overview: String,
    /// Genre names in provider order
    pub genres: Vec<String>,
    /// `None` when the credits lookup failed
    pub cast_names: Option<Vec<String>>,
}

impl TitleDetail {
    /// Attaches the credits lookup outcome, keeping at most [`MAX_CAST_NAMES`] names.
    pub fn with_cast(mut self, cast: Option<Vec<String>>) -> Self {
        self.cast_names = cast.map(|names| names.into_iter().take(MAX_CAST_NAMES).collect());
        self
    }
}

/// A video attached to a title (trailers, teasers, featurettes...)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Video {
    #[serde(default)]
    pub site: String,
    #[serde(rename = "type", default)]
    pub video_type: String,
    #[serde(default)]
    pub key: Option<String>,
}

/// Reference to a playable YouTube trailer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailerRef {
    pub youtube_key: String,
}

impl TrailerRef {
    /// Picks the first YouTube trailer with a non-empty key.
    pub fn select(videos: &[Video]) -> Option<Self> {
        videos
            .iter()
            .filter(|v| v.site == "YouTube" && v.video_type == "Trailer")
            .find_map(|v| v.key.as_deref().filter(|k| !k.is_empty()))
            .map(|key| TrailerRef {
                youtube_key: key.to_string(),
            })
    }
}

// ============================================================================
// TMDB API Types
// ============================================================================

/// Response of `genre/movie/list`
#[derive(Debug, Deserialize)]
pub struct TmdbGenreList {
    #[serde(default)]
    pub genres: Vec<Genre>,
}

/// Movie entry inside a paged TMDB response
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovie {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
}

impl From<TmdbMovie> for TitleSummary {
    fn from(movie: TmdbMovie) -> Self {
        TitleSummary {
            id: TitleId(movie.id),
            title: movie.title,
            poster_path: movie.poster_path.filter(|p| !p.is_empty()),
            vote_average: movie.vote_average,
        }
    }
}

/// Paged response of `movie/popular`, `discover/movie` and `search/movie`
#[derive(Debug, Deserialize)]
pub struct TmdbPage {
    #[serde(default)]
    pub results: Vec<TmdbMovie>,
    #[serde(default = "default_total_pages")]
    pub total_pages: u32,
}

fn default_total_pages() -> u32 {
    1
}

impl From<TmdbPage> for Listing {
    fn from(page: TmdbPage) -> Self {
        Listing {
            results: page.results.into_iter().map(TitleSummary::from).collect(),
            total_pages: page.total_pages,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TmdbGenreName {
    pub name: String,
}

/// Response of `movie/{id}`
#[derive(Debug, Deserialize)]
pub struct TmdbMovieDetails {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub genres: Vec<TmdbGenreName>,
}

impl From<TmdbMovieDetails> for TitleDetail {
    fn from(details: TmdbMovieDetails) -> Self {
        TitleDetail {
            id: TitleId(details.id),
            title: details.title,
            poster_path: details.poster_path.filter(|p| !p.is_empty()),
            release_date: details.release_date.unwrap_or_default(),
            vote_average: details.vote_average,
            overview: details.overview.unwrap_or_default(),
            genres: details.genres.into_iter().map(|g| g.name).collect(),
            cast_names: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TmdbCastMember {
    pub name: String,
}

/// Response of `movie/{id}/credits`
#[derive(Debug, Deserialize)]
pub struct TmdbCredits {
    #[serde(default)]
    pub cast: Vec<TmdbCastMember>,
}

/// Response of `movie/{id}/videos`
#[derive(Debug, Deserialize)]
pub struct TmdbVideos {
    #[serde(default)]
    pub results: Vec<Video>,
}
