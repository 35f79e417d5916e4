use crate::{
    config::Config,
    models::{TitleDetail, TitleId, TitleSummary, TrailerRef},
    services::pager::PageState,
};

/// Shown in place of the listing when there is nothing to show
pub const NO_RESULTS_MESSAGE: &str = "No results found. Please try again.";

/// Fallback sentinel for values that could not be loaded
pub const NOT_AVAILABLE: &str = "Not available";

/// Notice raised when a title has no playable trailer
pub const TRAILER_NOT_AVAILABLE: &str = "Trailer not available for this movie.";

/// Notice raised when the detail lookup itself failed
pub const DETAIL_NOT_AVAILABLE: &str = "Movie details not available.";

const YOUTUBE_EMBED_URL: &str = "https://www.youtube.com/embed";

/// What a card button does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    ViewDetails,
    OpenExternal,
    PlayTrailer,
}

impl ActionKind {
    pub fn label(&self) -> &'static str {
        match self {
            ActionKind::ViewDetails => "View Details",
            ActionKind::OpenExternal => "Open Movie",
            ActionKind::PlayTrailer => "Play Trailer",
        }
    }
}

/// Structured action descriptor attached to a card and dispatched back by the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardAction {
    pub kind: ActionKind,
    pub title_id: TitleId,
}

impl CardAction {
    pub fn new(kind: ActionKind, title_id: TitleId) -> Self {
        Self { kind, title_id }
    }
}

/// A single result card
#[derive(Debug, Clone, PartialEq)]
pub struct TitleCard {
    pub title_id: TitleId,
    pub poster_url: String,
    pub title: String,
    pub rating: f64,
    pub actions: [CardAction; 3],
}

/// One entry of the listing region
#[derive(Debug, Clone, PartialEq)]
pub enum CardRenderSpec {
    Title(TitleCard),
    NoResults { message: &'static str },
}

/// Content of the detail overlay
#[derive(Debug, Clone, PartialEq)]
pub struct DetailRenderSpec {
    pub title_id: TitleId,
    pub title: String,
    pub poster_url: String,
    pub release_date: String,
    pub rating: f64,
    pub overview: String,
    pub genres: String,
    pub cast: String,
}

/// Content of the trailer overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailerRenderSpec {
    pub embed_url: String,
}

/// Raised instead of a trailer when none can be played
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotAvailableSignal {
    pub message: &'static str,
}

/// Pagination controls after a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationRenderSpec {
    pub current_page: u32,
    pub total_pages: u32,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

/// Maps provider data into render instructions
#[derive(Debug, Clone)]
pub struct Presenter {
    image_base_url: String,
    placeholder_image_url: String,
    external_title_url: String,
}

impl Presenter {
    pub fn new(
        image_base_url: impl Into<String>,
        placeholder_image_url: impl Into<String>,
        external_title_url: impl Into<String>,
    ) -> Self {
        Self {
            image_base_url: image_base_url.into().trim_end_matches('/').to_string(),
            placeholder_image_url: placeholder_image_url.into(),
            external_title_url: external_title_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.tmdb_image_url.as_str(),
            config.placeholder_image_url.as_str(),
            config.external_title_url.as_str(),
        )
    }

    /// Poster URL for an optional provider path, falling back to the placeholder image
    pub fn poster_url(&self, poster_path: Option<&str>) -> String {
        match poster_path.filter(|p| !p.is_empty()) {
            Some(path) if path.starts_with('/') => format!("{}{}", self.image_base_url, path),
            Some(path) => format!("{}/{}", self.image_base_url, path),
            None => self.placeholder_image_url.clone(),
        }
    }

    /// Link for the "open externally" card action
    pub fn external_url(&self, title_id: TitleId) -> String {
        format!("{}/{}", self.external_title_url, title_id)
    }

    /// Maps a listing into cards. Absent or empty input yields exactly one
    /// "no results" entry.
    pub fn present_list(&self, summaries: Option<&[TitleSummary]>) -> Vec<CardRenderSpec> {
        match summaries {
            Some(summaries) if !summaries.is_empty() => summaries
                .iter()
                .map(|summary| CardRenderSpec::Title(self.present_card(summary)))
                .collect(),
            _ => vec![CardRenderSpec::NoResults {
                message: NO_RESULTS_MESSAGE,
            }],
        }
    }

    fn present_card(&self, summary: &TitleSummary) -> TitleCard {
        let id = summary.id;
        TitleCard {
            title_id: id,
            poster_url: self.poster_url(summary.poster_path.as_deref()),
            title: summary.title.clone(),
            rating: summary.vote_average,
            actions: [
                CardAction::new(ActionKind::ViewDetails, id),
                CardAction::new(ActionKind::OpenExternal, id),
                CardAction::new(ActionKind::PlayTrailer, id),
            ],
        }
    }

    pub fn present_detail(&self, detail: &TitleDetail) -> DetailRenderSpec {
        let cast = match &detail.cast_names {
            Some(names) if !names.is_empty() => names.join(", "),
            _ => NOT_AVAILABLE.to_string(),
        };

        DetailRenderSpec {
            title_id: detail.id,
            title: detail.title.clone(),
            poster_url: self.poster_url(detail.poster_path.as_deref()),
            release_date: detail.release_date.clone(),
            rating: detail.vote_average,
            overview: detail.overview.clone(),
            genres: detail.genres.join(", "),
            cast,
        }
    }

    pub fn present_trailer(
        &self,
        trailer: Option<&TrailerRef>,
    ) -> Result<TrailerRenderSpec, NotAvailableSignal> {
        trailer
            .map(|t| TrailerRenderSpec {
                embed_url: format!("{}/{}", YOUTUBE_EMBED_URL, t.youtube_key),
            })
            .ok_or(NotAvailableSignal {
                message: TRAILER_NOT_AVAILABLE,
            })
    }

    pub fn present_pagination(&self, state: PageState) -> PaginationRenderSpec {
        PaginationRenderSpec {
            current_page: state.current_page,
            total_pages: state.total_pages,
            prev_enabled: state.current_page > 1,
            next_enabled: state.current_page < state.total_pages,
        }
    }
}
