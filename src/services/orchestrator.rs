//! Event-driven coordination between the rendering surface and the metadata provider.
//!
//! Handling an event happens in three steps so that fetches can run off the control
//! flow: [`QueryOrchestrator::prepare`] updates state and returns the fetches the event
//! needs, [`Task::run`] performs them with per-call fallbacks, and
//! [`QueryOrchestrator::apply`] renders the outcome. Listing tasks carry the generation
//! they were issued under; a completion from an older generation is dropped. A listing
//! whose page turns out to be past the reported total is not rendered; `apply` hands
//! back a replacement request for the last page instead.

use std::collections::VecDeque;
use std::sync::Arc;

use crate::{
    models::{FilterChange, FilterState, Genre, Listing, TitleDetail, TitleId, TrailerRef},
    services::{
        overlay::{OverlayKind, Overlays, Visibility},
        pager::{Direction, PageState, Pager},
        presenter::{ActionKind, CardAction, Presenter, DETAIL_NOT_AVAILABLE},
        providers::MetadataProvider,
        query_builder::{build_request, ListingRequest},
        surface::RenderSurface,
    },
};

/// Named UI events consumed by the orchestrator
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Page load: fill the genre filter and show the first popular page
    Initialize,
    SearchSubmitted { query: String },
    FilterChanged(FilterChange),
    PagePrev,
    PageNext,
    Card(CardAction),
    CloseDetail,
    CloseTrailer,
}

/// A listing request tagged with the generation it was issued under
#[derive(Debug, Clone, PartialEq)]
pub struct ListingTicket {
    pub generation: u64,
    pub request: ListingRequest,
}

/// Provider work an event needs done
#[derive(Debug, Clone, PartialEq)]
pub enum Task {
    Genres { language: String },
    Listing(ListingTicket),
    Detail { title_id: TitleId, language: String },
    Trailer { title_id: TitleId },
}

/// Outcome of a [`Task`], with fallbacks already substituted
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    Genres(Vec<Genre>),
    Listing {
        ticket: ListingTicket,
        listing: Option<Listing>,
    },
    Detail {
        title_id: TitleId,
        detail: Option<TitleDetail>,
    },
    Trailer {
        title_id: TitleId,
        trailer: Option<TrailerRef>,
    },
}

/// What [`QueryOrchestrator::apply`] did with a completion
#[derive(Debug, Clone, PartialEq)]
pub enum Applied {
    Rendered,
    /// A listing from an older generation, dropped without rendering
    Discarded,
    /// The listing was for a page past the new total; run this task in its place
    Reissued(Task),
}

impl Task {
    /// Performs the provider calls for this task. Never fails: each call site logs its
    /// error and falls back.
    pub async fn run(self, provider: &dyn MetadataProvider) -> Completion {
        match self {
            Task::Genres { language } => {
                let genres = provider.list_genres(&language).await.unwrap_or_else(|e| {
                    tracing::error!(error = %e, provider = provider.name(), "Error loading genres");
                    Vec::new()
                });
                Completion::Genres(genres)
            }
            Task::Listing(ticket) => {
                let listing = match provider.fetch_listing(&ticket.request).await {
                    Ok(listing) => Some(listing),
                    Err(e) => {
                        tracing::error!(
                            error = %e,
                            endpoint = %ticket.request.endpoint,
                            page = ticket.request.page,
                            provider = provider.name(),
                            "Error fetching movies"
                        );
                        None
                    }
                };
                Completion::Listing { ticket, listing }
            }
            Task::Detail { title_id, language } => {
                // Both lookups must resolve before the detail view renders
                let (detail, credits) = tokio::join!(
                    provider.get_detail(title_id, &language),
                    provider.get_credits(title_id)
                );

                let detail = match detail {
                    Ok(detail) => {
                        let cast = credits
                            .map_err(|e| {
                                tracing::warn!(
                                    error = %e,
                                    title_id = %title_id,
                                    "Error fetching cast"
                                );
                            })
                            .ok();
                        Some(detail.with_cast(cast))
                    }
                    Err(e) => {
                        tracing::error!(
                            error = %e,
                            title_id = %title_id,
                            "Error fetching movie details"
                        );
                        None
                    }
                };
                Completion::Detail { title_id, detail }
            }
            Task::Trailer { title_id } => {
                let trailer = match provider.get_videos(title_id).await {
                    Ok(videos) => TrailerRef::select(&videos),
                    Err(e) => {
                        tracing::error!(error = %e, title_id = %title_id, "Error fetching trailer");
                        None
                    }
                };
                Completion::Trailer { title_id, trailer }
            }
        }
    }
}

/// Owns filter, page and overlay state and turns UI events into provider calls and
/// render instructions.
pub struct QueryOrchestrator {
    provider: Arc<dyn MetadataProvider>,
    presenter: Presenter,
    filters: FilterState,
    pager: Pager,
    overlays: Overlays,
    generation: u64,
}

impl QueryOrchestrator {
    pub fn new(provider: Arc<dyn MetadataProvider>, presenter: Presenter) -> Self {
        Self {
            provider,
            presenter,
            filters: FilterState::new(),
            pager: Pager::new(),
            overlays: Overlays::new(),
            generation: 0,
        }
    }

    pub fn provider(&self) -> Arc<dyn MetadataProvider> {
        Arc::clone(&self.provider)
    }

    pub fn page_state(&self) -> PageState {
        self.pager.state()
    }

    pub fn overlays(&self) -> Overlays {
        self.overlays
    }

    /// Generation of the most recently issued listing request
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Handles an event to completion, running its tasks one after another
    pub async fn handle(&mut self, event: UiEvent, surface: &mut dyn RenderSurface) {
        let mut tasks: VecDeque<Task> = self.prepare(event, surface).into();
        while let Some(task) = tasks.pop_front() {
            let provider = Arc::clone(&self.provider);
            let completion = task.run(provider.as_ref()).await;
            if let Applied::Reissued(task) = self.apply(completion, surface) {
                tasks.push_back(task);
            }
        }
    }

    /// Applies the synchronous part of an event and returns the fetches it requires
    pub fn prepare(&mut self, event: UiEvent, surface: &mut dyn RenderSurface) -> Vec<Task> {
        tracing::debug!(event = ?event, "Handling UI event");

        match event {
            UiEvent::Initialize => {
                self.pager.begin_submission();
                vec![
                    Task::Genres {
                        language: self.filters.language().to_string(),
                    },
                    self.listing_task(surface),
                ]
            }
            UiEvent::SearchSubmitted { query } => {
                self.filters.set_query(query);
                self.resubmit(surface)
            }
            UiEvent::FilterChanged(change) => {
                self.filters.apply(change);
                self.resubmit(surface)
            }
            UiEvent::PagePrev => self.navigate(Direction::Prev, surface),
            UiEvent::PageNext => self.navigate(Direction::Next, surface),
            UiEvent::Card(action) => self.card_action(action, surface),
            UiEvent::CloseDetail => {
                self.close_overlay(OverlayKind::Detail, surface);
                Vec::new()
            }
            UiEvent::CloseTrailer => {
                self.close_overlay(OverlayKind::Trailer, surface);
                Vec::new()
            }
        }
    }

    /// Renders a completed task
    pub fn apply(&mut self, completion: Completion, surface: &mut dyn RenderSurface) -> Applied {
        match completion {
            Completion::Genres(genres) => {
                surface.render_genres(&genres);
                Applied::Rendered
            }
            Completion::Listing { ticket, listing } => {
                if ticket.generation != self.generation {
                    tracing::debug!(
                        stale_generation = ticket.generation,
                        current_generation = self.generation,
                        page = ticket.request.page,
                        "Discarding stale listing response"
                    );
                    return Applied::Discarded;
                }

                if let Some(listing) = &listing {
                    if self.pager.on_response(listing.total_pages) {
                        tracing::info!(
                            requested_page = ticket.request.page,
                            total_pages = listing.total_pages,
                            "Requested page is past the end, fetching the last page"
                        );
                        return Applied::Reissued(self.listing_task(surface));
                    }
                }

                surface.set_loading(false);

                let cards = self
                    .presenter
                    .present_list(listing.as_ref().map(|l| l.results.as_slice()));
                surface.render_listing(&cards);
                surface.render_pagination(&self.presenter.present_pagination(self.pager.state()));
                Applied::Rendered
            }
            Completion::Detail { title_id, detail } => {
                match detail {
                    Some(detail) => {
                        surface.render_detail(&self.presenter.present_detail(&detail));
                        self.open_overlay(OverlayKind::Detail, surface);
                    }
                    None => {
                        tracing::debug!(title_id = %title_id, "Detail overlay left closed");
                        surface.show_notice(DETAIL_NOT_AVAILABLE);
                    }
                }
                Applied::Rendered
            }
            Completion::Trailer { title_id, trailer } => {
                match self.presenter.present_trailer(trailer.as_ref()) {
                    Ok(spec) => {
                        surface.render_trailer(&spec);
                        self.open_overlay(OverlayKind::Trailer, surface);
                    }
                    Err(signal) => {
                        tracing::info!(title_id = %title_id, "No trailer available");
                        surface.show_notice(signal.message);
                    }
                }
                Applied::Rendered
            }
        }
    }

    fn resubmit(&mut self, surface: &mut dyn RenderSurface) -> Vec<Task> {
        self.pager.begin_submission();
        surface.clear_listing();
        vec![self.listing_task(surface)]
    }

    fn navigate(&mut self, direction: Direction, surface: &mut dyn RenderSurface) -> Vec<Task> {
        if self.pager.advance(direction) {
            vec![self.listing_task(surface)]
        } else {
            tracing::debug!(
                direction = ?direction,
                page = self.pager.current_page(),
                total_pages = self.pager.total_pages(),
                "Ignoring pagination past bounds"
            );
            Vec::new()
        }
    }

    fn card_action(&mut self, action: CardAction, surface: &mut dyn RenderSurface) -> Vec<Task> {
        let title_id = action.title_id;
        match action.kind {
            ActionKind::ViewDetails => vec![Task::Detail {
                title_id,
                language: self.filters.language().to_string(),
            }],
            ActionKind::PlayTrailer => vec![Task::Trailer { title_id }],
            ActionKind::OpenExternal => {
                surface.open_external(&self.presenter.external_url(title_id));
                Vec::new()
            }
        }
    }

    fn listing_task(&mut self, surface: &mut dyn RenderSurface) -> Task {
        self.generation += 1;
        let request = build_request(&self.filters, self.pager.current_page());

        tracing::info!(
            generation = self.generation,
            endpoint = %request.endpoint,
            page = request.page,
            "Issuing listing request"
        );

        surface.set_loading(true);
        Task::Listing(ListingTicket {
            generation: self.generation,
            request,
        })
    }

    fn open_overlay(&mut self, kind: OverlayKind, surface: &mut dyn RenderSurface) {
        self.overlays.open(kind);
        surface.set_overlay(kind, Visibility::Shown);
    }

    fn close_overlay(&mut self, kind: OverlayKind, surface: &mut dyn RenderSurface) {
        self.overlays.close(kind);
        surface.set_overlay(kind, Visibility::Hidden);
    }
}
