use crate::{
    models::Genre,
    services::{
        overlay::{OverlayKind, Visibility},
        presenter::{CardRenderSpec, DetailRenderSpec, PaginationRenderSpec, TrailerRenderSpec},
    },
};

/// Sink for render instructions produced by the orchestrator.
///
/// Implementations turn structured specs into whatever the display technology needs;
/// nothing here knows about markup or terminals.
pub trait RenderSurface {
    /// Raised while a listing request is in flight
    fn set_loading(&mut self, loading: bool);

    /// Empties the listing region ahead of a new search
    fn clear_listing(&mut self);

    fn render_genres(&mut self, genres: &[Genre]);

    fn render_listing(&mut self, cards: &[CardRenderSpec]);

    fn render_pagination(&mut self, pagination: &PaginationRenderSpec);

    fn render_detail(&mut self, detail: &DetailRenderSpec);

    fn render_trailer(&mut self, trailer: &TrailerRenderSpec);

    fn set_overlay(&mut self, kind: OverlayKind, visibility: Visibility);

    /// Non-blocking user-visible message
    fn show_notice(&mut self, message: &str);

    /// Hand a URL off to be opened outside the widget
    fn open_external(&mut self, url: &str);
}
