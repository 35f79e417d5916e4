pub mod orchestrator;
pub mod overlay;
pub mod pager;
pub mod presenter;
pub mod providers;
pub mod query_builder;
pub mod surface;

pub use orchestrator::{Applied, Completion, QueryOrchestrator, Task, UiEvent};
pub use presenter::Presenter;
pub use providers::{tmdb::TmdbProvider, MetadataProvider};
pub use surface::RenderSurface;
