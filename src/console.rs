//! Terminal rendering surface and line-command parser used by the binary.

use std::io::Write;

use crate::{
    models::{FilterChange, Genre, TitleId},
    services::{
        orchestrator::UiEvent,
        overlay::{OverlayKind, Visibility},
        presenter::{
            ActionKind, CardAction, CardRenderSpec, DetailRenderSpec, PaginationRenderSpec,
            TrailerRenderSpec,
        },
        surface::RenderSurface,
    },
};

pub const HELP: &str = "\
Commands:
  search <text>        search titles (empty text browses)
  genre <id|any>       filter by genre id
  year <yyyy|any>      filter by release year
  rating <min|any>     filter by minimum rating
  language <code>      result language, e.g. en-US
  next | prev          change page
  details <id>         show title details
  open <id>            open title externally
  trailer <id>         play trailer
  close details        close the detail view
  close trailer        close the trailer view
  genres               list genre ids
  help                 show this help
  quit                 exit";

/// Printed when the listing is replaced; a terminal cannot erase earlier output
const LISTING_SEPARATOR: &str = "-- new results --";

/// A parsed input line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Event(UiEvent),
    ListGenres,
    Help,
    Quit,
}

/// Parses one input line into a command. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "search" => Command::Event(UiEvent::SearchSubmitted {
            query: rest.to_string(),
        }),
        "genre" => Command::Event(UiEvent::FilterChanged(FilterChange::Genre(
            parse_optional(rest, "genre id")?,
        ))),
        "year" => Command::Event(UiEvent::FilterChanged(FilterChange::Year(
            parse_optional(rest, "year")?,
        ))),
        "rating" => Command::Event(UiEvent::FilterChanged(FilterChange::MinRating(
            parse_rating(rest)?,
        ))),
        "language" | "lang" => Command::Event(UiEvent::FilterChanged(FilterChange::Language(
            rest.to_string(),
        ))),
        "next" => Command::Event(UiEvent::PageNext),
        "prev" => Command::Event(UiEvent::PagePrev),
        "details" => card(ActionKind::ViewDetails, rest)?,
        "open" => card(ActionKind::OpenExternal, rest)?,
        "trailer" => card(ActionKind::PlayTrailer, rest)?,
        "close" => match rest.to_lowercase().as_str() {
            "details" | "detail" => Command::Event(UiEvent::CloseDetail),
            "trailer" => Command::Event(UiEvent::CloseTrailer),
            other => return Err(format!("Nothing to close named '{}'", other)),
        },
        "genres" => Command::ListGenres,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("Unknown command '{}', try 'help'", other)),
    };

    Ok(Some(command))
}

/// Parses a filter value where `any` (or nothing) clears the filter
fn parse_optional<T: std::str::FromStr>(value: &str, what: &str) -> Result<Option<T>, String> {
    if value.is_empty() || value.eq_ignore_ascii_case("any") {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|_| format!("Invalid {}: '{}'", what, value))
}

/// Minimum rating must be a finite, non-negative number
fn parse_rating(value: &str) -> Result<Option<f64>, String> {
    match parse_optional::<f64>(value, "rating")? {
        Some(rating) if !rating.is_finite() || rating < 0.0 => {
            Err(format!("Invalid rating: '{}'", value))
        }
        rating => Ok(rating),
    }
}

fn card(kind: ActionKind, value: &str) -> Result<Command, String> {
    let id: u64 = value
        .parse()
        .map_err(|_| format!("Invalid title id: '{}'", value))?;
    Ok(Command::Event(UiEvent::Card(CardAction::new(
        kind,
        TitleId(id),
    ))))
}

/// Command that dispatches a card action of `kind`
fn command_word(kind: ActionKind) -> &'static str {
    match kind {
        ActionKind::ViewDetails => "details",
        ActionKind::OpenExternal => "open",
        ActionKind::PlayTrailer => "trailer",
    }
}

/// Writes render instructions as plain text lines
pub struct ConsoleSurface<W: Write> {
    out: W,
    genres: Vec<Genre>,
}

impl<W: Write> ConsoleSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            genres: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn print_genres(&mut self) {
        if self.genres.is_empty() {
            self.line("No genres loaded.");
            return;
        }
        let lines: Vec<String> = self
            .genres
            .iter()
            .map(|g| format!("  {:>6}  {}", g.id, g.name))
            .collect();
        for line in lines {
            self.line(&line);
        }
    }

    pub fn line(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text).and_then(|_| self.out.flush()) {
            tracing::warn!(error = %e, "Failed to write to console");
        }
    }
}

impl<W: Write> RenderSurface for ConsoleSurface<W> {
    fn set_loading(&mut self, loading: bool) {
        if loading {
            self.line("Loading...");
        }
    }

    fn clear_listing(&mut self) {
        self.line(LISTING_SEPARATOR);
    }

    fn render_genres(&mut self, genres: &[Genre]) {
        self.genres = genres.to_vec();
    }

    fn render_listing(&mut self, cards: &[CardRenderSpec]) {
        for card in cards {
            let text = match card {
                CardRenderSpec::Title(card) => {
                    let actions: Vec<String> = card
                        .actions
                        .iter()
                        .map(|a| {
                            format!("{}: {} {}", a.kind.label(), command_word(a.kind), a.title_id)
                        })
                        .collect();
                    format!(
                        "[{}] {}  (Rating: {})\n      poster: {}\n      {}",
                        card.title_id,
                        card.title,
                        card.rating,
                        card.poster_url,
                        actions.join(" | ")
                    )
                }
                CardRenderSpec::NoResults { message } => message.to_string(),
            };
            self.line(&text);
        }
    }

    fn render_pagination(&mut self, pagination: &PaginationRenderSpec) {
        let mut controls = Vec::new();
        if pagination.prev_enabled {
            controls.push("prev");
        }
        if pagination.next_enabled {
            controls.push("next");
        }

        let text = if controls.is_empty() {
            format!("Page {} of {}", pagination.current_page, pagination.total_pages)
        } else {
            format!(
                "Page {} of {}  [{}]",
                pagination.current_page,
                pagination.total_pages,
                controls.join(" | ")
            )
        };
        self.line(&text);
    }

    fn render_detail(&mut self, detail: &DetailRenderSpec) {
        let text = format!(
            "== {} ==\n{}\nRelease Date: {}\nRating: {}\nOverview: {}\nGenres: {}\nCast: {}",
            detail.title,
            detail.poster_url,
            detail.release_date,
            detail.rating,
            detail.overview,
            detail.genres,
            detail.cast
        );
        self.line(&text);
    }

    fn render_trailer(&mut self, trailer: &TrailerRenderSpec) {
        let text = format!("Trailer: {}", trailer.embed_url);
        self.line(&text);
    }

    fn set_overlay(&mut self, kind: OverlayKind, visibility: Visibility) {
        let name = match kind {
            OverlayKind::Detail => "details",
            OverlayKind::Trailer => "trailer",
        };
        let text = match visibility {
            Visibility::Shown => format!("({} open, 'close {}' to dismiss)", name, name),
            Visibility::Hidden => format!("({} closed)", name),
        };
        self.line(&text);
    }

    fn show_notice(&mut self, message: &str) {
        self.line(&format!("! {}", message));
    }

    fn open_external(&mut self, url: &str) {
        self.line(&format!("Open: {}", url));
    }
}
