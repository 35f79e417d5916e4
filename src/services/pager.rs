/// Current and last-known total page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub current_page: u32,
    pub total_pages: u32,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
        }
    }
}

/// Navigation direction for a pagination click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// Tracks pagination and gates navigation. Never fetches anything itself.
#[derive(Debug, Clone, Default)]
pub struct Pager {
    state: PageState,
}

impl Pager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PageState {
        self.state
    }

    pub fn current_page(&self) -> u32 {
        self.state.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.state.total_pages
    }

    /// Back to page 1
    pub fn reset(&mut self) {
        self.state.current_page = 1;
    }

    /// Starts a new search or filter submission: page 1, and the total falls back to 1
    /// until the new query's first response arrives.
    pub fn begin_submission(&mut self) {
        self.reset();
        self.state.total_pages = 1;
    }

    /// Records the total page count reported by a listing response.
    ///
    /// A total of 0 (no results) is stored as 1. Returns `true` when the current page
    /// was past the new total and had to be pulled back to it.
    pub fn on_response(&mut self, total_pages: u32) -> bool {
        self.state.total_pages = total_pages.max(1);
        if self.state.current_page > self.state.total_pages {
            self.state.current_page = self.state.total_pages;
            return true;
        }
        false
    }

    pub fn can_go_prev(&self) -> bool {
        self.state.current_page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.state.current_page < self.state.total_pages
    }

    /// Moves one page in `direction`. Returns `true` when the page changed and a new
    /// listing must be fetched; an invalid move is a no-op returning `false`.
    pub fn advance(&mut self, direction: Direction) -> bool {
        match direction {
            Direction::Prev if self.can_go_prev() => {
                self.state.current_page -= 1;
                true
            }
            Direction::Next if self.can_go_next() => {
                self.state.current_page += 1;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pager_at(current_page: u32, total_pages: u32) -> Pager {
        Pager {
            state: PageState {
                current_page,
                total_pages,
            },
        }
    }

    #[test]
    fn test_initial_state() {
        let pager = Pager::new();
        assert_eq!(pager.current_page(), 1);
        assert_eq!(pager.total_pages(), 1);
        assert!(!pager.can_go_prev());
        assert!(!pager.can_go_next());
    }

    #[test]
    fn test_reset_from_any_page() {
        let mut pager = pager_at(7, 10);
        pager.reset();
        assert_eq!(pager.current_page(), 1);
        assert_eq!(pager.total_pages(), 10);
    }

    #[test]
    fn test_begin_submission_forgets_total() {
        let mut pager = pager_at(3, 10);
        pager.begin_submission();
        assert_eq!(pager.state(), PageState::default());
        assert!(!pager.can_go_next());
        assert!(!pager.advance(Direction::Next));
    }

    #[test]
    fn test_next_bounded_by_total() {
        let mut pager = pager_at(3, 5);
        assert!(pager.advance(Direction::Next));
        assert_eq!(pager.current_page(), 4);
        assert!(pager.advance(Direction::Next));
        assert_eq!(pager.current_page(), 5);
        assert!(!pager.can_go_next());
        assert!(!pager.advance(Direction::Next));
        assert!(!pager.advance(Direction::Next));
        assert_eq!(pager.current_page(), 5);
    }

    #[test]
    fn test_prev_bounded_by_one() {
        let mut pager = pager_at(2, 5);
        assert!(pager.advance(Direction::Prev));
        assert_eq!(pager.current_page(), 1);
        assert!(!pager.advance(Direction::Prev));
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn test_on_response_records_total() {
        let mut pager = Pager::new();
        assert!(!pager.on_response(5));
        assert_eq!(pager.total_pages(), 5);
        assert!(pager.can_go_next());
    }

    #[test]
    fn test_on_response_zero_pages() {
        let mut pager = Pager::new();
        pager.on_response(0);
        assert_eq!(pager.total_pages(), 1);
        assert!(!pager.can_go_next());
    }

    #[test]
    fn test_on_response_clamps_current() {
        let mut pager = pager_at(4, 5);
        assert!(pager.on_response(2));
        assert_eq!(pager.current_page(), 2);
        assert!(!pager.can_go_next());
    }
}
