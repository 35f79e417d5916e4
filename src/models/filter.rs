/// Language sent when the user has not picked one
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// Snapshot of the filter controls and the free-text search box.
///
/// The language is never empty: clearing it restores [`DEFAULT_LANGUAGE`].
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    genre_id: Option<u64>,
    year: Option<i32>,
    min_rating: Option<f64>,
    language: String,
    query: Option<String>,
}

/// A single change coming from one filter control
#[derive(Debug, Clone, PartialEq)]
pub enum FilterChange {
    Genre(Option<u64>),
    Year(Option<i32>),
    MinRating(Option<f64>),
    Language(String),
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            genre_id: None,
            year: None,
            min_rating: None,
            language: DEFAULT_LANGUAGE.to_string(),
            query: None,
        }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn genre_id(&self) -> Option<u64> {
        self.genre_id
    }

    pub fn year(&self) -> Option<i32> {
        self.year
    }

    pub fn min_rating(&self) -> Option<f64> {
        self.min_rating
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// The search text, trimmed; `None` when blank.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref().map(str::trim).filter(|q| !q.is_empty())
    }

    /// True when any of genre, year or rating is set
    pub fn has_filters(&self) -> bool {
        self.genre_id.is_some() || self.year.is_some() || self.min_rating.is_some()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        self.query = if query.trim().is_empty() {
            None
        } else {
            Some(query)
        };
    }

    pub fn apply(&mut self, change: FilterChange) {
        match change {
            FilterChange::Genre(genre_id) => self.genre_id = genre_id,
            FilterChange::Year(year) => self.year = year,
            FilterChange::MinRating(rating) => self.min_rating = rating,
            FilterChange::Language(language) => {
                let language = language.trim();
                self.language = if language.is_empty() {
                    DEFAULT_LANGUAGE.to_string()
                } else {
                    language.to_string()
                };
            }
        }
    }

    pub fn with(mut self, change: FilterChange) -> Self {
        self.apply(change);
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.set_query(query);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_language() {
        assert_eq!(FilterState::new().language(), "en-US");
    }

    #[test]
    fn test_empty_language_restores_default() {
        let filters = FilterState::new()
            .with(FilterChange::Language("fr-FR".to_string()))
            .with(FilterChange::Language("   ".to_string()));
        assert_eq!(filters.language(), DEFAULT_LANGUAGE);
    }

    #[test]
    fn test_query_is_trimmed() {
        let filters = FilterState::new().with_query("  Matrix  ");
        assert_eq!(filters.query(), Some("Matrix"));
    }

    #[test]
    fn test_blank_query_is_none() {
        assert_eq!(FilterState::new().with_query("   ").query(), None);
        assert_eq!(FilterState::new().with_query("").query(), None);
    }

    #[test]
    fn test_has_filters() {
        assert!(!FilterState::new().has_filters());
        assert!(FilterState::new()
            .with(FilterChange::Year(Some(1999)))
            .has_filters());
        assert!(!FilterState::new()
            .with(FilterChange::Year(Some(1999)))
            .with(FilterChange::Year(None))
            .has_filters());
    }

    #[test]
    fn test_language_does_not_count_as_filter() {
        let filters = FilterState::new().with(FilterChange::Language("de-DE".to_string()));
        assert!(!filters.has_filters());
    }
}
