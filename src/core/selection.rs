//! Selection State
//!
//! The user's current filter, sort and page choices, plus the pure
//! transitions the view is allowed to request. Nothing here has side
//! effects; publishing a state to the URL is [`super::sync::UrlSync`]'s job.

use indexmap::IndexSet;

/// How the filtered movies are ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortMode {
    /// Catalog order.
    #[default]
    None,
    /// By title, locale-aware.
    Alphabetical,
    /// By release year, ascending.
    ByYear,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [SortMode::None, SortMode::Alphabetical, SortMode::ByYear];

    /// Value of the `sort` query parameter, `None` when the parameter is omitted.
    pub fn as_param(self) -> Option<&'static str> {
        match self {
            SortMode::None => None,
            SortMode::Alphabetical => Some("alphabet"),
            SortMode::ByYear => Some("year"),
        }
    }

    /// Unknown values fall back to catalog order.
    pub fn from_param(value: &str) -> Self {
        match value {
            "alphabet" => SortMode::Alphabetical,
            "year" => SortMode::ByYear,
            _ => SortMode::None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortMode::None => "Unsorted",
            SortMode::Alphabetical => "A-Z",
            SortMode::ByYear => "Year",
        }
    }
}

/// Current filter/sort/page choices.
#[derive(Debug, Clone)]
pub struct SelectionState {
    /// Selected genres in the order they were checked.
    pub genres: IndexSet<String>,
    /// `None` means all years.
    pub year: Option<i32>,
    pub sort: SortMode,
    /// Always >= 1. Not clamped to the number of pages.
    pub page: u32,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            genres: IndexSet::new(),
            year: None,
            sort: SortMode::None,
            page: 1,
        }
    }
}

// Genre order is part of the state (it drives the URL), so equality is
// ordered rather than IndexSet's set equality.
impl PartialEq for SelectionState {
    fn eq(&self, other: &Self) -> bool {
        self.genres.iter().eq(other.genres.iter())
            && self.year == other.year
            && self.sort == other.sort
            && self.page == other.page
    }
}

impl Eq for SelectionState {}

impl SelectionState {
    pub fn is_genre_selected(&self, genre: &str) -> bool {
        self.genres.contains(genre)
    }

    /// Add `genre` if absent, remove it if present. Page and year are kept.
    pub fn toggle_genre(&self, genre: &str) -> Self {
        let mut next = self.clone();
        if !next.genres.shift_remove(genre) {
            next.genres.insert(genre.to_string());
        }
        next
    }

    pub fn set_year(&self, year: Option<i32>) -> Self {
        Self {
            year,
            ..self.clone()
        }
    }

    pub fn set_sort(&self, sort: SortMode) -> Self {
        Self {
            sort,
            ..self.clone()
        }
    }

    /// Move to page `n`. `n == 0` leaves the state unchanged.
    pub fn go_to_page(&self, n: u32) -> Self {
        if n < 1 {
            return self.clone();
        }
        Self {
            page: n,
            ..self.clone()
        }
    }
}

/// A state transition requested by the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ToggleGenre(String),
    SetYear(Option<i32>),
    SetSort(SortMode),
    GoToPage(u32),
}

/// Reducer over [`Action`].
pub fn apply(state: &SelectionState, action: &Action) -> SelectionState {
    match action {
        Action::ToggleGenre(genre) => state.toggle_genre(genre),
        Action::SetYear(year) => state.set_year(*year),
        Action::SetSort(sort) => state.set_sort(*sort),
        Action::GoToPage(n) => state.go_to_page(*n),
    }
}
