use crate::core::selection;

/// Events flowing through the Elm-architecture event loop.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Raw terminal input (keyboard/mouse).
    Input(crossterm::event::Event),
    /// Notification queued from outside the loop (e.g. startup warnings).
    Notification(Notification),
}

/// High-level actions dispatched by the input mapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Navigation
    FocusNext,
    FocusPrev,

    // Selection (goes through the URL synchronizer)
    Select(selection::Action),

    // History
    HistoryBack,
    HistoryForward,

    // Modals
    ShowHelp,
    CloseHelp,

    // Application
    Quit,
}

/// Which pane has input focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Focus {
    Genres,
    Year,
    Sort,
    Results,
}

impl Focus {
    pub const ALL: [Focus; 4] = [Focus::Genres, Focus::Year, Focus::Sort, Focus::Results];

    pub fn label(self) -> &'static str {
        match self {
            Focus::Genres => "Genres",
            Focus::Year => "Release Year",
            Focus::Sort => "Sort",
            Focus::Results => "Movies",
        }
    }

    pub fn next(self) -> Focus {
        let idx = Focus::ALL.iter().position(|&f| f == self).unwrap_or(0);
        Focus::ALL[(idx + 1) % Focus::ALL.len()]
    }

    pub fn prev(self) -> Focus {
        let idx = Focus::ALL.iter().position(|&f| f == self).unwrap_or(0);
        Focus::ALL[(idx + Focus::ALL.len() - 1) % Focus::ALL.len()]
    }
}

/// Notification level for the overlay system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

/// A timed notification shown in the overlay.
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub level: NotificationLevel,
    /// Ticks remaining before auto-dismiss.
    pub ttl_ticks: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_next_cycles() {
        let mut f = Focus::Genres;
        for _ in 0..Focus::ALL.len() {
            f = f.next();
        }
        assert_eq!(f, Focus::Genres);
        assert_eq!(Focus::Results.next(), Focus::Genres);
    }

    #[test]
    fn test_focus_prev_cycles() {
        assert_eq!(Focus::Genres.prev(), Focus::Results);
        assert_eq!(Focus::Sort.prev(), Focus::Year);
    }
}
