//! Root layout: facet column + results + pagination bar + status bar.

use ratatui::layout::{Constraint, Layout, Rect};

/// Width of the facet column (genre checkboxes, year list, sort modes).
pub const FACET_WIDTH: u16 = 26;
/// Hide the facet column below this terminal width.
pub const HIDE_FACETS_THRESHOLD: u16 = 50;
/// Height of the pagination bar, borders included.
pub const PAGINATION_HEIGHT: u16 = 3;

/// Computed layout regions for a single frame.
pub struct AppLayout {
    /// Facet column (None if the terminal is too narrow).
    pub facets: Option<Rect>,
    /// Movie list for the current page.
    pub results: Rect,
    /// Previous / page numbers / Next.
    pub pagination: Rect,
    /// Status bar (bottom row).
    pub status: Rect,
}

impl AppLayout {
    pub fn compute(area: Rect) -> Self {
        let rows = Layout::vertical([
            Constraint::Min(1),    // Facets + results
            Constraint::Length(1), // Status bar
        ])
        .split(area);

        let (facets, main) = if area.width < HIDE_FACETS_THRESHOLD {
            (None, rows[0])
        } else {
            let cols = Layout::horizontal([Constraint::Length(FACET_WIDTH), Constraint::Min(1)])
                .split(rows[0]);
            (Some(cols[0]), cols[1])
        };

        let main_rows =
            Layout::vertical([Constraint::Min(1), Constraint::Length(PAGINATION_HEIGHT)])
                .split(main);

        AppLayout {
            facets,
            results: main_rows[0],
            pagination: main_rows[1],
            status: rows[1],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_terminal_shows_facets() {
        let layout = AppLayout::compute(Rect::new(0, 0, 120, 40));
        let facets = layout.facets.expect("facets visible");
        assert_eq!(facets.width, FACET_WIDTH);
        assert_eq!(layout.results.x, FACET_WIDTH);
        assert_eq!(layout.pagination.height, PAGINATION_HEIGHT);
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.status.y, 39);
    }

    #[test]
    fn test_narrow_terminal_hides_facets() {
        let layout = AppLayout::compute(Rect::new(0, 0, 40, 20));
        assert!(layout.facets.is_none());
        assert_eq!(layout.results.width, 40);
    }
}
