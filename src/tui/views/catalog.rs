//! Catalog view: facet controls, the current page of movies, pagination.
//!
//! Rendering is a pure function of the facets, the selection, and the query
//! result. Input handling only translates keys into selection actions; the
//! app hands those to the URL synchronizer.
//!
//! Keys (focused pane):
//! - Genres: `j`/`k` move, `Space`/`Enter` toggle
//! - Release Year / Sort: `j`/`k` move, `Space`/`Enter` choose
//! - Movies: `h`/`l` or arrows for previous/next page, `1`-`9` jump to page

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::core::facets::Facets;
use crate::core::pipeline::{PaginationControls, QueryResult};
use crate::core::selection::{Action, SelectionState, SortMode};
use crate::core::Movie;
use crate::tui::events::Focus;
use crate::tui::theme;

/// Minimum width of a movie card before the grid drops a column.
const CARD_MIN_WIDTH: u16 = 34;
/// Card height, borders included.
const CARD_HEIGHT: u16 = 4;
const MAX_COLUMNS: u16 = 4;

/// Cursor positions inside the facet controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogViewState {
    pub genre_cursor: usize,
    /// 0 is "All years", `i + 1` is `facets.years[i]`.
    pub year_cursor: usize,
    /// Index into [`SortMode::ALL`].
    pub sort_cursor: usize,
}

impl CatalogViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put the year and sort cursors on the current choices.
    pub fn sync_cursors(&mut self, facets: &Facets, state: &SelectionState) {
        self.year_cursor = state
            .year
            .and_then(|y| facets.years.iter().position(|&fy| fy == y))
            .map(|i| i + 1)
            .unwrap_or(0);
        self.sort_cursor = SortMode::ALL
            .iter()
            .position(|&m| m == state.sort)
            .unwrap_or(0);
        self.genre_cursor = self.genre_cursor.min(facets.genres.len().saturating_sub(1));
    }

    /// Translate a key press in the focused pane into a selection action.
    pub fn handle_input(
        &mut self,
        event: &Event,
        focus: Focus,
        facets: &Facets,
        controls: &PaginationControls,
    ) -> Option<Action> {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return None;
        };
        if !matches!(*modifiers, KeyModifiers::NONE | KeyModifiers::SHIFT) {
            return None;
        }

        match focus {
            Focus::Genres => match code {
                KeyCode::Char('j') | KeyCode::Down => {
                    self.genre_cursor = step(self.genre_cursor, facets.genres.len(), 1);
                    None
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    self.genre_cursor = step(self.genre_cursor, facets.genres.len(), -1);
                    None
                }
                KeyCode::Char(' ') | KeyCode::Enter => facets
                    .genres
                    .get(self.genre_cursor)
                    .map(|g| Action::ToggleGenre(g.clone())),
                _ => None,
            },
            Focus::Year => match code {
                KeyCode::Char('j') | KeyCode::Down => {
                    self.year_cursor = step(self.year_cursor, facets.years.len() + 1, 1);
                    None
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    self.year_cursor = step(self.year_cursor, facets.years.len() + 1, -1);
                    None
                }
                KeyCode::Char(' ') | KeyCode::Enter => Some(Action::SetYear(
                    self.year_cursor
                        .checked_sub(1)
                        .and_then(|i| facets.years.get(i).copied()),
                )),
                _ => None,
            },
            Focus::Sort => match code {
                KeyCode::Char('j') | KeyCode::Down => {
                    self.sort_cursor = step(self.sort_cursor, SortMode::ALL.len(), 1);
                    None
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    self.sort_cursor = step(self.sort_cursor, SortMode::ALL.len(), -1);
                    None
                }
                KeyCode::Char(' ') | KeyCode::Enter => {
                    Some(Action::SetSort(SortMode::ALL[self.sort_cursor]))
                }
                _ => None,
            },
            Focus::Results => match code {
                KeyCode::Char('h') | KeyCode::Left => controls.prev_page().map(Action::GoToPage),
                KeyCode::Char('l') | KeyCode::Right => controls.next_page().map(Action::GoToPage),
                KeyCode::Char(c @ '1'..='9') => {
                    let page = c.to_digit(10)?;
                    controls.pages.contains(&page).then_some(Action::GoToPage(page))
                }
                _ => None,
            },
        }
    }
}

/// Move a cursor by `delta`, clamped to `0..len`.
fn step(cursor: usize, len: usize, delta: isize) -> usize {
    if len == 0 {
        return 0;
    }
    cursor.saturating_add_signed(delta).min(len - 1)
}

/// Everything one frame of the catalog view needs.
pub struct CatalogView<'a> {
    pub facets: &'a Facets,
    pub selection: &'a SelectionState,
    pub result: &'a QueryResult,
    pub controls: &'a PaginationControls,
    pub cursors: &'a CatalogViewState,
    pub focus: Focus,
}

impl CatalogView<'_> {
    pub fn render_facets(&self, frame: &mut Frame, area: Rect) {
        let genre_rows = (self.facets.genres.len() as u16).max(1) + 2;
        let year_rows = (self.facets.years.len() as u16 + 1).min(8) + 2;
        let sort_rows = SortMode::ALL.len() as u16 + 2;

        let chunks = Layout::vertical([
            Constraint::Max(genre_rows),
            Constraint::Length(year_rows),
            Constraint::Length(sort_rows),
            Constraint::Min(0),
        ])
        .split(area);

        self.render_genres(frame, chunks[0]);
        self.render_years(frame, chunks[1]);
        self.render_sort(frame, chunks[2]);
    }

    fn block(&self, pane: Focus) -> Block<'static> {
        let title = format!(" {} ", pane.label());
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(if self.focus == pane {
                theme::border_focused()
            } else {
                theme::border_default()
            })
    }

    fn render_genres(&self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::Genres;
        let lines: Vec<Line> = if self.facets.genres.is_empty() {
            vec![Line::from(Span::styled("No genres", theme::dim()))]
        } else {
            self.facets
                .genres
                .iter()
                .enumerate()
                .map(|(i, genre)| {
                    let checked = self.selection.is_genre_selected(genre);
                    let style = row_style(focused && i == self.cursors.genre_cursor, checked);
                    Line::from(Span::styled(
                        format!("{} {}", theme::checkbox(checked), capitalize(genre)),
                        style,
                    ))
                })
                .collect()
        };

        let visible = area.height.saturating_sub(2) as usize;
        let scroll = scroll_offset(self.cursors.genre_cursor, visible);
        frame.render_widget(
            Paragraph::new(lines)
                .block(self.block(Focus::Genres))
                .scroll((scroll, 0)),
            area,
        );
    }

    fn render_years(&self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::Year;
        let options = std::iter::once(None).chain(self.facets.years.iter().copied().map(Some));
        let lines: Vec<Line> = options
            .enumerate()
            .map(|(i, year)| {
                let chosen = self.selection.year == year;
                let label = year.map_or_else(|| "All years".to_string(), |y| y.to_string());
                let marker = if chosen { "(•)" } else { "( )" };
                Line::from(Span::styled(
                    format!("{marker} {label}"),
                    row_style(focused && i == self.cursors.year_cursor, chosen),
                ))
            })
            .collect();

        let visible = area.height.saturating_sub(2) as usize;
        let scroll = scroll_offset(self.cursors.year_cursor, visible);
        frame.render_widget(
            Paragraph::new(lines)
                .block(self.block(Focus::Year))
                .scroll((scroll, 0)),
            area,
        );
    }

    fn render_sort(&self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::Sort;
        let lines: Vec<Line> = SortMode::ALL
            .iter()
            .enumerate()
            .map(|(i, &mode)| {
                let active = self.selection.sort == mode;
                let marker = if active { "(•)" } else { "( )" };
                Line::from(Span::styled(
                    format!("{marker} {}", mode.label()),
                    row_style(focused && i == self.cursors.sort_cursor, active),
                ))
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).block(self.block(Focus::Sort)), area);
    }

    pub fn render_results(&self, frame: &mut Frame, area: Rect) {
        let block = self.block(Focus::Results).title(
            Line::from(Span::styled(
                format!(" {} matching ", self.result.filtered_count),
                theme::muted(),
            ))
            .right_aligned(),
        );
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.result.page_items.is_empty() {
            let message = if self.result.filtered_count == 0 {
                "No movies match the current filters."
            } else {
                "This page is empty."
            };
            frame.render_widget(
                Paragraph::new(vec![
                    Line::raw(""),
                    Line::from(Span::styled(message, theme::muted())),
                ])
                .alignment(Alignment::Center),
                inner,
            );
            return;
        }

        let columns = (inner.width / CARD_MIN_WIDTH).clamp(1, MAX_COLUMNS) as usize;
        let rows = self.result.page_items.chunks(columns);
        let row_areas = Layout::vertical(
            std::iter::repeat(Constraint::Length(CARD_HEIGHT)).take(rows.len()),
        )
        .split(inner);

        for (row, row_area) in self.result.page_items.chunks(columns).zip(row_areas.iter()) {
            let col_areas = Layout::horizontal(
                std::iter::repeat(Constraint::Ratio(1, columns as u32)).take(columns),
            )
            .split(*row_area);
            for (movie, card_area) in row.iter().zip(col_areas.iter()) {
                render_card(frame, *card_area, movie);
            }
        }
    }

    pub fn render_pagination(&self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        spans.push(Span::styled(
            " ‹ Previous ",
            if self.controls.prev_enabled {
                theme::highlight()
            } else {
                theme::dim()
            },
        ));
        for &page in &self.controls.pages {
            spans.push(Span::raw(" "));
            let label = format!(" {page} ");
            if page == self.controls.current_page {
                spans.push(Span::styled(label, theme::active_badge()));
            } else {
                spans.push(Span::styled(label, Style::default().fg(theme::TEXT)));
            }
        }
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            " Next › ",
            if self.controls.next_enabled {
                theme::highlight()
            } else {
                theme::dim()
            },
        ));

        frame.render_widget(
            Paragraph::new(Line::from(spans))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).border_style(theme::border_default())),
            area,
        );
    }
}

fn render_card(frame: &mut Frame, area: Rect, movie: &Movie) {
    let block = Block::default()
        .title(Span::styled(format!(" {} ", movie.title), theme::title()))
        .borders(Borders::ALL)
        .border_style(theme::border_default());
    let lines = vec![
        Line::from(vec![
            Span::styled("Release date: ", theme::muted()),
            Span::styled(movie.year.to_string(), Style::default().fg(theme::TEXT)),
        ]),
        Line::from(vec![
            Span::styled("Genre: ", theme::muted()),
            Span::styled(movie.genre_label(), Style::default().fg(theme::TEXT)),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn row_style(under_cursor: bool, selected: bool) -> Style {
    match (under_cursor, selected) {
        (true, _) => theme::highlight().add_modifier(Modifier::REVERSED),
        (false, true) => theme::heading(),
        (false, false) => Style::default().fg(theme::TEXT),
    }
}

fn scroll_offset(cursor: usize, visible: usize) -> u16 {
    if visible == 0 || cursor < visible {
        0
    } else {
        (cursor + 1 - visible) as u16
    }
}

/// `"sci-fi"` -> `"Sci-fi"`.
pub fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pipeline;
    use ratatui::{backend::TestBackend, Terminal};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn sample() -> Vec<Movie> {
        vec![
            Movie::new(1, "Alpha", 2000, &["drama"]),
            Movie::new(2, "Beta", 1999, &["comedy"]),
            Movie::new(3, "Gamma", 2000, &["drama", "comedy"]),
        ]
    }

    fn controls_for(total: u32, current: u32) -> PaginationControls {
        PaginationControls {
            pages: (1..=total).collect(),
            current_page: current,
            prev_enabled: current > 1,
            next_enabled: current < total,
        }
    }

    #[test]
    fn test_genre_toggle_under_cursor() {
        let facets = Facets::from_movies(&sample());
        let mut view = CatalogViewState::new();
        let controls = controls_for(1, 1);

        assert_eq!(
            view.handle_input(&key(KeyCode::Char('j')), Focus::Genres, &facets, &controls),
            None
        );
        assert_eq!(
            view.handle_input(&key(KeyCode::Char(' ')), Focus::Genres, &facets, &controls),
            Some(Action::ToggleGenre("drama".into()))
        );
    }

    #[test]
    fn test_cursor_clamps_at_edges() {
        let facets = Facets::from_movies(&sample());
        let mut view = CatalogViewState::new();
        let controls = controls_for(1, 1);
        for _ in 0..5 {
            view.handle_input(&key(KeyCode::Down), Focus::Genres, &facets, &controls);
        }
        assert_eq!(view.genre_cursor, 1);
        view.handle_input(&key(KeyCode::Up), Focus::Genres, &facets, &controls);
        view.handle_input(&key(KeyCode::Up), Focus::Genres, &facets, &controls);
        assert_eq!(view.genre_cursor, 0);
    }

    #[test]
    fn test_year_all_years_option() {
        let facets = Facets::from_movies(&sample());
        let mut view = CatalogViewState::new();
        let controls = controls_for(1, 1);
        assert_eq!(
            view.handle_input(&key(KeyCode::Enter), Focus::Year, &facets, &controls),
            Some(Action::SetYear(None))
        );
        view.handle_input(&key(KeyCode::Down), Focus::Year, &facets, &controls);
        assert_eq!(
            view.handle_input(&key(KeyCode::Enter), Focus::Year, &facets, &controls),
            Some(Action::SetYear(Some(1999)))
        );
    }

    #[test]
    fn test_sort_selection() {
        let facets = Facets::from_movies(&sample());
        let mut view = CatalogViewState::new();
        let controls = controls_for(1, 1);
        view.handle_input(&key(KeyCode::Down), Focus::Sort, &facets, &controls);
        view.handle_input(&key(KeyCode::Down), Focus::Sort, &facets, &controls);
        assert_eq!(
            view.handle_input(&key(KeyCode::Enter), Focus::Sort, &facets, &controls),
            Some(Action::SetSort(SortMode::ByYear))
        );
    }

    #[test]
    fn test_results_paging_respects_controls() {
        let facets = Facets::default();
        let mut view = CatalogViewState::new();

        let first = controls_for(3, 1);
        assert_eq!(
            view.handle_input(&key(KeyCode::Left), Focus::Results, &facets, &first),
            None
        );
        assert_eq!(
            view.handle_input(&key(KeyCode::Right), Focus::Results, &facets, &first),
            Some(Action::GoToPage(2))
        );

        let last = controls_for(3, 3);
        assert_eq!(
            view.handle_input(&key(KeyCode::Char('l')), Focus::Results, &facets, &last),
            None
        );
        assert_eq!(
            view.handle_input(&key(KeyCode::Char('2')), Focus::Results, &facets, &last),
            Some(Action::GoToPage(2))
        );
        assert_eq!(
            view.handle_input(&key(KeyCode::Char('7')), Focus::Results, &facets, &last),
            None
        );
    }

    #[test]
    fn test_sync_cursors_follow_selection() {
        let facets = Facets::from_movies(&sample());
        let state = SelectionState::default()
            .set_year(Some(2000))
            .set_sort(SortMode::Alphabetical);
        let mut view = CatalogViewState::new();
        view.sync_cursors(&facets, &state);
        assert_eq!(view.year_cursor, 2);
        assert_eq!(view.sort_cursor, 1);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("sci-fi"), "Sci-fi");
        assert_eq!(capitalize(""), "");
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_page_and_controls() {
        let movies = sample();
        let facets = Facets::from_movies(&movies);
        let selection = SelectionState::default().toggle_genre("comedy");
        let result = pipeline::run(&movies, &selection);
        let controls = PaginationControls::from_result(&result);
        let cursors = CatalogViewState::new();
        let view = CatalogView {
            facets: &facets,
            selection: &selection,
            result: &result,
            controls: &controls,
            cursors: &cursors,
            focus: Focus::Genres,
        };

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                let cols = Layout::horizontal([Constraint::Length(26), Constraint::Min(1)])
                    .split(area);
                let rows = Layout::vertical([Constraint::Min(1), Constraint::Length(3)])
                    .split(cols[1]);
                view.render_facets(frame, cols[0]);
                view.render_results(frame, rows[0]);
                view.render_pagination(frame, rows[1]);
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("[x] Comedy"));
        assert!(text.contains("[ ] Drama"));
        assert!(text.contains("Beta"));
        assert!(text.contains("Gamma"));
        assert!(!text.contains("Alpha"));
        assert!(text.contains("Previous"));
        assert!(text.contains("Next"));
    }

    #[test]
    fn test_render_empty_state() {
        let movies = sample();
        let facets = Facets::from_movies(&movies);
        let selection = SelectionState::default().set_year(Some(1850));
        let result = pipeline::run(&movies, &selection);
        let controls = PaginationControls::from_result(&result);
        let cursors = CatalogViewState::new();
        let view = CatalogView {
            facets: &facets,
            selection: &selection,
            result: &result,
            controls: &controls,
            cursors: &cursors,
            focus: Focus::Results,
        };

        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        terminal
            .draw(|frame| view.render_results(frame, frame.area()))
            .unwrap();
        assert!(buffer_text(&terminal).contains("No movies match"));
    }
}
