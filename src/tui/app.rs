use std::io;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use tokio::sync::mpsc;

use super::events::{Action, AppEvent, Focus, Notification, NotificationLevel};
use super::layout::AppLayout;
use super::theme;
use super::views::catalog::{CatalogView, CatalogViewState};
use crate::core::pipeline::{self, PaginationControls, QueryResult};
use crate::core::query_string;
use crate::core::{Catalog, Facets, FieldChanges, MemoryHistory, UrlSync};

/// Ticks a notification stays visible unless the sender says otherwise.
pub const DEFAULT_NOTIFICATION_TTL: u32 = 30;

/// Central application state (Elm architecture).
pub struct AppState {
    /// Whether the app is still running.
    pub running: bool,
    /// Pane with input focus.
    pub focus: Focus,
    catalog: Catalog,
    facets: Facets,
    page_size: usize,
    /// Selection state and its (in-memory) URL history.
    sync: UrlSync<MemoryHistory>,
    /// Cursor positions in the facet panes.
    cursors: CatalogViewState,
    /// Active notifications (max 3 visible).
    pub notifications: Vec<Notification>,
    /// Monotonic counter for notification IDs.
    notification_counter: u64,
    /// Whether the help modal is open.
    pub show_help: bool,
    /// Receiver for queued events.
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl AppState {
    pub fn new(
        catalog: Catalog,
        page_size: usize,
        initial_query: &str,
        event_rx: mpsc::UnboundedReceiver<AppEvent>,
    ) -> Self {
        let facets = Facets::from_movies(catalog.movies());
        let sync = UrlSync::new(MemoryHistory::new(initial_query));
        let mut cursors = CatalogViewState::new();
        cursors.sync_cursors(&facets, sync.state());

        Self {
            running: true,
            focus: Focus::Genres,
            catalog,
            facets,
            page_size,
            sync,
            cursors,
            notifications: Vec::new(),
            notification_counter: 0,
            show_help: false,
            event_rx,
        }
    }

    pub fn sync(&self) -> &UrlSync<MemoryHistory> {
        &self.sync
    }

    /// Pipeline output for the current selection. Recomputed on every call.
    pub fn query(&self) -> QueryResult {
        pipeline::run_with_page_size(self.catalog.movies(), self.sync.state(), self.page_size)
    }

    // ── Elm event loop ──────────────────────────────────────────────────

    /// Main event loop: render → select → update → loop.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        tick_rate: Duration,
    ) -> io::Result<()> {
        let mut tick_interval = tokio::time::interval(tick_rate);
        let mut event_stream = EventStream::new();

        while self.running {
            terminal.draw(|frame| self.render(frame))?;

            tokio::select! {
                _ = tick_interval.tick() => {
                    self.on_tick();
                }
                Some(event) = self.event_rx.recv() => {
                    self.handle_event(event);
                }
                Some(Ok(crossterm_event)) = event_stream.next() => {
                    self.handle_event(AppEvent::Input(crossterm_event));
                }
            }
        }

        Ok(())
    }

    // ── Event handling ──────────────────────────────────────────────────

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Input(crossterm_event) => {
                // Priority 1: Help modal
                if self.show_help {
                    if let Some(action) = self.map_help_input(&crossterm_event) {
                        self.handle_action(action);
                    }
                    return;
                }

                // Priority 2: Focused pane
                let controls = PaginationControls::from_result(&self.query());
                if let Some(selection) =
                    self.cursors
                        .handle_input(&crossterm_event, self.focus, &self.facets, &controls)
                {
                    self.handle_action(Action::Select(selection));
                    return;
                }

                // Priority 3: Global keybindings
                if let Some(action) = self.map_input_to_action(&crossterm_event, &controls) {
                    self.handle_action(action);
                }
            }
            AppEvent::Notification(notification) => {
                self.push_notification_for(
                    notification.message,
                    notification.level,
                    notification.ttl_ticks,
                );
            }
        }
    }

    // ── Input mapping ───────────────────────────────────────────────────

    fn map_help_input(&self, event: &Event) -> Option<Action> {
        let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return None;
        };
        match code {
            KeyCode::Esc | KeyCode::Char('?') => Some(Action::CloseHelp),
            _ => None,
        }
    }

    fn map_input_to_action(&self, event: &Event, controls: &PaginationControls) -> Option<Action> {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return None;
        };

        match (*modifiers, *code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Action::Quit),
            (KeyModifiers::NONE | KeyModifiers::SHIFT, code) => match code {
                KeyCode::Char('q') => Some(Action::Quit),
                KeyCode::Char('?') => Some(Action::ShowHelp),
                KeyCode::Tab => Some(Action::FocusNext),
                KeyCode::BackTab => Some(Action::FocusPrev),
                KeyCode::Char('[') | KeyCode::Backspace => Some(Action::HistoryBack),
                KeyCode::Char(']') => Some(Action::HistoryForward),
                KeyCode::Char('n') | KeyCode::PageDown => controls
                    .next_page()
                    .map(|p| Action::Select(crate::core::Action::GoToPage(p))),
                KeyCode::Char('p') | KeyCode::PageUp => controls
                    .prev_page()
                    .map(|p| Action::Select(crate::core::Action::GoToPage(p))),
                _ => None,
            },
            _ => None,
        }
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::FocusNext => self.focus = self.focus.next(),
            Action::FocusPrev => self.focus = self.focus.prev(),
            Action::ShowHelp => self.show_help = true,
            Action::CloseHelp => self.show_help = false,
            Action::Select(selection) => {
                if self.sync.dispatch(selection) {
                    self.cursors.sync_cursors(&self.facets, self.sync.state());
                }
            }
            Action::HistoryBack => match self.sync.back() {
                Some(changes) => self.on_history_moved(changes),
                None => self.push_notification(
                    "Already at the oldest view".to_string(),
                    NotificationLevel::Info,
                ),
            },
            Action::HistoryForward => match self.sync.forward() {
                Some(changes) => self.on_history_moved(changes),
                None => self.push_notification(
                    "Already at the newest view".to_string(),
                    NotificationLevel::Info,
                ),
            },
        }
    }

    fn on_history_moved(&mut self, changes: FieldChanges) {
        if changes.any() {
            self.cursors.sync_cursors(&self.facets, self.sync.state());
        }
    }

    // ── Notifications ───────────────────────────────────────────────────

    /// Push a notification with the default lifetime (dedup by message, max 3).
    pub fn push_notification(&mut self, message: String, level: NotificationLevel) {
        self.push_notification_for(message, level, DEFAULT_NOTIFICATION_TTL);
    }

    /// Push a notification that lives for `ttl_ticks` ticks.
    pub fn push_notification_for(
        &mut self,
        message: String,
        level: NotificationLevel,
        ttl_ticks: u32,
    ) {
        if self.notifications.iter().any(|n| n.message == message) {
            return;
        }

        self.notification_counter += 1;
        self.notifications.push(Notification {
            id: self.notification_counter,
            message,
            level,
            ttl_ticks,
        });

        while self.notifications.len() > 3 {
            self.notifications.remove(0);
        }
    }

    /// Tick: decrement notification TTLs, dismiss expired.
    fn on_tick(&mut self) {
        for n in &mut self.notifications {
            n.ttl_ticks = n.ttl_ticks.saturating_sub(1);
        }
        self.notifications.retain(|n| n.ttl_ticks > 0);
    }

    // ── Rendering ───────────────────────────────────────────────────────

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let layout = AppLayout::compute(area);

        let result = self.query();
        let controls = PaginationControls::from_result(&result);
        let view = CatalogView {
            facets: &self.facets,
            selection: self.sync.state(),
            result: &result,
            controls: &controls,
            cursors: &self.cursors,
            focus: self.focus,
        };

        if let Some(facet_area) = layout.facets {
            view.render_facets(frame, facet_area);
        }
        view.render_results(frame, layout.results);
        view.render_pagination(frame, layout.pagination);

        self.render_status_bar(frame, layout.status, &result);
        self.render_notifications(frame, area);

        if self.show_help {
            self.render_help_modal(frame, area);
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect, result: &QueryResult) {
        let search = query_string::to_search(self.sync.state());
        let url = if search.is_empty() {
            "/".to_string()
        } else {
            format!("/{search}")
        };

        let status = Line::from(vec![
            Span::styled(" Movie Catalog ", theme::brand_badge()),
            Span::raw(" "),
            Span::styled(
                format!("page {} of {}", result.current_page, result.total_pages),
                Style::default()
                    .fg(theme::PRIMARY_LIGHT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" │ "),
            Span::styled(url, theme::muted()),
            Span::raw(" │ "),
            Span::styled("Tab", theme::key_hint()),
            Span::raw(":pane "),
            Span::styled("[ ]", theme::key_hint()),
            Span::raw(":history "),
            Span::styled("?", theme::key_hint()),
            Span::raw(":help "),
            Span::styled("q", theme::key_hint()),
            Span::raw(":quit"),
        ]);

        frame.render_widget(Paragraph::new(status), area);
    }

    fn render_notifications(&self, frame: &mut Frame, area: Rect) {
        if self.notifications.is_empty() {
            return;
        }

        let max_width = 40.min(area.width.saturating_sub(2));
        let height = self.notifications.len() as u16;
        let x = area.width.saturating_sub(max_width + 1);
        let notification_area = Rect::new(x, 1, max_width, height).intersection(area);

        let lines: Vec<Line> = self
            .notifications
            .iter()
            .map(|n| {
                let (prefix, color) = match n.level {
                    NotificationLevel::Info => ("ℹ", theme::INFO),
                    NotificationLevel::Warning => ("⚠", theme::WARNING),
                    NotificationLevel::Error => ("✗", theme::ERROR),
                };
                Line::from(vec![
                    Span::styled(
                        format!(" {prefix} "),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(n.message.as_str()),
                ])
            })
            .collect();

        frame.render_widget(Clear, notification_area);
        frame.render_widget(Paragraph::new(lines), notification_area);
    }

    fn render_help_modal(&self, frame: &mut Frame, area: Rect) {
        let modal = centered_rect(60, 70, area);

        let keybindings = [
            ("Global:", ""),
            ("q / Ctrl+C", "Quit"),
            ("?", "Toggle this help"),
            ("Tab / Shift+Tab", "Next / previous pane"),
            ("n / p", "Next / previous page"),
            ("[ / ]", "Back / forward through history"),
            ("", ""),
            ("Genres:", ""),
            ("j/k", "Move"),
            ("Space / Enter", "Toggle genre"),
            ("", ""),
            ("Release Year / Sort:", ""),
            ("j/k", "Move"),
            ("Space / Enter", "Choose"),
            ("", ""),
            ("Movies:", ""),
            ("h/l", "Previous / next page"),
            ("1-9", "Jump to page"),
        ];

        let mut lines = vec![
            Line::raw(""),
            Line::from(Span::styled(" Keybindings", theme::title())),
            Line::raw(""),
        ];

        for (key, desc) in keybindings {
            if key.is_empty() {
                lines.push(Line::raw(""));
            } else if desc.is_empty() {
                lines.push(Line::from(Span::styled(format!("  {key}"), theme::title())));
            } else {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        format!("{:<22}", key),
                        Style::default()
                            .fg(theme::PRIMARY_LIGHT)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(desc),
                ]));
            }
        }

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT));

        frame.render_widget(Clear, modal);
        frame.render_widget(Paragraph::new(lines).block(block), modal);
    }
}

/// Calculate a centered rect using percentage of parent area.
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}
