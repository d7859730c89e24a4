// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Redmark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Redmark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! The interactive shell (ratatui + crossterm): one blocking input read per
//! frame, selection over the flat annotation list, scrolling over logical
//! rows, and a paragraph-feedback toggle. The parsed document is immutable;
//! only layout is recomputed per frame, against the terminal size read at
//! the top of that frame, which is all the resize handling there is.

use std::error::Error;
use std::io;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::Paragraph,
};

use crate::annotate::parse_review;
use crate::layout::{document_rows, max_scroll, DisplaySegment, LogicalRow};
use crate::model::{GradedDocument, Review};

mod theme;

use theme::TuiTheme;

const MIN_VIEWPORT_WIDTH: u16 = 30;
const MIN_VIEWPORT_HEIGHT: u16 = 10;
// Header line plus one blank row before the body.
const RESERVED_HEADER_ROWS: usize = 2;
// Columns kept free to the right of wrapped text for per-row tag summaries.
const TAG_GUTTER_COLS: usize = 15;
const MIN_WRAP_COLS: usize = 20;
const TOO_SMALL_NOTICE: &str = "Terminal too small.";
const NO_ERRORS_HEADER: &str = "No errors";

/// Runs the interactive viewer over a review until the user quits.
pub fn run(review: Review) -> Result<(), Box<dyn Error>> {
    // Resolve theme overrides before the terminal enters raw mode so a bad
    // palette fails loudly instead of garbling the session.
    let theme = TuiTheme::from_env()?;
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(review, theme);

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &mut app))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            // Redraw with freshly read dimensions on the next frame.
            Event::Resize(..) => {}
            _ => {}
        }
    }

    Ok(())
}

struct App {
    doc: GradedDocument,
    theme: TuiTheme,
    selected: usize,
    scroll: usize,
    show_feedback: bool,
    // Bounds from the last drawn frame; keys between frames clamp against
    // these and the next draw re-derives them.
    max_scroll_hint: usize,
    page_rows: usize,
    should_quit: bool,
}

impl App {
    fn new(review: Review, theme: TuiTheme) -> Self {
        Self {
            doc: parse_review(&review),
            theme,
            selected: 0,
            scroll: 0,
            show_feedback: true,
            max_scroll_hint: 0,
            page_rows: 1,
            should_quit: false,
        }
    }

    fn total_errors(&self) -> usize {
        self.doc.annotations().len()
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.handle_key_code(key.code) {
            self.should_quit = true;
        }
    }

    fn handle_key_code(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Right | KeyCode::Char('l') => self.select_next(),
            KeyCode::Left | KeyCode::Char('h') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::PageDown => self.scroll_by(self.page_rows as isize),
            KeyCode::PageUp => self.scroll_by(-(self.page_rows as isize)),
            KeyCode::Home => self.scroll = 0,
            KeyCode::End => self.scroll = self.max_scroll_hint,
            KeyCode::Char('f') => self.show_feedback = !self.show_feedback,
            _ => {}
        }

        false
    }

    fn select_next(&mut self) {
        let total = self.total_errors();
        if total == 0 {
            return;
        }
        self.selected = (self.selected + 1) % total;
    }

    fn select_prev(&mut self) {
        let total = self.total_errors();
        if total == 0 {
            return;
        }
        self.selected = (self.selected + total - 1) % total;
    }

    fn scroll_by(&mut self, delta: isize) {
        self.scroll = self.scroll.saturating_add_signed(delta).min(self.max_scroll_hint);
    }

    /// Re-derives the scroll bounds for the current frame and clamps the
    /// offset into them. Runs every frame, so resizes and the feedback
    /// toggle can never leave the offset past the new maximum.
    fn sync_scroll_bounds(&mut self, total_rows: usize, viewport_height: usize) {
        self.max_scroll_hint = max_scroll(total_rows, viewport_height, RESERVED_HEADER_ROWS);
        self.page_rows = viewport_height.saturating_sub(RESERVED_HEADER_ROWS).max(1);
        self.scroll = self.scroll.min(self.max_scroll_hint);
    }
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.size();

    if viewport_too_small(area.width, area.height) {
        let notice = Paragraph::new(Span::styled(TOO_SMALL_NOTICE, app.theme.notice_style()))
            .style(app.theme.base_style());
        frame.render_widget(notice, area);
        return;
    }

    let wrap_width = wrap_width_for(area.width);
    let rows = document_rows(&app.doc, wrap_width, app.show_feedback);
    app.sync_scroll_bounds(rows.len(), area.height as usize);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let header = Paragraph::new(header_line(app)).style(app.theme.base_style());
    frame.render_widget(header, chunks[0]);

    let body = body_lines(
        &rows,
        app.scroll,
        chunks[2].height as usize,
        wrap_width,
        app.selected,
        &app.theme,
    );
    let body = Paragraph::new(Text::from(body)).style(app.theme.base_style());
    frame.render_widget(body, chunks[2]);
}

fn viewport_too_small(width: u16, height: u16) -> bool {
    width < MIN_VIEWPORT_WIDTH || height < MIN_VIEWPORT_HEIGHT
}

fn wrap_width_for(viewport_width: u16) -> usize {
    MIN_WRAP_COLS.max((viewport_width as usize).saturating_sub(TAG_GUTTER_COLS))
}

fn header_line(app: &App) -> Line<'static> {
    let total = app.total_errors();
    let text = if total == 0 {
        NO_ERRORS_HEADER.to_owned()
    } else {
        let annotation = &app.doc.annotations()[app.selected];
        format!(
            "({}/{total}) {}: {}",
            app.selected + 1,
            annotation.category().code(),
            annotation.message()
        )
    };

    Line::from(Span::styled(text, app.theme.header_style()))
}

/// Renders the logical rows visible in a body viewport of `height` rows
/// starting at `scroll`. Rows before the offset are skipped but keep their
/// error indices, so marker highlighting is scroll-independent.
fn body_lines(
    rows: &[LogicalRow],
    scroll: usize,
    height: usize,
    wrap_width: usize,
    selected: usize,
    theme: &TuiTheme,
) -> Vec<Line<'static>> {
    rows.iter()
        .skip(scroll)
        .take(height)
        .map(|row| match row {
            LogicalRow::Text {
                segment,
                first_error_index,
            } => text_row_line(segment, *first_error_index, wrap_width, selected, theme),
            LogicalRow::Feedback { text } => {
                Line::from(Span::styled(text.clone(), theme.feedback_style()))
            }
            LogicalRow::Blank => Line::default(),
        })
        .collect()
}

fn text_row_line(
    segment: &DisplaySegment,
    first_error_index: usize,
    wrap_width: usize,
    selected: usize,
    theme: &TuiTheme,
) -> Line<'static> {
    let chars = segment.text().chars().collect::<Vec<char>>();
    let mut spans = Vec::new();
    let mut consumed = 0;

    for (ordinal, marker) in segment.markers().iter().enumerate() {
        if marker.offset > consumed {
            spans.push(Span::raw(chars[consumed..marker.offset].iter().collect::<String>()));
        }
        let style = if first_error_index + ordinal == selected {
            theme.selected_marker_style()
        } else {
            theme.marker_style()
        };
        spans.push(Span::styled(chars[marker.offset].to_string(), style));
        consumed = marker.offset + 1;
    }
    if consumed < chars.len() {
        spans.push(Span::raw(chars[consumed..].iter().collect::<String>()));
    }

    if !segment.markers().is_empty() {
        let tags = segment
            .categories()
            .map(|category| category.code())
            .collect::<Vec<_>>()
            .join(" ");
        let pad = (wrap_width + 2).saturating_sub(chars.len());
        spans.push(Span::raw(" ".repeat(pad)));
        spans.push(Span::styled(tags, theme.marker_style()));
    }

    Line::from(spans)
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}
