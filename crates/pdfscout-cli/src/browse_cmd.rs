//! Interactive terminal browser.
//!
//! Typing edits the query and re-runs the search on every keystroke. Up and
//! Down (or Enter) step through matches only while the query has matches,
//! and the view is re-centred on the current match after every change. Esc
//! clears the query, or quits when it is already empty.

use std::io;
use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use pdfscout::{AnnotatedView, Direction, Segment, Session, SessionOptions};
use ratatui::DefaultTerminal;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::shared::open_session;

pub fn run(file: &Path, options: SessionOptions) -> Result<(), i32> {
    let session = open_session(file, options)?;

    let mut terminal = ratatui::try_init().map_err(|e| {
        eprintln!("Error: cannot start terminal UI: {e}");
        1
    })?;
    let result = Browser::new(session).run(&mut terminal);
    ratatui::restore();

    result.map_err(|e| {
        eprintln!("Error: {e}");
        1
    })
}

struct Browser {
    session: Session,
    query: String,
    scroll: u16,
    viewport: Rect,
    quit: bool,
}

impl Browser {
    fn new(session: Session) -> Self {
        Self {
            session,
            query: String::new(),
            scroll: 0,
            viewport: Rect::default(),
            quit: false,
        }
    }

    fn run(mut self, terminal: &mut DefaultTerminal) -> io::Result<()> {
        while !self.quit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit = true;
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.query.push(c);
                self.search_changed();
            }
            KeyCode::Backspace => {
                self.query.pop();
                self.search_changed();
            }
            KeyCode::Esc if self.query.is_empty() => self.quit = true,
            KeyCode::Esc => {
                self.query.clear();
                self.session.clear_query();
                self.scroll = 0;
            }
            KeyCode::Down | KeyCode::Enter => self.step(Direction::Next),
            KeyCode::Up => self.step(Direction::Previous),
            KeyCode::PageDown => {
                self.scroll = self.scroll.saturating_add(self.viewport.height.max(1));
            }
            KeyCode::PageUp => {
                self.scroll = self.scroll.saturating_sub(self.viewport.height.max(1));
            }
            _ => {}
        }
    }

    fn search_changed(&mut self) {
        self.session.set_query(self.query.clone());
        self.recentre();
    }

    fn step(&mut self, direction: Direction) {
        if self.session.search().navigation_enabled() {
            self.session.navigate(direction);
            self.recentre();
        }
    }

    /// Scroll so the current match sits in the middle of the text pane.
    fn recentre(&mut self) {
        let Some(view) = self.session.annotated_view() else {
            return;
        };
        let (Some(doc), Some(range)) = (self.session.document(), view.active_range()) else {
            return;
        };
        let width = usize::from(self.viewport.width.saturating_sub(2));
        let row = wrapped_row(doc.text(), range.start, width);
        let half = usize::from(self.viewport.height.saturating_sub(2) / 2);
        self.scroll = u16::try_from(row.saturating_sub(half)).unwrap_or(u16::MAX);
    }

    fn draw(&mut self, frame: &mut Frame) {
        let [search_area, text_area, status_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(frame.area());
        self.viewport = text_area;

        let search = self.session.search();
        let label = if search.has_query() {
            search.position_label()
        } else {
            String::new()
        };
        let search_bar = Paragraph::new(self.query.as_str()).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Search")
                .title_bottom(Line::from(label).right_aligned()),
        );
        frame.render_widget(search_bar, search_area);

        let (title, lines) = match (self.session.document(), self.session.annotated_view()) {
            (Some(doc), Some(view)) => (doc.file_name(), highlighted_lines(doc.text(), &view)),
            _ => ("", Vec::new()),
        };
        let body = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(title))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0));
        frame.render_widget(body, text_area);

        let hint = if search.navigation_enabled() {
            "type to search · ↑/↓ previous/next · PgUp/PgDn scroll · Esc clear"
        } else {
            "type to search · PgUp/PgDn scroll · Esc quit"
        };
        frame.render_widget(
            Paragraph::new(hint).style(Style::default().fg(Color::DarkGray)),
            status_area,
        );
    }
}

/// Split the annotated document into terminal lines with match styling.
fn highlighted_lines<'a>(text: &'a str, view: &AnnotatedView) -> Vec<Line<'a>> {
    let match_style = Style::default().bg(Color::Yellow).fg(Color::Black);
    let active_style = match_style
        .bg(Color::LightRed)
        .add_modifier(Modifier::BOLD);

    let mut lines = Vec::new();
    let mut spans: Vec<Span<'a>> = Vec::new();
    for segment in &view.segments {
        let style = match segment {
            Segment::Match { active: true, .. } => active_style,
            Segment::Match { .. } => match_style,
            Segment::Plain { .. } => Style::default(),
        };
        let mut parts = segment.text(text).split('\n');
        if let Some(first) = parts.next().filter(|p| !p.is_empty()) {
            spans.push(Span::styled(first, style));
        }
        for part in parts {
            lines.push(Line::from(std::mem::take(&mut spans)));
            if !part.is_empty() {
                spans.push(Span::styled(part, style));
            }
        }
    }
    lines.push(Line::from(spans));
    lines
}

/// Approximate wrapped row of byte `offset` at `width` columns.
fn wrapped_row(text: &str, offset: usize, width: usize) -> usize {
    let width = width.max(1);
    let mut rows = 0;
    let mut lines = text[..offset].split('\n').peekable();
    while let Some(line) = lines.next() {
        let chars = line.chars().count();
        if lines.peek().is_some() {
            rows += chars.div_ceil(width).max(1);
        } else {
            rows += chars / width;
        }
    }
    rows
}
