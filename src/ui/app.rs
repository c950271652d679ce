//! Main TUI application state and logic

use crate::parser::{Expr, ParseError, Parser, Program};
use crate::printer::outline;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use rustc_hash::FxHashMap;
use std::io;
use std::time::Duration;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Expressions,
    Outline,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: source -> expressions -> outline)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Expressions,
            FocusedPane::Expressions => FocusedPane::Outline,
            FocusedPane::Outline => FocusedPane::Source,
        }
    }

    /// Move focus to the previous pane (counter-clockwise)
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Outline,
            FocusedPane::Expressions => FocusedPane::Source,
            FocusedPane::Outline => FocusedPane::Expressions,
        }
    }
}

/// The main application state
pub struct App {
    /// Name shown in the source pane title
    pub file_name: String,

    /// The source text being viewed
    pub source_code: String,

    /// Expressions parsed before the first error (all of them on success)
    pub program: Program,

    /// The parse error that stopped parsing, if any
    pub error: Option<ParseError>,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Index of the selected top-level expression
    pub selected: usize,

    /// Per-pane scroll offsets
    pub source_scroll: usize,
    pub expressions_scroll: usize,
    pub outline_scroll: usize,

    /// Rendered outlines, keyed by expression index
    outline_cache: FxHashMap<usize, Vec<String>>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Parse `source_code` and build the viewer state. A parse error does not
    /// prevent viewing: the expressions before it are kept.
    pub fn new(file_name: impl Into<String>, source_code: String) -> Self {
        let mut program = Program::new();
        let mut error = None;
        for result in Parser::new(&source_code) {
            match result {
                Ok(expr) => program.exprs.push(expr),
                Err(err) => error = Some(err),
            }
        }

        let status_message = match &error {
            Some(err) => format!("Parse error: {err}"),
            None => format!("Parsed {} expression(s)", program.len()),
        };

        App {
            file_name: file_name.into(),
            source_code,
            program,
            error,
            focused_pane: FocusedPane::Expressions,
            selected: 0,
            source_scroll: 0,
            expressions_scroll: 0,
            outline_scroll: 0,
            outline_cache: FxHashMap::default(),
            should_quit: false,
            status_message,
        }
    }

    /// The currently selected expression, if any were parsed
    pub fn selected_expr(&self) -> Option<&Expr> {
        self.program.exprs.get(self.selected)
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(pane_area);

        // Right column: Expressions (top) | Outline (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(columns[1]);

        super::panes::render_source_pane(
            frame,
            columns[0],
            &self.file_name,
            &self.source_code,
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        super::panes::render_expressions_pane(
            frame,
            right_rows[0],
            &self.program,
            self.error.as_ref(),
            self.selected,
            self.focused_pane == FocusedPane::Expressions,
            &mut self.expressions_scroll,
        );

        let exprs = &self.program.exprs;
        let rows: &[String] = match exprs.get(self.selected) {
            Some(expr) => self
                .outline_cache
                .entry(self.selected)
                .or_insert_with(|| outline(expr))
                .as_slice(),
            None => &[],
        };
        super::panes::render_outline_pane(
            frame,
            right_rows[1],
            rows,
            self.focused_pane == FocusedPane::Outline,
            &mut self.outline_scroll,
        );

        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            self.selected,
            self.program.len(),
            self.error.is_some(),
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Source => {
                    self.source_scroll = self.source_scroll.saturating_sub(1);
                }
                FocusedPane::Expressions => {
                    self.select(self.selected.saturating_sub(1));
                }
                FocusedPane::Outline => {
                    self.outline_scroll = self.outline_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                // Offsets are clamped on the next render
                FocusedPane::Source => {
                    self.source_scroll = self.source_scroll.saturating_add(1);
                }
                FocusedPane::Expressions => {
                    self.select(self.selected.saturating_add(1));
                }
                FocusedPane::Outline => {
                    self.outline_scroll = self.outline_scroll.saturating_add(1);
                }
            },
            KeyCode::Home => match self.focused_pane {
                FocusedPane::Source => self.source_scroll = 0,
                FocusedPane::Expressions => self.select(0),
                FocusedPane::Outline => self.outline_scroll = 0,
            },
            KeyCode::End => match self.focused_pane {
                FocusedPane::Source => self.source_scroll = usize::MAX,
                FocusedPane::Expressions => self.select(usize::MAX),
                FocusedPane::Outline => self.outline_scroll = usize::MAX,
            },
            _ => {}
        }
    }

    /// Select an expression, clamped to the parsed range
    fn select(&mut self, index: usize) {
        if self.program.is_empty() {
            return;
        }
        let index = index.min(self.program.len() - 1);
        if index != self.selected {
            self.selected = index;
            self.outline_scroll = 0;
        }
        self.status_message = format!("Selected expression {}", self.selected + 1);
    }
}
