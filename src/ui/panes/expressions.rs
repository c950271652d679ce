//! Expressions pane: one canonical line per parsed top-level expression

use super::{clamp_scroll, pane_block, visible_height};
use crate::parser::{ParseError, Program};
use crate::printer::to_sexpr;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the expressions pane. The selected row is kept in view; a parse
/// error, if any, is shown as the last row.
pub fn render_expressions_pane(
    frame: &mut Frame,
    area: Rect,
    program: &Program,
    error: Option<&ParseError>,
    selected: usize,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let title = format!(" Expressions ({}) ", program.len());
    let block = pane_block(&title, is_focused);

    let mut rows: Vec<Line> = program
        .exprs
        .iter()
        .enumerate()
        .map(|(idx, expr)| {
            let is_selected = idx == selected;
            let marker = if is_selected { "▶" } else { " " };
            let (num_style, text_style) = if is_selected {
                (
                    Style::default()
                        .fg(DEFAULT_THEME.secondary)
                        .add_modifier(Modifier::BOLD),
                    Style::default()
                        .fg(DEFAULT_THEME.fg)
                        .bg(DEFAULT_THEME.current_line_bg),
                )
            } else {
                (
                    Style::default().fg(DEFAULT_THEME.comment),
                    Style::default().fg(DEFAULT_THEME.fg),
                )
            };
            Line::from(vec![
                Span::styled(format!("{marker}{:3} ", idx + 1), num_style),
                Span::styled(to_sexpr(expr), text_style),
            ])
        })
        .collect();

    if let Some(err) = error {
        rows.push(Line::from(Span::styled(
            format!(" ✗   {err}"),
            Style::default()
                .fg(DEFAULT_THEME.error)
                .add_modifier(Modifier::BOLD),
        )));
    }

    if rows.is_empty() {
        let paragraph = Paragraph::new("(no expressions)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    // Keep the selection on screen
    let visible_height = visible_height(area);
    if selected < *scroll_offset {
        *scroll_offset = selected;
    } else if selected >= *scroll_offset + visible_height {
        *scroll_offset = selected + 1 - visible_height;
    }
    clamp_scroll(scroll_offset, rows.len(), visible_height);

    let visible: Vec<Line> = rows
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    let paragraph = Paragraph::new(visible).block(block);
    frame.render_widget(paragraph, area);
}
