//! Source pane rendering with syntax highlighting
//!
//! Displays the input file with line numbers. Highlighting uses a simple
//! character-by-character scan rather than the parser, so it still works on
//! text that fails to parse.

use super::{clamp_scroll, pane_block, visible_height};
use crate::parser::cursor::is_symbol_char;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Simple syntax highlighting for one source line
fn highlight_source_line(line: &str) -> Line<'_> {
    let mut spans = Vec::new();
    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        // Strings run to the closing quote or end of line
        if c == '"' {
            let mut end = i + 1;
            while end < chars.len() && chars[end] != '"' {
                end += 1;
            }
            if end < chars.len() {
                end += 1;
            }
            spans.push(Span::styled(
                chars[i..end].iter().collect::<String>(),
                Style::default().fg(DEFAULT_THEME.string),
            ));
            i = end;
            continue;
        }

        if is_symbol_char(c) {
            let start = i;
            while i < chars.len() && is_symbol_char(chars[i]) {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            let is_call = chars[i..].iter().find(|c| !c.is_whitespace()) == Some(&'(');
            let style = word_style(&word, is_call);
            spans.push(Span::styled(word, style));
            continue;
        }

        let style = match c {
            '{' | '}' | '(' | ')' => Style::default().fg(DEFAULT_THEME.primary),
            '+' | '-' | '*' | '/' | '>' | ':' | ',' => Style::default().fg(DEFAULT_THEME.fg),
            _ => Style::default(),
        };
        spans.push(Span::styled(c.to_string(), style));
        i += 1;
    }

    Line::from(spans)
}

fn word_style(word: &str, is_call: bool) -> Style {
    match word {
        "func" | "match" => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        _ if word.starts_with(|c: char| c.is_ascii_digit()) => {
            Style::default().fg(DEFAULT_THEME.number)
        }
        _ if is_call => Style::default().fg(DEFAULT_THEME.function),
        _ => Style::default().fg(DEFAULT_THEME.fg),
    }
}

/// Render the source pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    file_name: &str,
    source_code: &str,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let title = format!(" Source: {file_name} ");
    let block = pane_block(&title, is_focused);

    let lines: Vec<&str> = source_code.lines().collect();
    let visible_height = visible_height(area);
    clamp_scroll(scroll_offset, lines.len(), visible_height);

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let line_num = format!("{:4} ", idx + 1);
            let mut spans = vec![Span::styled(
                line_num,
                Style::default().fg(DEFAULT_THEME.comment),
            )];
            spans.extend(highlight_source_line(line).spans);
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}
