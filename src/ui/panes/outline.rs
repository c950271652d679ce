//! Outline pane: tree of the selected expression

use super::{clamp_scroll, pane_block, visible_height};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split an outline row into its tree-drawing prefix and its label
fn split_row(row: &str) -> (&str, &str) {
    let label_start = row
        .char_indices()
        .find(|(_, c)| !matches!(c, ' ' | '│' | '├' | '└' | '─'))
        .map_or(row.len(), |(i, _)| i);
    row.split_at(label_start)
}

/// Render the outline pane from pre-rendered outline rows
pub fn render_outline_pane(
    frame: &mut Frame,
    area: Rect,
    rows: &[String],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Outline ", is_focused);

    if rows.is_empty() {
        let paragraph = Paragraph::new("(nothing selected)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_height = visible_height(area);
    clamp_scroll(scroll_offset, rows.len(), visible_height);

    let lines: Vec<Line> = rows
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|row| {
            let (tree, label) = split_row(row);
            let (kind, rest) = label.split_once(' ').unwrap_or((label, ""));
            Line::from(vec![
                Span::styled(tree.to_string(), Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(kind.to_string(), Style::default().fg(DEFAULT_THEME.type_name)),
                Span::styled(
                    if rest.is_empty() {
                        String::new()
                    } else {
                        format!(" {rest}")
                    },
                    Style::default().fg(DEFAULT_THEME.fg),
                ),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_row() {
        assert_eq!(split_row("Operation +"), ("", "Operation +"));
        assert_eq!(split_row("│   └── Number 3"), ("│   └── ", "Number 3"));
    }
}
