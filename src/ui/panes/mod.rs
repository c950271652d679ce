//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`source`]: Source text with light syntax highlighting and line numbers
//! - [`expressions`]: Canonical form of each parsed top-level expression
//! - [`outline`]: Tree view of the selected expression
//! - [`status`]: Status bar with keybindings and parse state
//!
//! Each pane module exports a primary `render_*` function. Panes hold no
//! state of their own; scroll offsets live in [`App`](super::App) and are
//! clamped in place while rendering.

pub mod expressions;
pub mod outline;
pub mod source;
pub mod status;

pub use expressions::render_expressions_pane;
pub use outline::render_outline_pane;
pub use source::render_source_pane;
pub use status::render_status_bar;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

/// Bordered block with the focus-dependent border color
pub(crate) fn pane_block(title: &str, is_focused: bool) -> Block<'_> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Rows available inside a bordered pane, at least 1
pub(crate) fn visible_height(area: Rect) -> usize {
    area.height.saturating_sub(2).max(1) as usize
}

/// Clamp a scroll offset so the last page stays full
pub(crate) fn clamp_scroll(offset: &mut usize, total: usize, visible: usize) {
    if total > visible {
        *offset = (*offset).min(total - visible);
    } else {
        *offset = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_scroll() {
        let mut offset = usize::MAX;
        clamp_scroll(&mut offset, 10, 4);
        assert_eq!(offset, 6);

        let mut offset = 3;
        clamp_scroll(&mut offset, 2, 4);
        assert_eq!(offset, 0);
    }

    #[test]
    fn test_visible_height_accounts_for_borders() {
        assert_eq!(visible_height(Rect::new(0, 0, 10, 12)), 10);
        assert_eq!(visible_height(Rect::new(0, 0, 10, 1)), 1);
    }
}
