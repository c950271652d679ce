//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: application state, the keyboard event loop and selection
//! - **[`panes`]**: stateless render functions for each visible pane (source,
//!   expressions, outline, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with the source text
//! and call [`App::run`] to start the event loop. Parsing happens in
//! [`App::new`]; a parse error does not prevent the viewer from opening.
//!
//! [`App::run`]: app::App::run
//! [`App::new`]: app::App::new

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
