//! List scrolling for the notes screen
//!
//! The terminal has no native scroll physics, so the list emulates the
//! platform list view: overscroll above the top while bounces are enabled,
//! release detection, and a timed spring-back to the content bounds.
//!
//! # Usage
//!
//! ```ignore
//! use notepeek_tui::scroll::ListViewport;
//!
//! let mut viewport = ListViewport::new(&config.animation, config.ui.px_per_row);
//! viewport.set_bounds(content_px, viewport_px);
//!
//! // Pointer events
//! viewport.begin_drag(row);
//! let offset = viewport.drag_to(row + 4);
//! let released_at = viewport.end_drag(now);
//!
//! // Every frame
//! let update = viewport.update(now);
//! ```

pub mod viewport;

pub use viewport::{ListViewport, ViewportUpdate};
