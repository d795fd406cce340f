pub mod app;
pub mod event;
pub mod input;
pub mod keymap;
pub mod metrics;
pub mod scroll;
pub mod search_input;
pub mod theme;
pub mod themes;
pub mod ui;
pub mod widgets;

pub use app::App;
pub use theme::Theme;
pub use themes::{available_themes, load_theme};
