pub mod animation;
pub mod config;
pub mod controller;
pub mod empty_state;
pub mod error;
pub mod fab;
pub mod header;
pub mod notes;
pub mod screen;

pub use config::{AnimationConfig, AppConfig, EasingType};
pub use controller::{Activation, FocusIntent, FocusTarget, SearchActivationController};
pub use error::{Error, Result};
pub use header::{HeaderStyles, Transform};
pub use notes::{Note, NoteList};
pub use screen::{ListScreen, ScreenFrame};
