mod admin;
mod dashboard;
mod frame;
mod lifecycle;

pub(crate) mod formatting;
pub(crate) mod theme;
pub(crate) mod timetable;

pub use dashboard::{Ui, UiActions};
pub use lifecycle::{run_splash_screen, setup_render_ui};
