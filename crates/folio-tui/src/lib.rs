pub mod app;
pub mod event;
pub mod gesture;
pub mod input;
pub mod keymap;
pub mod links;
pub mod page;
pub mod scroll;
pub mod theme;
pub mod themes;
pub mod widgets;

pub use app::App;
pub use themes::load_theme;
