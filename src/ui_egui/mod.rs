//! egui user interface for the movie catalog

pub mod app;
pub mod countdown_modal;
pub mod header;
pub mod movie_grid;
pub mod theme;

pub use app::MovieCountdownApp;
