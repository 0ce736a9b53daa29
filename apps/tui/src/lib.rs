// Export our modules for use in the binary and tests
pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod event;
pub mod figure;
pub mod logging;
pub mod terminal;
pub mod trace;
pub mod ui;
pub mod view;

pub use domain::ViewMode;
pub use error::RadarError;
pub use figure::{build_figure, Figure};
pub use trace::{build_trace, select_entities, Trace};
