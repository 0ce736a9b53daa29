mod headless;
mod loop_handler;

pub use headless::{render_headless_text, run_headless};
pub use loop_handler::run;
