pub mod input;
pub mod runtime;

pub use runtime::run_tui;
