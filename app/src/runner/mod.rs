pub mod event_loop_main;
pub mod handlers;
pub mod logging;
pub mod terminal;

pub use event_loop_main::run_app;
