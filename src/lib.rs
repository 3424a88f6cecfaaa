pub mod actions;
pub mod api;
pub mod config;
pub mod error;
pub mod puzzle;
pub mod scorer;
// cmd and reports are binary modules (declared in main.rs).
