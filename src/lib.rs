pub mod app;
pub mod cli;
pub mod matcher;
pub mod source;
pub mod ui;
