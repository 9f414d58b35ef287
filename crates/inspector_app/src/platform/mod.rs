mod app;
mod cli;
mod config;
mod effects;
mod present;

pub use app::run;
