pub mod cli;
pub mod config;
pub mod gallery;
pub mod logging;
pub mod serve;
