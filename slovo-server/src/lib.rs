//! slovo server library
//!
//! This library provides the HTTP service and the command-line interface
//! for the slovo morphological analysis service.

pub mod backend;
pub mod commands;
pub mod config;
pub mod error;
pub mod http;
pub mod input;
pub mod logging;
pub mod output;

pub use error::CliError;
