//! obs-switch command-line interface.
//!
//! Parses arguments, builds the [`config::Config`], runs one command against
//! OBS through [`obs_switch`], and renders its output.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod styles;
