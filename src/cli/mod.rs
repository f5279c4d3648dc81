//! Command-line host for the graph engines.

pub mod commands;
