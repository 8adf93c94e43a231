//! Subcommand handlers for the `colorstr` binary.

pub mod demo;
pub mod paint;
pub mod strip;
pub mod styles;
