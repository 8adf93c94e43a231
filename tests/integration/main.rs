//! Integration tests for colorstr

mod cli_test;
mod config_test;
mod helpers;
