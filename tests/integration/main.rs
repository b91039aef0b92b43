//! Integration test umbrella.
//!
//! Each submodule drives the compiled `hexgrad` binary end to end with an
//! isolated config directory.

mod helpers;

mod cli_test;
mod config_test;
mod generate_test;
mod preset_io_test;
