// ABOUTME: Library exports for termpix CLI modules for testing and external use
// ABOUTME: Makes the decoding, terminal and config collaborators available to tests and benchmarks

pub mod cli;
pub mod cli_output;
pub mod completions;
pub mod config;
pub mod constants;
pub mod decode;
pub mod terminal;
