//! Command-line interface for `phishdrill`.

pub mod args;
pub mod commands;
