//! CLI subcommands

pub mod build;
pub mod clean;
pub mod fetch;
pub mod list;
pub mod new;
