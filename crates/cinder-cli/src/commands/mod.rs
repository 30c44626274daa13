//! CLI commands.

pub mod info;
