//! CLI subcommand implementations.

pub mod extract;
pub mod lookup;
pub mod search;
