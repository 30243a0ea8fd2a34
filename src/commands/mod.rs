//! Command implementations for agentkit CLI

pub mod completions;
pub mod helpers;
pub mod init;
pub mod list;
pub mod update;
pub mod validate;
pub mod version;
