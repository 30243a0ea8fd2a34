//! Version command implementation

use crate::commands::helpers::print_counts;
use crate::error::Result;
use crate::resource::{CategoryCounts, EmbeddedStore};

/// Run version command
pub fn run() -> Result<()> {
    println!("agentkit {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", rustc_version());
    println!("  Profile: {}", build_profile());
    println!();
    println!("Bundled templates:");
    print_counts(&CategoryCounts::from_store(&EmbeddedStore::new()));

    Ok(())
}

fn rustc_version() -> &'static str {
    env!("CARGO_PKG_RUST_VERSION")
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
