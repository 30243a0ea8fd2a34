//! agentkit - AI assistant guidance for your project
//!
//! A command line tool that extracts a bundled set of coding rules, code-generation
//! skills and workflow guides into the `.agent` folder of a project, where AI coding
//! assistants pick them up.

use clap::Parser;
use console::Style;
use miette::Diagnostic;

mod catalog;
mod cli;
mod commands;
mod common;
mod error;
mod extractor;
mod resource;
mod transaction;
mod ui;
mod workspace;

#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};
use error::AgentKitError;

fn report(err: &AgentKitError) {
    eprintln!("{} {}", Style::new().red().bold().apply_to("Error:"), err);
    if let Some(help) = err.help() {
        eprintln!("  {} {}", Style::new().cyan().apply_to("help:"), help);
    }
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init(args) => commands::init::run(cli.project, args, cli.verbose),
        Commands::Update(args) => commands::update::run(cli.project, args, cli.verbose),
        Commands::List(args) => commands::list::run(&args),
        Commands::Validate => commands::validate::run(cli.project),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(&args),
    };

    if let Err(e) = result {
        report(&e);
        std::process::exit(1);
    }
}
