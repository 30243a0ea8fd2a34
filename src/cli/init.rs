use clap::Parser;

/// Arguments for the init command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Create .agent in the current directory:\n    agentkit init\n\n\
                  Overwrite an existing .agent:\n    agentkit init --force\n\n\
                  Create .agent in another project:\n    agentkit init -p ../service")]
pub struct InitArgs {
    /// Overwrite an existing .agent folder
    #[arg(long, short = 'f')]
    pub force: bool,
}
