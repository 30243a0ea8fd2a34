use clap::Parser;

/// Arguments for the update command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Replace .agent with the current templates:\n    agentkit update\n\n\
                  Keep a timestamped copy of the old folder:\n    agentkit update --backup")]
pub struct UpdateArgs {
    /// Copy the existing .agent to .agent.backup.<timestamp> first
    #[arg(long, short = 'b')]
    pub backup: bool,
}
