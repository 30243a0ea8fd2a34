use clap::Parser;

/// Arguments for the list command
///
/// Without any filter all three categories are shown.
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List everything:\n    agentkit list\n\n\
                  List only skills:\n    agentkit list --skills\n\n\
                  List rules and workflows:\n    agentkit list -r -w")]
pub struct ListArgs {
    /// Show rules
    #[arg(long, short = 'r')]
    pub rules: bool,

    /// Show skills
    #[arg(long, short = 's')]
    pub skills: bool,

    /// Show workflows
    #[arg(long, short = 'w')]
    pub workflows: bool,
}
