use clap::{Parser, Subcommand};

/// Command-line interface definition for pointadmin
#[derive(Parser)]
#[command(
    name = "pointadmin",
    version = env!("CARGO_PKG_VERSION"),
    about = "Admin console for worker incentive points: summary cards, grant/deduct form and history",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show the summary cards (active users, points issued)
    Summary,

    /// List workers with their balances
    Workers,

    /// Show the point transaction history
    History,

    /// Show points issued per day over the last week
    Chart,

    /// Grant or deduct points for one worker
    Adjust {
        /// Worker id
        #[arg(long, short = 'w')]
        worker: Option<String>,

        /// Deduct instead of grant
        #[arg(long)]
        debit: bool,

        /// Number of points (whole number greater than zero)
        #[arg(long, short = 'a', allow_hyphen_values = true)]
        amount: Option<String>,

        /// Reason recorded with the adjustment
        #[arg(long, short = 'r')]
        reason: Option<String>,
    },

    /// Run an interactive admin session (form state kept between commands)
    Console,
}
