use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "keycalc")]
#[command(about = "A keypad calculator for + - * / expressions")]
#[command(version)]
pub struct Cli {
    /// Read settings from this file instead of ~/.config/keycalc/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Reject dangling operators and division by zero
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Evaluate an expression and print the result
    Eval {
        /// The expression; multiple arguments are joined with spaces
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        expression: Vec<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Copy the result to the clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Feed a key sequence through the keypad, e.g. "12+3*4="
    Keys {
        /// Keys to press: digits, . + - * /, = to evaluate, C to clear, < to delete
        #[arg(allow_hyphen_values = true)]
        sequence: String,
    },
    /// Evaluate expressions line by line from stdin
    Repl,
}

impl Cli {
    /// The command to run; no subcommand means the REPL.
    pub fn command(&self) -> &Commands {
        self.command.as_ref().unwrap_or(&Commands::Repl)
    }

    /// Whether the chosen command reads from the user interactively.
    pub fn is_interactive(&self) -> bool {
        matches!(self.command(), Commands::Repl)
    }
}
