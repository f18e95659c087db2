pub mod calc;
pub mod form;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "rectarea")]
#[command(about = "A terminal rectangle area calculator.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress decorative output (repeat to keep only status lines)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Skip the startup banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the area of a rectangle from two lengths in centimeters
    #[command(alias = "c")]
    Calc {
        // Hyphen values stay enabled so negative input reaches the
        // validator instead of dying as an unknown flag.
        #[arg(allow_hyphen_values = true)]
        base: String,
        #[arg(allow_hyphen_values = true)]
        height: String,
    },
    /// Edit both lengths in a live form with keystroke filtering
    #[command(alias = "f")]
    Form,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
