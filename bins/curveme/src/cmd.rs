//! Subcommands.
pub mod fixtures;
pub mod list;
pub mod run;

use clap::{ArgAction, Parser, Subcommand};

/// Runs and checks the BN254 and BLS12-381 precompiles.
#[derive(Parser, Debug)]
#[command(name = "curveme", version, about, infer_subcommands = true)]
pub struct MainCmd {
    /// Raise the log level, repeat for more (`-v` info, `-vv` debug, `-vvv` trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Subcommands,
}

/// `curveme` subcommands.
#[derive(Subcommand, Debug)]
pub enum Subcommands {
    /// Execute an operation on hex encoded input and print the encoded result
    Run(run::Cmd),
    /// Decode and check an input without computing the result
    Validate(run::ValidateCmd),
    /// List the supported operations
    List(list::Cmd),
    /// Run JSON fixture files or directories
    Fixtures(fixtures::Cmd),
}

/// Errors of every subcommand.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `run` or `validate` failed.
    #[error(transparent)]
    Run(#[from] run::Error),
    /// A fixture did not match.
    #[error(transparent)]
    Fixtures(#[from] fixtures::FixtureError),
    /// Printing the operation list failed.
    #[error(transparent)]
    List(#[from] serde_json::Error),
}

impl MainCmd {
    /// Runs the selected subcommand.
    pub fn run(&self) -> Result<(), Error> {
        match &self.command {
            Subcommands::Run(cmd) => cmd.run().map_err(Into::into),
            Subcommands::Validate(cmd) => cmd.run().map_err(Into::into),
            Subcommands::List(cmd) => cmd.run().map_err(Into::into),
            Subcommands::Fixtures(cmd) => cmd.run().map(|_| ()).map_err(Into::into),
        }
    }
}
