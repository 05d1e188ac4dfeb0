pub mod constants;
pub mod serve;
pub mod validators;
pub mod verbosity;

use clap::{Parser, Subcommand};

use crate::cli::{
    constants::DEFAULT_VERBOSITY,
    serve::ServeConfig,
    validators::ValidatorsConfig,
    verbosity::{Verbosity, verbosity_parser},
};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (1 = error .. 5 = trace)
    #[arg(short, long, global = true, default_value = DEFAULT_VERBOSITY, value_parser = verbosity_parser)]
    pub verbosity: Verbosity,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch the validator set once and print it as a table
    #[command(name = "validators")]
    Validators(ValidatorsConfig),

    /// Serve the validator table over HTTP
    #[command(name = "serve")]
    Serve(ServeConfig),
}
