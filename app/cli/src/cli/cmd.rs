use clap::{Parser, Subcommand};

use crate::cli::args::DbArgs;
use crate::cli::query::args::Query;

#[derive(Parser, Debug)]
#[command(name = "cfx-store")]
#[command(about = "CLI tool for the epoch chain store", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create the store tables
    Init(DbArgs),
    /// Select a stored transaction or block
    Select(Query),
}
