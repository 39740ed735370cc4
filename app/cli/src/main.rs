mod cli {
    pub mod query {
        pub mod args;
        pub mod read;
        pub mod response;
        pub mod run;
    }
    pub mod args;
    pub mod cmd;
    pub mod init;
}

use clap::Parser;
use eyre::Result;

use crate::cli::cmd::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli);

    match &cli.command {
        Command::Init(args) => {
            tracing::info!("Init Command: {:?}", args);
            cli::init::init(args).await
        }
        Command::Select(query) => {
            tracing::info!("Select Query: {:?}", query);
            cli::query::run::select(query).await
        }
    }
}

fn init_tracing(cli: &Cli) {
    match &cli.command {
        Command::Init(_) => {
            // install global subscriber configured based on RUST_LOG envvar.
            tracing_subscriber::fmt::init();
        }
        Command::Select(_) => {
            // keep stdout for the JSON response
            tracing_subscriber::fmt::Subscriber::builder().with_writer(std::io::stderr).init();
        }
    }
}
