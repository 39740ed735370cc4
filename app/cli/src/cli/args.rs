use clap::Args;
use store::config::Config;

#[derive(Args, Debug)]
pub struct DbArgs {
    /// SQLite connection string
    #[arg(short, long)]
    pub db_url: String,

    /// Maximum number of pooled connections
    #[arg(long, default_value_t = 5)]
    pub max_connections: u32,
}

impl From<&DbArgs> for Config {
    fn from(args: &DbArgs) -> Self {
        Config::new(args.db_url.clone()).with_max_connections(args.max_connections)
    }
}
