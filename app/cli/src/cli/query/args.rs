use clap::Parser;

use crate::cli::args::DbArgs;
use crate::cli::query::read::Entity;

#[derive(Parser, Debug)]
#[command(about = "Select stored records", long_about = None)]
pub struct Query {
    #[command(flatten)]
    pub db: DbArgs,

    /// Entity to query
    #[arg(short, long, value_enum)]
    pub entity: Entity,

    /// 0x-prefixed hash of the record
    #[arg(long, conflicts_with = "epoch")]
    pub hash: Option<String>,

    /// Epoch of the block
    #[arg(long)]
    pub epoch: Option<u64>,

    /// Select a non-pivot block of the epoch
    #[arg(long, requires = "epoch")]
    pub non_pivot: bool,
}
