use clap::ValueEnum;
use eyre::{Result, eyre};
use store::block::model::BlockFilter;

use crate::cli::query::args::Query;

#[derive(Debug, Clone, ValueEnum)]
pub enum Entity {
    Transaction,
    Block,
}

pub fn transaction_hash(query: &Query) -> Result<&str> {
    query.hash.as_deref().ok_or_else(|| eyre!("`--hash` is required to select a transaction"))
}

pub fn block_filter(query: &Query) -> Result<BlockFilter> {
    match (&query.hash, query.epoch) {
        (Some(hash), _) => Ok(BlockFilter::ByHash(hash.clone())),
        (None, Some(epoch)) => Ok(BlockFilter::ByEpoch { epoch, pivot: !query.non_pivot }),
        (None, None) => Err(eyre!("`--hash` or `--epoch` is required to select a block")),
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use store::block::model::BlockFilter;

    use crate::cli::cmd::{Cli, Command};
    use crate::cli::query::args::Query;

    fn parse(args: &[&str]) -> Query {
        let argv = ["cfx-store", "select", "--db-url", "sqlite::memory:"].iter().chain(args);
        match Cli::try_parse_from(argv).unwrap().command {
            Command::Select(query) => query,
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_block_filter_by_epoch() {
        let query = parse(&["-e", "block", "--epoch", "7"]);
        assert_eq!(
            super::block_filter(&query).unwrap(),
            BlockFilter::ByEpoch { epoch: 7, pivot: true }
        );

        let query = parse(&["-e", "block", "--epoch", "7", "--non-pivot"]);
        assert_eq!(
            super::block_filter(&query).unwrap(),
            BlockFilter::ByEpoch { epoch: 7, pivot: false }
        );
    }

    #[test]
    fn test_block_filter_by_hash() {
        let query = parse(&["-e", "block", "--hash", "0xabcdef0123456789"]);

        assert_eq!(
            super::block_filter(&query).unwrap(),
            BlockFilter::ByHash("0xabcdef0123456789".to_string())
        );
    }

    #[test]
    fn test_missing_selectors() {
        let query = parse(&["-e", "block"]);
        assert!(super::block_filter(&query).is_err());

        let query = parse(&["-e", "transaction"]);
        assert!(super::transaction_hash(&query).is_err());
    }

    #[test]
    fn test_hash_conflicts_with_epoch() {
        let argv =
            ["cfx-store", "select", "-d", "x", "-e", "block", "--hash", "0x00", "--epoch", "1"];

        assert!(Cli::try_parse_from(argv).is_err());
    }
}
