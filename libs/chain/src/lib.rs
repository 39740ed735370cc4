pub mod types {
    pub mod block;
    pub mod log;
    pub mod transaction;
}

pub use types::block::{Block, BlockHeader, BlockSummary};
pub use types::log::Log;
pub use types::transaction::{Transaction, TransactionReceipt};
