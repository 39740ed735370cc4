use eyre::Result;
use store::block::store::Store as BlockStore;
use store::client::Client;
use store::config::Config;
use store::transaction::store::Store as TransactionStore;

use crate::cli::query::args::Query;
use crate::cli::query::read::{self, Entity};
use crate::cli::query::response::TransactionResponse;

pub async fn select(query: &Query) -> Result<()> {
    let client = Client::new(&Config::from(&query.db)).await?;

    match query.entity {
        Entity::Transaction => {
            let transaction_store = TransactionStore::new(client);

            let record = transaction_store.load_transaction(read::transaction_hash(query)?).await?;

            println!("{}", serde_json::to_string_pretty(&TransactionResponse(record))?);
        }
        Entity::Block => {
            let block_store = BlockStore::new(client);

            let summary = block_store.load_block(&read::block_filter(query)?).await?;

            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}
