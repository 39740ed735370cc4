#![allow(dead_code)]

use alloy::primitives::{Address, B256, Bytes, U256};
use chain::{Block, BlockHeader, Log, Transaction, TransactionReceipt};

pub fn transaction(hash: B256) -> Transaction {
    Transaction {
        hash,
        nonce: U256::from(7),
        from: Address::repeat_byte(0x11),
        to: Some(Address::repeat_byte(0x22)),
        value: U256::from(1_000_000),
        gas_price: U256::from(1),
        gas: U256::from(21_000),
        data: Bytes::from_static(&[0xde, 0xad, 0xbe, 0xef]),
        storage_limit: U256::from(64),
        epoch_height: 99,
        chain_id: 1029,
        status: Some(0),
        v: U256::from(1),
        r: U256::from(42),
        s: U256::from(43),
        ..Default::default()
    }
}

pub fn receipt(tx: &Transaction, epoch: u64) -> TransactionReceipt {
    TransactionReceipt {
        transaction_hash: tx.hash,
        index: 0,
        block_hash: B256::repeat_byte(0xbb),
        epoch_number: Some(epoch),
        from: tx.from,
        to: tx.to,
        gas_used: U256::from(21_000),
        gas_fee: U256::from(21_000),
        state_root: B256::repeat_byte(0x5e),
        ..Default::default()
    }
}

pub fn block(hash: B256, epoch: u64, transactions: Vec<Transaction>) -> Block {
    Block {
        header: BlockHeader {
            hash,
            parent_hash: B256::repeat_byte(0x01),
            height: epoch,
            miner: Address::repeat_byte(0x33),
            epoch_number: Some(epoch),
            gas_limit: U256::from(30_000_000),
            timestamp: 1_700_000_000,
            difficulty: U256::from(500),
            referee_hashes: vec![B256::repeat_byte(0x02)],
            ..Default::default()
        },
        transactions,
    }
}

/// A log carrying `topics` distinct topics.
pub fn log(topics: usize) -> Log {
    Log {
        address: "0x8ba1f109551bd432803012645ac136ddd64dba72".parse().unwrap(),
        topics: (1..=topics).map(|i| B256::repeat_byte(i as u8)).collect(),
        data: Bytes::from_static(&[0x00, 0x01, 0x02]),
        block_hash: Some(B256::repeat_byte(0xbb)),
        epoch_number: Some(100),
        transaction_hash: Some(B256::repeat_byte(0xaa)),
        transaction_index: Some(3),
        log_index: Some(12),
        transaction_log_index: Some(1),
    }
}

pub fn hex(byte: u8) -> String {
    format!("0x{}", format!("{byte:02x}").repeat(32))
}
