use chain::{Block, BlockSummary};

use crate::backend::BlockLookup;
use crate::block::model::{BlockFilter, BlockRecord};
use crate::error::CorruptionError;
use crate::{codec, keys, utils};

impl BlockRecord {
    /// Maps a block to a row storing its summary instead of full bodies.
    pub fn new(block: &Block, pivot: bool) -> Result<Self, CorruptionError> {
        let epoch =
            block.header.epoch_number.ok_or(CorruptionError::MissingField("epoch_number"))?;
        let hash = utils::bytes_to_hex(block.header.hash.as_slice());
        let raw_data = codec::encode(&block.summary())?;

        Ok(Self {
            epoch: epoch as i64,
            hash_id: keys::short_id_column(&hash)?,
            hash,
            pivot,
            raw_data_len: raw_data.len() as i64,
            raw_data,
        })
    }

    pub fn decode_summary(&self) -> Result<BlockSummary, CorruptionError> {
        codec::decode(&self.raw_data)
    }
}

impl TryFrom<&BlockFilter> for BlockLookup {
    type Error = CorruptionError;

    fn try_from(filter: &BlockFilter) -> Result<Self, Self::Error> {
        Ok(match filter {
            BlockFilter::ByHash(hash) => {
                BlockLookup::Hash { hash_id: keys::short_id_column(hash)?, hash: hash.clone() }
            }
            BlockFilter::ByEpoch { epoch, pivot } => {
                BlockLookup::Epoch { epoch: *epoch as i64, pivot: *pivot }
            }
        })
    }
}
