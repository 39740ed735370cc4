use std::fmt::{Debug, Formatter, Result};

use crate::block::model::BlockRecord;

impl Debug for BlockRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("BlockRecord")
            .field("epoch", &self.epoch)
            .field("hash", &self.hash)
            .field("hash_id", &format_args!("{:#018x}", self.short_id()))
            .field("pivot", &self.pivot)
            .field("raw_data_len", &self.raw_data_len)
            .finish()
    }
}
