pub mod backend;
pub mod client;
pub mod codec;
pub mod config;
pub mod error;
pub mod keys;
pub mod memory;
pub mod sqlite;
pub mod utils;
pub mod block {
    pub mod adapter;
    pub mod model;
    pub mod pretty;
    pub mod store;
}
pub mod log {
    pub mod adapter;
    pub mod model;
    pub mod pretty;
    pub mod store;
}
pub mod transaction {
    pub mod adapter;
    pub mod model;
    pub mod pretty;
    pub mod store;
}
