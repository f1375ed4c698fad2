pub mod bulk;
pub mod connection;
pub mod migration;
pub mod query;
pub mod schema;

pub use bulk::{BulkWriter, Row, SqlValue};
pub use schema::{Column, ColumnType, Table, ACCOUNTS, CONTRACTS, GENESIS_BALANCES};
