//! Storage infrastructure - connection pooling and migrations

pub mod migrations;
pub mod postgres;

pub use migrations::{migrations, Migration, PostgresMigrator};
pub use postgres::{connect_pool, PostgresConfig};
