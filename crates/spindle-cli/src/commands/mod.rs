//! Command implementations.

pub mod configure;
pub mod ingest;
pub mod records;
pub mod total;

pub use self::configure::execute_config;
pub use self::ingest::execute_ingest;
pub use self::records::execute_records;
pub use self::total::execute_total;
