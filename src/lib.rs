pub mod config;
pub mod load;
pub mod relational;
pub mod report;
pub mod write;

pub use config::{Config, ConfigBuilder};
pub use load::{load_table, TableName};
pub use report::ReportProcessor;
