// storage/mod.rs
// SQLite store, run log and the persistence sink that writes to both

pub mod run_log;
pub mod schema;
pub mod sink;
pub mod store;

// Re-export commonly used items
pub use run_log::RunLog;
pub use sink::ReconSink;
pub use store::Store;
