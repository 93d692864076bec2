pub mod config;
pub mod logger;
pub mod order;

// Re-export common functions to the modules namespace top level
pub use config::*;
pub use logger::*;
pub use order::submit_order;
