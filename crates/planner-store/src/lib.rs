//! # Planner Store
//!
//! 記憶體內物料清單儲存與示範種子資料

pub mod seed;
pub mod store;

// Re-export 主要類型
pub use seed::sample_catalog;
pub use store::InMemoryCatalog;
