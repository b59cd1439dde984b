// Adapters layer: concrete implementations for external systems (flat file storage, exports).

pub mod export;
pub mod file_store;

pub use file_store::FileStore;
