/// Optional TOML seed-override file loading
pub mod seed;

/// Storage backend selection and remote schema creation
pub mod storage;

pub use storage::{BackendConfig, StorageConfig};
