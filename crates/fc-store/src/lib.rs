pub mod config;
pub mod error;
pub mod prefs;
pub mod schema;
pub mod store;

pub use config::{AppConfig, AppearanceConfig, LatencyConfig};
pub use error::{Result, StoreError};
pub use prefs::{Preferences, default_base_dir};
pub use store::Store;
