pub mod settings;

pub use settings::{EnhancerSettings, ServerSettings, Settings, StorageSettings};
