mod loader;

pub use loader::{Config, IconConfig, PassConfig};
