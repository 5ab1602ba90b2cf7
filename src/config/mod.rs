pub mod traits;
pub mod run;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use run::RunConfig;
pub use traits::ConfigSection;
