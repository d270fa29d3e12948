pub mod config;
pub mod errors;
pub mod events;
pub mod gate;
pub mod logging;
pub mod overlay;
pub mod scanner;
pub mod tree;
pub mod watch;

pub use config::WatchConfig;
pub use errors::{VigilError, VigilResult};
pub use logging::init_logging;
