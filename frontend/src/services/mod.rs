pub mod logging;
pub mod page_config;

pub use logging::Logger;
