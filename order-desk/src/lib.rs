//! Order Desk - terminal order-taking desk
//!
//! # Module structure
//!
//! ```text
//! order-desk/src/
//! ├── config.rs    # environment configuration
//! ├── logger.rs    # tracing subscriber setup
//! ├── command.rs   # input line parsing
//! ├── render.rs    # text rendering
//! └── desk.rs      # session owner, command handling
//! ```

pub mod command;
pub mod config;
pub mod desk;
pub mod logger;
pub mod render;

pub use command::DeskCommand;
pub use config::Config;
pub use desk::{Desk, DeskOutcome};
pub use logger::init_logger;

/// Load `.env`, read configuration and install the logger
pub fn setup_environment() -> anyhow::Result<Config> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    config.validate()?;
    init_logger(&config.log_level, config.log_json)?;

    Ok(config)
}
