pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use adapters::secrets_manager::SecretsManagerStore;
pub use config::HandlerConfig;
pub use core::event::read_event;
pub use core::handler::{function_handler, handle_event};
pub use domain::{model::SecretValue, ports::SecretStore};
pub use utils::error::{HandlerError, Result};
