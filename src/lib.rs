pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::cli::LocalStorage;

pub use app::{command::Command, console::Console};
pub use config::toml_config::TomlConfig;
pub use core::{journal::Journal, report::Report, service::PassesService};
pub use utils::error::{PassesError, Result};
