pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::SuiteConfig;
pub use crate::core::{
    check::{SymbolClient, DEFAULT_SERVER},
    runner::{RunReport, Selection, SuiteRunner},
    suite::default_suite,
};
pub use domain::model::SymbolCheck;
pub use utils::error::{Result, SmokeError};
